use std::fmt::Display;

use crate::errors::InvalidRangeError;

/// Clamp `value` into the inclusive range `[min, max]`.
///
/// Works for any partially ordered type, floats included. Fails when
/// `min > max`.
pub fn clamp<T>(value: T, min: T, max: T) -> Result<T, InvalidRangeError>
where
    T: PartialOrd + Display,
{
    if min > max {
        return Err(InvalidRangeError { min: min.to_string(), max: max.to_string() });
    }
    if value < min {
        Ok(min)
    } else if value > max {
        Ok(max)
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::clamp;

    #[test]
    fn value_within_range_is_unchanged() {
        assert_eq!(clamp(5, 1, 10), Ok(5));
        assert_eq!(clamp(7, 5, 10), Ok(7));
    }

    #[test]
    fn value_below_min_returns_min() {
        assert_eq!(clamp(-5, 1, 10), Ok(1));
        assert_eq!(clamp(0, 1, 5), Ok(1));
    }

    #[test]
    fn value_above_max_returns_max() {
        assert_eq!(clamp(15, 1, 10), Ok(10));
        assert_eq!(clamp(100, 50, 75), Ok(75));
    }

    #[test]
    fn equal_bounds() {
        assert_eq!(clamp(5, 5, 5), Ok(5));
        assert_eq!(clamp(10, 10, 10), Ok(10));
    }

    #[test]
    fn floats_are_supported() {
        assert_eq!(clamp(1.5_f64, 0.0, 1.0), Ok(1.0));
    }

    #[test]
    fn inverted_range_is_an_error() {
        let err = clamp(5, 10, 1).unwrap_err();
        assert_eq!(err.to_string(), "Minimum (10) is not less than maximum (1).");
        let err = clamp(20, 30, 10).unwrap_err();
        assert_eq!(err.min, "30");
        assert_eq!(err.to_string(), "Minimum (30) is not less than maximum (10).");
    }
}
