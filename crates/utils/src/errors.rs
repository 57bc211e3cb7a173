use thiserror::Error;

/// Returned when a range's lower bound exceeds its upper bound.
///
/// Bounds are stored in display form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Minimum ({min}) is not less than maximum ({max}).")]
pub struct InvalidRangeError {
    pub min: String,
    pub max: String,
}
