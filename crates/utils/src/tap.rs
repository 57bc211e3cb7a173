/// Pass `value` to `interceptor` and return whatever it returns.
pub fn tap<T, R>(value: T, interceptor: impl FnOnce(T) -> R) -> R {
    interceptor(value)
}
