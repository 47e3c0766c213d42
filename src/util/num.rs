use tracing::warn;

/// Returns the wrapped value of an `overflowing_*` operation, logging a
/// warning when the operation overflowed.
///
/// ## Parameters
/// - `outcome`: The `(value, overflowed)` pair from an `overflowing_*` call.
/// - `symbol`: The operator symbol, for the log message.
///
/// ## Example
/// ```
/// use infixer::util::num::report_overflow;
///
/// assert_eq!(report_overflow(2i64.overflowing_add(2), "+"), 4);
/// assert_eq!(report_overflow(i64::MAX.overflowing_add(1), "+"), i64::MIN);
/// ```
pub fn report_overflow((value, overflowed): (i64, bool), symbol: &str) -> i64 {
    if overflowed {
        warn!(symbol, value, "integer overflow, result wrapped");
    }
    value
}
