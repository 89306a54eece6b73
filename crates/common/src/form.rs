//! Form value helpers.
//!
//! Integer form fields never reject a request: anything that is not a plain
//! base-10 integer is read as zero.

/// Parse an integer form value, falling back to `0`.
///
/// Accepts an optional leading `+` or `-` followed by ASCII digits. Surrounding
/// whitespace, decimals and values outside the `i64` range all yield `0`.
///
/// ```
/// assert_eq!(common::form::lenient_int("42"), 42);
/// assert_eq!(common::form::lenient_int("forty-two"), 0);
/// ```
pub fn lenient_int(raw: &str) -> i64 {
    raw.parse::<i64>().unwrap_or(0)
}
