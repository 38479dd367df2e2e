//! Utility macros for the counter.
//!
//! This module defines helper macros used throughout the scanner:
//!
//! - `MK_MATCH!` - Creates a Match instance
//!
//! These macros reduce boilerplate in the scanner implementation.

/// Creates a Match instance.
///
/// # Arguments
///
/// * `$token` - The captured identifier
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let matched = MK_MATCH!("add".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_MATCH {
    ($token:expr, $span:expr) => {
        Match {
            token: $token,
            span: $span,
        }
    };
}
