/// Numeric conversion and formatting helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors,
/// and the canonical rendering of results for display.
///
/// All conversion functions return a `Result`, which is `Ok` if the
/// conversion is lossless and valid, or the caller-supplied error otherwise.
pub mod num;
