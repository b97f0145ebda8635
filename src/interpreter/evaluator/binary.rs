/// Operator dispatch.
///
/// Routes each binary operator to its handler and rejects results that are
/// not a number.
pub mod core;

/// Scalar arithmetic.
///
/// Addition, subtraction, multiplication, division and the truncated
/// remainder.
pub mod scalar;

/// Exponentiation and infix roots.
pub mod power;
