/// Binary operator evaluation logic.
///
/// Handles the execution of all infix operations: arithmetic, remainder,
/// exponentiation and roots.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the line driver and the outcome type.
pub mod core;

/// Function evaluation.
///
/// Handles built-in function calls, argument checking, and return value
/// computation.
pub mod function;
