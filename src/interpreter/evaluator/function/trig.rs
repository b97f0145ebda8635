use std::f64::consts::FRAC_PI_2;

use crate::{
    error::EvalError,
    interpreter::evaluator::core::{Context, EvalResult},
};

/// How close `cos` or `sin` of an angle may come to zero before `tan`,
/// `sec`, `cot` and `csc` treat the angle as a singularity.
pub const SINGULARITY_EPSILON: f64 = 1e-12;

/// Defines a direct trigonometric builtin.
///
/// The argument is converted from the context's angle unit to radians, the
/// optional guard rejects singular angles, and the body computes the result
/// from the radian angle `$r`.
macro_rules! trig_builtin {
    ($(#[$meta:meta])* $name:ident, |$r:ident| $body:expr) => {
        $(#[$meta])*
        pub fn $name(args: &[f64], context: &mut Context) -> EvalResult<f64> {
            let $r = context.angle_mode().to_radians(args[0]);
            Ok($body)
        }
    };
    ($(#[$meta:meta])* $name:ident, guard $guard:ident, |$r:ident| $body:expr) => {
        $(#[$meta])*
        pub fn $name(args: &[f64], context: &mut Context) -> EvalResult<f64> {
            let $r = context.angle_mode().to_radians(args[0]);
            if $r.$guard().abs() < SINGULARITY_EPSILON {
                return Err(EvalError::domain(stringify!($name),
                                             format!("undefined at {}", args[0])));
            }
            Ok($body)
        }
    };
}

trig_builtin!(
    /// Sine of an angle in the context's unit.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::{evaluator::{core::Context, function::trig::sin}, mode::AngleMode};
    ///
    /// let mut context = Context::new().with_angle_mode(AngleMode::Degrees);
    /// assert!((sin(&[90.0], &mut context).unwrap() - 1.0).abs() < 1e-12);
    /// ```
    sin, |r| r.sin()
);
trig_builtin!(
    /// Cosine of an angle in the context's unit.
    cos, |r| r.cos()
);
trig_builtin!(
    /// Tangent; undefined where the cosine vanishes.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::{evaluator::{core::Context, function::trig::tan}, mode::AngleMode};
    ///
    /// let mut context = Context::new().with_angle_mode(AngleMode::Degrees);
    /// assert!(tan(&[90.0], &mut context).is_err());
    /// assert!(tan(&[270.0], &mut context).is_err());
    /// ```
    tan, guard cos, |r| r.tan()
);
trig_builtin!(
    /// Secant; undefined where the cosine vanishes.
    sec, guard cos, |r| r.cos().recip()
);
trig_builtin!(
    /// Cosecant; undefined where the sine vanishes.
    csc, guard sin, |r| r.sin().recip()
);
trig_builtin!(
    /// Cotangent; undefined where the sine vanishes.
    cot, guard sin, |r| r.cos() / r.sin()
);

/// Arcsine, returned in the context's unit.
///
/// # Errors
/// Returns a domain error outside `[-1, 1]`.
pub fn asin(args: &[f64], context: &mut Context) -> EvalResult<f64> {
    let x = args[0];
    check_unit_interval("asin", x)?;
    Ok(context.angle_mode().from_radians(x.asin()))
}

/// Arccosine, returned in the context's unit.
///
/// # Errors
/// Returns a domain error outside `[-1, 1]`.
pub fn acos(args: &[f64], context: &mut Context) -> EvalResult<f64> {
    let x = args[0];
    check_unit_interval("acos", x)?;
    Ok(context.angle_mode().from_radians(x.acos()))
}

/// Arctangent, returned in the context's unit.
pub fn atan(args: &[f64], context: &mut Context) -> EvalResult<f64> {
    Ok(context.angle_mode().from_radians(args[0].atan()))
}

/// Arccosecant, `asin(1 / x)`.
///
/// # Errors
/// Returns a domain error when `|x| < 1`.
pub fn acsc(args: &[f64], context: &mut Context) -> EvalResult<f64> {
    let x = args[0];
    check_outside_unit_interval("acsc", x)?;
    Ok(context.angle_mode().from_radians(x.recip().asin()))
}

/// Arcsecant, `acos(1 / x)`.
///
/// # Errors
/// Returns a domain error when `|x| < 1`.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::{core::Context, function::trig::asec};
///
/// let mut context = Context::new();
/// assert_eq!(asec(&[1.0], &mut context).unwrap(), 0.0);
/// assert!(asec(&[0.5], &mut context).is_err());
/// ```
pub fn asec(args: &[f64], context: &mut Context) -> EvalResult<f64> {
    let x = args[0];
    check_outside_unit_interval("asec", x)?;
    Ok(context.angle_mode().from_radians(x.recip().acos()))
}

/// Arccotangent with range `(0, π)`: `π/2 - atan(x)`, so `acot(0)` is `π/2`.
pub fn acot(args: &[f64], context: &mut Context) -> EvalResult<f64> {
    Ok(context.angle_mode().from_radians(FRAC_PI_2 - args[0].atan()))
}

fn check_unit_interval(function: &'static str, x: f64) -> EvalResult<()> {
    if (-1.0..=1.0).contains(&x) {
        Ok(())
    } else {
        Err(EvalError::domain(function, format!("{x} is outside [-1, 1]")))
    }
}

fn check_outside_unit_interval(function: &'static str, x: f64) -> EvalResult<()> {
    if x.abs() >= 1.0 {
        Ok(())
    } else {
        Err(EvalError::domain(function, format!("{x} is inside (-1, 1)")))
    }
}
