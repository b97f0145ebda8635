use std::fmt;

/// The unit in which trigonometric functions take and return angles.
///
/// Owned by an evaluation [`Context`](crate::interpreter::evaluator::core::Context),
/// so every session carries its own mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    /// Angles are measured in radians.
    #[default]
    Radians,
    /// Angles are measured in degrees.
    Degrees,
}

impl AngleMode {
    /// Converts an angle expressed in this unit to radians.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::mode::AngleMode;
    ///
    /// assert_eq!(AngleMode::Degrees.to_radians(180.0), std::f64::consts::PI);
    /// assert_eq!(AngleMode::Radians.to_radians(1.5), 1.5);
    /// ```
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Radians => angle,
            Self::Degrees => angle.to_radians(),
        }
    }

    /// Converts an angle in radians to this unit.
    #[must_use]
    pub fn from_radians(self, angle: f64) -> f64 {
        match self {
            Self::Radians => angle,
            Self::Degrees => angle.to_degrees(),
        }
    }

    /// Lower-case name of the unit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Radians => "radians",
            Self::Degrees => "degrees",
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
