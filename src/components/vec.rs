use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::ops::{Add, Sub};

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::VecError;

/// Unit an angle is reported in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Degrees => write!(f, "degrees"),
            AngleUnit::Radians => write!(f, "radians"),
        }
    }
}

/// Represents 2 dimensions. Coordinates are always finite.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Vec2([f64; 2]);

impl Vec2 {
    /// Represents a Vec2 at the origin.
    pub const ORIGIN: Self = Self([0., 0.]);

    /// Creates a Vec2 from finite coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is NaN or infinite. Use `try_new` for
    /// unchecked input.
    pub fn new(x: f64, y: f64) -> Self {
        assert!(x.is_finite() && y.is_finite(), "non-finite Vec2 ({}, {})", x, y);
        Self([x, y])
    }

    /// Creates a Vec2, rejecting NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Self, VecError> {
        if x.is_finite() && y.is_finite() {
            Ok(Self([x, y]))
        } else {
            Err(VecError::NonFinite { x, y })
        }
    }

    /// Creates a Vec2 from any primitive number, converting both to f64.
    pub fn from_num<X: ToPrimitive, Y: ToPrimitive>(x: X, y: Y) -> Result<Self, VecError> {
        let x = x.to_f64().ok_or(VecError::NotNumeric)?;
        let y = y.to_f64().ok_or(VecError::NotNumeric)?;
        Self::try_new(x, y)
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// Deconstructs the coordinate into a tuple form.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.x(), self.y())
    }

    /// Calculates the distance between the endpoints of two vectors.
    pub fn distance(&self, other: &Self) -> f64 {
        (other.x() - self.x()).hypot(other.y() - self.y())
    }

    /// Gets the length of the vector.
    pub fn length(&self) -> f64 {
        self.x().hypot(self.y())
    }

    /// Angle from the positive x-axis, within (-90, 270) degrees.
    ///
    /// A vector on the y-axis points at 90 or -90 degrees. The zero vector
    /// has no direction and returns `VecError::UndefinedAngle`.
    pub fn angle(&self, unit: AngleUnit) -> Result<f64, VecError> {
        let (x, y) = self.as_tuple();
        let theta = if x == 0.0 {
            if y > 0.0 {
                FRAC_PI_2
            } else if y < 0.0 {
                -FRAC_PI_2
            } else {
                return Err(VecError::UndefinedAngle);
            }
        } else if x < 0.0 {
            (y / x).atan() + PI
        } else {
            (y / x).atan()
        };

        Ok(match unit {
            AngleUnit::Degrees => theta.to_degrees(),
            AngleUnit::Radians => theta,
        })
    }

    /// Offset of this vector from `other`.
    pub fn offset_from(&self, other: &Self) -> Vec2 {
        *self - *other
    }

    /// Multiplies both coordinates by `scalar`.
    pub fn scaled_by(&self, scalar: f64) -> Result<Vec2, VecError> {
        Vec2::try_new(self.x() * scalar, self.y() * scalar)
    }

    /// Multi-line summary of the vector: itself, its length and its angle.
    pub fn describe(&self) -> String {
        self.describe_in(AngleUnit::Degrees)
    }

    /// Same as `describe`, reporting the angle in `unit`.
    pub fn describe_in(&self, unit: AngleUnit) -> String {
        let angle = match self.angle(unit) {
            Ok(value) => format!("{:.6} {}", value, unit),
            Err(_) => String::from("undefined"),
        };

        format!("{}\n  Length: {:.6}\n  Angle: {}", self, self.length(), angle)
    }
}

/// Distance between the endpoints of two vectors.
pub fn distance(a: &Vec2, b: &Vec2) -> f64 {
    a.distance(b)
}

impl Default for Vec2 {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector ({:.2}, {:.2})", self.x(), self.y())
    }
}

/// Panics if the sum overflows to infinity.
impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x() + other.x(), self.y() + other.y())
    }
}

impl<'a> Add<&'a Vec2> for &'a Vec2 {
    type Output = Vec2;

    fn add(self, other: &'a Vec2) -> Vec2 {
        *self + *other
    }
}

/// Panics if the difference overflows to infinity.
impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x() - other.x(), self.y() - other.y())
    }
}

impl TryFrom<(f64, f64)> for Vec2 {
    type Error = VecError;

    fn try_from((x, y): (f64, f64)) -> Result<Self, Self::Error> {
        Vec2::try_new(x, y)
    }
}

impl From<Vec2> for (f64, f64) {
    fn from(value: Vec2) -> Self {
        value.as_tuple()
    }
}
