use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failures produced by vectors and vector sheets.
#[derive(Debug)]
pub enum VecError {
    /// A coordinate is NaN or infinite.
    NonFinite { x: f64, y: f64 },
    /// Input could not be represented as an f64.
    NotNumeric,
    /// The zero vector has no direction.
    UndefinedAngle,
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    /// Sheet parsed but contained no vectors.
    EmptySheet,
}

impl Display for VecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VecError::NonFinite { x, y } => {
                write!(f, "coordinates must be finite, got ({}, {})", x, y)
            }
            VecError::NotNumeric => write!(f, "value is not representable as f64"),
            VecError::UndefinedAngle => write!(f, "angle of the zero vector is undefined"),
            VecError::Io(why) => write!(f, "unable to read sheet: {}", why),
            VecError::Yaml(why) => write!(f, "unable to parse sheet: {}", why),
            VecError::EmptySheet => write!(f, "sheet contains no vectors"),
        }
    }
}

impl Error for VecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VecError::Io(why) => Some(why),
            VecError::Yaml(why) => Some(why),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VecError {
    fn from(value: std::io::Error) -> Self {
        VecError::Io(value)
    }
}

impl From<serde_yaml::Error> for VecError {
    fn from(value: serde_yaml::Error) -> Self {
        VecError::Yaml(value)
    }
}
