//! 2-D vectors in the Cartesian plane.
//!
//! `Vec2` is an immutable coordinate pair with addition, length, angle and
//! distance. Vector sheets are YAML files of named vectors.

pub mod components;
pub mod error;
pub mod sheet;
pub mod util;

pub use components::{distance, AngleUnit, Vec2};
pub use error::VecError;
pub use sheet::VectorSheet;
