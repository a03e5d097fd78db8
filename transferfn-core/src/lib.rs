pub mod error;
pub mod interp;
pub mod points;
pub mod sample;
pub mod sequence;

pub use error::CurveError;
pub use interp::{lerp, locate, COINCIDENT_EPSILON};
pub use points::{ColorPoint, ControlPoint, OpacityPoint};
pub use sample::{sample, SampledPalette};
pub use sequence::ControlPoints;
