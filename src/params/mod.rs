//! Parameter definitions with physical units and documented semantics.
//!
//! Physics inputs and display constants live here with:
//! - Physical units (meters, seconds, Hz, etc.)
//! - Documented ranges and meanings
//! - Validation returning `InvalidParameter`

mod display;
mod limits;
mod sweep;
mod wave;

// Re-export all types
pub use display::{DisplayConfig, Window};
pub use limits::{Bounds, InputLimits};
pub use sweep::SweepConfig;
pub use wave::{WaveParams, AMPLITUDE};
