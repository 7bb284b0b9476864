//! Shared primitives: geometry, colors, rounding and the error taxonomy.

/// Canvas, colors and geometry.
pub mod core;
/// Error taxonomy.
pub mod error;
pub(crate) mod math;
