//! Sweep geometry: line metrics in, clip rectangles out.

/// Clip region calculator.
pub mod clip;
/// Line metrics and the layout adapter trait.
pub mod metrics;
