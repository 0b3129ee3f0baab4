//! Two-pass rendering: the whole block in the before color, then the after color clipped to the
//! sweep region.

/// `vello_cpu` surface and frame type.
pub mod cpu;
/// Surface trait and the dual-layer paint.
pub mod dual;
