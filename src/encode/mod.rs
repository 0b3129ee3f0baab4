//! Frame sinks for rendered sweeps.
//!
//! Sinks consume rendered frames in index order and are used by `SweepSession::render_sweep`.

/// Frame sink trait and built-in sinks.
pub mod sink;
