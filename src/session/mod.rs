//! Session-oriented rendering: one widget on one canvas, rendered as single frames or whole sweeps.

/// Frame and sweep rendering over a [`crate::SweepWidget`].
pub mod render_session;
