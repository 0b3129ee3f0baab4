//! Lyricsweep renders a block of text that changes color progressively, karaoke style.
//!
//! The whole block is painted in a "before" color, then painted again in an "after" color
//! clipped to a region that grows with a progress value in `[0, 1]`. The region fills wrapped
//! lines in reading order: every line before the boundary line is fully covered, the boundary
//! line is covered up to the remaining width.
//!
//! - Compute a [`ClipRegion`] from [`LineMetrics`] with [`clip_region`]
//! - Lay out text with [`TextLayoutEngine`] and drive a [`SweepWidget`]
//! - Render single frames or whole sweeps with a [`SweepSession`] into a [`FrameSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Progress sources: easing curves and the timed/pushed progress driver.
pub mod animation;
/// Frame sinks.
pub mod encode;
/// Text layout.
pub mod layout;
/// Drawing surfaces and the dual-layer paint.
pub mod render;
/// Session-oriented rendering API.
pub mod session;
/// Appearance configuration.
pub mod style;
/// Progress to clip geometry.
pub mod sweep;
/// The progress-driven text view.
pub mod widget;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, Point, Rect, Rgba8, Vec2,
};
pub use crate::foundation::error::{SweepError, SweepResult};

pub use crate::animation::driver::{DriveFrames, DriveId, ProgressDriver};
pub use crate::animation::ease::Ease;
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use crate::layout::text::{BlockLayout, TextBlock, TextLayoutEngine};
pub use crate::render::cpu::{CpuSurface, FrameRGBA};
pub use crate::render::dual::{ClipScope, Surface, render_dual_layer};
pub use crate::session::render_session::{SweepSession, SweepSessionOpts, SweepStats};
pub use crate::style::SweepStyle;
pub use crate::sweep::clip::{ClipRegion, clip_region};
pub use crate::sweep::metrics::{LineMetrics, LineMetricsSource};
pub use crate::widget::{ProgressView, SweepWidget};
