use crate::animation::driver::ProgressDriver;
use crate::animation::ease::Ease;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, Fps, Rgba8, Vec2};
use crate::foundation::error::{SweepError, SweepResult};
use crate::layout::text::TextLayoutEngine;
use crate::render::cpu::{CpuSurface, FrameRGBA};
use crate::widget::{ProgressView, SweepWidget};
use std::time::Duration;

/// Options controlling how a [`SweepSession`] frames its widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepSessionOpts {
    /// Transparent margin around the text block, in pixels.
    pub padding: f32,
    /// Color the canvas is cleared to before each frame.
    pub background: Rgba8,
}

impl Default for SweepSessionOpts {
    fn default() -> Self {
        Self {
            padding: 8.0,
            background: Rgba8::TRANSPARENT,
        }
    }
}

/// Sweep render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Frames pushed into the sink.
    pub frames_total: u64,
}

/// Renders a [`SweepWidget`] onto a fixed-size CPU canvas.
///
/// The canvas is sized once, at construction, from the widget's measured block plus padding.
pub struct SweepSession {
    widget: SweepWidget<TextLayoutEngine>,
    opts: SweepSessionOpts,
    canvas: Canvas,
}

impl SweepSession {
    /// Measure `widget` and build a session around it.
    pub fn new(mut widget: SweepWidget<TextLayoutEngine>, opts: SweepSessionOpts) -> SweepResult<Self> {
        if !opts.padding.is_finite() || opts.padding < 0.0 {
            return Err(SweepError::validation("padding must be finite and >= 0"));
        }
        let (w, h) = widget.measure()?;
        let pad = f64::from(opts.padding) * 2.0;
        let canvas = canvas_for(w + pad, h + pad)?;
        tracing::debug!(width = canvas.width, height = canvas.height, "session canvas");
        Ok(Self {
            widget,
            opts,
            canvas,
        })
    }

    /// Canvas every frame is rendered at.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Underlying widget.
    pub fn widget(&self) -> &SweepWidget<TextLayoutEngine> {
        &self.widget
    }

    /// Mutable access to the widget. Layout changes do not resize the canvas.
    pub fn widget_mut(&mut self) -> &mut SweepWidget<TextLayoutEngine> {
        &mut self.widget
    }

    /// Render one frame at `progress`.
    pub fn render_frame(&mut self, progress: f64) -> SweepResult<FrameRGBA> {
        self.widget.on_progress_changed(progress);
        let pad = f64::from(self.opts.padding);
        let mut surface = CpuSurface::new(self.canvas)?.with_origin(Vec2::new(pad, pad));
        surface.clear(self.opts.background);
        self.widget.render(&mut surface)?;
        surface.finish()
    }

    /// Render a full 0-to-1 sweep over `duration` at `fps` and stream it into `sink`.
    ///
    /// The sink receives frames in increasing index order. The first frame is at progress `0`,
    /// the last at exactly `1`.
    #[tracing::instrument(level = "debug", skip(self, sink))]
    pub fn render_sweep(
        &mut self,
        duration: Duration,
        fps: Fps,
        ease: Ease,
        sink: &mut dyn FrameSink,
    ) -> SweepResult<SweepStats> {
        let frames = ProgressDriver::frames(duration, fps, ease)?;
        let cfg = SinkConfig {
            canvas: self.canvas,
            fps,
            frame_count: frames.len() as u64,
        };

        sink.begin(cfg)?;
        let mut stats = SweepStats::default();
        for (idx, progress) in frames {
            let frame = self.render_frame(progress)?;
            sink.push_frame(idx, &frame)?;
            stats.frames_total += 1;
        }
        sink.end()?;

        tracing::debug!(frames = stats.frames_total, "sweep rendered");
        Ok(stats)
    }
}

fn canvas_for(width: f64, height: f64) -> SweepResult<Canvas> {
    if !width.is_finite() || !height.is_finite() {
        return Err(SweepError::validation("measured block size is not finite"));
    }
    let max = f64::from(u16::MAX);
    let side = |v: f64| v.ceil().clamp(0.0, max) as u32;
    Canvas::new(side(width), side(height))
}
