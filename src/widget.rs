use crate::foundation::error::SweepResult;
use crate::layout::text::{BlockLayout, line_spacing_for};
use crate::render::dual::{Surface, render_dual_layer};
use crate::style::SweepStyle;
use crate::sweep::clip::ClipRegion;
use crate::sweep::metrics::{LineMetrics, LineMetricsSource};

/// Minimal interface of a progress-driven text view.
pub trait ProgressView {
    /// Laid-out block type the view paints.
    type Block;

    /// Replace the style. Takes effect on the next render.
    fn configure(&mut self, style: SweepStyle) -> SweepResult<()>;

    /// Record a new progress value and mark the view dirty.
    fn on_progress_changed(&mut self, value: f64);

    /// Paint the view onto `surface`.
    fn render<S>(&mut self, surface: &mut S) -> SweepResult<()>
    where
        S: Surface<Block = Self::Block> + ?Sized;
}

#[derive(Clone, Debug, PartialEq)]
struct LayoutKey {
    text: String,
    max_width: Option<f32>,
    font_size: f32,
    line_spacing: f32,
}

/// Text block that sweeps from its before color to its after color as progress grows.
///
/// Layout is memoized by (text, wrap width, font size, effective line spacing); line metrics and
/// the clip region are recomputed on every render.
pub struct SweepWidget<L: BlockLayout> {
    layout: L,
    text: String,
    max_width: Option<f32>,
    style: SweepStyle,
    progress: f64,
    dirty: bool,
    cached: Option<(LayoutKey, L::Block)>,
    last_region: Option<ClipRegion>,
}

impl<L: BlockLayout> SweepWidget<L> {
    /// Widget over `text`, wrapped at `max_width`, with the default style and progress `0`.
    pub fn new(layout: L, text: impl Into<String>, max_width: Option<f32>) -> Self {
        Self {
            layout,
            text: text.into(),
            max_width,
            style: SweepStyle::default(),
            progress: 0.0,
            dirty: true,
            cached: None,
            last_region: None,
        }
    }

    /// Builder form of [`ProgressView::configure`].
    pub fn with_style(mut self, style: SweepStyle) -> SweepResult<Self> {
        self.configure(style)?;
        Ok(self)
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.dirty = true;
    }

    /// Wrap width, if any.
    pub fn max_width(&self) -> Option<f32> {
        self.max_width
    }

    /// Change the wrap width.
    pub fn set_max_width(&mut self, max_width: Option<f32>) {
        self.max_width = max_width;
        self.dirty = true;
    }

    /// Active style.
    pub fn style(&self) -> &SweepStyle {
        &self.style
    }

    /// Current progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// `true` if something changed since the last successful render.
    pub fn needs_render(&self) -> bool {
        self.dirty
    }

    /// Region applied by the last render that could compute one.
    pub fn last_region(&self) -> Option<&ClipRegion> {
        self.last_region.as_ref()
    }

    /// Laid-out block for the current text and style.
    pub fn block(&mut self) -> SweepResult<&L::Block> {
        ensure_layout(
            &mut self.layout,
            &mut self.cached,
            &self.text,
            self.max_width,
            &self.style,
        )
    }

    /// Line metrics of the current layout.
    pub fn metrics(&mut self) -> SweepResult<LineMetrics> {
        LineMetrics::from_source(self.block()?)
    }

    /// Clip region for the current progress.
    pub fn clip_region(&mut self) -> SweepResult<ClipRegion> {
        let progress = self.progress;
        self.metrics()?.clip_region(progress)
    }

    /// Size the block occupies: the wrap width (or widest line) by the block height.
    pub fn measure(&mut self) -> SweepResult<(f64, f64)> {
        let max_width = self.max_width;
        let block = self.block()?;
        let widest = (0..block.line_count())
            .map(|i| block.line_width(i))
            .fold(0.0, f64::max);
        let width = max_width.map_or(widest, f64::from);
        Ok((width, block.block_height()))
    }
}

impl<L: BlockLayout> ProgressView for SweepWidget<L> {
    type Block = L::Block;

    fn configure(&mut self, style: SweepStyle) -> SweepResult<()> {
        style.validate()?;
        self.style = style;
        self.dirty = true;
        Ok(())
    }

    fn on_progress_changed(&mut self, value: f64) {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        if value != self.progress {
            self.progress = value;
            self.dirty = true;
        }
    }

    #[tracing::instrument(level = "debug", skip(self, surface), fields(progress = self.progress))]
    fn render<S>(&mut self, surface: &mut S) -> SweepResult<()>
    where
        S: Surface<Block = L::Block> + ?Sized,
    {
        let block = ensure_layout(
            &mut self.layout,
            &mut self.cached,
            &self.text,
            self.max_width,
            &self.style,
        )?;

        let computed = LineMetrics::from_source(block).and_then(|m| {
            let region = m.clip_region(self.progress)?;
            tracing::debug!(
                lines = m.line_count(),
                boundary_line = ?region.boundary_line(),
                covered = region.covered_length(),
                total = m.total_width(),
                line_height = m.line_height(),
                "computed sweep region"
            );
            Ok(region)
        });
        let region = match computed {
            Ok(region) => {
                self.last_region = Some(region.clone());
                Some(region)
            }
            Err(e) if e.is_invalid_input() => {
                tracing::warn!(error = %e, "no clip region; painting before layer only");
                None
            }
            Err(e) => return Err(e),
        };

        render_dual_layer(surface, block, &self.style, region.as_ref())?;
        self.dirty = false;
        Ok(())
    }
}

fn ensure_layout<'a, L: BlockLayout>(
    layout: &mut L,
    cached: &'a mut Option<(LayoutKey, L::Block)>,
    text: &str,
    max_width: Option<f32>,
    style: &SweepStyle,
) -> SweepResult<&'a L::Block> {
    let key = LayoutKey {
        text: text.to_owned(),
        max_width,
        font_size: style.font_size,
        line_spacing: line_spacing_for(text, style),
    };
    let entry = match cached.take() {
        Some((k, block)) if k == key => (k, block),
        _ => {
            let block = layout.layout_block(text, style, max_width)?;
            (key, block)
        }
    };
    let (_, block) = cached.insert(entry);
    Ok(block)
}

#[cfg(test)]
#[path = "../tests/unit/widget.rs"]
mod tests;
