use crate::foundation::error::{SweepError, SweepResult};
use crate::sweep::clip::{ClipRegion, clip_region};

/// Per-line geometry reported by a text layout pass.
///
/// Implemented by whatever shapes and breaks the text; the sweep only needs line widths and the
/// block height.
pub trait LineMetricsSource {
    /// Number of visual lines, top to bottom.
    fn line_count(&self) -> usize;
    /// Horizontal extent of line `index`, excluding trailing whitespace.
    fn line_width(&self, index: usize) -> f64;
    /// Height of the whole laid-out block.
    fn block_height(&self) -> f64;
}

impl<B: parley::Brush> LineMetricsSource for parley::Layout<B> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_width(&self, index: usize) -> f64 {
        self.get(index)
            .map(|line| {
                let m = line.metrics();
                f64::from((m.advance - m.trailing_whitespace).max(0.0))
            })
            .unwrap_or(0.0)
    }

    fn block_height(&self) -> f64 {
        f64::from(self.height())
    }
}

/// Line widths plus a uniform line height for one text block.
///
/// The line height is the block height divided by the line count, not the true per-line
/// ascent/descent. Sweep rectangles therefore stack at equal intervals.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LineMetrics {
    line_widths: Vec<f64>,
    line_height: f64,
}

impl LineMetrics {
    /// Validate explicit widths and height.
    pub fn new(line_widths: Vec<f64>, line_height: f64) -> SweepResult<Self> {
        if line_widths.is_empty() {
            return Err(SweepError::invalid_input("text layout produced no lines"));
        }
        if let Some((i, w)) = line_widths
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(SweepError::invalid_input(format!(
                "line {i} has invalid width {w}"
            )));
        }
        if !line_height.is_finite() || line_height <= 0.0 {
            return Err(SweepError::invalid_input(format!(
                "line height must be finite and > 0, got {line_height}"
            )));
        }
        Ok(Self {
            line_widths,
            line_height,
        })
    }

    /// Collect metrics from a layout, deriving `line_height = block_height / line_count`.
    pub fn from_source(source: &impl LineMetricsSource) -> SweepResult<Self> {
        let count = source.line_count();
        if count == 0 {
            return Err(SweepError::invalid_input("text layout produced no lines"));
        }
        let widths = (0..count).map(|i| source.line_width(i)).collect();
        Self::new(widths, source.block_height() / count as f64)
    }

    /// Widths in visual order.
    pub fn line_widths(&self) -> &[f64] {
        &self.line_widths
    }

    /// Uniform height of one line.
    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// Number of lines (always at least one).
    pub fn line_count(&self) -> usize {
        self.line_widths.len()
    }

    /// Sum of all widths: the block unrolled into a single row.
    pub fn total_width(&self) -> f64 {
        self.line_widths.iter().sum()
    }

    /// Clip region covering `progress` of [`Self::total_width`].
    pub fn clip_region(&self, progress: f64) -> SweepResult<ClipRegion> {
        clip_region(&self.line_widths, self.line_height, progress)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sweep/metrics.rs"]
mod tests;
