//! Progress to clip geometry.
//!
//! The text block is treated as if all of its lines were laid end to end in one row. A progress
//! value in `[0, 1]` selects a prefix of that row (the coverage budget); the budget is then folded
//! back onto the real lines, producing one axis-aligned rectangle per covered line:
//!
//! ```text
//! widths [100, 50, 80], progress 0.5 -> budget 115
//!
//! line 0  ##########           full      {0, 0, 100, 20}
//! line 1  ##..                 partial   {0, 20, 15, 40}
//! line 2  ........             omitted
//! ```

use crate::foundation::core::{BezPath, Rect};
use crate::foundation::error::{SweepError, SweepResult};

/// Tolerance used when the remaining budget is compared against zero.
///
/// Accumulated rounding must not push the sweep boundary onto the following line.
pub const EPSILON: f64 = 1e-9;

/// Ordered rectangles, top to bottom, that the after-color layer is clipped to.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ClipRegion {
    rects: Vec<Rect>,
}

impl ClipRegion {
    /// Region that exposes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rectangles in line order; index `i` is line `i`.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Number of rectangles.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// `true` when no line is covered.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Index of the line holding the sweep boundary, if any line is covered.
    pub fn boundary_line(&self) -> Option<usize> {
        self.rects.len().checked_sub(1)
    }

    /// Total covered length in unrolled (single-row) units.
    pub fn covered_length(&self) -> f64 {
        self.rects.iter().map(|r| r.width()).sum()
    }

    /// Smallest rectangle containing the whole region.
    pub fn bounds(&self) -> Option<Rect> {
        self.rects.iter().copied().reduce(|a, b| a.union(b))
    }

    /// Union of the rectangles as a single path, one closed subpath per line.
    ///
    /// Zero-width rectangles are skipped; they cannot expose any pixel.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for r in self.rects.iter().filter(|r| r.width() > 0.0) {
            path.move_to((r.x0, r.y0));
            path.line_to((r.x1, r.y0));
            path.line_to((r.x1, r.y1));
            path.line_to((r.x0, r.y1));
            path.close_path();
        }
        path
    }
}

/// Index of the first line on which the coverage budget `target` runs out.
///
/// Walks the lines subtracting each width from the budget and stops at the first line that drives
/// it below zero. A budget ending exactly on a line end moves on to the next line. If the budget
/// outlasts every line the last index is returned.
///
/// `line_widths` must not be empty.
pub fn boundary_line(line_widths: &[f64], target: f64) -> usize {
    let mut remaining = target;
    for (i, w) in line_widths.iter().enumerate() {
        remaining -= w;
        if remaining < -EPSILON {
            return i;
        }
    }
    line_widths.len().saturating_sub(1)
}

/// Compute the clip region covering `progress` of the unrolled text width.
///
/// Progress is saturated into `[0, 1]` (NaN counts as `0`). At `0` the region is empty; at `1`
/// every line is covered at full width. Fails with [`SweepError::InvalidInput`] when there are no
/// lines or the geometry is not finite.
pub fn clip_region(line_widths: &[f64], line_height: f64, progress: f64) -> SweepResult<ClipRegion> {
    if line_widths.is_empty() {
        return Err(SweepError::invalid_input("no lines to clip"));
    }
    if !line_height.is_finite() || line_height <= 0.0 {
        return Err(SweepError::invalid_input(format!(
            "line height must be finite and > 0, got {line_height}"
        )));
    }
    if line_widths.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(SweepError::invalid_input(
            "line widths must be finite and >= 0",
        ));
    }

    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let total: f64 = line_widths.iter().sum();
    let target = progress * total;
    if target <= 0.0 {
        return Ok(ClipRegion::empty());
    }

    let last = boundary_line(line_widths, target);
    let mut rects = Vec::with_capacity(last + 1);
    let mut consumed = 0.0;
    for (i, &w) in line_widths[..last].iter().enumerate() {
        rects.push(line_rect(i, 0.0, w, line_height));
        consumed += w;
    }
    let right = (target - consumed).clamp(0.0, line_widths[last]);
    rects.push(line_rect(last, 0.0, right, line_height));

    Ok(ClipRegion { rects })
}

fn line_rect(line: usize, left: f64, right: f64, line_height: f64) -> Rect {
    let top = line as f64 * line_height;
    Rect::new(left, top, right, top + line_height)
}

#[cfg(test)]
#[path = "../../tests/unit/sweep/clip.rs"]
mod tests;
