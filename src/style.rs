use crate::foundation::core::Rgba8;
use crate::foundation::error::{SweepError, SweepResult};
use std::path::Path;

/// Immutable paint/layout configuration for a sweeping text block.
///
/// Built once (from defaults, JSON, or CLI flags) and handed to the widget; changing the look
/// means configuring a new style, never mutating paints in place.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepStyle {
    /// Color of the not-yet-swept text.
    pub before_color: Rgba8,
    /// Color revealed by the sweep.
    pub after_color: Rgba8,
    /// Font size in pixels.
    pub font_size: f32,
    /// Line height multiplier applied to the font's own line metrics.
    pub line_spacing: f32,
    /// Multiplier used instead of `line_spacing` when the text contains CJK ideographs.
    pub cjk_line_spacing: f32,
}

impl Default for SweepStyle {
    fn default() -> Self {
        Self {
            before_color: Rgba8::WHITE,
            after_color: Rgba8::RED,
            font_size: 32.0,
            line_spacing: 1.0,
            cjk_line_spacing: 1.23,
        }
    }
}

impl SweepStyle {
    /// Parse and validate a JSON style. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> SweepResult<Self> {
        let style: Self = serde_json::from_str(json)
            .map_err(|e| SweepError::serde(format!("style JSON: {e}")))?;
        style.validate()?;
        Ok(style)
    }

    /// Read a JSON style file.
    pub fn from_json_file(path: impl AsRef<Path>) -> SweepResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            SweepError::Other(anyhow::Error::new(e).context(format!(
                "read style '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&json)
    }

    /// Reject sizes and spacings the layout engine cannot use.
    pub fn validate(&self) -> SweepResult<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(SweepError::validation(
                "style font_size must be finite and > 0",
            ));
        }
        for (name, v) in [
            ("line_spacing", self.line_spacing),
            ("cjk_line_spacing", self.cjk_line_spacing),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(SweepError::validation(format!(
                    "style {name} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    /// Same style with different colors.
    pub fn with_colors(self, before_color: Rgba8, after_color: Rgba8) -> Self {
        Self {
            before_color,
            after_color,
            ..self
        }
    }

    /// Same style with a different font size.
    pub fn with_font_size(self, font_size: f32) -> Self {
        Self { font_size, ..self }
    }
}
