use crate::foundation::error::{SweepError, SweepResult};
use crate::style::SweepStyle;
use crate::sweep::metrics::LineMetricsSource;
use std::path::Path;

/// First and last code points of the CJK Unified Ideographs range that switches line spacing.
const CJK_IDEOGRAPHS: std::ops::RangeInclusive<char> = '\u{4E00}'..='\u{9FA5}';

/// Return `true` if `text` contains at least one CJK unified ideograph.
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| CJK_IDEOGRAPHS.contains(&c))
}

/// Line height multiplier the layout pass should use for `text` under `style`.
pub fn line_spacing_for(text: &str, style: &SweepStyle) -> f32 {
    if contains_cjk(text) {
        style.cjk_line_spacing
    } else {
        style.line_spacing
    }
}

/// Something that can turn text into a laid-out block with line metrics.
///
/// The widget is generic over this so that shaping stays an external concern.
pub trait BlockLayout {
    /// Laid-out block handed to the surface for painting.
    type Block: LineMetricsSource;

    /// Shape `text` and break it into lines no wider than `max_width` (unbounded if `None`).
    fn layout_block(
        &mut self,
        text: &str,
        style: &SweepStyle,
        max_width: Option<f32>,
    ) -> SweepResult<Self::Block>;
}

/// A shaped, line-broken paragraph plus the font needed to paint it.
#[derive(Clone)]
pub struct TextBlock {
    pub(crate) layout: parley::Layout<()>,
    pub(crate) font: vello_cpu::peniko::FontData,
}

impl TextBlock {
    /// Width of the widest line, excluding trailing whitespace.
    pub fn width(&self) -> f32 {
        self.layout.width()
    }

    /// Height of the whole block.
    pub fn height(&self) -> f32 {
        self.layout.height()
    }
}

impl std::fmt::Debug for TextBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBlock")
            .field("lines", &self.layout.len())
            .field("width", &self.layout.width())
            .field("height", &self.layout.height())
            .finish()
    }
}

impl LineMetricsSource for TextBlock {
    fn line_count(&self) -> usize {
        self.layout.line_count()
    }

    fn line_width(&self, index: usize) -> f64 {
        self.layout.line_width(index)
    }

    fn block_height(&self) -> f64 {
        self.layout.block_height()
    }
}

/// Parley contexts bound to a single font face loaded from bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

impl TextLayoutEngine {
    /// Register `font_bytes` and prepare fresh layout contexts.
    pub fn from_font_bytes(font_bytes: Vec<u8>) -> SweepResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| SweepError::layout("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| SweepError::layout("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
        })
    }

    /// Read a font file and register it.
    pub fn from_font_file(path: impl AsRef<Path>) -> SweepResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            SweepError::Other(
                anyhow::Error::new(e).context(format!("read font '{}'", path.display())),
            )
        })?;
        Self::from_font_bytes(bytes)
    }

    /// Family name of the registered face.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }
}

impl BlockLayout for TextLayoutEngine {
    type Block = TextBlock;

    fn layout_block(
        &mut self,
        text: &str,
        style: &SweepStyle,
        max_width: Option<f32>,
    ) -> SweepResult<TextBlock> {
        style.validate()?;
        if let Some(w) = max_width
            && (!w.is_finite() || w <= 0.0)
        {
            return Err(SweepError::validation("wrap width must be finite and > 0"));
        }

        let spacing = line_spacing_for(text, style);
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.font_size));
        builder.push_default(parley::style::StyleProperty::LineHeight(
            parley::style::LineHeight::MetricsRelative(spacing),
        ));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(max_width);
        layout.align(
            max_width,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );

        tracing::trace!(
            lines = layout.len(),
            width = layout.width(),
            height = layout.height(),
            spacing,
            "laid out text block"
        );
        Ok(TextBlock {
            layout,
            font: self.font.clone(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/text.rs"]
mod tests;
