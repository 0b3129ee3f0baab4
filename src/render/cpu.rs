use crate::foundation::core::{Affine, BezPath, Canvas, Rgba8, Vec2};
use crate::foundation::error::{SweepError, SweepResult};
use crate::layout::text::TextBlock;
use crate::render::dual::Surface;
use crate::sweep::clip::ClipRegion;

/// A rendered frame as RGBA8 pixels.
///
/// Frames coming out of [`CpuSurface::finish`] are premultiplied; the flag keeps that explicit
/// at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy with straight (non-premultiplied) alpha, as PNG encoders expect.
    pub fn to_straight(&self) -> Self {
        if !self.premultiplied {
            return self.clone();
        }
        let mut data = self.data.clone();
        for px in data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        Self {
            data,
            premultiplied: false,
            ..*self
        }
    }
}

/// `vello_cpu` drawing surface for [`TextBlock`]s.
pub struct CpuSurface {
    ctx: vello_cpu::RenderContext,
    canvas: Canvas,
    origin: Vec2,
    clip_depth: usize,
}

impl CpuSurface {
    /// Blank surface of `canvas` size with the text origin at the top-left corner.
    pub fn new(canvas: Canvas) -> SweepResult<Self> {
        let (w, h) = canvas.as_u16()?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            canvas,
            origin: Vec2::ZERO,
            clip_depth: 0,
        })
    }

    /// Offset applied to both text and clip geometry (for padding).
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Canvas size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Fill the whole canvas with `color`, ignoring the origin.
    pub fn clear(&mut self, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.canvas.width),
            f64::from(self.canvas.height),
        ));
    }

    /// Rasterize everything painted so far.
    pub fn finish(mut self) -> SweepResult<FrameRGBA> {
        if self.clip_depth != 0 {
            return Err(SweepError::render(format!(
                "{} clip(s) still pushed at finish",
                self.clip_depth
            )));
        }
        let (w, h) = self.canvas.as_u16()?;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn origin_transform(&self) -> vello_cpu::kurbo::Affine {
        affine_to_cpu(Affine::translate(self.origin))
    }
}

impl Surface for CpuSurface {
    type Block = TextBlock;

    fn fill_block(&mut self, block: &TextBlock, color: Rgba8) -> SweepResult<()> {
        self.ctx.set_transform(self.origin_transform());
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        for line in block.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&block.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }

    fn push_clip(&mut self, region: &ClipRegion) -> SweepResult<()> {
        self.ctx.set_transform(self.origin_transform());
        self.ctx.push_clip_layer(&bezpath_to_cpu(&region.to_path()));
        self.clip_depth += 1;
        Ok(())
    }

    fn pop_clip(&mut self) {
        if self.clip_depth == 0 {
            tracing::warn!("pop_clip without a matching push_clip");
            return;
        }
        self.ctx.pop_layer();
        self.clip_depth -= 1;
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
