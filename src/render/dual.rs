use crate::foundation::core::Rgba8;
use crate::foundation::error::SweepResult;
use crate::style::SweepStyle;
use crate::sweep::clip::ClipRegion;

/// Drawing target for one text block.
///
/// A surface paints whole blocks in a flat color and keeps a stack of clip regions. Every
/// `push_clip` must be balanced by a `pop_clip`; [`ClipScope`] does that automatically.
pub trait Surface {
    /// Block representation this surface knows how to paint.
    type Block: ?Sized;

    /// Paint every glyph of `block` in `color`, subject to the active clips.
    fn fill_block(&mut self, block: &Self::Block, color: Rgba8) -> SweepResult<()>;

    /// Restrict subsequent paints to the union of `region`'s rectangles.
    fn push_clip(&mut self, region: &ClipRegion) -> SweepResult<()>;

    /// Drop the most recent clip.
    fn pop_clip(&mut self);
}

/// Clip pushed for the lifetime of the guard.
///
/// Dropping the guard pops the clip, including on early return through `?`.
pub struct ClipScope<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> ClipScope<'a, S> {
    /// Push `region` onto `surface`.
    pub fn new(surface: &'a mut S, region: &ClipRegion) -> SweepResult<Self> {
        surface.push_clip(region)?;
        Ok(Self { surface })
    }

    /// Surface with the clip applied.
    pub fn surface(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for ClipScope<'_, S> {
    fn drop(&mut self) {
        self.surface.pop_clip();
    }
}

/// Paint `block` in the before color, then again in the after color clipped to `region`.
///
/// `region = None` means no clip region could be computed for this frame: only the before layer
/// is painted. An empty region skips the second paint as well.
pub fn render_dual_layer<S: Surface + ?Sized>(
    surface: &mut S,
    block: &S::Block,
    style: &SweepStyle,
    region: Option<&ClipRegion>,
) -> SweepResult<()> {
    surface.fill_block(block, style.before_color)?;

    let Some(region) = region.filter(|r| !r.is_empty()) else {
        return Ok(());
    };
    let mut scope = ClipScope::new(surface, region)?;
    scope.surface().fill_block(block, style.after_color)
}

#[cfg(test)]
#[path = "../../tests/unit/render/dual.rs"]
mod tests;
