use anyhow::{Context, Result};
use sidebar_scene::{Align, Container, FractionVector, Label, Surface, Texture, Vector};
use sidebar_window::{WindowCtx, WindowHandler};

use super::{DesktopLayout, Theme, add_title};

/// Overview of the workspaces: a numbered preview per desktop, laid out in a
/// grid under the title.
pub struct DesktopHandler {
    theme: Theme,
    layout: DesktopLayout,
}

impl DesktopHandler {
    pub fn new(theme: Theme, layout: DesktopLayout) -> Self {
        Self { theme, layout }
    }

    /// Rectangle of desktop slot `index` (zero-based) inside `area`.
    ///
    /// The title takes the top tenth; the remaining rows share the rest.
    pub fn slot(&self, index: u32, area: Vector) -> (Vector, Vector) {
        let columns = self.layout.columns.max(1);
        let rows = self.layout.count.div_ceil(columns).max(1);
        let top = (area.y as f32 * 0.1).round() as i32;
        let body = (area.y as f32 * 0.9).round() as i32;
        let size = Vector::new(area.x / columns as i32, body / rows as i32);
        let (col, row) = ((index % columns) as i32, (index / columns) as i32);
        (Vector::new(col * size.x, top + row * size.y), size)
    }

    /// Preview for desktop `n`, or a flat placeholder when it is missing or
    /// cannot be decoded.
    fn preview(&self, n: u32) -> Surface {
        let path = self.layout.images_dir.join(format!("{n}.png"));
        Surface::open(&path).unwrap_or_else(|e| {
            log::warn!("desktop {n}: no preview at {}: {e}", path.display());
            Surface::filled(Vector::new(1, 1), self.theme.empty_desktop)
        })
    }

    fn build_slot(&self, n: u32, position: Vector, size: Vector) -> Result<Container> {
        let mut slot = Container::new(position, size);
        slot.add_item(
            "number",
            Label::new(n)
                .text_size(self.theme.number_size)
                .bold(true)
                .foreground(self.theme.foreground)
                .align(Align::CENTER, Align::CENTER),
        );
        slot.add_item("image", Texture::new(self.preview(n)));

        slot.resize_item_fraction("number", FractionVector::new(0.2, 1.0))?;
        slot.move_item_fraction("image", FractionVector::new(0.2, 0.0))?;
        slot.resize_item_fraction("image", FractionVector::new(0.8, 1.0))?;

        // scale once here instead of on every frame
        if let Some(texture) = slot.get_item_mut("image").and_then(|i| i.as_texture_mut()) {
            texture.prescale();
        }
        Ok(slot)
    }
}

impl WindowHandler for DesktopHandler {
    fn init(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        add_title(ctx, "Desktops", &self.theme)?;
        let area = ctx.size();
        for n in 1..=self.layout.count {
            let (position, size) = self.slot(n - 1, area);
            let slot = self
                .build_slot(n, position, size)
                .with_context(|| format!("building desktop {n}"))?;
            ctx.container_mut().add_item(format!("desktop-{n}"), slot);
        }
        log::debug!("desktop overview with {} slots", self.layout.count);
        Ok(())
    }
}
