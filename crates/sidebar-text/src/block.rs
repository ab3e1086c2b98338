use sidebar_core::{DrawError, Rect, Surface, Vector};

use crate::{TextRasterizer, TextStyle};

/// Draws each character as a solid foreground cell.
///
/// A cell is `size / 2` wide (one pixel wider when bold) and `size` tall.
/// Whitespace advances without painting.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockRasterizer;

impl BlockRasterizer {
    fn cell(style: &TextStyle) -> Vector {
        let h = style.size.max(1.0).round() as i32;
        let w = (h / 2).max(1) + i32::from(style.bold);
        Vector::new(w, h)
    }
}

impl TextRasterizer for BlockRasterizer {
    fn rasterize(&self, text: &str, style: &TextStyle) -> Result<Surface, DrawError> {
        let size = self.measure(text, style)?;
        let mut surface = Surface::filled(size, style.background);
        let cell = Self::cell(style);
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let at = Vector::new(i as i32 * cell.x, 0);
            surface.fill_rect(Rect::new(at, cell), style.foreground);
        }
        Ok(surface)
    }

    fn measure(&self, text: &str, style: &TextStyle) -> Result<Vector, DrawError> {
        let count = text.chars().count() as i32;
        if count == 0 {
            return Ok(Vector::ZERO);
        }
        let cell = Self::cell(style);
        Ok(Vector::new(cell.x * count, cell.y))
    }
}
