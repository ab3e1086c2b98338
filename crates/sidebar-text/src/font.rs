use std::path::Path;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle as GlyphStyle};
use fontdue::{Font, FontSettings};
use sidebar_core::{DrawError, Surface, Vector};

use crate::{TextRasterizer, TextStyle};

/// fontdue-backed rasterizer with a regular and a bold face.
///
/// Faces are parsed once; every [`rasterize`](TextRasterizer::rasterize) call
/// lays out and rasterizes the glyphs again.
pub struct FontRasterizer {
    regular: Font,
    bold: Font,
}

impl FontRasterizer {
    pub fn from_bytes(regular: &[u8], bold: &[u8]) -> Result<Self, DrawError> {
        Ok(Self {
            regular: parse_font(regular)?,
            bold: parse_font(bold)?,
        })
    }

    pub fn from_paths(
        regular: impl AsRef<Path>,
        bold: impl AsRef<Path>,
    ) -> Result<Self, DrawError> {
        let regular_bytes = read_font(regular.as_ref())?;
        let bold_bytes = read_font(bold.as_ref())?;
        Self::from_bytes(&regular_bytes, &bold_bytes)
    }

    fn face(&self, bold: bool) -> &Font {
        if bold { &self.bold } else { &self.regular }
    }

    fn layout(&self, text: &str, style: &TextStyle) -> Layout {
        let mut layout: Layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(
            &[self.face(style.bold)],
            &GlyphStyle::new(text, style.size.max(1.0), 0),
        );
        layout
    }

    fn extent(&self, layout: &Layout, style: &TextStyle) -> Vector {
        let font = self.face(style.bold);
        let mut right = 0.0f32;
        for g in layout.glyphs() {
            let advance = font.metrics_indexed(g.key.glyph_index, g.key.px).advance_width;
            right = right.max(g.x + advance).max(g.x + g.width as f32);
        }
        Vector::new(right.ceil() as i32, layout.height().ceil() as i32)
    }
}

fn read_font(path: &Path) -> Result<Vec<u8>, DrawError> {
    log::debug!("loading font {}", path.display());
    Ok(std::fs::read(path)?)
}

fn parse_font(bytes: &[u8]) -> Result<Font, DrawError> {
    Font::from_bytes(bytes, FontSettings::default()).map_err(|e| DrawError::Font(e.to_string()))
}

impl TextRasterizer for FontRasterizer {
    fn rasterize(&self, text: &str, style: &TextStyle) -> Result<Surface, DrawError> {
        if text.is_empty() {
            return Ok(Surface::new(Vector::ZERO));
        }
        let font = self.face(style.bold);
        let layout = self.layout(text, style);
        let mut surface = Surface::filled(self.extent(&layout, style), style.background);

        for g in layout.glyphs() {
            if g.width == 0 || g.height == 0 {
                continue;
            }
            let (metrics, coverage) = font.rasterize_config(g.key);
            if metrics.width == 0 {
                continue;
            }
            let ox = g.x.round() as i32;
            let oy = g.y.round() as i32;
            for (row, line) in coverage.chunks_exact(metrics.width).enumerate() {
                for (col, &alpha) in line.iter().enumerate() {
                    if alpha == 0 {
                        continue;
                    }
                    let x = ox + col as i32;
                    let y = oy + row as i32;
                    if x < 0 || y < 0 {
                        continue;
                    }
                    let shade = style.background.mix(style.foreground, alpha as f32 / 255.0);
                    surface.put_pixel(x as u32, y as u32, shade);
                }
            }
        }
        Ok(surface)
    }

    fn measure(&self, text: &str, style: &TextStyle) -> Result<Vector, DrawError> {
        if text.is_empty() {
            return Ok(Vector::ZERO);
        }
        let layout = self.layout(text, style);
        Ok(self.extent(&layout, style))
    }
}
