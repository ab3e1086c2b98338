//! Text rasterization for sidebar labels.
//!
//! The primary rasterizer is [`FontRasterizer`], which uses `fontdue` for
//! layout and glyph coverage. Each call produces a fresh [`Surface`] with the
//! text shaded against its background color, the same contract a label
//! expects from any text backend.
//!
//! [`BlockRasterizer`] draws every character as a solid cell. It needs no font
//! files and is deterministic, which makes it suitable for headless rendering
//! and tests.
//!
//! # Example
//! ```no_run
//! use sidebar_core::Color;
//! use sidebar_text::{FontRasterizer, TextRasterizer, TextStyle};
//!
//! let fonts = FontRasterizer::from_paths(
//!     "/usr/share/fonts/TTF/DejaVuSans.ttf",
//!     "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
//! )
//! .expect("fonts");
//! let style = TextStyle::new(32.0, Color::WHITE, Color::BLACK);
//! let surface = fonts.rasterize("Power", &style).expect("rasterize");
//! ```

mod block;
mod font;

pub use block::BlockRasterizer;
pub use font::FontRasterizer;

use sidebar_core::{Color, DrawError, Surface, Vector};

/// Visual parameters of one text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Point size in pixels.
    pub size: f32,
    pub bold: bool,
    pub foreground: Color,
    pub background: Color,
}

impl TextStyle {
    pub fn new(size: f32, foreground: Color, background: Color) -> Self {
        Self {
            size,
            bold: false,
            foreground,
            background,
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

/// Text backend interface. Implementations turn a string into a shaded pixel box.
pub trait TextRasterizer {
    /// Render `text` into a surface sized to its own bounding box.
    fn rasterize(&self, text: &str, style: &TextStyle) -> Result<Surface, DrawError>;

    /// Size of the box [`rasterize`](Self::rasterize) would produce.
    fn measure(&self, text: &str, style: &TextStyle) -> Result<Vector, DrawError> {
        Ok(self.rasterize(text, style)?.size())
    }
}
