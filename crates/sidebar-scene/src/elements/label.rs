use std::fmt;

use sidebar_core::{Align, Color, DrawError, LayoutOverflow, Surface, Vector, align_box};
use sidebar_text::TextStyle;

use crate::DrawCtx;

/// Single line of text aligned inside the item rectangle.
///
/// There is no cached rendering; the text is rasterized on every draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: Vector,
    pub size: Vector,
    pub text: String,
    /// Point size in pixels.
    pub text_size: f32,
    pub bold: bool,
    pub halign: Align,
    pub valign: Align,
    pub foreground: Color,
    /// Shade behind the rasterized text box only; `None` uses the draw context
    /// background. The rest of the label rectangle keeps the context background.
    pub background: Option<Color>,
}

impl Label {
    /// Anything displayable becomes the label text, so numbers and other
    /// structured values are always stringified first.
    pub fn new(text: impl fmt::Display) -> Self {
        Self {
            position: Vector::ZERO,
            size: Vector::ZERO,
            text: text.to_string(),
            text_size: 16.0,
            bold: false,
            halign: Align::Start,
            valign: Align::Start,
            foreground: Color::WHITE,
            background: None,
        }
    }

    pub fn at(mut self, position: Vector) -> Self {
        self.position = position;
        self
    }

    pub fn sized(mut self, size: Vector) -> Self {
        self.size = size;
        self
    }

    pub fn text_size(mut self, text_size: f32) -> Self {
        self.text_size = text_size;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn align(mut self, halign: Align, valign: Align) -> Self {
        self.halign = halign;
        self.valign = valign;
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn set_text(&mut self, text: impl fmt::Display) {
        self.text = text.to_string();
    }

    fn style(&self, ctx: &DrawCtx) -> TextStyle {
        TextStyle::new(self.text_size, self.foreground, self.background.unwrap_or(ctx.background))
            .bold(self.bold)
    }

    /// Size of the rasterized text box.
    pub fn measure(&self, ctx: &DrawCtx) -> Result<Vector, DrawError> {
        ctx.text.measure(&self.text, &self.style(ctx))
    }

    /// Report whether the text box exceeds the label rectangle.
    pub fn check_fit(&self, ctx: &DrawCtx) -> Result<Option<LayoutOverflow>, DrawError> {
        Ok(LayoutOverflow::check(self.measure(ctx)?, self.size))
    }

    pub fn draw(&self, surface: &mut Surface, ctx: &DrawCtx) -> Result<(), DrawError> {
        let text = ctx.text.rasterize(&self.text, &self.style(ctx))?;
        let region = surface.size();
        if let Some(overflow) = LayoutOverflow::check(text.size(), region) {
            log::debug!("label {:?} clipped: {overflow}", self.text);
        }
        let at = align_box(text.size(), region, self.halign, self.valign);
        surface.blit(&text, at);
        Ok(())
    }
}
