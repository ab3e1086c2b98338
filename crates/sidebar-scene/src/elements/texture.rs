use sidebar_core::{DrawError, Surface, Vector};

/// Pre-decoded bitmap stretched over the item rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub position: Vector,
    pub size: Vector,
    pixels: Surface,
}

impl Texture {
    /// Wrap a decoded buffer. The item starts at the buffer's natural size.
    pub fn new(pixels: Surface) -> Self {
        Self {
            position: Vector::ZERO,
            size: pixels.size(),
            pixels,
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

    pub fn pixels(&self) -> &Surface {
        &self.pixels
    }

    /// Resample the owned buffer to the current item size so later draws are
    /// plain copies.
    pub fn prescale(&mut self) {
        self.pixels = self.pixels.scaled(self.size);
    }

    pub fn draw(&self, surface: &mut Surface) -> Result<(), DrawError> {
        let target = surface.size();
        surface.blit_scaled(&self.pixels, Vector::ZERO, target);
        Ok(())
    }
}
