use sidebar_core::{Color, DrawError, Surface, Vector};

/// Flat fill over the item rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Unicolor {
    pub position: Vector,
    pub size: Vector,
    pub color: Color,
}

impl Unicolor {
    pub fn new(color: Color) -> Self {
        Self {
            position: Vector::ZERO,
            size: Vector::ZERO,
            color,
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

    pub fn draw(&self, surface: &mut Surface) -> Result<(), DrawError> {
        if self.size.is_empty() {
            return Ok(());
        }
        surface.fill(self.color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_leaves_destination_untouched() {
        let mut dst = Surface::filled(Vector::new(3, 3), Color::BLACK);
        let before = dst.clone();
        Unicolor::new(Color::WHITE).draw(&mut dst).unwrap();
        assert_eq!(dst, before);
    }

    #[test]
    fn fills_whole_destination() {
        let u = Unicolor::new(Color::WHITE).sized(Vector::new(2, 2));
        let mut dst = Surface::filled(u.size, Color::BLACK);
        u.draw(&mut dst).unwrap();
        assert_eq!(dst, Surface::filled(Vector::new(2, 2), Color::WHITE));
    }
}
