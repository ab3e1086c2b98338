use std::ops::{Add, Sub};

/// Integer pixel vector, used both for positions and sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when either axis has no positive extent.
    pub fn is_empty(self) -> bool {
        self.x <= 0 || self.y <= 0
    }

    /// Width/height clamped to zero, ready for buffer allocation.
    pub fn to_dimensions(self) -> (u32, u32) {
        (self.x.max(0) as u32, self.y.max(0) as u32)
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Vector {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Position or size expressed as a fraction of a parent's size.
///
/// Values are not clamped: anything outside `0.0..=1.0` simply lands outside
/// the parent bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FractionVector {
    pub x: f32,
    pub y: f32,
}

impl FractionVector {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert to pixels against `parent` as it is right now.
    ///
    /// The result is a snapshot; resizing the parent later does not move
    /// anything placed with an earlier resolution.
    pub fn resolve(self, parent: Vector) -> Vector {
        Vector::new(
            (self.x * parent.x as f32).round() as i32,
            (self.y * parent.y as f32).round() as i32,
        )
    }
}

/// Alignment along one axis. Horizontal and vertical share the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Align {
    #[default]
    Start = 0,
    Center = 1,
    End = 2,
}

impl Align {
    pub const LEFT: Align = Align::Start;
    pub const TOP: Align = Align::Start;
    pub const CENTER: Align = Align::Center;
    pub const RIGHT: Align = Align::End;
    pub const BOTTOM: Align = Align::End;

    /// Offset of `content` inside `region` along this axis.
    ///
    /// Centering truncates toward zero. Content larger than the region yields a
    /// negative offset; nothing is clamped.
    pub fn offset(self, region: i32, content: i32) -> i32 {
        match self {
            Align::Start => 0,
            Align::Center => (region - content) / 2,
            Align::End => region - content,
        }
    }
}

/// Resolve the top-left corner of `content` placed in `region`.
pub fn align_box(content: Vector, region: Vector, horizontal: Align, vertical: Align) -> Vector {
    Vector::new(
        horizontal.offset(region.x, content.x),
        vertical.offset(region.y, content.y),
    )
}

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(position: Vector, size: Vector) -> Self {
        Self {
            x: position.x,
            y: position.y,
            w: size.x,
            h: size.y,
        }
    }

    pub fn position(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    pub fn size(&self) -> Vector {
        Vector::new(self.w, self.h)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Overlap of two rectangles, `None` when they do not touch.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (self.x + self.w).min(other.x + other.w);
        let y1 = (self.y + self.h).min(other.y + other.h);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect {
            x: x0,
            y: y0,
            w: x1 - x0,
            h: y1 - y0,
        })
    }
}
