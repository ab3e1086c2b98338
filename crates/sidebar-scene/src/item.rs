use sidebar_core::{Color, DrawError, Surface, Vector};
use sidebar_text::TextRasterizer;

use crate::{Container, Label, Texture, Unicolor};

/// Per-draw environment handed down the item tree.
///
/// Carries what used to be process-wide state: the background color every
/// scratch surface is cleared to, and the text backend labels rasterize with.
#[derive(Clone, Copy)]
pub struct DrawCtx<'a> {
    pub background: Color,
    pub text: &'a dyn TextRasterizer,
}

impl<'a> DrawCtx<'a> {
    pub fn new(background: Color, text: &'a dyn TextRasterizer) -> Self {
        Self { background, text }
    }

    /// A surface of `size` cleared to the background color.
    pub fn scratch(&self, size: Vector) -> Surface {
        Surface::filled(size, self.background)
    }
}

/// Any drawable node of the scene tree.
pub enum Item {
    Label(Label),
    Texture(Texture),
    Unicolor(Unicolor),
    Container(Container),
}

impl Item {
    pub fn position(&self) -> Vector {
        match self {
            Item::Label(l) => l.position,
            Item::Texture(t) => t.position,
            Item::Unicolor(u) => u.position,
            Item::Container(c) => c.position(),
        }
    }

    pub fn set_position(&mut self, position: Vector) {
        match self {
            Item::Label(l) => l.position = position,
            Item::Texture(t) => t.position = position,
            Item::Unicolor(u) => u.position = position,
            Item::Container(c) => c.set_position(position),
        }
    }

    pub fn size(&self) -> Vector {
        match self {
            Item::Label(l) => l.size,
            Item::Texture(t) => t.size,
            Item::Unicolor(u) => u.size,
            Item::Container(c) => c.size(),
        }
    }

    pub fn set_size(&mut self, size: Vector) {
        match self {
            Item::Label(l) => l.size = size,
            Item::Texture(t) => t.size = size,
            Item::Unicolor(u) => u.size = size,
            Item::Container(c) => c.set_size(size),
        }
    }

    /// Render into `surface`, which is exactly this item's size and already
    /// cleared to the background. Coordinates are local to the item.
    pub fn draw(&self, surface: &mut Surface, ctx: &DrawCtx) -> Result<(), DrawError> {
        match self {
            Item::Label(l) => l.draw(surface, ctx),
            Item::Texture(t) => t.draw(surface),
            Item::Unicolor(u) => u.draw(surface),
            Item::Container(c) => c.draw(surface, ctx),
        }
    }

    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Item::Label(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_label_mut(&mut self) -> Option<&mut Label> {
        match self {
            Item::Label(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_texture(&self) -> Option<&Texture> {
        match self {
            Item::Texture(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_texture_mut(&mut self) -> Option<&mut Texture> {
        match self {
            Item::Texture(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_unicolor(&self) -> Option<&Unicolor> {
        match self {
            Item::Unicolor(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_unicolor_mut(&mut self) -> Option<&mut Unicolor> {
        match self {
            Item::Unicolor(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Item::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Item::Container(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Label> for Item {
    fn from(l: Label) -> Self {
        Item::Label(l)
    }
}

impl From<Texture> for Item {
    fn from(t: Texture) -> Self {
        Item::Texture(t)
    }
}

impl From<Unicolor> for Item {
    fn from(u: Unicolor) -> Self {
        Item::Unicolor(u)
    }
}

impl From<Container> for Item {
    fn from(c: Container) -> Self {
        Item::Container(c)
    }
}
