use std::collections::HashMap;

use sidebar_core::{DrawError, FractionVector, Surface, Vector};

use crate::{DrawCtx, Item, SceneError};

/// Composite item owning named children.
///
/// The container's size is the coordinate space for the `*_fraction`
/// operations. Fractions are resolved once, at call time; resizing the
/// container afterwards does not move or resize children placed earlier.
///
/// Children are composited in map order, which is unspecified. Layouts are
/// expected not to overlap; nothing checks that.
#[derive(Default)]
pub struct Container {
    position: Vector,
    size: Vector,
    items: HashMap<String, Item>,
}

impl Container {
    pub fn new(position: Vector, size: Vector) -> Self {
        Self {
            position,
            size,
            items: HashMap::new(),
        }
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn set_position(&mut self, position: Vector) {
        self.position = position;
    }

    pub fn size(&self) -> Vector {
        self.size
    }

    pub fn set_size(&mut self, size: Vector) {
        self.size = size;
    }

    /// Insert `item` under `key`, returning the child it replaced.
    pub fn add_item(&mut self, key: impl Into<String>, item: impl Into<Item>) -> Option<Item> {
        self.items.insert(key.into(), item.into())
    }

    pub fn remove_item(&mut self, key: &str) -> Option<Item> {
        self.items.remove(key)
    }

    pub fn get_item(&self, key: &str) -> Option<&Item> {
        self.items.get(key)
    }

    pub fn get_item_mut(&mut self, key: &str) -> Option<&mut Item> {
        self.items.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    fn child_mut(&mut self, key: &str) -> Result<&mut Item, SceneError> {
        self.items
            .get_mut(key)
            .ok_or_else(|| SceneError::ItemNotFound(key.to_string()))
    }

    /// Move a child to a pixel position.
    pub fn move_item(&mut self, key: &str, position: Vector) -> Result<(), SceneError> {
        self.child_mut(key)?.set_position(position);
        Ok(())
    }

    /// Move a child to a fraction of this container's current size.
    pub fn move_item_fraction(
        &mut self,
        key: &str,
        position: FractionVector,
    ) -> Result<(), SceneError> {
        let resolved = position.resolve(self.size);
        self.move_item(key, resolved)
    }

    /// Resize a child to a pixel size.
    pub fn resize_item(&mut self, key: &str, size: Vector) -> Result<(), SceneError> {
        self.child_mut(key)?.set_size(size);
        Ok(())
    }

    /// Resize a child to a fraction of this container's current size.
    pub fn resize_item_fraction(
        &mut self,
        key: &str,
        size: FractionVector,
    ) -> Result<(), SceneError> {
        let resolved = size.resolve(self.size);
        self.resize_item(key, resolved)
    }

    /// Composite this container onto `parent` at the container's own position.
    ///
    /// This is the entry point for a root container drawing onto a window
    /// surface. Nested containers go through [`Item::draw`] instead, where the
    /// parent has already accounted for the position.
    pub fn composite(&self, parent: &mut Surface, ctx: &DrawCtx) -> Result<(), DrawError> {
        let scratch = self.render(ctx)?;
        parent.blit(&scratch, self.position);
        Ok(())
    }

    /// Item contract: `surface` is exactly this container's size.
    pub fn draw(&self, surface: &mut Surface, ctx: &DrawCtx) -> Result<(), DrawError> {
        let scratch = self.render(ctx)?;
        surface.blit(&scratch, Vector::ZERO);
        Ok(())
    }

    fn render(&self, ctx: &DrawCtx) -> Result<Surface, DrawError> {
        self.render_children(self.items.values(), ctx)
    }

    fn render_children<'a>(
        &self,
        children: impl Iterator<Item = &'a Item>,
        ctx: &DrawCtx,
    ) -> Result<Surface, DrawError> {
        let mut scratch = ctx.scratch(self.size);
        for child in children {
            let mut child_surface = ctx.scratch(child.size());
            child.draw(&mut child_surface, ctx)?;
            scratch.blit(&child_surface, child.position());
        }
        Ok(scratch)
    }
}
