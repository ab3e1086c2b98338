//! sidebar-scene: the item tree that gets composited into a window each frame.
//!
//! A [`Container`] owns named child [`Item`]s. Every frame the whole tree is
//! redrawn: each child renders into its own scratch surface, which is then
//! copied into the parent's scratch at the child's position.

mod container;
pub mod elements;
mod error;
mod item;

pub use container::Container;
pub use elements::{Label, Texture, Unicolor};
pub use error::SceneError;
pub use item::{DrawCtx, Item};

pub use sidebar_core::{Align, Color, DrawError, FractionVector, LayoutOverflow, Surface, Vector};
