//! Leaf items. Each one draws into a surface of exactly its own size.

pub mod label;
pub mod texture;
pub mod unicolor;

pub use label::Label;
pub use texture::Texture;
pub use unicolor::Unicolor;
