//! Error types for drawing into surfaces.

use thiserror::Error;

use crate::Vector;

/// Result type for draw operations.
pub type Result<T> = std::result::Result<T, DrawError>;

/// Failures of the rasterization and image backends. Always fatal to the
/// draw call that hit them.
#[derive(Error, Debug)]
pub enum DrawError {
    /// Image decoding or scaling failed.
    #[error("image backend failed: {0}")]
    Image(#[from] image::ImageError),

    /// Font loading or glyph rasterization failed.
    #[error("font backend failed: {0}")]
    Font(String),

    /// IO error while reading an asset.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Content that does not fit its destination box.
///
/// Not an error of the draw itself: the content is clipped. Callers that care
/// can ask for this report explicitly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("content {content:?} overflows region {region:?}")]
pub struct LayoutOverflow {
    pub content: Vector,
    pub region: Vector,
}

impl LayoutOverflow {
    /// `Some` when `content` exceeds `region` on either axis.
    pub fn check(content: Vector, region: Vector) -> Option<Self> {
        (content.x > region.x || content.y > region.y).then_some(Self { content, region })
    }
}
