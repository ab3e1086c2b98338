//! sidebar-core: pixel-space primitives shared by the sidebar crates.
//!
//! - [`Vector`], [`FractionVector`], [`Align`] and [`Rect`] describe placement.
//! - [`Color`] is an opaque-by-default sRGB color parsed from hex or `0xRRGGBB`.
//! - [`Surface`] is the in-memory RGBA buffer every item draws into.

mod color;
mod error;
mod geometry;
mod surface;

pub use color::{Color, ParseColorError};
pub use error::{DrawError, LayoutOverflow, Result};
pub use geometry::{Align, FractionVector, Rect, Vector, align_box};
pub use surface::Surface;
