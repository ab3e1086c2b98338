use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::{Color, DrawError, Rect, Vector};

/// In-memory RGBA pixel buffer used as a compositing target.
///
/// Blits are plain copies (no blending) and clip against the destination, so
/// negative positions and oversized sources are fine.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    /// Zeroed surface of `size`. Negative extents allocate nothing.
    pub fn new(size: Vector) -> Self {
        let (w, h) = size.to_dimensions();
        Self {
            image: RgbaImage::new(w, h),
        }
    }

    pub fn filled(size: Vector, color: Color) -> Self {
        let (w, h) = size.to_dimensions();
        Self {
            image: RgbaImage::from_pixel(w, h, color.into()),
        }
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Decode an encoded image (PNG, JPEG) into a surface.
    pub fn decode(bytes: &[u8]) -> Result<Self, DrawError> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        Ok(Self { image })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, DrawError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::decode(&bytes)
    }

    pub fn size(&self) -> Vector {
        Vector::new(self.image.width() as i32, self.image.height() as i32)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_empty(&self) -> bool {
        self.image.width() == 0 || self.image.height() == 0
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn fill(&mut self, color: Color) {
        let px: image::Rgba<u8> = color.into();
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    /// Fill `rect`, clipped to the surface bounds.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let bounds = Rect::new(Vector::ZERO, self.size());
        let Some(clip) = rect.intersect(&bounds) else {
            return;
        };
        let px: image::Rgba<u8> = color.into();
        for y in clip.y..clip.y + clip.h {
            for x in clip.x..clip.x + clip.w {
                self.image.put_pixel(x as u32, y as u32, px);
            }
        }
    }

    /// Copy all of `src` with its top-left corner at `at`.
    pub fn blit(&mut self, src: &Surface, at: Vector) {
        if src.is_empty() || self.is_empty() {
            return;
        }
        imageops::replace(&mut self.image, &src.image, at.x as i64, at.y as i64);
    }

    /// Copy `src` stretched to `size` with its top-left corner at `at`.
    pub fn blit_scaled(&mut self, src: &Surface, at: Vector, size: Vector) {
        if src.size() == size {
            self.blit(src, at);
            return;
        }
        if size.is_empty() || src.is_empty() {
            return;
        }
        let scaled = src.scaled(size);
        self.blit(&scaled, at);
    }

    /// A resampled copy of this surface.
    pub fn scaled(&self, size: Vector) -> Surface {
        let (w, h) = size.to_dimensions();
        if (w, h) == (self.width(), self.height()) {
            return self.clone();
        }
        if w == 0 || h == 0 || self.is_empty() {
            return Surface::new(size);
        }
        Surface {
            image: imageops::resize(&self.image, w, h, FilterType::Triangle),
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|p| Color::from(*p))
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width() && y < self.height() {
            self.image.put_pixel(x, y, color.into());
        }
    }

    pub fn as_rgba_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Copy into an RGBA8 presentation frame of the same dimensions.
    ///
    /// When the frame is a different size only the overlapping rows and
    /// columns are copied.
    pub fn copy_to_frame(&self, frame: &mut [u8], frame_width: u32) {
        let src_stride = self.width() as usize * 4;
        let dst_stride = frame_width as usize * 4;
        if src_stride == 0 || dst_stride == 0 {
            return;
        }
        let row_bytes = src_stride.min(dst_stride);
        for (src_row, dst_row) in self
            .image
            .as_raw()
            .chunks_exact(src_stride)
            .zip(frame.chunks_exact_mut(dst_stride))
        {
            dst_row[..row_bytes].copy_from_slice(&src_row[..row_bytes]);
        }
    }
}
