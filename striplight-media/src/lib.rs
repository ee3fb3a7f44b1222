pub mod decoder;
pub mod encoder;
pub mod util;

use image::RgbImage;

pub use decoder::DecodeError;

/// One decoded RGB frame.
///
/// Derived operations (`resize_into`, `crop`) always return a fresh frame and
/// never touch the source, so callers can keep working with the original
/// while feeding crops downstream.
#[derive(Debug, Clone)]
pub struct Image {
    frame: RgbImage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGB(pub u8, pub u8, pub u8);

impl Image {
    /// Blank frame filled with a single color. Mostly useful for building
    /// synthetic frames in tests and diagnostics.
    pub fn filled(width: u32, height: u32, color: RGB) -> Self {
        let frame = RgbImage::from_pixel(width, height, image::Rgb([color.0, color.1, color.2]));
        Image { frame }
    }

    pub fn frame(&self) -> &RgbImage {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut RgbImage {
        &mut self.frame
    }

    pub fn get_width(&self) -> u32 {
        self.frame.width()
    }

    pub fn get_height(&self) -> u32 {
        self.frame.height()
    }

    pub fn get_size(&self) -> (u32, u32) {
        self.frame.dimensions()
    }
}

impl From<RgbImage> for Image {
    fn from(frame: RgbImage) -> Self {
        Image { frame }
    }
}
