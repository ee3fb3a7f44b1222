use crate::Image;
use anyhow::{bail, Result};
use image::imageops;

impl Image {
    /// Extracts a rectangular sub-image as a new frame.
    ///
    /// The rectangle must lie fully inside the frame; callers that work with
    /// configured geometry are expected to clip before cropping rather than
    /// rely on silent truncation here.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Image> {
        let (frame_w, frame_h) = self.get_size();
        if width == 0 || height == 0 {
            bail!("crop region {width}x{height} at ({x},{y}) is empty");
        }
        if x + width > frame_w || y + height > frame_h {
            bail!(
                "crop region {width}x{height} at ({x},{y}) exceeds frame {frame_w}x{frame_h}"
            );
        }
        let frame = imageops::crop_imm(self.frame(), x, y, width, height).to_image();
        Ok(Image::from(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RGB;

    #[test]
    fn crop_returns_requested_region() {
        let mut image = Image::filled(10, 10, RGB(0, 0, 0));
        image.frame_mut().put_pixel(4, 5, image::Rgb([255, 0, 0]));

        let crop = image.crop(4, 5, 3, 2).unwrap();
        assert_eq!(crop.get_size(), (3, 2));
        assert_eq!(crop.frame().get_pixel(0, 0).0, [255, 0, 0]);
    }

    #[test]
    fn crop_rejects_out_of_bounds_region() {
        let image = Image::filled(10, 10, RGB(0, 0, 0));
        assert!(image.crop(8, 0, 4, 4).is_err());
        assert!(image.crop(0, 0, 0, 4).is_err());
    }
}
