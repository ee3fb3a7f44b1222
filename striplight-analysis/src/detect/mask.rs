use image::{GrayImage, Luma};
use striplight_media::util::hsv::{rgb_to_hsv, Hsv};
use striplight_media::Image;

/// Inclusive HSV box on the OpenCV 8-bit scale (hue 0..=180, sat/value
/// 0..=255).
#[derive(Debug, Clone, Copy)]
pub struct HsvRange {
    pub lower: (u8, u8, u8),
    pub upper: (u8, u8, u8),
}

impl HsvRange {
    pub fn contains(&self, hsv: Hsv) -> bool {
        let (lh, ls, lv) = self.lower;
        let (uh, us, uv) = self.upper;
        (lh..=uh).contains(&hsv.h) && (ls..=us).contains(&hsv.s) && (lv..=uv).contains(&hsv.v)
    }
}

/// Hue ranges of diagnostic ink. Red wraps the hue circle, hence two bands;
/// the dark band catches faint or dark-ink lines by low value alone,
/// regardless of hue and saturation.
pub fn ink_ranges() -> [HsvRange; 4] {
    [
        // Red, low hue end
        HsvRange {
            lower: (0, 50, 50),
            upper: (10, 255, 255),
        },
        // Red, high hue end
        HsvRange {
            lower: (170, 50, 50),
            upper: (180, 255, 255),
        },
        // Purple
        HsvRange {
            lower: (120, 50, 50),
            upper: (160, 255, 255),
        },
        // Dark / black
        HsvRange {
            lower: (0, 0, 0),
            upper: (180, 255, 80),
        },
    ]
}

/// Binary mask of ink-colored pixels: 255 where the pixel falls in any of
/// the four ink bands, 0 elsewhere. The mask lives only for one detection
/// call.
pub fn ink_mask(region: &Image) -> GrayImage {
    let ranges = ink_ranges();
    let (width, height) = region.get_size();
    let mut mask = GrayImage::new(width, height);
    for (x, y, pixel) in region.frame().enumerate_pixels() {
        let hsv = rgb_to_hsv(*pixel);
        let inked = ranges.iter().any(|range| range.contains(hsv));
        mask.put_pixel(x, y, Luma([if inked { 255 } else { 0 }]));
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use striplight_media::RGB;

    fn mask_of_solid(color: RGB) -> u8 {
        let region = Image::filled(2, 2, color);
        ink_mask(&region).get_pixel(0, 0).0[0]
    }

    #[test]
    fn red_purple_and_dark_pixels_are_ink() {
        assert_eq!(mask_of_solid(RGB(255, 0, 0)), 255); // low-end red
        assert_eq!(mask_of_solid(RGB(255, 0, 30)), 255); // wrap-around red
        assert_eq!(mask_of_solid(RGB(160, 40, 220)), 255); // purple
        assert_eq!(mask_of_solid(RGB(60, 60, 60)), 255); // dark ink
    }

    #[test]
    fn background_colors_are_not_ink() {
        assert_eq!(mask_of_solid(RGB(255, 255, 255)), 0); // white backing
        assert_eq!(mask_of_solid(RGB(0, 255, 0)), 0); // saturated green
        assert_eq!(mask_of_solid(RGB(210, 200, 200)), 0); // pale membrane
    }
}
