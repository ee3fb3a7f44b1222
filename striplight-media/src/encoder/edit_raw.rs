use crate::{Image, RGB};
use image::Rgb;

impl Image {
    /// Fills a rectangle with a solid color, clamped to the frame bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: RGB) {
        let (frame_w, frame_h) = self.get_size();
        let x_end = (x + width).min(frame_w);
        let y_end = (y + height).min(frame_h);
        let pixel = Rgb([color.0, color.1, color.2]);
        for yy in y.min(frame_h)..y_end {
            for xx in x.min(frame_w)..x_end {
                self.frame_mut().put_pixel(xx, yy, pixel);
            }
        }
    }

    /// Draws a rectangle outline of the given stroke thickness, clamped to
    /// the frame bounds. Used for diagnostic overlays only.
    pub fn draw_rect_outline(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        thickness: u32,
        color: RGB,
    ) {
        let t = thickness.max(1);
        // Top, bottom, left, right bars.
        self.fill_rect(x, y, width, t.min(height), color);
        if height > t {
            self.fill_rect(x, y + height - t, width, t, color);
        }
        self.fill_rect(x, y, t.min(width), height, color);
        if width > t {
            self.fill_rect(x + width - t, y, t, height, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_clamps_to_frame() {
        let mut image = Image::filled(4, 4, RGB(0, 0, 0));
        image.fill_rect(2, 2, 10, 10, RGB(255, 255, 255));
        assert_eq!(image.frame().get_pixel(3, 3).0, [255, 255, 255]);
        assert_eq!(image.frame().get_pixel(1, 1).0, [0, 0, 0]);
    }

    #[test]
    fn outline_leaves_interior_untouched() {
        let mut image = Image::filled(10, 10, RGB(0, 0, 0));
        image.draw_rect_outline(1, 1, 8, 8, 1, RGB(255, 255, 0));
        assert_eq!(image.frame().get_pixel(1, 1).0, [255, 255, 0]);
        assert_eq!(image.frame().get_pixel(5, 5).0, [0, 0, 0]);
    }
}
