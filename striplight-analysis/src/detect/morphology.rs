use image::{GrayImage, Luma};
use imageproc::distance_transform::Norm;
use imageproc::morphology;

/// 3x3 square closing (dilate then erode): removes speckle and bridges
/// small gaps inside a line. `Norm::LInf` with distance 1 is exactly the
/// 3x3 square structuring element.
pub fn close_3x3(mask: &GrayImage) -> GrayImage {
    morphology::close(mask, Norm::LInf, 1)
}

/// Opening (erode then dilate) with a `kernel_width x kernel_height`
/// rectangular structuring element.
///
/// Only structures at least as wide and tall as the element survive, so a
/// wide-thin element keeps horizontal lines and suppresses blobs and
/// vertical artifacts. imageproc's norm-based operators cannot express a
/// non-square rectangle, so the element is applied here as two separable
/// passes; pixels outside the image count as background.
pub fn open_rect(mask: &GrayImage, kernel_width: u32, kernel_height: u32) -> GrayImage {
    let kw = kernel_width.max(1);
    let kh = kernel_height.max(1);
    let eroded = erode_rect(mask, kw, kh);
    dilate_rect(&eroded, kw, kh)
}

fn erode_rect(mask: &GrayImage, kw: u32, kh: u32) -> GrayImage {
    let horizontal = erode_pass(mask, kw, true);
    erode_pass(&horizontal, kh, false)
}

fn dilate_rect(mask: &GrayImage, kw: u32, kh: u32) -> GrayImage {
    let horizontal = dilate_pass(mask, kw, true);
    dilate_pass(&horizontal, kh, false)
}

// Anchor sits at the element center; for an even extent the left/top arm is
// the shorter one, matching the usual default anchor convention.
fn arms(k: u32) -> (i64, i64) {
    ((i64::from(k) - 1) / 2, i64::from(k) / 2)
}

fn erode_pass(mask: &GrayImage, k: u32, horizontal: bool) -> GrayImage {
    let (width, height) = mask.dimensions();
    let (before, after) = arms(k);
    let mut out = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let (c, limit) = if horizontal { (x, width) } else { (y, height) };
            let mut keep = true;
            for offset in -before..=after {
                let cc = i64::from(c) + offset;
                if cc < 0 || cc >= i64::from(limit) {
                    keep = false;
                    break;
                }
                let (px, py) = if horizontal { (cc as u32, y) } else { (x, cc as u32) };
                if mask.get_pixel(px, py).0[0] == 0 {
                    keep = false;
                    break;
                }
            }
            out.put_pixel(x, y, Luma([if keep { 255 } else { 0 }]));
        }
    }
    out
}

fn dilate_pass(mask: &GrayImage, k: u32, horizontal: bool) -> GrayImage {
    let (width, height) = mask.dimensions();
    let (before, after) = arms(k);
    let mut out = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let (c, limit) = if horizontal { (x, width) } else { (y, height) };
            let mut hit = false;
            for offset in -before..=after {
                let cc = i64::from(c) + offset;
                if cc < 0 || cc >= i64::from(limit) {
                    continue;
                }
                let (px, py) = if horizontal { (cc as u32, y) } else { (x, cc as u32) };
                if mask.get_pixel(px, py).0[0] != 0 {
                    hit = true;
                    break;
                }
            }
            out.put_pixel(x, y, Luma([if hit { 255 } else { 0 }]));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(width: u32, height: u32) -> GrayImage {
        GrayImage::new(width, height)
    }

    fn set_rect(mask: &mut GrayImage, x: u32, y: u32, w: u32, h: u32) {
        for yy in y..y + h {
            for xx in x..x + w {
                mask.put_pixel(xx, yy, Luma([255]));
            }
        }
    }

    fn count_set(mask: &GrayImage) -> usize {
        mask.pixels().filter(|p| p.0[0] != 0).count()
    }

    #[test]
    fn closing_bridges_a_one_pixel_gap() {
        let mut mask = blank(20, 5);
        set_rect(&mut mask, 2, 2, 7, 1);
        set_rect(&mut mask, 10, 2, 7, 1); // gap at x=9
        let closed = close_3x3(&mask);
        assert_eq!(closed.get_pixel(9, 2).0[0], 255);
    }

    #[test]
    fn wide_thin_opening_keeps_horizontal_bars_only() {
        let mut mask = blank(40, 40);
        set_rect(&mut mask, 5, 10, 30, 3); // horizontal bar
        set_rect(&mut mask, 20, 20, 3, 15); // vertical bar
        let opened = open_rect(&mask, 10, 3);

        assert_eq!(opened.get_pixel(20, 11).0[0], 255, "horizontal bar survives");
        for y in 23..32 {
            assert_eq!(opened.get_pixel(21, y).0[0], 0, "vertical bar removed at y={y}");
        }
    }

    #[test]
    fn opening_restores_the_surviving_bar_extent() {
        let mut mask = blank(100, 10);
        set_rect(&mut mask, 0, 4, 100, 3);
        let opened = open_rect(&mask, 25, 3);
        // Full-width 3-tall stripe erodes to a thin core and dilates back to
        // its original extent.
        assert_eq!(count_set(&opened), 300);
    }

    #[test]
    fn opening_erases_isolated_pixels() {
        let mut mask = blank(30, 30);
        mask.put_pixel(15, 15, Luma([255]));
        let opened = open_rect(&mask, 7, 3);
        assert_eq!(count_set(&opened), 0);
    }
}
