use image::Rgb;

/// HSV triple on the OpenCV 8-bit scale: hue 0..=179 (degrees halved),
/// saturation and value 0..=255. Color thresholds elsewhere in the project
/// are written against this scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

pub fn rgb_to_hsv(pixel: Rgb<u8>) -> Hsv {
    let [r, g, b] = pixel.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0 {
        0
    } else {
        ((delta as u32 * 255) / max as u32) as u8
    };

    let h = if delta == 0 {
        0
    } else {
        let d = f32::from(delta);
        let (rf, gf, bf) = (f32::from(r), f32::from(g), f32::from(b));
        let mut degrees = if max == r {
            60.0 * (gf - bf) / d
        } else if max == g {
            120.0 + 60.0 * (bf - rf) / d
        } else {
            240.0 + 60.0 * (rf - gf) / d
        };
        if degrees < 0.0 {
            degrees += 360.0;
        }
        // Halved hue keeps the full circle inside a u8, matching the scale
        // the ink thresholds are expressed in.
        ((degrees / 2.0).round() as u32).min(179) as u8
    };

    Hsv { h, s, v }
}
