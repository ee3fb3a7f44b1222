use crate::debug::DebugSink;
use crate::detect::{
    mask, morphology, region, DENSITY_FALLBACK_RATIO, HORIZONTAL_ASPECT_FACTOR,
    HORIZONTAL_KERNEL_HEIGHT, HORIZONTAL_KERNEL_WIDTH_DIVISOR, MIN_AREA_FRACTION, MIN_LINE_HEIGHT,
    MIN_WIDTH_FRACTION, VALID_BAND_HIGH_FRACTION, VALID_BAND_LOW_FRACTION,
};
use crate::lane::HalfPos;
use log::debug;
use striplight_media::{Image, RGB};

/// Decides whether one half-region of a lane contains a horizontal line of
/// diagnostic ink.
///
/// Stages: ink color mask, 3x3 closing, wide-thin opening, then a scan of
/// the surviving components against the line-shape criteria, with a
/// set-pixel density fallback for lines too faint or fragmented to form a
/// single qualifying component. Degenerate regions classify as "no line";
/// nothing here is fatal to the rest of the batch.
pub fn has_line(region: &Image, lane_index: usize, pos: HalfPos, sink: &dyn DebugSink) -> bool {
    let (width, height) = region.get_size();
    if width == 0 || height == 0 {
        debug!("lane {lane_index} {pos}: degenerate region {width}x{height}, no line");
        return false;
    }

    let ink = mask::ink_mask(region);
    let cleaned = morphology::close_3x3(&ink);
    sink.save_mask(&format!("mask_{lane_index}_{pos}"), &cleaned);

    // Wide-thin opening: only structures already wide and thin survive.
    let kernel_width = (width / HORIZONTAL_KERNEL_WIDTH_DIVISOR).max(1);
    let horizontal = morphology::open_rect(&cleaned, kernel_width, HORIZONTAL_KERNEL_HEIGHT);
    sink.save_mask(&format!("horizontal_mask_{lane_index}_{pos}"), &horizontal);

    let region_area = f64::from(width) * f64::from(height);
    let min_area = MIN_AREA_FRACTION * region_area;

    for component in region::labelled_regions(&horizontal) {
        let is_horizontal = component.width > HORIZONTAL_ASPECT_FACTOR * component.height;
        let has_min_width = f64::from(component.width) > MIN_WIDTH_FRACTION * f64::from(width);
        let has_min_height = component.height >= MIN_LINE_HEIGHT;
        let in_valid_band = f64::from(component.y) > VALID_BAND_LOW_FRACTION * f64::from(height)
            && f64::from(component.y + component.height)
                < VALID_BAND_HIGH_FRACTION * f64::from(height);
        let has_min_area = f64::from(component.area) > min_area;

        debug!(
            "lane {lane_index} {pos}: component ({}, {}, {}, {}) area={} min_area={min_area:.0} \
             horizontal={is_horizontal} min_width={has_min_width} min_height={has_min_height} \
             valid_pos={in_valid_band}",
            component.x, component.y, component.width, component.height, component.area
        );

        if has_min_area && is_horizontal && has_min_width && has_min_height && in_valid_band {
            if sink.enabled() {
                let mut found = region.clone();
                found.draw_rect_outline(
                    component.x,
                    component.y,
                    component.width,
                    component.height,
                    2,
                    RGB(0, 255, 0),
                );
                sink.save(&format!("found_line_{lane_index}_{pos}"), &found);
            }
            return true;
        }
    }

    // Density fallback: a line too fragmented for one qualifying component
    // can still show up as overall mask coverage.
    let set_pixels = horizontal.pixels().filter(|p| p.0[0] != 0).count();
    let ratio = set_pixels as f64 / region_area;
    debug!("lane {lane_index} {pos}: set-pixel ratio {ratio:.3}");
    ratio > DENSITY_FALLBACK_RATIO
}
