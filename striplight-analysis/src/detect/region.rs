use image::{GrayImage, Luma};
use imageproc::region_labelling::{connected_components, Connectivity};

/// One connected component of a binary mask: its bounding rectangle and its
/// exact pixel area. Transient, only used to evaluate line-shape criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub area: u32,
}

struct Accumulator {
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
    area: u32,
}

/// Extracts the 8-connected components of a mask, ordered by first
/// appearance in raster order (deterministic for a given mask).
pub fn labelled_regions(mask: &GrayImage) -> Vec<Region> {
    let labelled = connected_components(mask, Connectivity::Eight, Luma([0u8]));

    let mut accumulators: Vec<Accumulator> = Vec::new();
    for (x, y, label) in labelled.enumerate_pixels() {
        let label = label.0[0] as usize;
        if label == 0 {
            continue;
        }
        if accumulators.len() < label {
            accumulators.resize_with(label, || Accumulator {
                min_x: u32::MAX,
                min_y: u32::MAX,
                max_x: 0,
                max_y: 0,
                area: 0,
            });
        }
        let acc = &mut accumulators[label - 1];
        acc.min_x = acc.min_x.min(x);
        acc.min_y = acc.min_y.min(y);
        acc.max_x = acc.max_x.max(x);
        acc.max_y = acc.max_y.max(y);
        acc.area += 1;
    }

    accumulators
        .into_iter()
        .filter(|acc| acc.area > 0)
        .map(|acc| Region {
            x: acc.min_x,
            y: acc.min_y,
            width: acc.max_x - acc.min_x + 1,
            height: acc.max_y - acc.min_y + 1,
            area: acc.area,
        })
        .collect()
}
