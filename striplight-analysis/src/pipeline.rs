use crate::debug::DebugSink;
use crate::detect::line;
use crate::lane::{classify, HalfPos, LaneReading, LaneResult};
use crate::layout::{LaneBox, StripLayout};
use anyhow::Result;
use log::{info, warn};
use rayon::prelude::*;
use striplight_media::decoder::size::ResizeImage;
use striplight_media::{DecodeError, Image, RGB};

/// Only the first six configured lanes are read, regardless of how many the
/// layout carries.
pub const MAX_LANES: usize = 6;

/// Classifies every lane of one strip photo.
///
/// The frame is normalized to the layout's reference resolution so the
/// configured lane geometry applies, then each lane is read independently.
/// Lanes are mutually independent, so they fan out across rayon workers; the
/// collect keeps results in lane order regardless of completion order.
///
/// Fatal errors (empty frame) abort the call with no partial results; any
/// failure local to one lane downgrades that lane to `Invalid` and leaves
/// the rest of the batch untouched.
pub fn analyze_strip(
    image: &Image,
    layout: &StripLayout,
    sink: &dyn DebugSink,
) -> Result<Vec<LaneResult>> {
    let (width, height) = image.get_size();
    if width == 0 || height == 0 {
        return Err(DecodeError::new("frame is empty").into());
    }

    let normalized = image.resize_into(layout.reference)?;
    sink.save("resized", &normalized);

    let lanes = &layout.lanes[..layout.lanes.len().min(MAX_LANES)];

    if sink.enabled() {
        let mut overlay = normalized.clone();
        for lane in lanes {
            overlay.draw_rect_outline(lane.x, lane.y, lane.width, lane.height, 3, RGB(255, 255, 0));
        }
        sink.save("debug_boxes", &overlay);
    }

    let results: Vec<LaneResult> = lanes
        .par_iter()
        .enumerate()
        .map(|(i, lane)| analyze_lane(&normalized, lane, i + 1, sink))
        .collect();

    info!("strip analysis complete: {} lanes read", results.len());
    Ok(results)
}

fn analyze_lane(frame: &Image, lane: &LaneBox, index: usize, sink: &dyn DebugSink) -> LaneResult {
    let reading = match read_lane(frame, lane, index, sink) {
        Ok(reading) => reading,
        Err(e) => {
            warn!("lane {index}: analysis failed, reporting Invalid: {e:#}");
            LaneReading::Invalid
        }
    };
    LaneResult { index, reading }
}

fn read_lane(
    frame: &Image,
    lane: &LaneBox,
    index: usize,
    sink: &dyn DebugSink,
) -> Result<LaneReading> {
    let (frame_w, frame_h) = frame.get_size();
    let Some(clipped) = lane.clipped_to(frame_w, frame_h) else {
        warn!("lane {index}: box lies outside the frame, reporting Invalid");
        return Ok(LaneReading::Invalid);
    };

    let roi = frame.crop(clipped.x, clipped.y, clipped.width, clipped.height)?;
    sink.save(&format!("lane_{index}"), &roi);

    let (top_box, bottom_box) = clipped.split_halves();
    let has_top = half_line(&roi, top_box, index, HalfPos::Top, sink);
    let has_bottom = half_line(&roi, bottom_box, index, HalfPos::Bottom, sink);
    info!("lane {index}: top={has_top} bottom={has_bottom}");

    Ok(classify(has_top, has_bottom))
}

/// Reads one half of a lane crop. Any failure here (zero-height half of a
/// 1 px lane, crop error) counts as "no line" rather than aborting the lane.
fn half_line(roi: &Image, half: LaneBox, index: usize, pos: HalfPos, sink: &dyn DebugSink) -> bool {
    if half.width == 0 || half.height == 0 {
        return false;
    }
    match roi.crop(half.x, half.y, half.width, half.height) {
        Ok(region) => {
            sink.save(&format!("{pos}_roi_{index}"), &region);
            line::has_line(&region, index, pos, sink)
        }
        Err(e) => {
            warn!("lane {index} {pos}: crop failed, treating as no line: {e:#}");
            false
        }
    }
}

/// Envelope handed to the upload layer: either six result strings, or a
/// human-readable error and no results. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub success: bool,
    pub results: Vec<String>,
    pub error: Option<String>,
}

impl AnalysisReport {
    pub fn from_outcome(outcome: Result<Vec<LaneResult>>) -> Self {
        match outcome {
            Ok(results) => AnalysisReport {
                success: true,
                results: results.iter().map(ToString::to_string).collect(),
                error: None,
            },
            Err(e) => AnalysisReport {
                success: false,
                results: Vec::new(),
                error: Some(format!("{e:#}")),
            },
        }
    }
}
