use striplight_analysis::debug::NullSink;
use striplight_analysis::{analyze_strip, AnalysisReport, LaneBox, StripLayout};
use striplight_media::{Image, RGB};

const WHITE: RGB = RGB(255, 255, 255);
const RED: RGB = RGB(220, 15, 20);
const BAR_HEIGHT: u32 = 20;

/// Bar rectangle for one half of a lane, in reference-frame coordinates:
/// 90% of the lane width, centered vertically within the half.
fn bar_rect(lane: &LaneBox, top: bool) -> (u32, u32, u32, u32) {
    let x = lane.x + lane.width / 20;
    let width = lane.width - lane.width / 10;
    let half = lane.height / 2;
    let half_y = if top { 0 } else { half };
    let y = lane.y + half_y + (half - BAR_HEIGHT) / 2;
    (x, y, width, BAR_HEIGHT)
}

fn draw_bar(frame: &mut Image, lane: &LaneBox, top: bool, scale: f32) {
    let (x, y, width, height) = bar_rect(lane, top);
    frame.fill_rect(
        (x as f32 * scale).round() as u32,
        (y as f32 * scale).round() as u32,
        (width as f32 * scale).round() as u32,
        (height as f32 * scale).round() as u32,
        RED,
    );
}

/// Synthetic cassette at the given scale of the reference frame: lanes
/// 1, 3, 5 carry only the control bar, lanes 2, 4, 6 carry both bars.
fn alternating_strip(layout: &StripLayout, scale: f32) -> Image {
    let (ref_w, ref_h) = layout.reference;
    let width = (ref_w as f32 * scale).round() as u32;
    let height = (ref_h as f32 * scale).round() as u32;
    let mut frame = Image::filled(width, height, WHITE);
    for (i, lane) in layout.lanes.iter().enumerate() {
        draw_bar(&mut frame, lane, true, scale);
        if i % 2 == 1 {
            draw_bar(&mut frame, lane, false, scale);
        }
    }
    frame
}

const EXPECTED: [&str; 6] = [
    "1. Positive",
    "2. Negative",
    "3. Positive",
    "4. Negative",
    "5. Positive",
    "6. Negative",
];

#[test]
fn classifies_an_alternating_strip() {
    let layout = StripLayout::default();
    let frame = alternating_strip(&layout, 1.0);
    let report = AnalysisReport::from_outcome(analyze_strip(&frame, &layout, &NullSink));
    assert!(report.success);
    assert_eq!(report.results, EXPECTED);
    assert_eq!(report.error, None);
}

#[test]
fn half_resolution_upload_is_normalized_before_reading() {
    let layout = StripLayout::default();
    let frame = alternating_strip(&layout, 0.5);
    assert_eq!(frame.get_size(), (960, 540));
    let report = AnalysisReport::from_outcome(analyze_strip(&frame, &layout, &NullSink));
    assert!(report.success);
    assert_eq!(report.results, EXPECTED);
}

#[test]
fn analysis_is_idempotent() {
    let layout = StripLayout::default();
    let frame = alternating_strip(&layout, 1.0);
    let first = analyze_strip(&frame, &layout, &NullSink).unwrap();
    let second = analyze_strip(&frame, &layout, &NullSink).unwrap();
    assert_eq!(first, second);
}

#[test]
fn non_image_bytes_fail_with_an_error_and_no_results() {
    let layout = StripLayout::default();
    let outcome = Image::from_bytes(b"this is not an image")
        .and_then(|image| analyze_strip(&image, &layout, &NullSink));
    let report = AnalysisReport::from_outcome(outcome);
    assert!(!report.success);
    assert!(report.results.is_empty());
    let message = report.error.expect("failure must carry a message");
    assert!(!message.is_empty());
}

/// Documents the framing assumption rather than correcting it: normalization
/// is a plain stretch with no perspective or fiducial alignment, so an
/// upload framed differently from the reference layout lands on the wrong
/// pixels and silently misreads, with no error signal.
#[test]
fn off_framing_upload_silently_misreads() {
    let layout = StripLayout::default();
    let lane = layout.lanes[0];

    // A taller canvas with the strip pushed 400 px down: the control bar of
    // lane 1 would read Positive in a correctly framed shot.
    let mut frame = Image::filled(1920, 1480, WHITE);
    frame.fill_rect(lane.x + 20, lane.y + 142 + 400, 160, 16, RED);

    let report = AnalysisReport::from_outcome(analyze_strip(&frame, &layout, &NullSink));
    assert!(report.success, "misalignment produces no error signal");
    assert_eq!(report.results[0], "1. Invalid");
}
