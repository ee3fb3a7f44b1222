//! Diagnostic dumps for the strip pipeline: run with `cargo test` and
//! inspect the labeled intermediates the sink writes.

#[test]
fn dump_strip_stages() {
    use striplight_analysis::debug::DirectorySink;
    use striplight_analysis::{analyze_strip, StripLayout};
    use striplight_media::{Image, RGB};

    crate::log_init();

    let layout = StripLayout::default();
    let mut frame = Image::filled(1920, 1080, RGB(255, 255, 255));
    // Control bar only in lane 1, control + test bars in lane 2.
    let lane = layout.lanes[0];
    frame.fill_rect(lane.x + 10, lane.y + 140, 180, 20, RGB(220, 15, 20));
    let lane = layout.lanes[1];
    frame.fill_rect(lane.x + 10, lane.y + 140, 180, 20, RGB(220, 15, 20));
    frame.fill_rect(lane.x + 10, lane.y + 440, 180, 20, RGB(220, 15, 20));

    let dir = std::env::temp_dir().join("striplight-debug-dump");
    let _ = std::fs::remove_dir_all(&dir);
    let sink = DirectorySink::create(&dir).unwrap();

    let results = analyze_strip(&frame, &layout, &sink).unwrap();
    assert_eq!(results[0].to_string(), "1. Positive");
    assert_eq!(results[1].to_string(), "2. Negative");

    let manifest = sink.manifest();
    for label in [
        "resized",
        "debug_boxes",
        "lane_1",
        "top_roi_1",
        "bottom_roi_1",
        "mask_1_top",
        "horizontal_mask_1_top",
        "found_line_1_top",
    ] {
        assert!(
            manifest.iter().any(|entry| entry == label),
            "expected {label} in debug manifest, got {manifest:?}"
        );
    }
}

#[test]
fn sink_choice_never_changes_the_reading() {
    use striplight_analysis::debug::{DirectorySink, NullSink};
    use striplight_analysis::{analyze_strip, StripLayout};
    use striplight_media::{Image, RGB};

    crate::log_init();

    let layout = StripLayout::default();
    let mut frame = Image::filled(1920, 1080, RGB(255, 255, 255));
    let lane = layout.lanes[3];
    frame.fill_rect(lane.x + 10, lane.y + 140, 180, 20, RGB(220, 15, 20));

    let dir = std::env::temp_dir().join("striplight-debug-parity");
    let _ = std::fs::remove_dir_all(&dir);
    let sink = DirectorySink::create(&dir).unwrap();

    let with_sink = analyze_strip(&frame, &layout, &sink).unwrap();
    let without_sink = analyze_strip(&frame, &layout, &NullSink).unwrap();
    assert_eq!(with_sink, without_sink);

    let _ = std::fs::remove_dir_all(&dir);
}
