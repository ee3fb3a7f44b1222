#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod debug;

use anyhow::{bail, Result};
use log::info;
use striplight_analysis::debug::{DebugSink, DirectorySink, NullSink};
use striplight_analysis::{analyze_strip, AnalysisReport, StripLayout};
use striplight_media::Image;

pub(crate) fn log_init() {
    // Only the first caller installs the subscriber; later calls (e.g. from
    // several tests in one process) are no-ops.
    let _ = tracing_subscriber::fmt().try_init();
}

fn main() -> Result<()> {
    log_init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: striplight <image> [debug-dir]");
    };
    let sink: Box<dyn DebugSink> = match args.next() {
        Some(dir) => Box::new(DirectorySink::create(dir)?),
        None => Box::new(NullSink),
    };

    let layout = StripLayout::default();
    let outcome =
        Image::open_file(&path).and_then(|image| analyze_strip(&image, &layout, sink.as_ref()));
    let report = AnalysisReport::from_outcome(outcome);

    if !report.success {
        bail!(
            "analysis of {path} failed: {}",
            report.error.unwrap_or_else(|| "unknown error".to_string())
        );
    }

    info!("analyzed {path}");
    for line in &report.results {
        println!("{line}");
    }

    Ok(())
}
