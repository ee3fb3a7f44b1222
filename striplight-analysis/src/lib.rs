pub mod debug;
pub mod detect;
pub mod lane;
pub mod layout;
pub mod pipeline;

pub use lane::{LaneReading, LaneResult};
pub use layout::{LaneBox, StripLayout};
pub use pipeline::{analyze_strip, AnalysisReport};
