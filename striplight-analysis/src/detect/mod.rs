pub mod line;
pub mod mask;
pub mod morphology;
pub mod region;

pub(crate) const MIN_AREA_FRACTION: f64 = 0.02; // Component must cover 2% of the half-region
pub(crate) const HORIZONTAL_ASPECT_FACTOR: u32 = 3; // Width must exceed 3x height
pub(crate) const MIN_WIDTH_FRACTION: f64 = 0.3; // Line must span 30% of the region width
pub(crate) const MIN_LINE_HEIGHT: u32 = 2; // Rejects single-pixel noise rows
pub(crate) const VALID_BAND_LOW_FRACTION: f64 = 0.2; // Central band excludes bleed from the
pub(crate) const VALID_BAND_HIGH_FRACTION: f64 = 0.8; // adjacent lane edges
pub(crate) const DENSITY_FALLBACK_RATIO: f64 = 0.05; // Set-pixel ratio for fragmented lines

/// Wide-thin structuring element for the horizontal opening:
/// `region_width / HORIZONTAL_KERNEL_WIDTH_DIVISOR` wide, 3 tall.
pub(crate) const HORIZONTAL_KERNEL_WIDTH_DIVISOR: u32 = 4;
pub(crate) const HORIZONTAL_KERNEL_HEIGHT: u32 = 3;
