use log::warn;

/// Axis-aligned rectangle in pixel coordinates of the normalized frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl LaneBox {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        LaneBox {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Clips the box to a frame of the given size. The configured boxes are
    /// expected to fit the reference frame already; clipping protects lane
    /// extraction against a reconfigured reference resolution. Returns `None`
    /// when nothing of the box remains inside the frame.
    pub fn clipped_to(&self, frame_width: u32, frame_height: u32) -> Option<LaneBox> {
        if self.x >= frame_width || self.y >= frame_height {
            return None;
        }
        let width = self.width.min(frame_width - self.x);
        let height = self.height.min(frame_height - self.y);
        if width == 0 || height == 0 {
            return None;
        }
        if width != self.width || height != self.height {
            warn!(
                "lane box ({}, {}, {}, {}) clipped to {}x{} frame",
                self.x, self.y, self.width, self.height, frame_width, frame_height
            );
        }
        Some(LaneBox::new(self.x, self.y, width, height))
    }

    /// Splits the box into top and bottom halves, in lane-local coordinates.
    /// The split is at `height / 2`; the bottom half absorbs the remainder
    /// row when the height is odd, so the two heights always sum to `height`.
    pub fn split_halves(&self) -> (LaneBox, LaneBox) {
        let half = self.height / 2;
        let top = LaneBox::new(0, 0, self.width, half);
        let bottom = LaneBox::new(0, half, self.width, self.height - half);
        (top, bottom)
    }
}

/// Lane geometry for one strip framing: the reference resolution every
/// upload is normalized to, plus the lane rectangles in that frame.
///
/// Injected rather than hard-coded at the point of use so a future
/// calibration step can supply its own geometry without touching the
/// detection code.
#[derive(Debug, Clone)]
pub struct StripLayout {
    pub reference: (u32, u32),
    pub lanes: Vec<LaneBox>,
}

/// The stock six-lane cassette framing. Assumes the photo is framed the same
/// way as the reference layout; no perspective or fiducial alignment is
/// performed, so a differently framed upload silently lands on the wrong
/// pixels (a known accuracy limitation, covered by an explicit test).
const REFERENCE_RESOLUTION: (u32, u32) = (1920, 1080);
const DEFAULT_LANES: [LaneBox; 6] = [
    LaneBox::new(100, 200, 200, 600),
    LaneBox::new(400, 200, 200, 600),
    LaneBox::new(700, 200, 200, 600),
    LaneBox::new(1000, 200, 200, 600),
    LaneBox::new(1300, 200, 200, 600),
    LaneBox::new(1600, 200, 200, 600),
];

impl Default for StripLayout {
    fn default() -> Self {
        StripLayout {
            reference: REFERENCE_RESOLUTION,
            lanes: DEFAULT_LANES.to_vec(),
        }
    }
}
