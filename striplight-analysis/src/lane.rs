use std::fmt;

/// Clinical reading of one lane.
///
/// The top line is the control line and must appear for the run to be valid;
/// the bottom test line flips the interpretation from Positive to Negative.
/// `Invalid` covers both "no lines at all" and "test line without control
/// line" behind one label, matching how operators read the cassette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneReading {
    Positive,
    Negative,
    Invalid,
}

impl fmt::Display for LaneReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LaneReading::Positive => "Positive",
            LaneReading::Negative => "Negative",
            LaneReading::Invalid => "Invalid",
        };
        f.write_str(text)
    }
}

/// Two-line decision rule. Order matters: the control line is checked first,
/// and its absence invalidates the lane regardless of the test line.
pub fn classify(has_top_line: bool, has_bottom_line: bool) -> LaneReading {
    if has_top_line && !has_bottom_line {
        LaneReading::Positive
    } else if has_top_line && has_bottom_line {
        LaneReading::Negative
    } else {
        LaneReading::Invalid
    }
}

/// Reading of one lane together with its 1-based lane index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneResult {
    pub index: usize,
    pub reading: LaneReading,
}

impl fmt::Display for LaneResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.index, self.reading)
    }
}

/// Which half of a lane a detection ran on; used for log and debug labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfPos {
    Top,
    Bottom,
}

impl fmt::Display for HalfPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalfPos::Top => f.write_str("top"),
            HalfPos::Bottom => f.write_str("bottom"),
        }
    }
}
