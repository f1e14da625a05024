use serde::{Deserialize, Serialize};

/// Raw `az` value the necklace reports when the wearer is fully upright.
pub const LOW_BOUND: f64 = 18.0;

/// Raw `az` value the necklace reports when the wearer is fully slouched.
pub const HIGH_BOUND: f64 = 128.0;

/// Discrete posture bucket shown on the live card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostureStatus {
    Excellent,
    Warning,
    Poor,
}

impl PostureStatus {
    /// Label the live card shows for this status.
    pub fn label(&self) -> &'static str {
        match self {
            PostureStatus::Excellent => "Straight",
            PostureStatus::Warning => "Slightly Slouching",
            PostureStatus::Poor => "Slouching",
        }
    }
}

/// One normalized posture sample.
///
/// Immutable once produced; each new frame replaces the previous reading
/// rather than mutating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostureReading {
    pub percentage: u8,
    pub status: PostureStatus,
}

impl PostureReading {
    /// Build a reading from an already-normalized percentage.
    /// Values above 100 are clamped down.
    pub fn new(percentage: u8) -> Self {
        let percentage = percentage.min(100);
        Self {
            percentage,
            status: classify(percentage),
        }
    }

    /// Build a reading straight from a raw sensor value.
    pub fn from_raw(az: f64) -> Self {
        Self::new(calibrate(az))
    }
}

impl Default for PostureReading {
    /// The reading the dashboard shows before the first frame arrives.
    fn default() -> Self {
        Self::new(82)
    }
}

/// Map a raw `az` value onto the 0–100 posture quality scale.
///
/// Larger raw values mean more slouch, so the mapping is inverted: anything
/// at or below [`LOW_BOUND`] is perfect posture, anything at or above
/// [`HIGH_BOUND`] is the floor, and the scale is linear in between. Clamped
/// at both ends, never extrapolated. Rounds half away from zero
/// (`f64::round`).
pub fn calibrate(az: f64) -> u8 {
    if az <= LOW_BOUND {
        return 100;
    }
    if az >= HIGH_BOUND {
        return 0;
    }
    ((HIGH_BOUND - az) / (HIGH_BOUND - LOW_BOUND) * 100.0).round() as u8
}

/// Classify a percentage into its status bucket.
/// Fixed thresholds: ≥75 excellent, ≥50 warning, below that poor.
pub fn classify(percentage: u8) -> PostureStatus {
    if percentage >= 75 {
        PostureStatus::Excellent
    } else if percentage >= 50 {
        PostureStatus::Warning
    } else {
        PostureStatus::Poor
    }
}
