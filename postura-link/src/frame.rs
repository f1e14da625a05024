//! Frame decoding — the parse → calibrate → classify pipeline.
//!
//! Kept free of any transport types so the numeric contract can be tested
//! without a live socket.

use postura_core::PostureReading;
use thiserror::Error;

/// Why an inbound frame produced no reading.
#[derive(Debug, Error)]
pub enum FrameError {
    /// The payload was not valid JSON. The last good reading stays current.
    #[error("malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode one inbound text frame into a reading.
///
/// A missing or non-numeric `az` field is treated as 0 (fully upright);
/// only an unparseable payload is an error.
pub fn decode_frame(text: &str) -> Result<PostureReading, FrameError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let az = value
        .get("az")
        .and_then(|v| v.as_f64())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);
    Ok(PostureReading::from_raw(az))
}
