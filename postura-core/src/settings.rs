//! User profile and device tuning, as shown on the settings screen.
//!
//! Held in memory for the session; nothing here is persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Allowed range for the slouch duration threshold slider, in minutes.
pub const DURATION_THRESHOLD_RANGE: RangeInclusive<u8> = 3..=15;

/// Allowed range for the vibration sensitivity slider.
pub const VIBRATION_SENSITIVITY_RANGE: RangeInclusive<u8> = 10..=25;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub name: String,
    pub email: String,
    pub age: u8,
    pub birthday: NaiveDate,
    /// Minutes of sustained slouching before an alert fires.
    pub duration_threshold_min: u8,
    /// How strongly the necklace vibrates when poor posture is detected.
    pub vibration_sensitivity: u8,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            name: "Richard Wang".to_string(),
            email: "richard.wang@postura.app".to_string(),
            age: 28,
            birthday: NaiveDate::from_ymd_opt(1996, 6, 15).expect("valid date"),
            duration_threshold_min: 5,
            vibration_sensitivity: 18,
        }
    }
}

impl UserSettings {
    /// Update the duration threshold, clamped to the slider range.
    pub fn set_duration_threshold(&mut self, minutes: u8) {
        self.duration_threshold_min = minutes.clamp(
            *DURATION_THRESHOLD_RANGE.start(),
            *DURATION_THRESHOLD_RANGE.end(),
        );
    }

    /// Update the vibration sensitivity, clamped to the slider range.
    pub fn set_vibration_sensitivity(&mut self, level: u8) {
        self.vibration_sensitivity = level.clamp(
            *VIBRATION_SENSITIVITY_RANGE.start(),
            *VIBRATION_SENSITIVITY_RANGE.end(),
        );
    }
}
