//! Simulated stress scan
//!
//! The original page points a camera at the user for three seconds and then
//! shows random numbers. This reproduces the numbers; the three seconds stay
//! a presentation concern of the caller.

use std::ops::Range;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How long the original UI "analyzes" before revealing a reading
pub const SCAN_DURATION_MS: u64 = 3000;

const STRESS_RANGE: Range<u8> = 30..70;
const PULSE_RANGE: Range<u8> = 70..100;

/// Severity band shown next to a stress percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StressBand {
    Low,
    Moderate,
    High,
}

impl StressBand {
    pub fn label(self) -> &'static str {
        match self {
            StressBand::Low => "low",
            StressBand::Moderate => "moderate",
            StressBand::High => "high",
        }
    }
}

/// One mock reading: a stress percentage and a pulse
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReading {
    pub stress_level: u8,
    pub pulse_bpm: u8,
    pub measured_at: DateTime<Utc>,
}

impl ScanReading {
    /// Band thresholds from the original badge: > 60 high, > 40 moderate
    pub fn band(&self) -> StressBand {
        if self.stress_level > 60 {
            StressBand::High
        } else if self.stress_level > 40 {
            StressBand::Moderate
        } else {
            StressBand::Low
        }
    }
}

/// Produce a mock reading: stress in `[30,70)`, pulse in `[70,100)`.
/// No signal processing happens here; the values are placeholders.
pub fn simulate_scan<R: Rng>(rng: &mut R) -> ScanReading {
    ScanReading {
        stress_level: rng.gen_range(STRESS_RANGE),
        pulse_bpm: rng.gen_range(PULSE_RANGE),
        measured_at: Utc::now(),
    }
}
