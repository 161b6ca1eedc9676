//! Progress bar coloring for a 0–100 scale.
//!
//! Red below the midpoint fading to amber, amber fading to green above it.
//! A status tag replaces the gradient with a fixed color.

use std::fmt;
use std::str::FromStr;

use crate::color_space::Rgb;
use crate::constants;
use crate::error::ColorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStatus {
    Success,
    Warning,
    Error,
}

impl ProgressStatus {
    /// Fixed `#rrggbb` color for this status.
    pub fn color(self) -> &'static str {
        match self {
            ProgressStatus::Success => constants::STATUS_SUCCESS,
            ProgressStatus::Warning => constants::STATUS_WARNING,
            ProgressStatus::Error => constants::STATUS_ERROR,
        }
    }
}

impl FromStr for ProgressStatus {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(ProgressStatus::Success),
            "warning" => Ok(ProgressStatus::Warning),
            "error" => Ok(ProgressStatus::Error),
            _ => Err(ColorError::UnknownStatus(s.to_string())),
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProgressStatus::Success => "success",
            ProgressStatus::Warning => "warning",
            ProgressStatus::Error => "error",
        })
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    let (a, b) = (a as f64, b as f64);
    (a + (b - a) * t).round() as u8
}

fn lerp_rgb(from: Rgb, to: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp(from.r, to.r, t),
        lerp(from.g, to.g, t),
        lerp(from.b, to.b, t),
    )
}

/// Gradient color for `percent`, clamped to `[0, 100]`. NaN counts as 0.
pub fn progress_rgb(percent: f64) -> Rgb {
    let pct = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    if pct < 50.0 {
        lerp_rgb(constants::PROGRESS_LOW, constants::PROGRESS_MID, pct / 50.0)
    } else {
        lerp_rgb(
            constants::PROGRESS_MID,
            constants::PROGRESS_HIGH,
            (pct - 50.0) / 50.0,
        )
    }
}

/// CSS color for a progress bar: the status color if one is given,
/// otherwise `rgb(r,g,b)` from the gradient.
pub fn progress_color(percent: f64, status: Option<ProgressStatus>) -> String {
    match status {
        Some(status) => status.color().to_string(),
        None => {
            let rgb = progress_rgb(percent);
            format!("rgb({},{},{})", rgb.r, rgb.g, rgb.b)
        }
    }
}
