//! Color space math: HSV, RGB and hex strings.
//!
//! Pure functions with no hidden state. HSV is integral (hue in degrees,
//! saturation and brightness in percent) and RGB uses 8-bit channels, so
//! every conversion rounds to the nearest representable value.

use crate::error::ColorError;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to HSV. Achromatic colors get hue 0.
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.r, self.g, self.b)
    }

    /// Lowercase `rrggbb` without a `#` prefix.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    /// Channels as `[r, g, b]`.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Integral HSV color.
///
/// Hue is in `[0, 360)`, saturation and brightness in `[0, 100]`. The
/// constructor wraps hue and clamps the percentages, so an `Hsv` value is
/// always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsv {
    hue: u16,
    saturation: u8,
    brightness: u8,
}

impl Hsv {
    /// Build an HSV triple, wrapping hue modulo 360 and clamping the
    /// percentages to `[0, 100]`.
    pub fn new(hue: i32, saturation: i32, brightness: i32) -> Self {
        Self {
            hue: hue.rem_euclid(360) as u16,
            saturation: saturation.clamp(0, 100) as u8,
            brightness: brightness.clamp(0, 100) as u8,
        }
    }

    /// Hue in degrees (0–359).
    pub fn hue(&self) -> u16 {
        self.hue
    }
    /// Saturation in percent (0–100).
    pub fn saturation(&self) -> u8 {
        self.saturation
    }
    /// Brightness (value) in percent (0–100).
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// True when hue carries no information (gray, white or black).
    pub fn is_achromatic(&self) -> bool {
        self.saturation == 0 || self.brightness == 0
    }

    pub fn with_hue(self, hue: i32) -> Self {
        Self::new(hue, self.saturation as i32, self.brightness as i32)
    }

    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(
            self.hue as f64,
            self.saturation as f64,
            self.brightness as f64,
        )
    }
}

/// HSV → RGB using the six-sector formula.
///
/// `hue` is in degrees, `saturation` and `brightness` in percent. Fractional
/// inputs are accepted so surface shading can sample between integer steps.
pub fn hsv_to_rgb(hue: f64, saturation: f64, brightness: f64) -> Rgb {
    let [r, g, b] = hsv_to_unit(hue, saturation, brightness);
    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

/// Unrounded six-sector conversion, channels in `0.0..=1.0`.
pub(crate) fn hsv_to_unit(hue: f64, saturation: f64, brightness: f64) -> [f64; 3] {
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let v = (brightness / 100.0).clamp(0.0, 1.0);
    let h60 = hue / 60.0;
    let i = (h60.floor() as i64).rem_euclid(6);
    let f = h60 - h60.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    match i {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

pub(crate) fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// RGB → HSV. When all channels are equal the hue is 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsv::new(
        (h * 60.0).round() as i32,
        (s * 100.0).round() as i32,
        (max * 100.0).round() as i32,
    )
}

/// RGB → lowercase six-digit hex, no `#`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("{:02x}{:02x}{:02x}", r, g, b)
}

/// Parse a 3 or 6 digit hex color, with or without a leading `#`.
///
/// The 3-digit form doubles each digit (`abc` → `aabbcc`).
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let stripped = hex.strip_prefix('#').unwrap_or(hex);
    if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidFormat(hex.to_string()));
    }
    let full = match stripped.len() {
        3 => expand_shorthand(stripped),
        6 => stripped.to_string(),
        _ => return Err(ColorError::InvalidFormat(hex.to_string())),
    };
    let n = u32::from_str_radix(&full, 16)
        .map_err(|_| ColorError::InvalidFormat(hex.to_string()))?;
    Ok(Rgb::new(
        ((n >> 16) & 0xFF) as u8,
        ((n >> 8) & 0xFF) as u8,
        (n & 0xFF) as u8,
    ))
}

/// Normalize user-typed hex: trim, strip `#`, expand shorthand, uppercase.
///
/// Returns `None` unless the result is exactly six hex digits.
pub fn normalize_hex(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_prefix('#').unwrap_or(trimmed).trim();
    if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match stripped.len() {
        3 => Some(expand_shorthand(stripped).to_uppercase()),
        6 => Some(stripped.to_uppercase()),
        _ => None,
    }
}

fn expand_shorthand(short: &str) -> String {
    let mut out = String::with_capacity(6);
    for c in short.chars() {
        out.push(c);
        out.push(c);
    }
    out
}
