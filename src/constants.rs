//! Sizing, color, and styling constants for the engine and the picker.

use crate::color_space::Rgb;

/// Color shown before any `open` call.
pub const DEFAULT_COLOR: &str = "#4F46E5";

/// Hue of the engine before the first color is applied
pub const INITIAL_HUE: u16 = 240;

/// Saturation of the engine before the first color is applied
pub const INITIAL_SATURATION: u8 = 70;

/// Brightness of the engine before the first color is applied
pub const INITIAL_BRIGHTNESS: u8 = 90;

/// Progress gradient start (0%)
pub const PROGRESS_LOW: Rgb = Rgb::new(239, 68, 68);

/// Progress gradient midpoint (50%)
pub const PROGRESS_MID: Rgb = Rgb::new(245, 158, 11);

/// Progress gradient end (100%)
pub const PROGRESS_HIGH: Rgb = Rgb::new(34, 197, 94);

pub const STATUS_SUCCESS: &str = "#22c55e";
pub const STATUS_WARNING: &str = "#f59e0b";
pub const STATUS_ERROR: &str = "#ef4444";

/// 1D slider track height
#[cfg(feature = "widget")]
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Cursor circle radius on the 2D picker
#[cfg(feature = "widget")]
pub const CURSOR_RADIUS: f64 = 8.0;

/// Thumb radius on 1D sliders
#[cfg(feature = "widget")]
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for the surface and swatches
#[cfg(feature = "widget")]
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
#[cfg(feature = "widget")]
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
#[cfg(feature = "widget")]
pub const PADDING: f32 = 8.0;

/// Hex input field width
#[cfg(feature = "widget")]
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Input font size
#[cfg(feature = "widget")]
pub const INPUT_FONT: f32 = 11.0;

/// Side length of the toggle swatch
#[cfg(feature = "widget")]
pub const SWATCH_SIZE: f32 = 32.0;

/// Fixed raster resolution of the saturation/brightness surface.
/// The image is scaled to widget size rather than re-rasterized.
#[cfg(feature = "widget")]
pub const AREA_RASTER_SIZE: u32 = 128;
