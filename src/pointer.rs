//! PointerMapper: surface coordinates ↔ saturation/brightness.
//!
//! Saturation grows left to right, brightness grows bottom to top. Points
//! outside the surface clamp to the nearest edge.

/// Cursor position relative to the surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
}

/// Measured bounds of the picking surface in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    /// # Panics
    ///
    /// Panics if `width` or `height` is not a positive finite number.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        assert_surface(width, height);
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A surface at the origin, for hosts that already deliver local
    /// coordinates.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Translate a client-space point into surface-relative coordinates.
    pub fn to_local(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }
}

fn assert_surface(width: f64, height: f64) {
    assert!(
        width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0,
        "picking surface must have a positive size, got {width}x{height}"
    );
}

/// Map a surface-relative point to `(saturation, brightness)` percentages.
///
/// # Panics
///
/// Panics on a zero-sized surface.
pub fn point_to_saturation_brightness(x: f64, y: f64, width: f64, height: f64) -> (u8, u8) {
    assert_surface(width, height);
    let x = x.clamp(0.0, width);
    let y = y.clamp(0.0, height);
    let saturation = (100.0 * x / width).round();
    let brightness = (100.0 * (1.0 - y / height)).round();
    (saturation as u8, brightness as u8)
}

/// Inverse of [`point_to_saturation_brightness`].
///
/// # Panics
///
/// Panics on a zero-sized surface.
pub fn saturation_brightness_to_point(
    saturation: u8,
    brightness: u8,
    width: f64,
    height: f64,
) -> Cursor {
    assert_surface(width, height);
    let s = saturation.min(100) as f64 / 100.0;
    let b = brightness.min(100) as f64 / 100.0;
    Cursor {
        x: s * width,
        y: (1.0 - b) * height,
    }
}
