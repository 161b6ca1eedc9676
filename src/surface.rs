//! Fill recipe for the saturation/brightness surface.
//!
//! The surface is three stacked layers: the hue at full saturation and
//! brightness, a left-to-right white fade, and a top-to-bottom black fade.
//! Renderers either hand the layers to a gradient API or rasterize them
//! with [`rasterize`].

use crate::color_space::{self, Rgb};

/// A color with straight (non-premultiplied) alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self {
            rgb: Rgb::new(r, g, b),
            alpha,
        }
    }

    fn to_css(self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

/// Two-stop linear gradient covering the whole surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearLayer {
    pub direction: Direction,
    pub from: Rgba,
    pub to: Rgba,
}

impl LinearLayer {
    /// Interpolated color at normalized surface coordinates.
    fn sample(&self, u: f64, v: f64) -> ([f64; 3], f64) {
        let t = match self.direction {
            Direction::Horizontal => u,
            Direction::Vertical => v,
        }
        .clamp(0.0, 1.0);
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        let from = unit(self.from.rgb);
        let to = unit(self.to.rgb);
        (
            [
                lerp(from[0], to[0]),
                lerp(from[1], to[1]),
                lerp(from[2], to[2]),
            ],
            lerp(self.from.alpha, self.to.alpha),
        )
    }

    /// CSS `linear-gradient(...)` for web hosts.
    pub fn to_css(&self) -> String {
        let dir = match self.direction {
            Direction::Horizontal => "to right",
            Direction::Vertical => "to bottom",
        };
        format!(
            "linear-gradient({dir}, {}, {})",
            self.from.to_css(),
            self.to.to_css()
        )
    }
}

fn unit(rgb: Rgb) -> [f64; 3] {
    rgb.channels().map(|c| c as f64 / 255.0)
}

/// Everything a renderer needs to paint the surface for one hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRecipe {
    pub hue: u16,
    /// The hue at 100% saturation and brightness.
    pub base: Rgb,
    pub whiten: LinearLayer,
    pub darken: LinearLayer,
}

impl FillRecipe {
    pub fn for_hue(hue: u16) -> Self {
        Self {
            hue,
            base: color_space::hsv_to_rgb(hue as f64, 100.0, 100.0),
            whiten: LinearLayer {
                direction: Direction::Horizontal,
                from: Rgba::new(255, 255, 255, 1.0),
                to: Rgba::new(255, 255, 255, 0.0),
            },
            darken: LinearLayer {
                direction: Direction::Vertical,
                from: Rgba::new(0, 0, 0, 0.0),
                to: Rgba::new(0, 0, 0, 1.0),
            },
        }
    }

    /// Composite the layers at normalized coordinates (`u` right, `v` down).
    ///
    /// The base layer is composited unrounded, so the result equals
    /// `hsv_to_rgb(hue, u * 100, (1 - v) * 100)`.
    pub fn shade_at(&self, u: f64, v: f64) -> Rgb {
        let mut out = color_space::hsv_to_unit(self.hue as f64, 100.0, 100.0);
        for layer in [&self.whiten, &self.darken] {
            let (color, alpha) = layer.sample(u, v);
            for (dst, src) in out.iter_mut().zip(color) {
                *dst = *dst * (1.0 - alpha) + src * alpha;
            }
        }
        Rgb::new(
            color_space::to_channel(out[0]),
            color_space::to_channel(out[1]),
            color_space::to_channel(out[2]),
        )
    }

    /// CSS for the flat base layer.
    pub fn base_css(&self) -> String {
        format!("hsl({}, 100%, 50%)", self.hue)
    }
}

/// Byte length of a `width` x `height` RGBA8 buffer.
fn rgba_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

/// Rasterize the surface into an RGBA8 buffer, corners mapped exactly.
pub fn rasterize(recipe: &FillRecipe, width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; rgba_len(width, height)];
    let du = (width.saturating_sub(1)).max(1) as f64;
    let dv = (height.saturating_sub(1)).max(1) as f64;
    for py in 0..height {
        let v = py as f64 / dv;
        let row_offset = rgba_len(width, py);
        for px in 0..width {
            let rgb = recipe.shade_at(px as f64 / du, v);
            let offset = row_offset + px as usize * 4;
            buf[offset] = rgb.r;
            buf[offset + 1] = rgb.g;
            buf[offset + 2] = rgb.b;
            buf[offset + 3] = 255;
        }
    }
    buf
}

/// Rasterize a left-to-right rainbow (hue 0 → 360) into an RGBA8 buffer.
pub fn hue_strip(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; rgba_len(width, height)];
    let du = (width.saturating_sub(1)).max(1) as f64;
    for px in 0..width {
        let rgb = color_space::hsv_to_rgb(360.0 * px as f64 / du, 100.0, 100.0);
        for py in 0..height {
            let offset = rgba_len(width, py) + px as usize * 4;
            buf[offset] = rgb.r;
            buf[offset + 1] = rgb.g;
            buf[offset + 2] = rgb.b;
            buf[offset + 3] = 255;
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners() {
        let recipe = FillRecipe::for_hue(120);
        assert_eq!(recipe.base, Rgb::new(0, 255, 0));
        assert_eq!(recipe.shade_at(0.0, 0.0), Rgb::new(255, 255, 255));
        assert_eq!(recipe.shade_at(1.0, 0.0), Rgb::new(0, 255, 0));
        assert_eq!(recipe.shade_at(0.0, 1.0), Rgb::new(0, 0, 0));
        assert_eq!(recipe.shade_at(1.0, 1.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn shading_matches_hsv() {
        for hue in (0..360).step_by(17) {
            let recipe = FillRecipe::for_hue(hue);
            for s in (0..=100).step_by(10) {
                for b in (0..=100).step_by(10) {
                    let u = s as f64 / 100.0;
                    let v = 1.0 - b as f64 / 100.0;
                    let got = recipe.shade_at(u, v);
                    let want = color_space::hsv_to_rgb(hue as f64, s as f64, b as f64);
                    for (g, w) in got.channels().into_iter().zip(want.channels()) {
                        assert!((g as i16 - w as i16).abs() <= 1, "{hue},{s},{b}");
                    }
                }
            }
        }
    }

    #[test]
    fn css_layers() {
        let recipe = FillRecipe::for_hue(30);
        assert_eq!(recipe.base_css(), "hsl(30, 100%, 50%)");
        assert_eq!(
            recipe.whiten.to_css(),
            "linear-gradient(to right, rgba(255,255,255,1), rgba(255,255,255,0))"
        );
        assert_eq!(
            recipe.darken.to_css(),
            "linear-gradient(to bottom, rgba(0,0,0,0), rgba(0,0,0,1))"
        );
    }

    #[test]
    fn raster_corners() {
        let buf = rasterize(&FillRecipe::for_hue(0), 4, 3);
        assert_eq!(buf.len(), 4 * 3 * 4);
        assert_eq!(&buf[0..4], &[255, 255, 255, 255]);
        assert_eq!(&buf[12..16], &[255, 0, 0, 255]);
        assert_eq!(&buf[buf.len() - 4..], &[0, 0, 0, 255]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn buffer_length_does_not_wrap_u32() {
        assert_eq!(rgba_len(70_000, 70_000), 19_600_000_000);
        assert_eq!(rgba_len(u32::MAX, 1), u32::MAX as usize * 4);
    }

    #[test]
    fn wide_strip_fills_every_row() {
        let buf = hue_strip(3, 2);
        assert_eq!(buf.len(), 3 * 2 * 4);
        assert_eq!(&buf[0..4], &buf[12..16]);
        assert_eq!(&buf[20..24], &[255, 0, 0, 255]);
    }

    #[test]
    fn hue_strip_wraps_red() {
        let buf = hue_strip(7, 1);
        assert_eq!(&buf[0..3], &[255, 0, 0]);
        assert_eq!(&buf[8..11], &[0, 255, 0]); // px 2 -> 120°
        assert_eq!(&buf[24..27], &[255, 0, 0]);
    }
}
