//! # floem-hsv
//!
//! An HSV color selection engine, with an optional picker widget for
//! [Floem](https://github.com/lapce/floem).
//!
//! The engine keeps a color in HSV, RGB and hex form at once, maps pointer
//! positions on a saturation/brightness surface to color and back, and
//! drives an open/drag state machine. It has no GUI dependency; the
//! `widget` feature (on by default) adds the Floem views.
//!
//! ## Usage
//!
//! ```rust
//! use floem_hsv::{InteractionController, PickerConfig, PointerSource, SurfaceRect};
//!
//! let mut picker = InteractionController::new(PickerConfig::default());
//! picker.resize(SurfaceRect::sized(200.0, 200.0));
//! picker.open("#3B82F6");
//! picker.pointer_down(PointerSource::Mouse, 100.0, 50.0);
//! picker.pointer_up(PointerSource::Mouse);
//! assert_eq!(picker.model().hsv().saturation(), 50);
//! ```

pub mod color_space;
mod config;
mod constants;
mod controller;
mod error;
mod model;
mod pointer;
pub mod progress;
pub mod surface;

#[cfg(feature = "widget")]
mod handle;
#[cfg(feature = "widget")]
mod hue_slider;
#[cfg(feature = "widget")]
mod inputs;
#[cfg(feature = "widget")]
mod picker;
#[cfg(feature = "widget")]
mod sb_area;

pub use color_space::{Hsv, Rgb};
pub use config::{AchromaticHue, PickerConfig};
pub use controller::{Frame, InteractionController, InteractionState, PointerSource};
pub use error::ColorError;
pub use model::{ColorModel, ColorSnapshot, SubscriptionId};
pub use pointer::{
    point_to_saturation_brightness, saturation_brightness_to_point, Cursor, SurfaceRect,
};
pub use progress::{progress_color, ProgressStatus};

#[cfg(feature = "widget")]
pub use handle::PickerHandle;

#[cfg(feature = "widget")]
use std::sync::Once;

#[cfg(feature = "widget")]
use floem::prelude::*;
#[cfg(feature = "widget")]
use floem::text::FONT_SYSTEM;

#[cfg(feature = "widget")]
static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the picker view.
///
/// The view reads from and writes to `picker`; hosts can drive the same
/// handle (open, close, set colors) and the view follows.
#[cfg(feature = "widget")]
pub fn color_picker(picker: PickerHandle) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    picker::picker_panel(picker)
}
