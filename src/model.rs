//! ColorModel: the authoritative color state.
//!
//! The model keeps HSV, RGB and hex mutually consistent. Each mutator
//! writes exactly one representation, recomputes the other two on the spot,
//! then notifies observers synchronously.

use std::fmt;

use crate::color_space::{self, Hsv, Rgb};
use crate::config::{AchromaticHue, PickerConfig};
use crate::constants;

/// A consistent view of the model's three representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSnapshot {
    pub hsv: Hsv,
    pub rgb: Rgb,
    /// Canonical uppercase `RRGGBB`, no `#`.
    pub hex: String,
}

impl ColorSnapshot {
    fn from_hsv(hsv: Hsv) -> Self {
        let rgb = hsv.to_rgb();
        Self {
            hsv,
            rgb,
            hex: rgb.to_hex().to_uppercase(),
        }
    }

    /// `#RRGGBB`.
    pub fn display_hex(&self) -> String {
        format!("#{}", self.hex)
    }
}

impl Default for ColorSnapshot {
    fn default() -> Self {
        Self::from_hsv(Hsv::new(
            constants::INITIAL_HUE as i32,
            constants::INITIAL_SATURATION as i32,
            constants::INITIAL_BRIGHTNESS as i32,
        ))
    }
}

/// Handle returned by [`ColorModel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&ColorSnapshot)>;

pub struct ColorModel {
    current: ColorSnapshot,
    achromatic_hue: AchromaticHue,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorModel")
            .field("current", &self.current)
            .field("achromatic_hue", &self.achromatic_hue)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for ColorModel {
    fn default() -> Self {
        Self::new(&PickerConfig::default())
    }
}

impl ColorModel {
    /// Create a model at the initial HSV (240°, 70%, 90%).
    ///
    /// The configured initial color is not applied here; it is the argument
    /// the controller passes to `open`.
    pub fn new(config: &PickerConfig) -> Self {
        Self {
            current: ColorSnapshot::default(),
            achromatic_hue: config.achromatic_hue,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn hsv(&self) -> Hsv {
        self.current.hsv
    }

    pub fn rgb(&self) -> Rgb {
        self.current.rgb
    }

    /// Canonical uppercase hex without `#`.
    pub fn hex(&self) -> &str {
        &self.current.hex
    }

    pub fn snapshot(&self) -> ColorSnapshot {
        self.current.clone()
    }

    /// Write HSV. Hue wraps modulo 360; saturation and brightness clamp to
    /// `[0, 100]`. RGB and hex are recomputed and observers notified.
    pub fn set_from_hsv(&mut self, hue: i32, saturation: i32, brightness: i32) {
        self.current = ColorSnapshot::from_hsv(Hsv::new(hue, saturation, brightness));
        self.notify();
    }

    /// Write a hex string as typed by a user.
    ///
    /// Accepts 3 or 6 hex digits with an optional `#`. Anything else is
    /// ignored: no mutation and no notification. Returns whether the model
    /// changed.
    pub fn set_from_hex(&mut self, raw: &str) -> bool {
        let Some(hex) = color_space::normalize_hex(raw) else {
            return false;
        };
        let Ok(rgb) = color_space::hex_to_rgb(&hex) else {
            return false;
        };
        let mut hsv = rgb.to_hsv();
        if hsv.is_achromatic() && self.achromatic_hue == AchromaticHue::Preserve {
            hsv = hsv.with_hue(self.current.hsv.hue() as i32);
        }
        self.current = ColorSnapshot { hsv, rgb, hex };
        self.notify();
        true
    }

    /// Register an observer called after every successful mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&ColorSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.current);
        }
    }

    /// `#RRGGBB`.
    pub fn display_hex(&self) -> String {
        self.current.display_hex()
    }

    /// Text mirrored into the hex input field: uppercase, no `#`.
    pub fn hex_input_text(&self) -> String {
        self.current.hex.clone()
    }

    /// CSS for the fully saturated, full brightness hue.
    pub fn hue_color(&self) -> String {
        format!("hsl({}, 100%, 50%)", self.current.hsv.hue())
    }

    /// CSS gradient from transparent to the current color.
    pub fn opacity_gradient(&self) -> String {
        format!(
            "linear-gradient(to right, transparent, #{})",
            self.current.rgb.to_hex()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn starts_at_initial_hsv() {
        let model = ColorModel::default();
        assert_eq!(model.hsv(), Hsv::new(240, 70, 90));
        assert_eq!(model.rgb(), Rgb::new(69, 69, 230));
        assert_eq!(model.hex(), "4545E6");
    }

    #[test]
    fn set_from_hsv_derives_rgb_and_hex() {
        let mut model = ColorModel::default();
        model.set_from_hsv(0, 100, 100);
        assert_eq!(model.rgb(), Rgb::new(255, 0, 0));
        assert_eq!(model.hex(), "FF0000");
        assert_eq!(model.display_hex(), "#FF0000");
    }

    #[test]
    fn set_from_hsv_wraps_and_clamps() {
        let mut model = ColorModel::default();
        model.set_from_hsv(480, 140, -3);
        assert_eq!(model.hsv(), Hsv::new(120, 100, 0));
        assert_eq!(model.hex(), "000000");
    }

    #[test]
    fn set_from_hex_updates_all_representations() {
        let mut model = ColorModel::default();
        assert!(model.set_from_hex("#ff8000"));
        assert_eq!(model.hex(), "FF8000");
        assert_eq!(model.rgb(), Rgb::new(255, 128, 0));
        assert_eq!(model.hsv(), Hsv::new(30, 100, 100));
    }

    #[test]
    fn set_from_hex_expands_shorthand() {
        let mut model = ColorModel::default();
        assert!(model.set_from_hex("abc"));
        assert_eq!(model.hex(), "AABBCC");
    }

    #[test]
    fn invalid_hex_is_ignored() {
        let mut model = ColorModel::default();
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        model.subscribe(move |_| *counter.borrow_mut() += 1);

        let before = model.snapshot();
        for partial in ["xyz123", "4F46", "4F46E", "#", ""] {
            assert!(!model.set_from_hex(partial), "{partial}");
        }
        assert_eq!(model.snapshot(), before);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn achromatic_reset_sets_hue_zero() {
        let mut model = ColorModel::default();
        model.set_from_hsv(200, 50, 50);
        model.set_from_hex("808080");
        assert_eq!(model.hsv().hue(), 0);
        assert_eq!(model.hsv().saturation(), 0);
    }

    #[test]
    fn achromatic_preserve_keeps_hue() {
        let config = PickerConfig::default().with_achromatic_hue(AchromaticHue::Preserve);
        let mut model = ColorModel::new(&config);
        model.set_from_hsv(200, 50, 50);
        model.set_from_hex("000000");
        assert_eq!(model.hsv(), Hsv::new(200, 0, 0));
        assert_eq!(model.hex(), "000000");

        model.set_from_hex("ff0000");
        assert_eq!(model.hsv().hue(), 0);
    }

    #[test]
    fn observers_see_new_state() {
        let mut model = ColorModel::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = model.subscribe(move |snap| sink.borrow_mut().push(snap.hex.clone()));

        model.set_from_hsv(120, 100, 100);
        model.set_from_hex("00f");
        assert_eq!(*seen.borrow(), vec!["00FF00".to_string(), "0000FF".to_string()]);

        assert!(model.unsubscribe(id));
        assert!(!model.unsubscribe(id));
        model.set_from_hsv(0, 0, 0);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn display_strings() {
        let mut model = ColorModel::default();
        model.set_from_hex("4F46E5");
        assert_eq!(model.hue_color(), "hsl(243, 100%, 50%)");
        assert_eq!(
            model.opacity_gradient(),
            "linear-gradient(to right, transparent, #4f46e5)"
        );
        assert_eq!(model.hex_input_text(), "4F46E5");
    }
}
