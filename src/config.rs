//! Picker configuration.

use crate::constants;

/// What hex entry does to the hue when the parsed color is achromatic.
///
/// Gray, white and black have no hue, so converting them back to HSV
/// yields hue 0. `Reset` accepts that; `Preserve` keeps the hue the picker
/// had before so the hue slider does not jump when the user types a gray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AchromaticHue {
    #[default]
    Reset,
    Preserve,
}

/// Settings for a [`ColorModel`](crate::ColorModel) and its controller.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    /// Color applied by [`InteractionController::open_default`](crate::InteractionController::open_default).
    pub initial_color: String,
    pub achromatic_hue: AchromaticHue,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_color: constants::DEFAULT_COLOR.to_string(),
            achromatic_hue: AchromaticHue::default(),
        }
    }
}

impl PickerConfig {
    pub fn with_initial_color(mut self, color: impl Into<String>) -> Self {
        self.initial_color = color.into();
        self
    }

    pub fn with_achromatic_hue(mut self, policy: AchromaticHue) -> Self {
        self.achromatic_hue = policy;
        self
    }
}
