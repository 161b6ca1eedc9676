//! Picker panel: a toggle swatch and, while open, the saturation/brightness
//! surface, hue slider and hex row.

use floem::prelude::*;
use floem::reactive::SignalGet;

use crate::constants;
use crate::controller::InteractionState;
use crate::handle::PickerHandle;
use crate::hue_slider::hue_slider;
use crate::inputs::{copy_button, hex_input};
use crate::sb_area::sb_area;

pub(crate) fn picker_panel(picker: PickerHandle) -> impl IntoView {
    let color = picker.color();
    let state = picker.state();
    let toggler = picker.clone();

    // Swatch + current hex; clicking the swatch opens or closes the panel
    let header = h_stack((
        empty()
            .style(move |st| {
                let rgb = color.get().rgb;
                st.width(constants::SWATCH_SIZE)
                    .height(constants::SWATCH_SIZE)
                    .border_radius(constants::RADIUS)
                    .border(1.0)
                    .border_color(Color::rgb8(180, 180, 180))
                    .background(Color::rgb8(rgb.r, rgb.g, rgb.b))
                    .cursor(floem::style::CursorStyle::Pointer)
            })
            .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
                toggler.update(|c| {
                    let current = c.model().display_hex();
                    c.toggle(&current);
                });
            }),
        label(move || color.get().display_hex()).style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(80, 80, 80))
        }),
    ))
    .style(|st| st.items_center().gap(constants::GAP));

    let panel = v_stack((
        sb_area(picker.clone()),
        hue_slider(picker.clone()),
        h_stack((hex_input(picker.clone()), copy_button(picker)))
            .style(|st| st.gap(constants::GAP).items_center().justify_center()),
    ))
    .style(move |st| {
        st.gap(constants::GAP)
            .apply_if(state.get() == InteractionState::Closed, |st| st.hide())
    });

    v_stack((header, panel)).style(|st| {
        st.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .background(Color::rgb8(242, 242, 242))
    })
}
