//! Hex text field and copy button.

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::color_space;
use crate::constants;
use crate::handle::PickerHandle;

/// A hex input that feeds the controller on every keystroke.
///
/// Partial text is left alone while the user types; only a complete 3 or 6
/// digit value reaches the model. Enter or blur snaps the text back to the
/// model's canonical form.
pub(crate) fn hex_input(picker: PickerHandle) -> impl IntoView {
    let color = picker.color();
    let text = RwSignal::new(color.get_untracked().hex);

    // Model → text, unless the text already spells the same color
    create_effect(move |_| {
        let hex = color.get().hex;
        let current = text.get_untracked();
        if color_space::normalize_hex(&current).as_deref() != Some(hex.as_str()) {
            text.set(hex);
        }
    });

    // Text → model on every keystroke
    create_effect(move |_| {
        let raw = text.get();
        let model_hex = color.get_untracked().hex;
        if color_space::normalize_hex(&raw).as_deref() != Some(model_hex.as_str()) {
            picker.update(|c| c.hex_input(&raw));
        }
    });

    let on_commit = move || {
        let canonical = color.get_untracked().hex;
        if text.get_untracked() != canonical {
            text.set(canonical);
        }
    };
    let on_commit_clone = on_commit;

    h_stack((
        label(|| "#").style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        text_input(text)
            .style(|s| {
                s.width(constants::HEX_INPUT_WIDTH)
                    .padding(2.0)
                    .font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .background(Color::WHITE)
                    .border(1.0)
                    .border_color(Color::rgb8(200, 200, 200))
                    .border_radius(3.0)
            })
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event_stop(floem::event::EventListener::KeyDown, move |e| {
                if let floem::event::Event::KeyDown(ke) = e {
                    if ke.key.logical_key
                        == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                    {
                        on_commit_clone();
                    }
                }
            }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// Copies the current `#RRGGBB` to the clipboard.
pub(crate) fn copy_button(picker: PickerHandle) -> impl IntoView {
    let color = picker.color();
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&color.get_untracked().display_hex());
    })
}

fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}
