//! Standalone demo: opens a window with the color picker.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_hsv::{color_picker, PickerConfig, PickerHandle};

fn main() {
    floem::Application::new()
        .window(
            move |_| {
                let picker = PickerHandle::new(PickerConfig::default());
                picker.update(|c| c.open_default());
                color_picker(picker).on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((232.0, 340.0))
                    .title("floem-hsv"),
            ),
        )
        .run();
}
