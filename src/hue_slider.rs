//! Hue slider (0–359°).
//!
//! Renders a rainbow strip as a rasterized image. Hue edits go straight to
//! the controller and never change the interaction state.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;
use crate::handle::PickerHandle;
use crate::surface;

/// Largest hue the slider produces; 360 would wrap back to red.
const MAX_HUE: f64 = 359.0;

struct HueUpdate(u16);

pub(crate) struct HueSlider {
    id: ViewId,
    held: bool,
    hue: f64,
    picker: PickerHandle,
    size: floem::taffy::prelude::Size<f32>,
    strip_img: Option<peniko::Image>,
    strip_hash: Vec<u8>,
    cached_dims: (u32, u32),
}

/// Creates a horizontal hue slider.
pub(crate) fn hue_slider(picker: PickerHandle) -> HueSlider {
    let id = ViewId::new();
    let color = picker.color();

    create_effect(move |_| {
        let hue = color.get().hsv.hue();
        id.update_state(HueUpdate(hue));
    });

    HueSlider {
        id,
        held: false,
        hue: color.get_untracked().hsv.hue() as f64,
        picker,
        size: Default::default(),
        strip_img: None,
        strip_hash: Vec::new(),
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl HueSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let w = self.size.width as f64;
        let r = constants::THUMB_RADIUS;
        let usable = w - 2.0 * r;
        if usable > 0.0 {
            self.hue = (((x - r) / usable).clamp(0.0, 1.0) * MAX_HUE).round();
            let hue = self.hue as i32;
            self.picker.update(|c| c.hue_change(hue));
        }
    }

    fn ensure_strip_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 || self.cached_dims == (pw, ph) {
            return;
        }

        let pixels = surface::hue_strip(pw, ph);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.strip_hash = blob.id().to_le_bytes().to_vec();
        self.strip_img = Some(img);
        self.cached_dims = (pw, ph);
    }
}

impl View for HueSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<HueUpdate>() {
            self.hue = update.0 as f64;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        self.ensure_strip_image(cx.scale());
        if let Some(ref img) = self.strip_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.strip_hash,
                },
                rect,
            );
        }
        cx.restore();

        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb ring, hue 0 at the left edge
        let radius = constants::THUMB_RADIUS;
        let thumb_x = radius + (self.hue / MAX_HUE) * (w - 2.0 * radius);
        let thumb_cy = h / 2.0;
        let circle = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
    }
}
