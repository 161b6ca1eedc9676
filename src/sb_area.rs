//! Saturation/brightness surface.
//!
//! Saturation runs left to right, brightness bottom to top. The surface is
//! rasterized once per hue at a fixed resolution and scaled to widget size.
//! Pointer handling is delegated to the controller; this view only feeds it
//! measured sizes and local coordinates.

use std::sync::Arc;

use floem::kurbo::{Circle, Rect};
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
use crate::controller::{Frame, PointerSource};
use crate::handle::PickerHandle;
use crate::pointer::SurfaceRect;
use crate::surface::{self, FillRecipe};

struct ColorChanged;

pub(crate) struct SaturationBrightnessArea {
    id: ViewId,
    picker: PickerHandle,
    size: floem::taffy::prelude::Size<f32>,
    frame: Option<Frame>,
    /// Raster of the current hue's surface.
    area_img: Option<peniko::Image>,
    area_hash: Vec<u8>,
    cached_hue: Option<u16>,
}

/// Creates the 2D saturation/brightness picking surface.
pub(crate) fn sb_area(picker: PickerHandle) -> SaturationBrightnessArea {
    let id = ViewId::new();
    let color = picker.color();

    create_effect(move |_| {
        let _ = color.get();
        id.update_state(ColorChanged);
    });

    SaturationBrightnessArea {
        id,
        picker,
        size: Default::default(),
        frame: None,
        area_img: None,
        area_hash: Vec::new(),
        cached_hue: None,
    }
    .style(|s| {
        s.flex_grow(1.0)
            .aspect_ratio(1.0)
            .min_height(100.0)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl SaturationBrightnessArea {
    fn surface(&self) -> Option<SurfaceRect> {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        (w > 0.0 && h > 0.0).then(|| SurfaceRect::sized(w, h))
    }

    fn ensure_area_image(&mut self, fill: &FillRecipe) {
        if self.cached_hue == Some(fill.hue) && self.area_img.is_some() {
            return;
        }

        let size = constants::AREA_RASTER_SIZE;
        let pixels = surface::rasterize(fill, size, size);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, size, size);

        self.area_hash = blob.id().to_le_bytes().to_vec();
        self.area_img = Some(img);
        self.cached_hue = Some(fill.hue);
    }
}

impl View for SaturationBrightnessArea {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if state.downcast::<ColorChanged>().is_ok() {
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                let Some(surface) = self.surface() else {
                    return EventPropagation::Continue;
                };
                cx.update_active(self.id());
                self.picker.update(|c| {
                    c.resize(surface);
                    c.pointer_down(PointerSource::Mouse, e.pos.x, e.pos.y)
                });
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                let dragging = self
                    .picker
                    .with(|c| c.drag_source() == Some(PointerSource::Mouse));
                if dragging {
                    self.picker
                        .update(|c| c.pointer_move(PointerSource::Mouse, e.pos.x, e.pos.y));
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.picker.update(|c| c.pointer_up(PointerSource::Mouse));
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.picker.update(|c| c.pointer_cancel(PointerSource::Mouse));
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        if let Some(surface) = self.surface() {
            self.picker.update(|c| c.resize(surface));
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        // Deferred redraw: layout has settled, pull the latest frame.
        if let Some(frame) = self.picker.update(|c| c.take_frame()) {
            self.frame = Some(frame);
        }
        let Some(frame) = self.frame else {
            return;
        };

        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);
        cx.save();
        cx.clip(&rrect);
        self.ensure_area_image(&frame.fill);
        if let Some(ref img) = self.area_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.area_hash,
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

        let cur_pt = (frame.cursor.x, frame.cursor.y);
        let outer = Circle::new(cur_pt, constants::CURSOR_RADIUS + 1.0);
        cx.stroke(
            &outer,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let cursor = Circle::new(cur_pt, constants::CURSOR_RADIUS);
        cx.stroke(&cursor, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let inner = Circle::new(cur_pt, constants::CURSOR_RADIUS - 1.5);
        cx.stroke(
            &inner,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
