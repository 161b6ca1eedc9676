//! InteractionController: the picker's open/drag state machine.
//!
//! ```text
//! Closed --open/toggle--> Open --pointer down--> Dragging
//!   ^                      ^  <--pointer up/cancel--  |
//!   +------close/toggle----+--------close-------------+
//! ```
//!
//! The controller owns the [`ColorModel`] and is its only writer. Pointer
//! coordinates go through the pointer mapper; hue and hex edits go straight
//! to the model. Every mutation marks a redraw pending, and the host pulls
//! the recomputed surface with [`InteractionController::take_frame`] on its
//! next tick, after layout has settled.

use crate::config::PickerConfig;
use crate::model::{ColorModel, ColorSnapshot, SubscriptionId};
use crate::pointer::{self, Cursor, SurfaceRect};
use crate::surface::FillRecipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Closed,
    Open,
    Dragging,
}

/// Which input device produced a pointer event. Touch hosts pass the
/// coordinates of the first contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Move/up subscription held for exactly one drag.
///
/// Acquired on pointer down, dropped on up, cancel or close. Only events
/// from the same source are delivered while it is held.
#[derive(Debug)]
struct DragSubscription {
    source: PointerSource,
}

/// What the renderer needs after a state change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub fill: FillRecipe,
    pub cursor: Cursor,
    pub surface: SurfaceRect,
}

#[derive(Debug)]
pub struct InteractionController {
    model: ColorModel,
    state: InteractionState,
    surface: Option<SurfaceRect>,
    drag: Option<DragSubscription>,
    redraw_pending: bool,
    initial_color: String,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}

impl InteractionController {
    pub fn new(config: PickerConfig) -> Self {
        Self {
            model: ColorModel::new(&config),
            state: InteractionState::Closed,
            surface: None,
            drag: None,
            redraw_pending: false,
            initial_color: config.initial_color,
        }
    }

    pub fn model(&self) -> &ColorModel {
        &self.model
    }

    pub fn snapshot(&self) -> ColorSnapshot {
        self.model.snapshot()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != InteractionState::Closed
    }

    /// Source of the drag in progress, if any.
    pub fn drag_source(&self) -> Option<PointerSource> {
        self.drag.as_ref().map(|d| d.source)
    }

    pub fn surface(&self) -> Option<SurfaceRect> {
        self.surface
    }

    /// Observe color changes. See [`ColorModel::subscribe`].
    pub fn subscribe(&mut self, observer: impl FnMut(&ColorSnapshot) + 'static) -> SubscriptionId {
        self.model.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.model.unsubscribe(id)
    }

    /// Apply `initial_color` and open the picker.
    ///
    /// An unparsable color leaves the current color in place; the picker
    /// still opens.
    pub fn open(&mut self, initial_color: &str) {
        self.model.set_from_hex(initial_color);
        self.release_drag();
        self.state = InteractionState::Open;
        self.schedule_redraw();
    }

    /// [`open`](Self::open) with the configured initial color.
    pub fn open_default(&mut self) {
        let color = self.initial_color.clone();
        self.open(&color);
    }

    /// Close when open or dragging, otherwise open with `initial_color`.
    pub fn toggle(&mut self, initial_color: &str) {
        if self.is_open() {
            self.close();
        } else {
            self.open(initial_color);
        }
    }

    pub fn close(&mut self) {
        self.release_drag();
        self.state = InteractionState::Closed;
    }

    /// Record the surface's measured bounds. The cursor is recomputed on
    /// the next [`take_frame`](Self::take_frame).
    pub fn resize(&mut self, surface: SurfaceRect) {
        if self.surface != Some(surface) {
            self.surface = Some(surface);
            self.schedule_redraw();
        }
    }

    /// Start a drag at client coordinates. Ignored unless the picker is
    /// open, idle and has a measured surface.
    pub fn pointer_down(&mut self, source: PointerSource, client_x: f64, client_y: f64) -> bool {
        if self.state != InteractionState::Open || self.surface.is_none() {
            return false;
        }
        self.drag = Some(DragSubscription { source });
        self.state = InteractionState::Dragging;
        self.pick(client_x, client_y);
        true
    }

    /// Continue the drag. Moves outside the surface clamp to its edge.
    pub fn pointer_move(&mut self, source: PointerSource, client_x: f64, client_y: f64) -> bool {
        if !self.listening_to(source) {
            return false;
        }
        self.pick(client_x, client_y);
        true
    }

    /// End the drag and return to `Open`.
    pub fn pointer_up(&mut self, source: PointerSource) -> bool {
        self.end_drag(source)
    }

    /// The drag was interrupted (focus lost, touch cancelled). Same as up.
    pub fn pointer_cancel(&mut self, source: PointerSource) -> bool {
        self.end_drag(source)
    }

    /// Set the hue, keeping saturation and brightness. Does not touch the
    /// interaction state.
    pub fn hue_change(&mut self, hue: i32) {
        let hsv = self.model.hsv();
        self.model
            .set_from_hsv(hue, hsv.saturation() as i32, hsv.brightness() as i32);
        self.schedule_redraw();
    }

    /// Live hex text entry. Partial or malformed text is ignored.
    pub fn hex_input(&mut self, raw: &str) -> bool {
        let changed = self.model.set_from_hex(raw);
        if changed {
            self.schedule_redraw();
        }
        changed
    }

    /// Cursor for the current color on the measured surface.
    pub fn cursor(&self) -> Option<Cursor> {
        let surface = self.surface?;
        let hsv = self.model.hsv();
        Some(pointer::saturation_brightness_to_point(
            hsv.saturation(),
            hsv.brightness(),
            surface.width,
            surface.height,
        ))
    }

    pub fn redraw_pending(&self) -> bool {
        self.redraw_pending
    }

    /// The deferred redraw. Returns the frame for the latest state if a
    /// redraw was scheduled, clearing the request. Stays pending until a
    /// surface has been measured.
    pub fn take_frame(&mut self) -> Option<Frame> {
        if !self.redraw_pending {
            return None;
        }
        let surface = self.surface?;
        let cursor = self.cursor()?;
        self.redraw_pending = false;
        Some(Frame {
            fill: FillRecipe::for_hue(self.model.hsv().hue()),
            cursor,
            surface,
        })
    }

    fn listening_to(&self, source: PointerSource) -> bool {
        self.state == InteractionState::Dragging && self.drag_source() == Some(source)
    }

    fn end_drag(&mut self, source: PointerSource) -> bool {
        if !self.listening_to(source) {
            return false;
        }
        self.release_drag();
        self.state = InteractionState::Open;
        true
    }

    fn release_drag(&mut self) {
        self.drag = None;
    }

    fn pick(&mut self, client_x: f64, client_y: f64) {
        let Some(surface) = self.surface else {
            return;
        };
        let (x, y) = surface.to_local(client_x, client_y);
        let (saturation, brightness) =
            pointer::point_to_saturation_brightness(x, y, surface.width, surface.height);
        let hue = self.model.hsv().hue();
        self.model
            .set_from_hsv(hue as i32, saturation as i32, brightness as i32);
        self.schedule_redraw();
    }

    fn schedule_redraw(&mut self) {
        self.redraw_pending = true;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::color_space::Hsv;
    use super::PointerSource::{Mouse, Touch};

    fn opened() -> InteractionController {
        let mut ctl = InteractionController::default();
        ctl.resize(SurfaceRect::sized(100.0, 100.0));
        ctl.open("#ff0000");
        ctl
    }

    #[test]
    fn starts_closed() {
        let ctl = InteractionController::default();
        assert_eq!(ctl.state(), InteractionState::Closed);
        assert!(ctl.drag_source().is_none());
    }

    #[test]
    fn open_applies_color() {
        let ctl = opened();
        assert_eq!(ctl.state(), InteractionState::Open);
        assert_eq!(ctl.model().hsv(), Hsv::new(0, 100, 100));
    }

    #[test]
    fn open_with_bad_color_keeps_current() {
        let mut ctl = InteractionController::default();
        let before = ctl.snapshot();
        ctl.open("not a color");
        assert_eq!(ctl.state(), InteractionState::Open);
        assert_eq!(ctl.snapshot(), before);
    }

    #[test]
    fn open_default_uses_config() {
        let mut ctl = InteractionController::new(PickerConfig::default().with_initial_color("0f0"));
        ctl.open_default();
        assert_eq!(ctl.model().hex(), "00FF00");
    }

    #[test]
    fn toggle_and_close() {
        let mut ctl = InteractionController::default();
        ctl.toggle("fff");
        assert_eq!(ctl.state(), InteractionState::Open);
        ctl.toggle("000");
        assert_eq!(ctl.state(), InteractionState::Closed);
        assert_eq!(ctl.model().hex(), "FFFFFF");
        ctl.close();
        assert_eq!(ctl.state(), InteractionState::Closed);
    }

    #[test]
    fn toggle_while_dragging_closes_and_releases() {
        let mut ctl = opened();
        assert!(ctl.pointer_down(Mouse, 10.0, 10.0));
        ctl.toggle("fff");
        assert_eq!(ctl.state(), InteractionState::Closed);
        assert!(ctl.drag_source().is_none());
        assert!(!ctl.pointer_move(Mouse, 50.0, 50.0));
    }

    #[test]
    fn pointer_down_requires_open_and_surface() {
        let mut ctl = InteractionController::default();
        ctl.resize(SurfaceRect::sized(100.0, 100.0));
        assert!(!ctl.pointer_down(Mouse, 10.0, 10.0));

        let mut ctl = InteractionController::default();
        ctl.open("fff");
        assert!(!ctl.pointer_down(Mouse, 10.0, 10.0));
        assert_eq!(ctl.state(), InteractionState::Open);
    }

    #[test]
    fn drag_keeps_hue() {
        let mut ctl = opened();
        ctl.hue_change(200);
        assert!(ctl.pointer_down(Mouse, 25.0, 75.0));
        assert_eq!(ctl.state(), InteractionState::Dragging);
        assert_eq!(ctl.model().hsv(), Hsv::new(200, 25, 25));

        assert!(ctl.pointer_move(Mouse, 80.0, 10.0));
        assert_eq!(ctl.model().hsv(), Hsv::new(200, 80, 90));

        assert!(ctl.pointer_up(Mouse));
        assert_eq!(ctl.state(), InteractionState::Open);
        assert!(ctl.drag_source().is_none());
    }

    #[test]
    fn moves_after_up_are_ignored() {
        let mut ctl = opened();
        ctl.pointer_down(Mouse, 50.0, 50.0);
        ctl.pointer_up(Mouse);
        let before = ctl.snapshot();
        assert!(!ctl.pointer_move(Mouse, 0.0, 0.0));
        assert!(!ctl.pointer_up(Mouse));
        assert_eq!(ctl.snapshot(), before);
    }

    #[test]
    fn other_source_is_not_subscribed() {
        let mut ctl = opened();
        ctl.pointer_down(Touch, 50.0, 50.0);
        assert!(!ctl.pointer_move(Mouse, 0.0, 0.0));
        assert!(!ctl.pointer_up(Mouse));
        assert_eq!(ctl.state(), InteractionState::Dragging);
        assert!(ctl.pointer_cancel(Touch));
        assert_eq!(ctl.state(), InteractionState::Open);
    }

    #[test]
    fn second_down_while_dragging_is_ignored() {
        let mut ctl = opened();
        ctl.pointer_down(Mouse, 50.0, 50.0);
        assert!(!ctl.pointer_down(Touch, 0.0, 0.0));
        assert_eq!(ctl.drag_source(), Some(Mouse));
    }

    #[test]
    fn drag_past_edge_clamps() {
        let mut ctl = opened();
        ctl.pointer_down(Mouse, 50.0, 50.0);
        ctl.pointer_move(Mouse, 150.0, -20.0);
        let hsv = ctl.model().hsv();
        assert_eq!((hsv.saturation(), hsv.brightness()), (100, 100));
    }

    #[test]
    fn client_coordinates_use_surface_origin() {
        let mut ctl = InteractionController::default();
        ctl.resize(SurfaceRect::new(100.0, 200.0, 100.0, 100.0));
        ctl.open("f00");
        ctl.pointer_down(Mouse, 150.0, 250.0);
        let hsv = ctl.model().hsv();
        assert_eq!((hsv.saturation(), hsv.brightness()), (50, 50));
    }

    #[test]
    fn hue_change_keeps_state_and_sb() {
        let mut ctl = opened();
        ctl.pointer_down(Mouse, 30.0, 40.0);
        ctl.hue_change(-30);
        assert_eq!(ctl.state(), InteractionState::Dragging);
        assert_eq!(ctl.model().hsv(), Hsv::new(330, 30, 60));
    }

    #[test]
    fn invalid_hex_input_changes_nothing() {
        let mut ctl = opened();
        ctl.take_frame();
        let before = ctl.snapshot();
        assert!(!ctl.hex_input("xyz123"));
        assert_eq!(ctl.snapshot(), before);
        assert_eq!(ctl.state(), InteractionState::Open);
        assert!(!ctl.redraw_pending());
    }

    #[test]
    fn frame_is_deferred_and_sees_latest_state() {
        let mut ctl = opened();
        ctl.pointer_down(Mouse, 10.0, 10.0);
        ctl.pointer_move(Mouse, 60.0, 20.0);
        // The mutation is visible before the frame is taken.
        assert_eq!(ctl.model().hsv().saturation(), 60);
        assert!(ctl.redraw_pending());

        let frame = ctl.take_frame().unwrap();
        assert_abs_diff_eq!(frame.cursor.x, 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(frame.cursor.y, 20.0, epsilon = 1e-9);
        assert_eq!(frame.fill.hue, 0);
        assert!(ctl.take_frame().is_none());
    }

    #[test]
    fn frame_waits_for_surface() {
        let mut ctl = InteractionController::default();
        ctl.open("00f");
        assert!(ctl.take_frame().is_none());
        assert!(ctl.redraw_pending());

        ctl.resize(SurfaceRect::sized(200.0, 100.0));
        let frame = ctl.take_frame().unwrap();
        assert_eq!(frame.fill.hue, 240);
        assert_abs_diff_eq!(frame.cursor.x, 200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(frame.cursor.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn resize_recomputes_cursor() {
        let mut ctl = opened();
        ctl.hex_input("808080");
        ctl.take_frame();
        ctl.resize(SurfaceRect::sized(300.0, 200.0));
        let frame = ctl.take_frame().unwrap();
        assert_abs_diff_eq!(frame.cursor.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(frame.cursor.y, 200.0 * (1.0 - 0.5), epsilon = 1e-9);
    }
}
