//! Shared handle between the picker's views and its controller.

use std::cell::RefCell;
use std::rc::Rc;

use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::config::PickerConfig;
use crate::controller::{InteractionController, InteractionState};
use crate::model::ColorSnapshot;

/// A controller plus reactive mirrors of its color and state.
///
/// Views never hold the `RefCell` borrow across a signal write: `update`
/// releases the controller before publishing, so effects triggered by the
/// new values may call back into the handle.
#[derive(Clone)]
pub struct PickerHandle {
    controller: Rc<RefCell<InteractionController>>,
    color: RwSignal<ColorSnapshot>,
    state: RwSignal<InteractionState>,
}

impl PickerHandle {
    pub fn new(config: PickerConfig) -> Self {
        let controller = InteractionController::new(config);
        let color = RwSignal::new(controller.snapshot());
        let state = RwSignal::new(controller.state());
        Self {
            controller: Rc::new(RefCell::new(controller)),
            color,
            state,
        }
    }

    /// Current color, tracked.
    pub fn color(&self) -> RwSignal<ColorSnapshot> {
        self.color
    }

    /// Current interaction state, tracked.
    pub fn state(&self) -> RwSignal<InteractionState> {
        self.state
    }

    /// Run `f` against the controller, then publish any change.
    pub fn update<R>(&self, f: impl FnOnce(&mut InteractionController) -> R) -> R {
        let (out, snapshot, state) = {
            let mut controller = self.controller.borrow_mut();
            let out = f(&mut controller);
            (out, controller.snapshot(), controller.state())
        };
        if self.color.get_untracked() != snapshot {
            self.color.set(snapshot);
        }
        if self.state.get_untracked() != state {
            self.state.set(state);
        }
        out
    }

    /// Read the controller without publishing.
    pub fn with<R>(&self, f: impl FnOnce(&InteractionController) -> R) -> R {
        f(&self.controller.borrow())
    }
}
