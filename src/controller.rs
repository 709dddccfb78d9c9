//! Interaction controller between host input and the tool model.
//!
//! [`PanelController`] translates pointer input and discrete commands (select
//! a tool, toggle the panel) into model mutations, and forwards the resulting
//! change notifications to an optional host listener. It observes the model
//! it mutates: the listener always fires from the notification path, never
//! directly from the command, so host feedback stays consistent no matter who
//! mutated the model.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::model::{StateEvent, ToolKind, ToolModel};
use crate::observer::Observer;
use crate::util::clamp_to_extent;

/// Pointer input phase, mapped from whatever event stream the host uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Pointer pressed down on the panel
    Down,
    /// Pointer moved while pressed
    Move,
    /// Pointer released
    Up,
    /// Gesture cancelled by the host
    Cancel,
}

/// Host-side feedback contract.
///
/// All methods default to no-ops; a host registers a listener only for the
/// events it cares about. Running without any listener is a valid
/// configuration, not an error.
pub trait PanelListener {
    /// The selected tool changed.
    fn on_tool_changed(&self, _tool: ToolKind) {}
    /// The panel expanded or collapsed.
    fn on_expansion_changed(&self, _expanded: bool) {}
    /// The floating panel moved.
    fn on_position_changed(&self, _x: f32, _y: f32) {}
}

/// Mediates between raw input and [`ToolModel`] mutations.
///
/// Holds a non-owning reference to the model and attaches itself as an
/// observer on construction. Call [`PanelController::cleanup`] before
/// discarding the controller; the model keeps notifying attached observers
/// until they detach.
pub struct PanelController {
    model: Weak<ToolModel>,
    weak_self: Weak<PanelController>,
    listener: RefCell<Option<Box<dyn PanelListener>>>,
}

impl PanelController {
    /// Creates a controller observing `model`.
    pub fn new(model: &Rc<ToolModel>) -> Rc<Self> {
        let controller = Rc::new_cyclic(|weak_self| Self {
            model: Rc::downgrade(model),
            weak_self: weak_self.clone(),
            listener: RefCell::new(None),
        });
        model.attach(controller.clone());
        controller
    }

    /// Registers the host listener, replacing any previous one.
    ///
    /// Must not be called from inside a listener callback.
    pub fn set_listener(&self, listener: Box<dyn PanelListener>) {
        *self.listener.borrow_mut() = Some(listener);
    }

    /// Selects a tool and collapses the panel if it is open.
    pub fn select_tool(&self, tool: ToolKind) {
        let Some(model) = self.model.upgrade() else {
            return;
        };
        log::debug!("Tool selected: {tool}");
        model.set_current_tool(tool);

        // Tool selection always auto-collapses the panel.
        if model.is_expanded() {
            model.set_expanded(false);
        }
    }

    pub fn toggle_expansion(&self) {
        if let Some(model) = self.model.upgrade() {
            model.toggle_expanded();
        }
    }

    pub fn expand(&self) {
        if let Some(model) = self.model.upgrade() {
            model.set_expanded(true);
        }
    }

    pub fn collapse(&self) {
        if let Some(model) = self.model.upgrade() {
            model.set_expanded(false);
        }
    }

    /// Moves the panel to `(x, y)` as-is; clamping happens before this call.
    pub fn drag_to(&self, x: f32, y: f32) {
        if let Some(model) = self.model.upgrade() {
            model.set_position(x, y);
        }
    }

    /// Handles a pointer event for panel dragging.
    ///
    /// Dragging is active only while the panel is collapsed; once open the
    /// panel is not meant to be repositioned. A `Move` event clamps the
    /// pointer so the collapsed button stays fully inside the viewport and
    /// moves the panel there.
    ///
    /// # Arguments
    /// * `phase` - Pointer phase from the host event stream
    /// * `x`, `y` - Pointer position in viewport coordinates
    /// * `viewport_width`, `viewport_height` - Host viewport size
    /// * `button_diameter` - Diameter of the collapsed panel button
    ///
    /// # Returns
    /// `true` if the event moved the panel, `false` otherwise.
    pub fn handle_drag(
        &self,
        phase: PointerPhase,
        x: f32,
        y: f32,
        viewport_width: f32,
        viewport_height: f32,
        button_diameter: f32,
    ) -> bool {
        if phase != PointerPhase::Move {
            return false;
        }
        let Some(model) = self.model.upgrade() else {
            return false;
        };
        if model.is_expanded() {
            return false;
        }

        let half = button_diameter / 2.0;
        let new_x = clamp_to_extent(x, half, viewport_width);
        let new_y = clamp_to_extent(y, half, viewport_height);
        self.drag_to(new_x, new_y);
        true
    }

    /// Current tool as seen by the model, `None` if the model is gone.
    pub fn current_tool(&self) -> ToolKind {
        self.model
            .upgrade()
            .map_or(ToolKind::None, |m| m.current_tool())
    }

    pub fn is_expanded(&self) -> bool {
        self.model.upgrade().is_some_and(|m| m.is_expanded())
    }

    /// Detaches from the model. Safe to call repeatedly; must be called by
    /// the host before the controller is discarded.
    pub fn cleanup(&self) {
        if let (Some(model), Some(me)) = (self.model.upgrade(), self.weak_self.upgrade()) {
            let observer: Rc<dyn Observer<StateEvent>> = me;
            model.detach(&observer);
        }
    }
}

impl Observer<StateEvent> for PanelController {
    fn update(&self, event: &StateEvent) {
        let listener = self.listener.borrow();
        let Some(listener) = listener.as_deref() else {
            return;
        };

        match event {
            StateEvent::Tool(tool) => listener.on_tool_changed(*tool),
            StateEvent::Expansion(expanded) => listener.on_expansion_changed(*expanded),
            StateEvent::Position { x, y } => listener.on_position_changed(*x, *y),
            StateEvent::Resync => {
                // Re-read everything and fire both granular callbacks so a
                // consumer that missed earlier events converges on current
                // state.
                if let Some(model) = self.model.upgrade() {
                    listener.on_tool_changed(model.current_tool());
                    listener.on_expansion_changed(model.is_expanded());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Callback {
        Tool(ToolKind),
        Expansion(bool),
        Position(f32, f32),
    }

    struct RecordingListener {
        calls: Rc<RefCell<Vec<Callback>>>,
    }

    impl PanelListener for RecordingListener {
        fn on_tool_changed(&self, tool: ToolKind) {
            self.calls.borrow_mut().push(Callback::Tool(tool));
        }

        fn on_expansion_changed(&self, expanded: bool) {
            self.calls.borrow_mut().push(Callback::Expansion(expanded));
        }

        fn on_position_changed(&self, x: f32, y: f32) {
            self.calls.borrow_mut().push(Callback::Position(x, y));
        }
    }

    fn wired_controller() -> (Rc<ToolModel>, Rc<PanelController>, Rc<RefCell<Vec<Callback>>>) {
        let model = Rc::new(ToolModel::new());
        let controller = PanelController::new(&model);
        let calls = Rc::new(RefCell::new(Vec::new()));
        controller.set_listener(Box::new(RecordingListener {
            calls: calls.clone(),
        }));
        (model, controller, calls)
    }

    #[test]
    fn select_tool_while_expanded_collapses_after_tool_change() {
        let (model, controller, calls) = wired_controller();
        model.set_expanded(true);
        calls.borrow_mut().clear();

        controller.select_tool(ToolKind::ColorBrush);

        assert_eq!(
            *calls.borrow(),
            vec![
                Callback::Tool(ToolKind::ColorBrush),
                Callback::Expansion(false)
            ]
        );
        assert!(!model.is_expanded());
    }

    #[test]
    fn select_tool_while_collapsed_leaves_expansion_alone() {
        let (_model, controller, calls) = wired_controller();

        controller.select_tool(ToolKind::Eraser);

        assert_eq!(*calls.borrow(), vec![Callback::Tool(ToolKind::Eraser)]);
    }

    #[test]
    fn drag_clamps_pointer_to_viewport() {
        let (model, controller, _calls) = wired_controller();

        assert!(controller.handle_drag(PointerPhase::Move, 500.0, -50.0, 300.0, 300.0, 48.0));
        assert_eq!(model.position(), (276.0, 24.0));
    }

    #[test]
    fn drag_ignored_while_expanded_or_off_phase() {
        let (model, controller, _calls) = wired_controller();

        assert!(!controller.handle_drag(PointerPhase::Down, 10.0, 10.0, 300.0, 300.0, 48.0));
        assert!(!controller.handle_drag(PointerPhase::Up, 10.0, 10.0, 300.0, 300.0, 48.0));

        model.set_expanded(true);
        assert!(!controller.handle_drag(PointerPhase::Move, 10.0, 10.0, 300.0, 300.0, 48.0));
        assert_eq!(model.position(), (0.0, 0.0));
    }

    #[test]
    fn drag_with_tiny_viewport_picks_lower_bound() {
        let (model, controller, _calls) = wired_controller();

        assert!(controller.handle_drag(PointerPhase::Move, 5.0, 5.0, 10.0, 10.0, 48.0));
        assert_eq!(model.position(), (24.0, 24.0));
    }

    #[test]
    fn resync_fires_both_callbacks_from_current_state() {
        let (model, _controller, calls) = wired_controller();
        model.set_current_tool(ToolKind::Undo);
        model.set_expanded(true);
        calls.borrow_mut().clear();

        model.reset();

        assert_eq!(
            *calls.borrow(),
            vec![Callback::Tool(ToolKind::None), Callback::Expansion(false)]
        );
    }

    #[test]
    fn missing_listener_is_a_valid_configuration() {
        let model = Rc::new(ToolModel::new());
        let controller = PanelController::new(&model);

        controller.select_tool(ToolKind::Select);
        controller.toggle_expansion();
        assert_eq!(controller.current_tool(), ToolKind::Select);
        assert!(controller.is_expanded());
    }

    #[test]
    fn cleanup_is_idempotent() {
        let (model, controller, calls) = wired_controller();

        controller.cleanup();
        controller.cleanup();
        assert_eq!(model.observer_count(), 0);

        model.set_expanded(true);
        assert!(calls.borrow().is_empty());
    }
}
