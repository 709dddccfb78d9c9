//! Observable tool state.

use std::cell::Cell;
use std::rc::Rc;

use crate::observer::{Observer, Subject};

use super::event::StateEvent;
use super::tool::ToolKind;

/// Single source of truth for the panel's tool selection, expansion flag,
/// and floating position.
///
/// Created once per panel-hosting screen and shared as `Rc<ToolModel>`; the
/// controller and the panel hold `Weak` references and must outlive neither
/// the model nor their own attachment (detach before discard, see
/// [`crate::observer`]).
///
/// Every setter is a no-op when the new value equals the current one: no
/// mutation, no notification. A setter that does change state publishes
/// exactly one event before it returns. Fields live in `Cell`s so mutation
/// completes before dispatch and observers can call getters re-entrantly.
pub struct ToolModel {
    subject: Subject<StateEvent>,
    current_tool: Cell<ToolKind>,
    expanded: Cell<bool>,
    position: Cell<(f32, f32)>,
}

impl ToolModel {
    /// Creates a model with no tool selected, collapsed, at the origin.
    pub fn new() -> Self {
        Self {
            subject: Subject::new(),
            current_tool: Cell::new(ToolKind::None),
            expanded: Cell::new(false),
            position: Cell::new((0.0, 0.0)),
        }
    }

    pub fn current_tool(&self) -> ToolKind {
        self.current_tool.get()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded.get()
    }

    pub fn position(&self) -> (f32, f32) {
        self.position.get()
    }

    /// Selects a tool, notifying observers only if the selection changed.
    pub fn set_current_tool(&self, tool: ToolKind) {
        if self.current_tool.get() != tool {
            self.current_tool.set(tool);
            self.subject.notify(&StateEvent::Tool(tool));
        }
    }

    /// Sets the expansion flag, notifying observers only on change.
    pub fn set_expanded(&self, expanded: bool) {
        if self.expanded.get() != expanded {
            self.expanded.set(expanded);
            self.subject.notify(&StateEvent::Expansion(expanded));
        }
    }

    /// Flips the expansion flag.
    pub fn toggle_expanded(&self) {
        self.set_expanded(!self.expanded.get());
    }

    /// Moves the panel, notifying observers if either component differs.
    ///
    /// No range validation happens here; clamping against the viewport is the
    /// controller's job before it calls in.
    pub fn set_position(&self, x: f32, y: f32) {
        let (cur_x, cur_y) = self.position.get();
        if cur_x != x || cur_y != y {
            self.position.set((x, y));
            self.subject.notify(&StateEvent::Position { x, y });
        }
    }

    /// Resets to no tool selected and collapsed, leaving position untouched.
    ///
    /// Always publishes exactly one [`StateEvent::Resync`], even when nothing
    /// actually changed, so observers re-read the full state.
    pub fn reset(&self) {
        self.current_tool.set(ToolKind::None);
        self.expanded.set(false);
        log::debug!("Tool model reset");
        self.subject.notify(&StateEvent::Resync);
    }

    pub fn attach(&self, observer: Rc<dyn Observer<StateEvent>>) {
        self.subject.attach(observer);
    }

    pub fn detach(&self, observer: &Rc<dyn Observer<StateEvent>>) {
        self.subject.detach(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.subject.observer_count()
    }
}

impl Default for ToolModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder {
        events: RefCell<Vec<StateEvent>>,
    }

    impl Recorder {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                events: RefCell::new(Vec::new()),
            })
        }

        fn events(&self) -> Vec<StateEvent> {
            self.events.borrow().clone()
        }
    }

    impl Observer<StateEvent> for Recorder {
        fn update(&self, event: &StateEvent) {
            self.events.borrow_mut().push(*event);
        }
    }

    fn model_with_recorder() -> (Rc<ToolModel>, Rc<Recorder>) {
        let model = Rc::new(ToolModel::new());
        let recorder = Recorder::new();
        model.attach(recorder.clone());
        (model, recorder)
    }

    #[test]
    fn repeated_tool_selection_notifies_once() {
        let (model, recorder) = model_with_recorder();

        model.set_current_tool(ToolKind::Eraser);
        model.set_current_tool(ToolKind::Eraser);

        assert_eq!(recorder.events(), vec![StateEvent::Tool(ToolKind::Eraser)]);
        assert_eq!(model.current_tool(), ToolKind::Eraser);
    }

    #[test]
    fn notification_count_tracks_value_changes_not_calls() {
        let (model, recorder) = model_with_recorder();

        model.set_current_tool(ToolKind::Select);
        model.set_current_tool(ToolKind::Select);
        model.set_current_tool(ToolKind::Undo);
        model.set_current_tool(ToolKind::Undo);
        model.set_current_tool(ToolKind::Select);

        assert_eq!(recorder.events().len(), 3);
    }

    #[test]
    fn double_toggle_restores_flag_with_two_notifications() {
        let (model, recorder) = model_with_recorder();

        model.toggle_expanded();
        model.toggle_expanded();

        assert!(!model.is_expanded());
        assert_eq!(
            recorder.events(),
            vec![StateEvent::Expansion(true), StateEvent::Expansion(false)]
        );
    }

    #[test]
    fn position_notifies_when_either_component_differs() {
        let (model, recorder) = model_with_recorder();

        model.set_position(10.0, 20.0);
        model.set_position(10.0, 20.0);
        model.set_position(10.0, 25.0);

        assert_eq!(recorder.events().len(), 2);
        assert_eq!(model.position(), (10.0, 25.0));
    }

    #[test]
    fn reset_always_emits_one_resync() {
        let (model, recorder) = model_with_recorder();

        model.set_current_tool(ToolKind::ColorBrush);
        model.set_expanded(true);
        model.set_position(5.0, 5.0);
        let before = recorder.events().len();

        model.reset();
        assert_eq!(recorder.events().len(), before + 1);
        assert_eq!(recorder.events().last(), Some(&StateEvent::Resync));
        assert_eq!(model.current_tool(), ToolKind::None);
        assert!(!model.is_expanded());
        // Position survives a reset.
        assert_eq!(model.position(), (5.0, 5.0));

        // Resync fires even when nothing changed.
        model.reset();
        assert_eq!(recorder.events().len(), before + 2);
    }

    #[test]
    fn duplicate_attach_yields_single_delivery() {
        let (model, recorder) = model_with_recorder();
        model.attach(recorder.clone());
        assert_eq!(model.observer_count(), 1);

        model.set_expanded(true);
        assert_eq!(recorder.events().len(), 1);
    }
}
