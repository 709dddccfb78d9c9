//! Clickable palette button.

use std::cell::{Cell, RefCell};

use crate::model::ToolKind;

/// Opaque handle to a host-side icon resource.
///
/// The panel only stores and hands these back; resolving a handle to actual
/// pixels is the host's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconHandle(pub u32);

/// A single clickable unit in the panel.
///
/// A button plays one of two mutually exclusive roles, chosen at
/// configuration time:
///
/// - **Tool selector**: carries a [`ToolKind`] and fires the tool handler
///   with it on activation. `ToolKind::None` is a legitimate selectable
///   value here ("no drawing tool active").
/// - **Action button**: carries no tool kind and fires the parameterless
///   action handler on activation (e.g. the upload button).
///
/// Configuring a role overwrites the previous one. Activating a button with
/// no handler registered for its role does nothing.
pub struct PaletteButton {
    kind: Cell<Option<ToolKind>>,
    icon: Cell<IconHandle>,
    on_tool: RefCell<Option<Box<dyn Fn(ToolKind)>>>,
    on_action: RefCell<Option<Box<dyn Fn()>>>,
}

impl PaletteButton {
    /// Creates an unconfigured button in the action role.
    pub fn new(icon: IconHandle) -> Self {
        Self {
            kind: Cell::new(None),
            icon: Cell::new(icon),
            on_tool: RefCell::new(None),
            on_action: RefCell::new(None),
        }
    }

    /// Configures this button as a tool selector, clearing the action role.
    pub fn set_tool(&self, kind: ToolKind, icon: IconHandle) {
        self.kind.set(Some(kind));
        self.icon.set(icon);
    }

    /// Configures this button as an action button, clearing any tool kind.
    pub fn set_action(&self, icon: IconHandle) {
        self.kind.set(None);
        self.icon.set(icon);
    }

    /// Registers the capability fired when a tool-selector button activates.
    pub fn set_tool_handler(&self, handler: impl Fn(ToolKind) + 'static) {
        *self.on_tool.borrow_mut() = Some(Box::new(handler));
    }

    /// Registers the capability fired when an action button activates.
    pub fn set_action_handler(&self, handler: impl Fn() + 'static) {
        *self.on_action.borrow_mut() = Some(Box::new(handler));
    }

    /// Fires the capability matching the current role.
    pub fn activate(&self) {
        match self.kind.get() {
            Some(kind) => {
                if let Some(handler) = self.on_tool.borrow().as_ref() {
                    handler(kind);
                }
            }
            None => {
                if let Some(handler) = self.on_action.borrow().as_ref() {
                    handler();
                }
            }
        }
    }

    /// Tool kind for selector buttons, `None` for action buttons.
    pub fn kind(&self) -> Option<ToolKind> {
        self.kind.get()
    }

    pub fn icon(&self) -> IconHandle {
        self.icon.get()
    }

    pub fn is_action(&self) -> bool {
        self.kind.get().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn tool_role_fires_tool_handler_with_kind() {
        let button = PaletteButton::new(IconHandle(1));
        button.set_tool(ToolKind::Eraser, IconHandle(2));

        let selected = Rc::new(Cell::new(None));
        let sink = selected.clone();
        button.set_tool_handler(move |kind| sink.set(Some(kind)));

        button.activate();
        assert_eq!(selected.get(), Some(ToolKind::Eraser));
        assert_eq!(button.icon(), IconHandle(2));
        assert!(!button.is_action());
    }

    #[test]
    fn action_role_fires_action_handler() {
        let button = PaletteButton::new(IconHandle(7));

        let fired = Rc::new(Cell::new(0));
        let sink = fired.clone();
        button.set_action_handler(move || sink.set(sink.get() + 1));

        button.activate();
        button.activate();
        assert_eq!(fired.get(), 2);
        assert!(button.is_action());
    }

    #[test]
    fn roles_are_exclusive_and_overwrite_each_other() {
        let button = PaletteButton::new(IconHandle(0));

        let calls = Rc::new(RefCell::new(Vec::new()));
        let tool_sink = calls.clone();
        button.set_tool_handler(move |kind| tool_sink.borrow_mut().push(format!("tool:{kind}")));
        let action_sink = calls.clone();
        button.set_action_handler(move || action_sink.borrow_mut().push("action".to_string()));

        button.set_tool(ToolKind::Select, IconHandle(1));
        button.activate();
        button.set_action(IconHandle(2));
        button.activate();
        button.set_tool(ToolKind::Undo, IconHandle(3));
        button.activate();

        assert_eq!(*calls.borrow(), vec!["tool:select", "action", "tool:undo"]);
    }

    #[test]
    fn none_kind_is_still_a_tool_role() {
        let button = PaletteButton::new(IconHandle(0));
        button.set_tool(ToolKind::None, IconHandle(1));

        let selected = Rc::new(Cell::new(None));
        let sink = selected.clone();
        button.set_tool_handler(move |kind| sink.set(Some(kind)));

        button.activate();
        assert_eq!(selected.get(), Some(ToolKind::None));
        assert!(!button.is_action());
    }

    #[test]
    fn activation_without_handler_is_a_noop() {
        let button = PaletteButton::new(IconHandle(0));
        button.activate();
        button.set_tool(ToolKind::AddEdge, IconHandle(1));
        button.activate();
    }
}
