//! Collapsible side panel state machine.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Instant;

use crate::config::PanelConfig;
use crate::controller::PanelController;
use crate::model::{StateEvent, ToolKind, ToolModel};
use crate::observer::Observer;

use super::animation::WidthTransition;
use super::button::{IconHandle, PaletteButton};
use super::layout::{PanelLayout, compute_layout};

/// Presentation state of the panel.
///
/// `Expanding` and `Collapsing` are the transitional states while a width
/// animation runs; the panel only ever moves between them in response to
/// model notifications, never on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    /// Fully closed; only the toggle affordance is visible
    Collapsed,
    /// Width animating toward the expanded width
    Expanding,
    /// Fully open
    Expanded,
    /// Width animating back down to the toggle diameter
    Collapsing,
}

/// Icon handles for everything the panel presents.
#[derive(Debug, Clone, Copy)]
pub struct PanelIcons {
    /// Toggle affordance while collapsed (points outward)
    pub toggle_outward: IconHandle,
    /// Toggle affordance while expanded (points inward)
    pub toggle_inward: IconHandle,
    /// Action button at the top of the interior
    pub action: IconHandle,
    /// One icon per palette tool, in [`ToolKind::PALETTE`] order
    pub tools: [IconHandle; 6],
}

struct PanelInner {
    phase: PanelPhase,
    current_width: f32,
    height: f32,
    interior_visible: bool,
    toggle_icon: IconHandle,
    transition: Option<WidthTransition>,
    layout: PanelLayout,
}

/// The animated panel view.
///
/// Subscribes to the tool model and reacts to expansion changes by running a
/// width transition; geometry is re-derived from the current width on every
/// animation tick. Input flows the other way through the controller: the
/// toggle affordance and the tool buttons request mutations, and the panel
/// only animates once the resulting notification arrives.
///
/// The host is responsible for three things: supplying the panel height from
/// its layout pass ([`SidePanel::set_height`]), driving animation ticks from
/// its frame clock ([`SidePanel::advance_animation`]), and calling
/// [`SidePanel::teardown`] before dropping its handle.
pub struct SidePanel {
    model: Weak<ToolModel>,
    controller: Rc<PanelController>,
    weak_self: Weak<SidePanel>,
    config: PanelConfig,
    icons: PanelIcons,
    tool_buttons: Vec<PaletteButton>,
    action_button: PaletteButton,
    inner: RefCell<PanelInner>,
}

impl SidePanel {
    /// Creates a collapsed panel observing `model`, with its buttons wired
    /// through `controller`.
    pub fn new(
        model: &Rc<ToolModel>,
        controller: &Rc<PanelController>,
        mut config: PanelConfig,
        icons: PanelIcons,
    ) -> Rc<Self> {
        config.validate_and_clamp();

        let tool_buttons = ToolKind::PALETTE
            .iter()
            .zip(icons.tools)
            .map(|(&kind, icon)| {
                let button = PaletteButton::new(icon);
                button.set_tool(kind, icon);
                let controller = Rc::downgrade(controller);
                button.set_tool_handler(move |kind| {
                    if let Some(controller) = controller.upgrade() {
                        controller.select_tool(kind);
                    }
                });
                button
            })
            .collect();

        let inner = PanelInner {
            phase: PanelPhase::Collapsed,
            current_width: config.toggle_diameter,
            height: 0.0,
            interior_visible: false,
            toggle_icon: icons.toggle_outward,
            transition: None,
            layout: compute_layout(config.toggle_diameter, 0.0, &config, false),
        };

        let panel = Rc::new_cyclic(|weak_self| Self {
            model: Rc::downgrade(model),
            controller: controller.clone(),
            weak_self: weak_self.clone(),
            config,
            icons,
            tool_buttons,
            action_button: PaletteButton::new(icons.action),
            inner: RefCell::new(inner),
        });
        model.attach(panel.clone());
        panel
    }

    /// Toggle affordance pressed. Routes through the controller; the panel
    /// itself animates only once the model notification comes back.
    pub fn press_toggle(&self) {
        self.controller.toggle_expansion();
    }

    /// Activates the palette button carrying `kind`, if any.
    pub fn press_tool(&self, kind: ToolKind) {
        if let Some(button) = self.tool_button(kind) {
            button.activate();
        }
    }

    /// Activates the action button.
    pub fn press_action(&self) {
        self.action_button.activate();
    }

    /// Registers what the action button does (e.g. open an image picker).
    /// The panel neither knows nor cares.
    pub fn set_action_handler(&self, handler: impl Fn() + 'static) {
        self.action_button.set_action_handler(handler);
    }

    /// The palette button for `kind`, if it is one of the six tools.
    pub fn tool_button(&self, kind: ToolKind) -> Option<&PaletteButton> {
        self.tool_buttons.iter().find(|b| b.kind() == Some(kind))
    }

    pub fn action_button(&self) -> &PaletteButton {
        &self.action_button
    }

    /// Updates the host-supplied panel height and recomputes geometry.
    pub fn set_height(&self, height: f32) {
        let mut inner = self.inner.borrow_mut();
        if inner.height != height {
            inner.height = height;
            self.relayout(&mut inner);
        }
    }

    /// Advances the width animation to `now`.
    ///
    /// Updates the stored width, recomputes geometry, and completes the phase
    /// once progress reaches 1.0: expansion flips the toggle icon inward;
    /// collapse hides the interior children and flips the icon outward.
    ///
    /// # Returns
    /// `true` while a transition is still running (the host should keep
    /// scheduling ticks), `false` at rest or after teardown.
    pub fn advance_animation(&self, now: Instant) -> bool {
        let mut inner = self.inner.borrow_mut();
        let Some(transition) = inner.transition else {
            return false;
        };

        inner.current_width = transition.width_at(now);
        if transition.finished(now) {
            inner.transition = None;
            match inner.phase {
                PanelPhase::Expanding => {
                    inner.phase = PanelPhase::Expanded;
                    inner.toggle_icon = self.icons.toggle_inward;
                    log::debug!("Panel expanded");
                }
                PanelPhase::Collapsing => {
                    inner.phase = PanelPhase::Collapsed;
                    inner.interior_visible = false;
                    inner.toggle_icon = self.icons.toggle_outward;
                    log::debug!("Panel collapsed");
                }
                _ => {}
            }
        }

        self.relayout(&mut inner);
        inner.transition.is_some()
    }

    pub fn phase(&self) -> PanelPhase {
        self.inner.borrow().phase
    }

    pub fn current_width(&self) -> f32 {
        self.inner.borrow().current_width
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().transition.is_some()
    }

    /// Snapshot of the current child geometry.
    pub fn layout(&self) -> PanelLayout {
        self.inner.borrow().layout
    }

    /// Icon currently shown on the toggle affordance.
    pub fn toggle_icon(&self) -> IconHandle {
        self.inner.borrow().toggle_icon
    }

    /// Cancels any running transition and detaches from the model.
    ///
    /// Safe to call repeatedly. A tick arriving after teardown is a no-op.
    pub fn teardown(&self) {
        self.inner.borrow_mut().transition = None;
        if let (Some(model), Some(me)) = (self.model.upgrade(), self.weak_self.upgrade()) {
            let observer: Rc<dyn Observer<StateEvent>> = me;
            model.detach(&observer);
        }
    }

    fn apply_expansion(&self, expanded: bool, now: Instant) {
        let mut inner = self.inner.borrow_mut();
        if expanded {
            if matches!(inner.phase, PanelPhase::Expanded | PanelPhase::Expanding) {
                return;
            }
            // Replacing the transition cancels any in-flight collapse; the
            // new one starts from the current, possibly partial, width.
            inner.phase = PanelPhase::Expanding;
            inner.interior_visible = true;
            inner.transition = Some(WidthTransition::new(
                inner.current_width,
                self.config.expanded_width,
                now,
                self.config.duration(),
            ));
            log::debug!("Panel expanding from width {:.1}", inner.current_width);
        } else {
            if matches!(inner.phase, PanelPhase::Collapsed | PanelPhase::Collapsing) {
                return;
            }
            inner.phase = PanelPhase::Collapsing;
            inner.transition = Some(WidthTransition::new(
                inner.current_width,
                self.config.toggle_diameter,
                now,
                self.config.duration(),
            ));
            log::debug!("Panel collapsing from width {:.1}", inner.current_width);
        }
        self.relayout(&mut inner);
    }

    fn relayout(&self, inner: &mut PanelInner) {
        inner.layout = compute_layout(
            inner.current_width,
            inner.height,
            &self.config,
            inner.interior_visible,
        );
    }
}

impl Observer<StateEvent> for SidePanel {
    fn update(&self, event: &StateEvent) {
        match event {
            StateEvent::Expansion(expanded) => self.apply_expansion(*expanded, Instant::now()),
            StateEvent::Resync => {
                if let Some(model) = self.model.upgrade() {
                    self.apply_expansion(model.is_expanded(), Instant::now());
                }
            }
            // Tool and position changes do not affect panel chrome.
            StateEvent::Tool(_) | StateEvent::Position { .. } => {}
        }
    }
}
