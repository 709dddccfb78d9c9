//! Panel geometry derivation.
//!
//! Layout is a pure function of the current width, the host-supplied height,
//! and whether the interior is visible. It is recomputed on every width
//! change, mid-animation or at rest; nothing here caches or animates.

use crate::config::PanelConfig;
use crate::util::Rect;

/// Geometry of the panel's children at one particular width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    /// Toggle affordance: vertically centered, pinned to the trailing edge.
    pub toggle: Rect,
    /// Interior children; `None` whenever they are hidden, so collapsed
    /// content is neither visible nor hit-testable.
    pub interior: Option<InteriorLayout>,
}

/// Geometry of the expanded interior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteriorLayout {
    /// Action (upload-style) button at the top
    pub action_button: Rect,
    /// Separator beneath the action button
    pub top_divider: Rect,
    /// The six tool slots, stacked vertically in palette order
    pub tool_buttons: [Rect; 6],
    /// Separator beneath the tool stack
    pub bottom_divider: Rect,
}

/// Derives child geometry for the given width.
///
/// The interior content width is the current width minus the toggle diameter
/// and padding, clamped to zero so a mid-collapse width never produces
/// negative rectangles. Buttons are squares at `button_scale` of the content
/// width, horizontally centered.
pub fn compute_layout(
    width: f32,
    height: f32,
    config: &PanelConfig,
    interior_visible: bool,
) -> PanelLayout {
    let toggle_size = config.toggle_diameter;
    let toggle = Rect::new(
        (width - toggle_size).max(0.0),
        ((height - toggle_size) / 2.0).max(0.0),
        toggle_size,
        toggle_size,
    );

    if !interior_visible {
        return PanelLayout {
            toggle,
            interior: None,
        };
    }

    let padding = config.padding;
    let divider = config.divider_height;
    let content_width = (width - toggle_size - padding).max(0.0);
    let button = content_width * config.button_scale;
    let button_left = (content_width - button) / 2.0;

    let mut y = padding;
    let action_button = Rect::new(button_left, y, button, button);
    y += button + padding;

    let top_divider = Rect::new(0.0, y, content_width, divider);
    y += divider + padding;

    let stack_top = y;
    let stack_height = (height - stack_top - divider - 2.0 * padding).max(0.0);
    let mut tool_buttons = [Rect::new(0.0, 0.0, 0.0, 0.0); 6];
    for (i, slot) in tool_buttons.iter_mut().enumerate() {
        let top = stack_top + i as f32 * (button + padding);
        *slot = Rect::new(button_left, top, button, button);
    }

    let bottom_divider = Rect::new(0.0, stack_top + stack_height + padding, content_width, divider);

    PanelLayout {
        toggle,
        interior: Some(InteriorLayout {
            action_button,
            top_divider,
            tool_buttons,
            bottom_divider,
        }),
    }
}
