//! Animated side panel and its palette buttons.
//!
//! The panel is the view layer of the triad: it reacts to model change
//! notifications, never mutates the model directly, and re-derives its child
//! geometry from the current animation width on every tick.

pub mod animation;
pub mod button;
pub mod layout;
pub mod sheet;

// Re-export commonly used types at module level
pub use button::{IconHandle, PaletteButton};
pub use layout::{InteriorLayout, PanelLayout};
pub use sheet::{PanelIcons, PanelPhase, SidePanel};
