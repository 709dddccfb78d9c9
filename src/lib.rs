//! Collapsible drawing-tool side panel core.
//!
//! Implements the model/controller/view triad behind a floating, expandable
//! tool palette: an observable [`model::ToolModel`] as the single source of
//! truth, a [`controller::PanelController`] translating pointer input and
//! commands into model mutations, and an animated [`panel::SidePanel`] that
//! re-derives its geometry from animation progress. Hosts supply icon
//! handles, viewport sizes, and a frame clock; rendering and the surrounding
//! application shell stay on the host's side of the boundary.
//!
//! Everything runs on one logical UI thread (`Rc`, not `Arc`); observers must
//! detach before they are discarded.

pub mod config;
pub mod controller;
pub mod model;
pub mod observer;
pub mod panel;
pub mod util;

pub use config::PanelConfig;
pub use controller::{PanelController, PanelListener, PointerPhase};
pub use model::{StateEvent, ToolKind, ToolModel};
pub use panel::{IconHandle, PanelIcons, PanelPhase, PaletteButton, SidePanel};
