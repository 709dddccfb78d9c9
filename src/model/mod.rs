//! Tool state model.
//!
//! This module is the single source of truth for the selected drawing tool,
//! the panel's expansion flag, and the free-floating panel position. Mutators
//! publish [`StateEvent`]s through the observer core; the controller and the
//! animated panel subscribe and react.

pub mod event;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use event::StateEvent;
pub use state::ToolModel;
pub use tool::{ParseToolError, ToolKind};
