//! Model change events.

use super::tool::ToolKind;

/// Payload published by [`super::ToolModel`] on every state change.
///
/// Observers match on the variant they care about and ignore the rest.
/// `Resync` carries no data: it instructs observers to re-read the full model
/// state instead of reacting to a single field, and is the recovery path for
/// consumers that may have missed earlier granular events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateEvent {
    /// The selected tool changed.
    Tool(ToolKind),
    /// The panel expansion flag changed.
    Expansion(bool),
    /// The free-floating panel position changed.
    Position { x: f32, y: f32 },
    /// Generic resync marker; re-read everything.
    Resync,
}
