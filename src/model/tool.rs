//! Drawing tool selection.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Drawing tool selection.
///
/// The active tool determines how the host canvas interprets pointer input.
/// `None` is the only "nothing selected" value; it is also the initial and
/// reset state. Selecting a tool is in scope here, applying it is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Connect two nodes with a new edge
    AddEdge,
    /// Delete an existing edge
    RemoveEdge,
    /// Freehand color brush
    ColorBrush,
    /// Erase strokes under the pointer
    Eraser,
    /// Select/move existing content
    Select,
    /// Undo the last canvas operation
    Undo,
    /// No tool active
    None,
}

impl ToolKind {
    /// The six selectable tools, in the order they appear in the panel.
    pub const PALETTE: [ToolKind; 6] = [
        ToolKind::AddEdge,
        ToolKind::RemoveEdge,
        ToolKind::ColorBrush,
        ToolKind::Eraser,
        ToolKind::Select,
        ToolKind::Undo,
    ];

    /// Stable lowercase name, usable as a config key.
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::AddEdge => "add-edge",
            ToolKind::RemoveEdge => "remove-edge",
            ToolKind::ColorBrush => "color-brush",
            ToolKind::Eraser => "eraser",
            ToolKind::Select => "select",
            ToolKind::Undo => "undo",
            ToolKind::None => "none",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a tool name from host configuration is unrecognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tool name '{0}'")]
pub struct ParseToolError(pub String);

impl FromStr for ToolKind {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add-edge" => Ok(ToolKind::AddEdge),
            "remove-edge" => Ok(ToolKind::RemoveEdge),
            "color-brush" => Ok(ToolKind::ColorBrush),
            "eraser" => Ok(ToolKind::Eraser),
            "select" => Ok(ToolKind::Select),
            "undo" => Ok(ToolKind::Undo),
            "none" => Ok(ToolKind::None),
            other => Err(ParseToolError(other.to_string())),
        }
    }
}
