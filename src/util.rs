//! Geometry helpers shared by the controller and the panel layout.

/// Axis-aligned rectangle in the host's float UI space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the rectangle has a positive area.
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Clamps a center coordinate so a circle of diameter `2 * half` stays inside
/// `[0, extent]`.
///
/// Degenerate inputs resolve deterministically instead of producing an
/// inverted range: when the extent is smaller than the diameter the lower
/// bound wins, and a negative diameter clamps `half` to zero.
pub fn clamp_to_extent(value: f32, half: f32, extent: f32) -> f32 {
    let half = half.max(0.0);
    let upper = (extent - half).max(half);
    value.clamp(half, upper)
}
