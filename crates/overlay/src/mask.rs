//! Dimmed mask around the selection
//!
//! The overlay dims everything except the selection by drawing four strips:
//! `top` and `bottom` span the full screen width, `left` and `right` fill the
//! band beside the selection. Together with the selection they tile the
//! screen without overlap.

use capture::Rect;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaskGeometry {
    pub top: Rect,
    pub bottom: Rect,
    pub left: Rect,
    pub right: Rect,
}

impl MaskGeometry {
    /// Compute the strips for `selection`, which must lie inside `bounds`.
    /// Strip sizes are clamped to zero.
    pub fn compute(bounds: Rect, selection: Rect) -> Self {
        let top = Rect::from_edges(bounds.x, bounds.y, bounds.right(), selection.y);
        let bottom = Rect::from_edges(bounds.x, selection.bottom(), bounds.right(), bounds.bottom());
        let left = Rect::from_edges(bounds.x, selection.y, selection.x, selection.bottom());
        let right = Rect::from_edges(selection.right(), selection.y, bounds.right(), selection.bottom());

        Self { top, bottom, left, right }
    }

    pub fn strips(&self) -> [Rect; 4] {
        [self.top, self.bottom, self.left, self.right]
    }

    /// Total dimmed area
    pub fn area(&self) -> u64 {
        self.strips().iter().map(Rect::area).sum()
    }
}
