//! Selection rectangle arithmetic

use capture::{Point, Rect};

/// Calculate selection rectangle from drag points.
///
/// With `locked` the rectangle is squared to the shorter side and grows away
/// from the anchor, which stays fixed.
pub fn calc_selection_rect(anchor: Point, current: Point, locked: bool) -> Rect {
    // i64 so spans wider than i32::MAX stay exact
    let (ax, ay) = (anchor.x as i64, anchor.y as i64);
    let (cx, cy) = (current.x as i64, current.y as i64);

    let mut x = ax.min(cx);
    let mut y = ay.min(cy);
    let mut width = (ax - cx).abs();
    let mut height = (ay - cy).abs();

    if locked {
        let size = width.min(height);
        width = size;
        height = size;
        if cx < ax {
            x = ax - size;
        }
        if cy < ay {
            y = ay - size;
        }
    }

    // x and y lie between anchor and current, sizes fit in u32
    Rect::new(x as i32, y as i32, width as u32, height as u32)
}

/// Clamp a rectangle into the screen bounds.
///
/// The origin is clamped onto the screen first, then each size is cut so the
/// far edge does not pass the screen edge. The size is never grown, so a
/// drag past the left or top edge keeps its width and height where they
/// still fit. A rectangle entirely outside collapses to zero size on the
/// nearest edge.
pub fn clamp_to_bounds(rect: Rect, bounds: Rect) -> Rect {
    let (x, width) = clamp_span(rect.x, rect.width, bounds.x, bounds.right());
    let (y, height) = clamp_span(rect.y, rect.height, bounds.y, bounds.bottom());
    Rect::new(x, y, width, height)
}

fn clamp_span(start: i32, len: u32, min: i32, max: i32) -> (i32, u32) {
    let start = start.clamp(min, max);
    let room = (max as i64 - start as i64) as u32;
    (start, len.min(room))
}

/// Check if selection is large enough to commit
pub fn is_valid_selection(rect: &Rect, min_size: u32) -> bool {
    rect.width >= min_size && rect.height >= min_size
}
