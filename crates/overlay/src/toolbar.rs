//! Floating toolbar placement

use crate::policy::SelectionPolicy;
use capture::Rect;

/// Where the toolbar goes once a selection is committed.
///
/// The toolbar sits below-right of the selection and flips to the other side
/// of an axis when it would come within `flip_threshold` of that screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarAnchor {
    pub x: i32,
    pub y: i32,
    pub flip_left: bool,
    pub flip_top: bool,
}

impl ToolbarAnchor {
    pub fn compute(selection: Rect, bounds: Rect, policy: &SelectionPolicy) -> Self {
        let w = policy.toolbar_width as i64;
        let h = policy.toolbar_height as i64;
        let margin = policy.margin as i64;
        let threshold = policy.flip_threshold as i64;
        let (left, top) = (bounds.x as i64, bounds.y as i64);
        let (right, bottom) = (bounds.right() as i64, bounds.bottom() as i64);

        let mut x = selection.right() as i64 + margin;
        let mut y = selection.bottom() as i64 + margin;
        let mut flip_left = false;
        let mut flip_top = false;

        if x + w > right - threshold {
            x = selection.x as i64 - w - margin;
            flip_left = true;
        }

        if y + h > bottom - threshold {
            y = selection.y as i64 - h - margin;
            flip_top = true;
        }

        Self {
            x: clamp_axis(x, left, right - w),
            y: clamp_axis(y, top, bottom - h),
            flip_left,
            flip_top,
        }
    }
}

/// Clamp with the lower edge winning when the toolbar is larger than the screen
fn clamp_axis(value: i64, min: i64, max: i64) -> i32 {
    // min is a screen edge and max never exceeds the far edge, both in i32
    value.min(max).max(min) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_placement_is_below_right() {
        let anchor = ToolbarAnchor::compute(
            Rect::new(100, 100, 200, 150),
            Rect::new(0, 0, 1920, 1080),
            &SelectionPolicy::default(),
        );
        assert_eq!(anchor, ToolbarAnchor { x: 312, y: 262, flip_left: false, flip_top: false });
    }

    #[test]
    fn flips_left_near_right_edge() {
        let anchor = ToolbarAnchor::compute(
            Rect::new(1000, 100, 100, 100),
            Rect::new(0, 0, 1200, 800),
            &SelectionPolicy::default(),
        );
        assert!(anchor.flip_left);
        assert!(!anchor.flip_top);
        assert_eq!(anchor.x, 1000 - 340 - 12);
        assert_eq!(anchor.y, 212);
    }

    #[test]
    fn flips_up_near_bottom_edge() {
        let anchor = ToolbarAnchor::compute(
            Rect::new(100, 900, 200, 100),
            Rect::new(0, 0, 1920, 1080),
            &SelectionPolicy::default(),
        );
        assert!(anchor.flip_top);
        assert_eq!(anchor.y, 900 - 60 - 12);
    }

    #[test]
    fn clamped_on_negative_origin_desktop() {
        let bounds = Rect::new(-1920, 0, 3840, 1200);
        let anchor = ToolbarAnchor::compute(
            Rect::new(3000, 100, 100, 100),
            bounds,
            &SelectionPolicy::default(),
        );
        assert!(anchor.flip_left);
        assert!((-1920..=-1920 + 3840 - 340).contains(&anchor.x));
        assert!((0..=1200 - 60).contains(&anchor.y));
        assert_eq!(anchor.x, 1580);
    }

    #[test]
    fn flipped_past_left_edge_is_pulled_back() {
        let anchor = ToolbarAnchor::compute(
            Rect::new(0, 0, 1100, 800),
            Rect::new(0, 0, 1200, 800),
            &SelectionPolicy::default(),
        );
        assert!(anchor.flip_left && anchor.flip_top);
        assert_eq!((anchor.x, anchor.y), (0, 0));
    }

    #[test]
    fn toolbar_wider_than_screen_pins_to_origin() {
        let policy = SelectionPolicy { toolbar_width: 500, ..Default::default() };
        let anchor = ToolbarAnchor::compute(
            Rect::new(10, 10, 50, 50),
            Rect::new(-20, 0, 300, 800),
            &policy,
        );
        assert_eq!(anchor.x, -20);
    }

    #[test]
    fn screen_at_coordinate_limits_stays_in_range() {
        let bounds = Rect::new(i32::MAX - 1000, i32::MIN, 1000, 500);
        let anchor = ToolbarAnchor::compute(
            Rect::new(i32::MAX - 50, i32::MIN + 400, 50, 100),
            bounds,
            &SelectionPolicy::default(),
        );
        assert!(anchor.flip_left && anchor.flip_top);
        assert_eq!(anchor.x, i32::MAX - 50 - 340 - 12);
        assert_eq!(anchor.y, i32::MIN + 400 - 60 - 12);
    }
}
