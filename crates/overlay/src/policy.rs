//! Tunable thresholds for selection and toolbar placement

use serde::{Deserialize, Serialize};

/// Minimum selection size in both dimensions
pub const MIN_SELECTION_SIZE: u32 = 10;

/// Gap between selection and toolbar
pub const TOOLBAR_MARGIN: i32 = 12;

/// Distance from the screen edge at which the toolbar flips sides
pub const TOOLBAR_FLIP_THRESHOLD: i32 = 100;

pub const TOOLBAR_WIDTH: u32 = 340;
pub const TOOLBAR_HEIGHT: u32 = 60;

/// Selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionPolicy {
    pub min_size: u32,
    pub margin: i32,
    pub flip_threshold: i32,
    pub toolbar_width: u32,
    pub toolbar_height: u32,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            min_size: MIN_SELECTION_SIZE,
            margin: TOOLBAR_MARGIN,
            flip_threshold: TOOLBAR_FLIP_THRESHOLD,
            toolbar_width: TOOLBAR_WIDTH,
            toolbar_height: TOOLBAR_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let policy: SelectionPolicy = serde_json::from_str(r#"{ "min_size": 4 }"#).unwrap();
        assert_eq!(policy.min_size, 4);
        assert_eq!(policy.margin, TOOLBAR_MARGIN);
        assert_eq!(policy.flip_threshold, TOOLBAR_FLIP_THRESHOLD);
        assert_eq!((policy.toolbar_width, policy.toolbar_height), (340, 60));
    }
}
