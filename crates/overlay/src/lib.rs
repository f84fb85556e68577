//! Overlay module for SnipShot
//!
//! Turns pointer and key events into a validated capture rectangle, together
//! with the dimmed-mask geometry and the toolbar position the presentation
//! layer draws. No rendering and no I/O happen here.

pub mod engine;
pub mod mask;
pub mod notify;
pub mod policy;
pub mod selection;
pub mod toolbar;

pub use engine::{PointerState, SelectionEngine, SelectionState, SessionHandle};
pub use mask::MaskGeometry;
pub use notify::{ChannelListener, SelectionEvent, SelectionListener};
pub use policy::SelectionPolicy;
pub use toolbar::ToolbarAnchor;

use capture::Rect;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Invalid screen bounds: {0:?}")]
    InvalidBounds(Rect),

    #[error("No active selection session")]
    NoActiveSession,
}

pub type OverlayResult<T> = Result<T, OverlayError>;

/// Selection committed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedSelection {
    /// Virtual-screen coordinates
    pub rect: Rect,
    /// Relative to the screen bounds origin, for the capture provider
    pub local: Rect,
    pub toolbar: ToolbarAnchor,
}
