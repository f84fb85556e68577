//! Selection state machine
//!
//! One engine drives one selection session at a time. Pointer and key events
//! arrive on a single thread; each one updates the pointer state, recomputes
//! the selection and mask, and notifies the listener before returning.

use crate::{
    mask::MaskGeometry,
    notify::SelectionListener,
    policy::SelectionPolicy,
    selection::{calc_selection_rect, clamp_to_bounds, is_valid_selection},
    toolbar::ToolbarAnchor,
    CompletedSelection, OverlayError, OverlayResult,
};
use capture::{Point, Rect};

/// Engine state within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Waiting for a pointer-down
    Idle,
    /// Pointer held, selection follows it
    Dragging,
    /// Selection committed; terminal
    Completed,
    /// Session abandoned; terminal
    Cancelled,
}

impl SelectionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SelectionState::Completed | SelectionState::Cancelled)
    }
}

/// Identifies a selection session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionHandle(u64);

impl SessionHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Pointer tracking for the current drag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    pub anchor: Point,
    pub current: Point,
    pub dragging: bool,
    pub locked: bool,
}

struct Session {
    handle: SessionHandle,
    bounds: Rect,
    state: SelectionState,
    pointer: PointerState,
    selection: Option<(Rect, MaskGeometry)>,
    outcome: Option<CompletedSelection>,
}

/// Region selection engine
pub struct SelectionEngine<L> {
    policy: SelectionPolicy,
    listener: L,
    session: Option<Session>,
    next_id: u64,
}

impl<L: SelectionListener> SelectionEngine<L> {
    pub fn new(policy: SelectionPolicy, listener: L) -> Self {
        Self {
            policy,
            listener,
            session: None,
            next_id: 1,
        }
    }

    /// Begin a session over the given virtual screen.
    ///
    /// A session still in progress is cancelled first.
    pub fn start_session(&mut self, bounds: Rect) -> OverlayResult<SessionHandle> {
        if bounds.width == 0 || bounds.height == 0 {
            return Err(OverlayError::InvalidBounds(bounds));
        }

        if self.live_session().is_some() {
            tracing::debug!("replacing live session");
            self.cancel();
        }

        let handle = SessionHandle(self.next_id);
        self.next_id += 1;
        self.session = Some(Session {
            handle,
            bounds,
            state: SelectionState::Idle,
            pointer: PointerState::default(),
            selection: None,
            outcome: None,
        });

        tracing::debug!(session = handle.id(), ?bounds, "selection session started");
        Ok(handle)
    }

    pub fn on_pointer_down(&mut self, pos: Point) -> OverlayResult<()> {
        let session = self.live_session_mut()?;
        if session.state == SelectionState::Dragging {
            tracing::trace!(?pos, "pointer-down while dragging ignored");
            return Ok(());
        }

        session.pointer = PointerState {
            anchor: pos,
            current: pos,
            dragging: true,
            locked: false,
        };
        session.state = SelectionState::Dragging;
        tracing::trace!(session = session.handle.id(), ?pos, "drag started");

        self.update_selection();
        Ok(())
    }

    pub fn on_pointer_move(&mut self, pos: Point, aspect_locked: bool) -> OverlayResult<()> {
        let session = self.live_session_mut()?;
        session.pointer.current = pos;
        if session.state != SelectionState::Dragging {
            return Ok(());
        }

        session.pointer.locked = aspect_locked;
        self.update_selection();
        Ok(())
    }

    pub fn on_pointer_up(&mut self) -> OverlayResult<()> {
        let policy = self.policy;
        let session = self.live_session_mut()?;
        if session.state != SelectionState::Dragging {
            return Ok(());
        }

        session.pointer.dragging = false;
        let Some((rect, _)) = session.selection else {
            return Ok(());
        };

        if !is_valid_selection(&rect, policy.min_size) {
            tracing::debug!(?rect, min_size = policy.min_size, "selection too small");
            session.state = SelectionState::Idle;
            session.selection = None;
            self.listener.selection_too_small();
            return Ok(());
        }

        let completed = CompletedSelection {
            rect,
            local: rect.relative_to(session.bounds.origin()),
            toolbar: ToolbarAnchor::compute(rect, session.bounds, &policy),
        };
        session.state = SelectionState::Completed;
        session.outcome = Some(completed);

        tracing::debug!(session = session.handle.id(), ?completed, "selection completed");
        self.listener.selection_completed(&completed);
        Ok(())
    }

    pub fn on_escape(&mut self) -> OverlayResult<()> {
        let session = self.live_session_mut()?;
        if session.state != SelectionState::Dragging {
            self.cancel();
            return Ok(());
        }

        session.state = SelectionState::Idle;
        session.pointer.dragging = false;
        session.selection = None;
        tracing::trace!("drag discarded");
        self.listener.selection_cleared();
        Ok(())
    }

    /// Terminate the session from outside. No-op without a live session.
    pub fn cancel(&mut self) {
        let Some(session) = self.live_session_mut().ok() else {
            return;
        };

        session.state = SelectionState::Cancelled;
        session.pointer.dragging = false;
        session.selection = None;
        tracing::debug!(session = session.handle.id(), "selection session cancelled");
        self.listener.session_cancelled();
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// State of the most recent session, `None` before the first one
    pub fn state(&self) -> Option<SelectionState> {
        self.session.as_ref().map(|s| s.state)
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.session.as_ref().map(|s| s.bounds)
    }

    pub fn pointer(&self) -> Option<&PointerState> {
        self.session.as_ref().map(|s| &s.pointer)
    }

    /// Current selection in virtual-screen coordinates
    pub fn selection(&self) -> Option<Rect> {
        self.session.as_ref().and_then(|s| s.selection).map(|(rect, _)| rect)
    }

    pub fn mask(&self) -> Option<MaskGeometry> {
        self.session.as_ref().and_then(|s| s.selection).map(|(_, mask)| mask)
    }

    /// Committed selection, once the session is `Completed`
    pub fn outcome(&self) -> Option<&CompletedSelection> {
        self.session.as_ref().and_then(|s| s.outcome.as_ref())
    }

    fn live_session(&self) -> Option<&Session> {
        self.session.as_ref().filter(|s| !s.state.is_terminal())
    }

    fn live_session_mut(&mut self) -> OverlayResult<&mut Session> {
        self.session
            .as_mut()
            .filter(|s| !s.state.is_terminal())
            .ok_or(OverlayError::NoActiveSession)
    }

    fn update_selection(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let p = session.pointer;
        let rect = clamp_to_bounds(calc_selection_rect(p.anchor, p.current, p.locked), session.bounds);
        let mask = MaskGeometry::compute(session.bounds, rect);
        session.selection = Some((rect, mask));

        tracing::trace!(?rect, locked = p.locked, "selection updated");
        self.listener.selection_changed(rect, &mask);
    }
}
