//! Notifications from the engine to the presentation layer

use crate::mask::MaskGeometry;
use crate::CompletedSelection;
use capture::Rect;
use crossbeam_channel::Sender;

/// Receives engine notifications.
///
/// All calls happen synchronously on the thread driving the engine.
pub trait SelectionListener {
    fn selection_changed(&mut self, rect: Rect, mask: &MaskGeometry);

    /// Drag released below the minimum size; the session stays open.
    fn selection_too_small(&mut self) {}

    /// In-progress drag discarded with Escape; the session stays open.
    fn selection_cleared(&mut self) {}

    fn selection_completed(&mut self, selection: &CompletedSelection);

    fn session_cancelled(&mut self);
}

/// Owned form of a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Changed { rect: Rect, mask: MaskGeometry },
    TooSmall,
    Cleared,
    Completed(CompletedSelection),
    Cancelled,
}

impl SelectionListener for Vec<SelectionEvent> {
    fn selection_changed(&mut self, rect: Rect, mask: &MaskGeometry) {
        self.push(SelectionEvent::Changed { rect, mask: *mask });
    }

    fn selection_too_small(&mut self) {
        self.push(SelectionEvent::TooSmall);
    }

    fn selection_cleared(&mut self) {
        self.push(SelectionEvent::Cleared);
    }

    fn selection_completed(&mut self, selection: &CompletedSelection) {
        self.push(SelectionEvent::Completed(*selection));
    }

    fn session_cancelled(&mut self) {
        self.push(SelectionEvent::Cancelled);
    }
}

/// Forwards notifications over a channel, e.g. to a render or capture thread.
///
/// A disconnected receiver is logged and otherwise ignored; the engine keeps
/// running.
pub struct ChannelListener {
    tx: Sender<SelectionEvent>,
}

impl ChannelListener {
    pub fn new(tx: Sender<SelectionEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: SelectionEvent) {
        if let Err(err) = self.tx.send(event) {
            tracing::warn!(event = ?err.0, "selection listener disconnected");
        }
    }
}

impl SelectionListener for ChannelListener {
    fn selection_changed(&mut self, rect: Rect, mask: &MaskGeometry) {
        self.send(SelectionEvent::Changed { rect, mask: *mask });
    }

    fn selection_too_small(&mut self) {
        self.send(SelectionEvent::TooSmall);
    }

    fn selection_cleared(&mut self) {
        self.send(SelectionEvent::Cleared);
    }

    fn selection_completed(&mut self, selection: &CompletedSelection) {
        self.send(SelectionEvent::Completed(*selection));
    }

    fn session_cancelled(&mut self) {
        self.send(SelectionEvent::Cancelled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn channel_listener_forwards_events() {
        let (tx, rx) = unbounded();
        let mut listener = ChannelListener::new(tx);
        listener.selection_too_small();
        listener.session_cancelled();
        assert_eq!(rx.try_recv().unwrap(), SelectionEvent::TooSmall);
        assert_eq!(rx.try_recv().unwrap(), SelectionEvent::Cancelled);
    }

    #[test]
    fn channel_listener_survives_dropped_receiver() {
        let (tx, rx) = unbounded();
        drop(rx);
        let mut listener = ChannelListener::new(tx);
        listener.selection_cleared();
    }
}
