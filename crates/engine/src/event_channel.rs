// Chunk: docs/chunks/event_channel - Host notification ingress queue

//! Event channel carrying host notifications into the controller.
//!
//! Edit, search, selection, and viewport notifications originate in host
//! callbacks that may run on foreign threads. Rather than letting those
//! threads call into the controller directly, they send typed events
//! through this channel and a single drain loop applies them sequentially.
//! That serialization is what lets the mark stores go lock-free.
//!
//! # Design
//!
//! We use `std::sync::mpsc` because:
//! - `mpsc::Sender` is `Send`, so the host can clone one into each callback
//! - `mpsc::Receiver` is `!Send`, pinning event application to one thread
//!
//! The `EventSender` wrapper provides typed convenience methods and holds a
//! waker callback so sends from background contexts can nudge the host's
//! run loop to drain.

use std::sync::mpsc::{self, Receiver, SendError, Sender};
use std::sync::Arc;

use crate::viewport::ViewportInfo;

/// A host notification consumed by the highlight controller.
#[derive(Debug, Clone, PartialEq)]
pub enum HighlightEvent {
    /// The document changed: `old_len` chars at `position` became
    /// `new_len` chars.
    Edit {
        position: usize,
        old_len: usize,
        new_len: usize,
    },
    /// The find query changed.
    SearchTextChanged(String),
    /// The user's selection changed; the payload is the selected text.
    SelectionChanged(String),
    /// Pin the current selection highlight into the given frozen slot.
    FreezeSelection(u8),
    /// The rendered portion of the document moved or resized.
    ViewportChanged(ViewportInfo),
    /// The host finished painting the rectangle it was handed.
    RepaintComplete,
}

/// Sender half of the event channel.
///
/// Cloneable and `Send`; the host keeps one per notification source. The
/// waker callback runs after every send so a drain loop parked in the
/// host's run loop wakes up promptly.
#[derive(Clone)]
pub struct EventSender {
    inner: Arc<EventSenderInner>,
}

struct EventSenderInner {
    sender: Sender<HighlightEvent>,
    run_loop_waker: Box<dyn Fn() + Send + Sync>,
}

/// Receiver half of the event channel.
///
/// `!Send`; stays with the drain loop that applies events to the
/// controller.
pub struct EventReceiver {
    receiver: Receiver<HighlightEvent>,
}

/// Creates a new event channel pair.
///
/// `run_loop_waker` is called after each send; pass a no-op closure when
/// the host polls instead of parking.
pub fn create_event_channel(
    run_loop_waker: impl Fn() + Send + Sync + 'static,
) -> (EventSender, EventReceiver) {
    let (sender, receiver) = mpsc::channel();

    let event_sender = EventSender {
        inner: Arc::new(EventSenderInner {
            sender,
            run_loop_waker: Box::new(run_loop_waker),
        }),
    };

    (event_sender, EventReceiver { receiver })
}

impl EventSender {
    fn send(&self, event: HighlightEvent) -> Result<(), SendError<HighlightEvent>> {
        let result = self.inner.sender.send(event);
        (self.inner.run_loop_waker)();
        result
    }

    /// Sends an edit notification.
    pub fn send_edit(
        &self,
        position: usize,
        old_len: usize,
        new_len: usize,
    ) -> Result<(), SendError<HighlightEvent>> {
        self.send(HighlightEvent::Edit {
            position,
            old_len,
            new_len,
        })
    }

    /// Sends a find-query change.
    pub fn send_search_text(&self, text: impl Into<String>) -> Result<(), SendError<HighlightEvent>> {
        self.send(HighlightEvent::SearchTextChanged(text.into()))
    }

    /// Sends a selection change.
    pub fn send_selection(&self, text: impl Into<String>) -> Result<(), SendError<HighlightEvent>> {
        self.send(HighlightEvent::SelectionChanged(text.into()))
    }

    /// Pins the current selection into a frozen slot.
    pub fn send_freeze(&self, slot: u8) -> Result<(), SendError<HighlightEvent>> {
        self.send(HighlightEvent::FreezeSelection(slot))
    }

    /// Sends a viewport scroll/resize notification.
    pub fn send_viewport(&self, viewport: ViewportInfo) -> Result<(), SendError<HighlightEvent>> {
        self.send(HighlightEvent::ViewportChanged(viewport))
    }

    /// Acknowledges a completed repaint.
    pub fn send_repaint_complete(&self) -> Result<(), SendError<HighlightEvent>> {
        self.send(HighlightEvent::RepaintComplete)
    }
}

impl EventReceiver {
    /// Attempts to receive an event without blocking.
    pub fn try_recv(&self) -> Option<HighlightEvent> {
        self.receiver.try_recv().ok()
    }

    /// Drains all pending events from the channel.
    ///
    /// Returns an iterator yielding every event currently queued, without
    /// blocking; the drain loop applies them in arrival order and then
    /// flushes damage once.
    pub fn drain(&self) -> impl Iterator<Item = HighlightEvent> + '_ {
        std::iter::from_fn(|| self.try_recv())
    }
}
