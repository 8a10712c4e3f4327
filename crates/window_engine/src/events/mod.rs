//! Window and input events
//!
//! Native callbacks never reach the application directly. They are
//! translated into [`Event`]s and pushed onto the [`EventQueue`] while the
//! native layer is being polled; the pump then drains the queue in order.

use crate::foundation::collections::WindowId;
use crate::foundation::math::{Position, Size};
use crate::input::{KeyCode, Modifiers, MouseButton, Wheel};

/// What happened
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind {
    /// Window was created and registered
    Created,
    /// Window was closed and its native handle destroyed
    Closed,
    /// Window was restored from the iconified state
    Shown,
    /// Window was iconified
    Hidden,
    /// Window gained input focus
    Focused,
    /// Window lost input focus
    Blurred,
    /// Window moved to a new position
    Moved(Position),
    /// Window client area resized
    Resized(Size),
    /// Key pressed
    KeyDown {
        /// Translated key
        key: KeyCode,
        /// Active modifiers
        modifiers: Modifiers,
    },
    /// Key released
    KeyUp {
        /// Translated key
        key: KeyCode,
        /// Active modifiers
        modifiers: Modifiers,
    },
    /// Mouse button pressed at the last known cursor position
    MouseDown {
        /// Translated button
        button: MouseButton,
        /// Cursor position in window coordinates
        position: Position,
    },
    /// Mouse button released at the last known cursor position
    MouseUp {
        /// Translated button
        button: MouseButton,
        /// Cursor position in window coordinates
        position: Position,
    },
    /// Cursor moved inside the window
    MouseMove(Position),
    /// Scroll wheel turned
    Wheel(Wheel),
}

impl EventKind {
    /// Whether a queued event of this kind may be replaced by `newer`
    ///
    /// Only continuous geometry changes coalesce.
    pub const fn coalesces_with(&self, newer: &Self) -> bool {
        matches!(
            (self, newer),
            (Self::Moved(_), Self::Moved(_)) | (Self::Resized(_), Self::Resized(_))
        )
    }
}

/// An event together with the window it originated from
///
/// The window is referenced by id; events never keep a window alive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Originating window
    pub window: WindowId,
    /// What happened
    pub kind: EventKind,
}

impl Event {
    /// Create an event
    pub const fn new(window: WindowId, kind: EventKind) -> Self {
        Self { window, kind }
    }
}

/// FIFO of pending events
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<Event>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to the tail
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Append an event, or replace the window's pending event of the same kind
    ///
    /// The most recently queued event of `event.window` is replaced in place
    /// when it coalesces with `event`; otherwise `event` is appended. Returns
    /// `true` when an entry was replaced.
    pub fn push_coalesced(&mut self, event: Event) -> bool {
        let latest = self
            .events
            .iter_mut()
            .rev()
            .find(|queued| queued.window == event.window);

        match latest {
            Some(queued) if queued.kind.coalesces_with(&event.kind) => {
                *queued = event;
                true
            }
            _ => {
                self.events.push(event);
                false
            }
        }
    }

    /// Most recently pushed event
    pub fn peek_tail(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Replace the most recently pushed event, returning the old one
    ///
    /// On an empty queue the event is appended instead.
    pub fn replace_tail(&mut self, event: Event) -> Option<Event> {
        match self.events.last_mut() {
            Some(tail) => Some(std::mem::replace(tail, event)),
            None => {
                self.events.push(event);
                None
            }
        }
    }

    /// Remove and return every queued event in order
    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
