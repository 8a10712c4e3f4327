//! Run loop
//!
//! Every iteration polls the native layer exactly once, then hands out the
//! events that poll produced, in order. Events are consumed either eagerly
//! through [`Platform::run`] or one at a time through
//! [`Platform::next_event`], which also reports iterations that produced
//! nothing as [`PumpEvent::Idle`].

use std::collections::VecDeque;

use crate::events::{Event, EventKind, EventQueue};
use crate::foundation::collections::WindowId;
use crate::platform::Platform;
use crate::window::WindowRegistry;

/// Item handed out by cooperative iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PumpEvent {
    /// A window or input event
    Event(Event),
    /// A poll produced no events
    Idle,
}

/// Events drained from the queue but not yet handed out
///
/// Records of closed windows are dropped from the registry once their
/// `Closed` event has been handed out and the next item is requested.
#[derive(Debug, Default)]
pub struct Pump {
    pending: VecDeque<Event>,
    retired: Vec<WindowId>,
    iterations: u64,
}

impl Pump {
    /// Create an idle pump
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of poll iterations so far
    pub const fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Events drained but not yet handed out
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// One iteration: poll once, then drain the queue
    ///
    /// Returns the number of events drained.
    pub fn step(&mut self, registry: &mut WindowRegistry, queue: &mut EventQueue) -> usize {
        self.iterations += 1;
        let signals = registry.poll(queue);

        let events = queue.drain();
        let drained = events.len();
        self.pending.extend(events);

        log::trace!(
            "Pump iteration {}: {} native signals, {} events",
            self.iterations,
            signals,
            drained
        );
        drained
    }

    /// Next item for a cooperative consumer, `None` once terminated
    ///
    /// With no live windows left, whatever is still queued is handed out
    /// before termination.
    pub fn advance(&mut self, registry: &mut WindowRegistry, queue: &mut EventQueue) -> Option<PumpEvent> {
        for id in self.retired.drain(..) {
            registry.forget(id);
        }

        loop {
            if let Some(event) = self.pending.pop_front() {
                if matches!(event.kind, EventKind::Closed) {
                    self.retired.push(event.window);
                }
                return Some(PumpEvent::Event(event));
            }

            if registry.live_count() == 0 {
                if queue.is_empty() {
                    log::debug!("No live windows left, pump terminated");
                    return None;
                }
                self.pending.extend(queue.drain());
                continue;
            }

            if self.step(registry, queue) == 0 {
                return Some(PumpEvent::Idle);
            }
        }
    }
}

impl Platform {
    /// Pull the next event, polling the native layer when none is pending
    pub fn next_event(&mut self) -> Option<PumpEvent> {
        self.pump.advance(&mut self.registry, &mut self.queue)
    }

    /// Run until every window is closed, dispatching events to `observer`
    ///
    /// Each event is delivered before the next one is looked at, so the
    /// observer may freely reconfigure, open or close windows.
    pub fn run<F>(&mut self, mut observer: F)
    where
        F: FnMut(&mut Self, Event),
    {
        log::info!("Entering event loop with {} windows", self.live_count());

        while let Some(item) = self.next_event() {
            if let PumpEvent::Event(event) = item {
                observer(self, event);
            }
        }
    }

    /// Whether live windows or undelivered events remain
    pub fn is_running(&self) -> bool {
        self.registry.live_count() > 0 || self.pump.pending() > 0 || !self.queue.is_empty()
    }
}
