//! Bounded, newest-first event log.

use std::collections::VecDeque;

use aclsim_core::Event;

/// Default number of events retained.
pub const DEFAULT_EVENT_CAPACITY: usize = 20;

/// A rolling audit log.
///
/// Newest events sit at the front; once the capacity is reached, pushing
/// evicts the oldest entry at the tail.
#[derive(Debug, Clone)]
pub struct EventLog {
    events: VecDeque<Event>,
    capacity: usize,
}

impl EventLog {
    /// Create a log with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Create a log retaining at most `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an event as the newest entry, evicting the oldest if full.
    pub fn push(&mut self, event: Event) {
        self.events.push_front(event);
        self.events.truncate(self.capacity);
    }

    /// Record a batch of events in production order.
    ///
    /// The last event of the batch ends up newest, so a batch produced by
    /// one operation reads back outcome-before-attempt, newest first.
    pub fn extend(&mut self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.push(event);
        }
    }

    /// Iterate newest-first.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// The most recent event.
    pub fn latest(&self) -> Option<&Event> {
        self.events.front()
    }

    /// Number of retained events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The retention cap.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aclsim_core::{CiphertextId, EventKind, Identity};

    fn event(n: usize) -> Event {
        Event::new(
            EventKind::GrantPermanent,
            CiphertextId::ZERO,
            Identity::new("gateway"),
            format!("event {n}"),
        )
    }

    #[test]
    fn test_newest_first() {
        let mut log = EventLog::new();
        log.push(event(1));
        log.push(event(2));
        log.push(event(3));

        let messages: Vec<&str> = log.iter().map(|e| e.message()).collect();
        assert_eq!(messages, vec!["event 3", "event 2", "event 1"]);
        assert_eq!(log.latest().unwrap().message(), "event 3");
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut log = EventLog::new();
        for n in 1..=25 {
            log.push(event(n));
        }

        assert_eq!(log.len(), DEFAULT_EVENT_CAPACITY);
        // The 20 most recent survive: 25 down to 6.
        assert_eq!(log.latest().unwrap().message(), "event 25");
        assert_eq!(log.iter().last().unwrap().message(), "event 6");
    }

    #[test]
    fn test_extend_preserves_production_order() {
        let mut log = EventLog::new();
        log.extend([event(1), event(2)]);

        // The later event of the batch is newest.
        let messages: Vec<&str> = log.iter().map(|e| e.message()).collect();
        assert_eq!(messages, vec!["event 2", "event 1"]);
    }

    #[test]
    fn test_custom_capacity() {
        let mut log = EventLog::with_capacity(3);
        for n in 1..=5 {
            log.push(event(n));
        }

        assert_eq!(log.len(), 3);
        assert_eq!(log.capacity(), 3);
        assert_eq!(log.iter().last().unwrap().message(), "event 3");
    }

    #[test]
    fn test_empty_log() {
        let log = EventLog::new();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
        assert_eq!(log.iter().count(), 0);
    }
}
