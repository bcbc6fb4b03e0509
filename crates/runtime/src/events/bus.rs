//! Topic-based event bus implementation.

use std::collections::HashMap;

use leaderboard_core::StandingsChange;
use tokio::sync::broadcast;

use super::types::FeedEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Topic {
    /// Standings transitions (replaced, changed)
    Standings,
    /// Snapshot and push-stream lifecycle
    Feed,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Standings(StandingsChange),
    Feed(FeedEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Standings(_) => Topic::Standings,
            Event::Feed(_) => Topic::Feed,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Every topic channel is created up front, so
/// publishing and subscribing never take a lock.
#[derive(Clone)]
pub struct EventBus {
    standings: broadcast::Sender<Event>,
    feed: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            standings: broadcast::channel(capacity).0,
            feed: broadcast::channel(capacity).0,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Shorthand for publishing on [`Topic::Feed`].
    pub fn publish_feed(&self, event: FeedEvent) {
        self.publish(Event::Feed(event));
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Standings => &self.standings,
            Topic::Feed => &self.feed,
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_only_reach_their_topic() {
        let bus = EventBus::with_capacity(4);
        let mut standings_rx = bus.subscribe(Topic::Standings);
        let mut feed_rx = bus.subscribe(Topic::Feed);

        bus.publish(Event::Standings(StandingsChange::Replaced { count: 0 }));

        assert_eq!(
            standings_rx.try_recv().unwrap(),
            Event::Standings(StandingsChange::Replaced { count: 0 })
        );
        assert!(feed_rx.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_harmless() {
        let bus = EventBus::new();
        bus.publish_feed(FeedEvent::StreamClosed);
    }
}
