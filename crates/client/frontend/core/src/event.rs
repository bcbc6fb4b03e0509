//! Utilities for reacting to runtime events inside UI layers.
use runtime::{Event, FeedEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }
}

/// Progress of the one-shot snapshot fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SnapshotState {
    #[default]
    Loading,
    Loaded {
        accepted: usize,
        rejected: usize,
    },
    Failed(String),
}

/// Connection state of the push stream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FeedStatus {
    #[default]
    Connecting,
    Live,
    Disconnected(String),
    Closed,
}

/// Feed health as seen by a frontend, driven by runtime events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedState {
    pub snapshot: SnapshotState,
    pub stream: FeedStatus,
    /// Payloads dropped as malformed since start-up.
    pub rejected: usize,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one runtime event into the state.
    ///
    /// Standings events always require a redraw; feed events only when they
    /// change what the status line shows.
    pub fn on_event(&mut self, event: &Event) -> EventImpact {
        let feed = match event {
            Event::Standings(_) => return EventImpact::redraw(),
            Event::Feed(feed) => feed,
        };
        let before = self.clone();

        match feed {
            FeedEvent::SnapshotLoaded { accepted, rejected } => {
                self.snapshot = SnapshotState::Loaded {
                    accepted: *accepted,
                    rejected: *rejected,
                };
            }
            FeedEvent::SnapshotFailed { error } => {
                self.snapshot = SnapshotState::Failed(error.clone());
            }
            FeedEvent::StreamConnected => self.stream = FeedStatus::Live,
            FeedEvent::StreamDisconnected { reason } => {
                self.stream = FeedStatus::Disconnected(reason.clone());
            }
            FeedEvent::StreamClosed => self.stream = FeedStatus::Closed,
            FeedEvent::PayloadRejected { .. } => self.rejected += 1,
        }

        if *self == before {
            EventImpact::none()
        } else {
            EventImpact::redraw()
        }
    }

    /// One-line summary for a status bar.
    pub fn status_line(&self) -> String {
        let snapshot = match &self.snapshot {
            SnapshotState::Loading => "loading".to_string(),
            SnapshotState::Loaded { accepted, .. } => format!("{accepted} loaded"),
            SnapshotState::Failed(error) => format!("failed ({error})"),
        };
        let stream = match &self.stream {
            FeedStatus::Connecting => "connecting".to_string(),
            FeedStatus::Live => "live".to_string(),
            FeedStatus::Disconnected(reason) => format!("disconnected ({reason})"),
            FeedStatus::Closed => "closed".to_string(),
        };

        let mut line = format!("Snapshot: {snapshot} | Stream: {stream}");
        if self.rejected > 0 {
            line.push_str(&format!(" | Rejected: {}", self.rejected));
        }
        line
    }
}
