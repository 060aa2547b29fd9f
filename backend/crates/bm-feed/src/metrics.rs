use metrics::{counter, gauge};

const CONNECTIONS_OPENED: &str = "bm_feed.connections.opened";
const CONNECTIONS_CLOSED: &str = "bm_feed.connections.closed";
const CONNECTIONS_ACTIVE: &str = "bm_feed.connections.active";
const FRAMES_RECEIVED: &str = "bm_feed.frames.received";
const EVENTS_SENT: &str = "bm_feed.events.sent";
const CHANGES_PUBLISHED: &str = "bm_feed.changes.published";
const CHANGE_RECEIVERS: &str = "bm_feed.changes.receivers";
const SUBSCRIPTIONS_OPENED: &str = "bm_feed.subscriptions.opened";
const ERRORS: &str = "bm_feed.errors";

/// Change-feed counters and gauges, recorded through the `metrics` facade.
/// Nothing is exported unless the embedding process installs a recorder.
#[derive(Clone, Default)]
pub struct Metrics;

impl Metrics {
    pub fn new() -> Self {
        Self
    }

    pub fn connection_established(&self) {
        counter!(CONNECTIONS_OPENED).increment(1);
        gauge!(CONNECTIONS_ACTIVE).increment(1.0);
    }

    pub fn connection_closed(&self, reason: &str) {
        counter!(CONNECTIONS_CLOSED, "reason" => reason.to_owned()).increment(1);
        gauge!(CONNECTIONS_ACTIVE).decrement(1.0);
    }

    /// The feed is push-only; client frames are counted and dropped
    pub fn message_received(&self, frame: &str) {
        counter!(FRAMES_RECEIVED, "frame" => frame.to_owned()).increment(1);
    }

    pub fn message_sent(&self, kind: &str) {
        counter!(EVENTS_SENT, "kind" => kind.to_owned()).increment(1);
    }

    /// `receivers` is how many subscriptions of the owning user got it
    pub fn broadcast_published(&self, kind: &str, receivers: usize) {
        counter!(CHANGES_PUBLISHED, "kind" => kind.to_owned()).increment(1);
        gauge!(CHANGE_RECEIVERS).set(receivers as f64);
    }

    pub fn subscription_opened(&self) {
        counter!(SUBSCRIPTIONS_OPENED).increment(1);
    }

    pub fn error_occurred(&self, cause: &str) {
        counter!(ERRORS, "cause" => cause.to_owned()).increment(1);
    }
}
