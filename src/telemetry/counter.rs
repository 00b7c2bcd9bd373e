//! Usage counter shared by every call site of one driver instance.
//!
//! All state sits behind a single `RwLock`: `track`, `clear` and
//! `drain_message` take the write guard, every read takes the read guard.
//! Guards release on scope exit, so no path can leave a reader holding the
//! lock.

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::config::TelemetryConfig;
use crate::telemetry::category::ApiCategory;
use crate::telemetry::message::TelemetryMessage;

/// Aggregate count at which [`Telemetry::is_cache_full`] flips when no
/// threshold is configured.
pub const DEFAULT_CACHE_SIZE: u64 = 20;

#[derive(Debug, Default)]
struct Counts {
    aggregate: u64,
    per_category: [u64; ApiCategory::COUNT],
}

impl Counts {
    fn reset(&mut self) -> u64 {
        let discarded = self.aggregate;
        *self = Counts::default();
        discarded
    }
}

/// Per-category usage counter, one per driver instance, shared by reference
/// or `Arc` with every call site.
#[derive(Debug)]
pub struct Telemetry {
    threshold: u64,
    counts: RwLock<Counts>,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_SIZE)
    }
}

impl Telemetry {
    /// Create an empty counter. A threshold of zero means always full.
    pub fn new(threshold: u64) -> Self {
        Self {
            threshold,
            counts: RwLock::new(Counts::default()),
        }
    }

    /// Build a counter from configuration; `None` when telemetry is disabled.
    pub fn from_config(config: &TelemetryConfig) -> Option<Self> {
        if config.disabled {
            debug!("telemetry disabled by configuration");
            return None;
        }
        Some(Self::new(config.cache_size))
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Record one invocation of `category`.
    pub fn track(&self, category: ApiCategory) {
        let mut counts = self.counts.write();
        counts.aggregate = counts.aggregate.saturating_add(1);
        let slot = &mut counts.per_category[category.index()];
        *slot = slot.saturating_add(1);

        let aggregate = counts.aggregate;
        drop(counts);

        trace!(api = category.code(), aggregate, "tracked api call");
        if aggregate == self.threshold {
            debug!(threshold = self.threshold, "telemetry cache full");
        }
    }

    /// Snapshot of the counts recorded since the last reset.
    pub fn create_message(&self) -> TelemetryMessage {
        let counts = self.counts.read();
        TelemetryMessage::from_counts(&counts.per_category)
    }

    /// Reset all counts. The threshold is untouched.
    pub fn clear(&self) {
        let discarded = self.counts.write().reset();
        debug!(discarded, "telemetry cleared");
    }

    /// Snapshot and reset under one write guard, so no `track` lands between
    /// the export and the reset.
    pub fn drain_message(&self) -> TelemetryMessage {
        let mut counts = self.counts.write();
        let message = TelemetryMessage::from_counts(&counts.per_category);
        let drained = counts.reset();
        drop(counts);
        debug!(drained, "telemetry drained");
        message
    }

    /// Advisory only: nothing is flushed or cleared automatically.
    pub fn is_cache_full(&self) -> bool {
        self.counts.read().aggregate >= self.threshold
    }

    pub fn aggregate_count(&self) -> u64 {
        self.counts.read().aggregate
    }

    pub fn count(&self, category: ApiCategory) -> u64 {
        self.counts.read().per_category[category.index()]
    }
}
