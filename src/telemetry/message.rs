//! Exported snapshot of per-category usage counts.
//!
//! Serializes to `{"metrics": {"api": {"<code>": <count>, ...}}}`. Only
//! categories tracked at least once appear.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::TelemetryError;
use crate::telemetry::category::ApiCategory;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryMessage {
    pub metrics: ApiMetrics,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMetrics {
    #[serde(default, deserialize_with = "deserialize_sparse")]
    pub api: BTreeMap<ApiCategory, u64>,
}

/// Zero entries on the wire are dropped so a parsed message stays sparse.
fn deserialize_sparse<'de, D>(deserializer: D) -> Result<BTreeMap<ApiCategory, u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut api = BTreeMap::<ApiCategory, u64>::deserialize(deserializer)?;
    api.retain(|_, count| *count > 0);
    Ok(api)
}

impl TelemetryMessage {
    /// Build a sparse message from dense per-category counts.
    pub(crate) fn from_counts(counts: &[u64; ApiCategory::COUNT]) -> Self {
        let api = ApiCategory::ALL
            .into_iter()
            .filter(|category| counts[category.index()] > 0)
            .map(|category| (category, counts[category.index()]))
            .collect();
        Self {
            metrics: ApiMetrics { api },
        }
    }

    pub fn count(&self, category: ApiCategory) -> u64 {
        self.metrics.api.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.metrics
            .api
            .values()
            .fold(0u64, |sum, count| sum.saturating_add(*count))
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.api.is_empty()
    }

    /// The nested mapping handed to a transport layer.
    pub fn to_value(&self) -> Result<Value, TelemetryError> {
        Ok(serde_json::to_value(self)?)
    }
}
