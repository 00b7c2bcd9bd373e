//! API invocation categories and their stable wire codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TelemetryError;

/// Which client-facing API surface a call went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ApiCategory {
    /// Managed read/write transaction helper.
    #[serde(rename = "fn")]
    ManagedTransaction,
    /// Explicitly begun transaction.
    #[serde(rename = "tx")]
    UnmanagedTransaction,
    /// Single auto-commit query.
    #[serde(rename = "run")]
    DirectRun,
    /// Combined execute+consume convenience call.
    #[serde(rename = "exe")]
    ExecuteQuery,
}

impl ApiCategory {
    /// Number of variants; sizes the per-category count array.
    pub const COUNT: usize = 4;

    /// All categories in declaration order.
    pub const ALL: [ApiCategory; Self::COUNT] = [
        ApiCategory::ManagedTransaction,
        ApiCategory::UnmanagedTransaction,
        ApiCategory::DirectRun,
        ApiCategory::ExecuteQuery,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ApiCategory::ManagedTransaction => "fn",
            ApiCategory::UnmanagedTransaction => "tx",
            ApiCategory::DirectRun => "run",
            ApiCategory::ExecuteQuery => "exe",
        }
    }

    /// Ordinal into [`ApiCategory::ALL`].
    pub fn index(self) -> usize {
        match self {
            ApiCategory::ManagedTransaction => 0,
            ApiCategory::UnmanagedTransaction => 1,
            ApiCategory::DirectRun => 2,
            ApiCategory::ExecuteQuery => 3,
        }
    }
}

impl fmt::Display for ApiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ApiCategory {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApiCategory::ALL
            .into_iter()
            .find(|category| category.code() == s)
            .ok_or_else(|| TelemetryError::UnknownCategory(s.to_string()))
    }
}
