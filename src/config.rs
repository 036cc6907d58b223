use serde::{Deserialize, Serialize};

/// Tunables for the history analyzers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Minimum span (first to last record, whole days) a history must cover
    /// before a weighted mean is reported.
    pub min_history_days: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_history_days: 7,
        }
    }
}
