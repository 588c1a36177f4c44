use serde::{Deserialize, Serialize};

/// Platform-wide aggregates from `/analytics/summary`, shown on the
/// admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub total_stories: u64,
    #[serde(default)]
    pub total_views: u64,
    #[serde(default)]
    pub top_topic: Option<String>,
}
