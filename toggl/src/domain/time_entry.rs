use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::Resource;

/// A time entry, the primary transactional record of the API.
///
/// `duration` is in seconds; a running entry carries a negative duration
/// (the negated start timestamp) until it is stopped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "wid", skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    #[serde(rename = "pid", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(rename = "tid", skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Name of the client application that created the entry; the remote API
    /// requires it on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Whether only the duration is tracked, without start/stop times.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duronly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<DateTime<Utc>>,
}

impl Resource for TimeEntry {
    const PATH: &'static str = "time_entries";
    const ENVELOPE: &'static str = "time_entry";

    fn id(&self) -> Option<i64> {
        self.id
    }
}
