use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::Resource;

/// A client of a workspace — the business entity, not an HTTP client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkspaceClient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "wid", skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "hrate", skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(rename = "cur", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<DateTime<Utc>>,
}

impl Resource for WorkspaceClient {
    const PATH: &'static str = "clients";
    const ENVELOPE: &'static str = "client";

    fn id(&self) -> Option<i64> {
        self.id
    }
}
