use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::Resource;

/// Association between a project and a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "pid", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(rename = "uid", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(rename = "wid", skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<DateTime<Utc>>,
}

impl Resource for ProjectUser {
    const PATH: &'static str = "project_users";
    const ENVELOPE: &'static str = "project_user";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Mass-create wire form of [`ProjectUser`]: the `uid` field carries a
/// comma-joined list of user ids instead of a single id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectUserBatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "pid", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    /// Comma-joined user ids, e.g. `"7,8,9"`.
    #[serde(rename = "uid", skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<String>,
    #[serde(rename = "wid", skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<DateTime<Utc>>,
}
