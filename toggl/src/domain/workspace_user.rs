use serde::{Deserialize, Serialize};

use crate::services::Resource;

/// Membership of a user in a workspace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkspaceUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "uid", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(rename = "wid", skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl Resource for WorkspaceUser {
    const PATH: &'static str = "workspace_users";
    const ENVELOPE: &'static str = "workspace_user";

    fn id(&self) -> Option<i64> {
        self.id
    }
}
