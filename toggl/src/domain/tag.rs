use serde::{Deserialize, Serialize};

use crate::services::Resource;

/// A label attachable to time entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "wid", skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Resource for Tag {
    const PATH: &'static str = "tags";
    const ENVELOPE: &'static str = "tag";

    fn id(&self) -> Option<i64> {
        self.id
    }
}
