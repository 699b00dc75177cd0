use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Project, Tag, TimeEntry};

/// The authenticated Toggl user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(rename = "default_wid", skip_serializing_if = "Option::is_none")]
    pub default_workspace_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Time format such as `"h:mm A"`.
    #[serde(rename = "timeofday_format", skip_serializing_if = "Option::is_none")]
    pub time_of_day_format: Option<String>,
    /// Date format such as `"MM/DD/YYYY"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    /// Whether start and stop times are saved on time entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_start_and_stop_time: Option<bool>,
    /// First day of the week, Sunday = 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beginning_of_week: Option<i64>,
    /// Locale such as `"en_US"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_piechart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<DateTime<Utc>>,

    // Denormalized related data, present when requested via `me(true)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_entries: Option<Vec<TimeEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Credentials posted to the signup endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserCredentials {
    pub email: String,
    pub password: String,
}
