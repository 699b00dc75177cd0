use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;

use crate::client::Transport;
use crate::domain::TimeEntry;
use crate::error::{Error, Result};

use super::{envelope, CrudService, DataEnvelope, Resource};

/// Operations on time entries.
///
/// Toggl API docs: <https://github.com/toggl/toggl_api_docs/blob/master/chapters/time_entries.md>
pub struct TimeEntriesService<'a> {
    crud: CrudService<'a, TimeEntry>,
}

impl<'a> TimeEntriesService<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self {
            crud: CrudService::new(transport),
        }
    }

    pub async fn create(&self, entry: &TimeEntry) -> Result<TimeEntry> {
        self.crud.create(entry).await
    }

    /// Starts a running time entry.
    pub async fn start(&self, entry: &TimeEntry) -> Result<TimeEntry> {
        let body = envelope(TimeEntry::ENVELOPE, entry)?;
        let response: DataEnvelope<TimeEntry> = self
            .crud
            .transport()
            .request(Method::POST, "time_entries/start", Some(body))
            .await?;
        Ok(response.data)
    }

    /// Stops a running time entry.
    pub async fn stop(&self, id: i64) -> Result<TimeEntry> {
        if id <= 0 {
            return Err(Error::Validation(
                "stop requires a positive time entry id".to_string(),
            ));
        }
        let response: DataEnvelope<TimeEntry> = self
            .crud
            .transport()
            .request(Method::PUT, &format!("time_entries/{id}/stop"), None)
            .await?;
        Ok(response.data)
    }

    /// Returns the currently running time entry, if there is one.
    pub async fn current(&self) -> Result<Option<TimeEntry>> {
        let response: DataEnvelope<Option<TimeEntry>> = self
            .crud
            .transport()
            .request(Method::GET, "time_entries/current", None)
            .await?;
        Ok(response.data)
    }

    pub async fn get(&self, id: i64) -> Result<TimeEntry> {
        self.crud.get(id).await
    }

    pub async fn update(&self, entry: &TimeEntry) -> Result<TimeEntry> {
        self.crud.update(entry).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.crud.delete(id).await
    }

    /// Lists time entries started in the given range. Without a range the
    /// server returns the entries of the last 9 days.
    pub async fn list(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<TimeEntry>> {
        let mut path = String::from("time_entries");
        let mut separator = '?';
        if let Some(start) = start {
            path.push(separator);
            path.push_str("start_date=");
            path.push_str(&start.to_rfc3339_opts(SecondsFormat::Secs, true));
            separator = '&';
        }
        if let Some(end) = end {
            path.push(separator);
            path.push_str("end_date=");
            path.push_str(&end.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        self.crud.transport().request(Method::GET, &path, None).await
    }
}
