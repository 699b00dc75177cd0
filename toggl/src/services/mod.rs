use std::marker::PhantomData;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::Transport;
use crate::error::{Error, Result};

mod clients;
mod project_users;
mod projects;
mod tags;
mod tasks;
mod time_entries;
mod users;
mod workspace_users;
mod workspaces;

pub use clients::*;
pub use project_users::*;
pub use projects::*;
pub use tags::*;
pub use tasks::*;
pub use time_entries::*;
pub use users::*;
pub use workspace_users::*;
pub use workspaces::*;

/// A remote resource kind: where its collection lives and under which key
/// request bodies travel.
pub trait Resource: Serialize + DeserializeOwned {
    /// Collection path segment, e.g. `clients`.
    const PATH: &'static str;
    /// Request envelope key, e.g. `client`.
    const ENVELOPE: &'static str;
    /// Remote identifier, if the entity has been persisted.
    fn id(&self) -> Option<i64>;
}

/// Response envelope: single entities (and mass-operation arrays) come back
/// under a `data` key. Extra sibling fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

/// Wraps a request payload in its single-field resource envelope.
pub(crate) fn envelope<R: Serialize>(key: &str, resource: &R) -> Result<Value> {
    let value = serde_json::to_value(resource).map_err(Error::Serialization)?;
    let mut wrapped = serde_json::Map::with_capacity(1);
    wrapped.insert(key.to_owned(), value);
    Ok(Value::Object(wrapped))
}

/// The CRUD template every resource facade repeats, written once and
/// parametrized by the resource's path segment and envelope key.
pub(crate) struct CrudService<'a, R> {
    transport: &'a Transport,
    _resource: PhantomData<R>,
}

impl<'a, R: Resource> CrudService<'a, R> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self {
            transport,
            _resource: PhantomData,
        }
    }

    /// The shared transport, for resource-specific endpoints outside the
    /// CRUD template.
    pub(crate) fn transport(&self) -> &'a Transport {
        self.transport
    }

    pub(crate) async fn list(&self) -> Result<Vec<R>> {
        self.transport.request(Method::GET, R::PATH, None).await
    }

    pub(crate) async fn get(&self, id: i64) -> Result<R> {
        let path = format!("{}/{}", R::PATH, id);
        let response: DataEnvelope<R> = self.transport.request(Method::GET, &path, None).await?;
        Ok(response.data)
    }

    pub(crate) async fn create(&self, resource: &R) -> Result<R> {
        let body = envelope(R::ENVELOPE, resource)?;
        let response: DataEnvelope<R> = self
            .transport
            .request(Method::POST, R::PATH, Some(body))
            .await?;
        Ok(response.data)
    }

    pub(crate) async fn update(&self, resource: &R) -> Result<R> {
        let id = Self::require_id(resource.id(), "update")?;
        let body = envelope(R::ENVELOPE, resource)?;
        let path = format!("{}/{}", R::PATH, id);
        let response: DataEnvelope<R> = self
            .transport
            .request(Method::PUT, &path, Some(body))
            .await?;
        Ok(response.data)
    }

    pub(crate) async fn delete(&self, id: i64) -> Result<()> {
        let id = Self::require_id(Some(id), "delete")?;
        self.transport
            .request_discard(Method::DELETE, &format!("{}/{}", R::PATH, id))
            .await
    }

    /// Updates several entities at once; the ids travel comma-joined in the
    /// URL path and the response wraps an array in the `data` envelope.
    pub(crate) async fn mass_update(&self, ids: &[i64], resource: &R) -> Result<Vec<R>> {
        let path = format!("{}/{}", R::PATH, Self::joined_ids(ids)?);
        let body = envelope(R::ENVELOPE, resource)?;
        let response: DataEnvelope<Vec<R>> = self
            .transport
            .request(Method::PUT, &path, Some(body))
            .await?;
        Ok(response.data)
    }

    pub(crate) async fn mass_delete(&self, ids: &[i64]) -> Result<()> {
        let path = format!("{}/{}", R::PATH, Self::joined_ids(ids)?);
        self.transport.request_discard(Method::DELETE, &path).await
    }

    /// Mutations that target existing entities require a strictly positive
    /// id, checked before any network call.
    fn require_id(id: Option<i64>, verb: &str) -> Result<i64> {
        match id {
            Some(id) if id > 0 => Ok(id),
            _ => Err(Error::Validation(format!(
                "{verb} on {} requires a positive id",
                R::PATH
            ))),
        }
    }

    fn joined_ids(ids: &[i64]) -> Result<String> {
        if ids.is_empty() || ids.iter().any(|id| *id <= 0) {
            return Err(Error::Validation(format!(
                "mass operations on {} require one or more positive ids",
                R::PATH
            )));
        }
        Ok(ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(","))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::Tag;

    #[test]
    fn envelope_wraps_the_payload_under_one_key() {
        let tag = Tag {
            id: Some(1),
            name: Some("billed".to_string()),
            ..Default::default()
        };
        let body = envelope("tag", &tag).unwrap();
        assert_eq!(body, json!({"tag": {"id": 1, "name": "billed"}}));
    }

    #[test]
    fn require_id_rejects_absent_and_non_positive_ids() {
        for id in [None, Some(0), Some(-3)] {
            let err = CrudService::<Tag>::require_id(id, "update").unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
        }
        assert_eq!(CrudService::<Tag>::require_id(Some(7), "update").unwrap(), 7);
    }

    #[test]
    fn joined_ids_keep_the_comma_separated_wire_form() {
        assert_eq!(CrudService::<Tag>::joined_ids(&[12, 7, 9]).unwrap(), "12,7,9");
        assert!(CrudService::<Tag>::joined_ids(&[]).is_err());
        assert!(CrudService::<Tag>::joined_ids(&[4, 0]).is_err());
    }
}
