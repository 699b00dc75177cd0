use reqwest::Method;

use crate::client::Transport;
use crate::domain::{User, UserCredentials};
use crate::error::Result;

use super::{envelope, DataEnvelope};

/// Operations on the authenticated user.
///
/// Toggl API docs: <https://github.com/toggl/toggl_api_docs/blob/master/chapters/users.md>
pub struct UsersService<'a> {
    transport: &'a Transport,
}

impl<'a> UsersService<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Returns the current user. With `with_related_data` the response also
    /// carries the user's time entries, projects and tags.
    pub async fn me(&self, with_related_data: bool) -> Result<User> {
        let path = if with_related_data {
            "me?with_related_data=true"
        } else {
            "me"
        };
        let response: DataEnvelope<User> = self.transport.request(Method::GET, path, None).await?;
        Ok(response.data)
    }

    /// Signs up a new user from an email and password.
    pub async fn sign_up(&self, credentials: &UserCredentials) -> Result<User> {
        let body = envelope("user", credentials)?;
        let response: DataEnvelope<User> = self
            .transport
            .request(Method::POST, "signups", Some(body))
            .await?;
        Ok(response.data)
    }
}
