use reqwest::Method;

use crate::client::Transport;
use crate::domain::{User, Workspace, WorkspaceClient};
use crate::error::Result;

/// Operations on workspaces.
///
/// Toggl API docs: <https://github.com/toggl/toggl_api_docs/blob/master/chapters/workspaces.md>
pub struct WorkspacesService<'a> {
    transport: &'a Transport,
}

impl<'a> WorkspacesService<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lists the user's workspaces.
    pub async fn list(&self) -> Result<Vec<Workspace>> {
        self.transport.request(Method::GET, "workspaces", None).await
    }

    /// Lists the users of a workspace.
    pub async fn list_users(&self, id: i64) -> Result<Vec<User>> {
        self.transport
            .request(Method::GET, &format!("workspaces/{id}/users"), None)
            .await
    }

    /// Lists the clients of a workspace.
    pub async fn list_clients(&self, id: i64) -> Result<Vec<WorkspaceClient>> {
        self.transport
            .request(Method::GET, &format!("workspaces/{id}/clients"), None)
            .await
    }

    // TODO: workspace-scoped project and task listings
    // (workspaces/{id}/projects, workspaces/{id}/tasks).
}
