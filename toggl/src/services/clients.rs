use reqwest::Method;

use crate::client::Transport;
use crate::domain::{Project, WorkspaceClient};
use crate::error::Result;

use super::CrudService;

/// Operations on the clients of a workspace.
///
/// Toggl API docs: <https://github.com/toggl/toggl_api_docs/blob/master/chapters/clients.md>
pub struct ClientsService<'a> {
    crud: CrudService<'a, WorkspaceClient>,
}

impl<'a> ClientsService<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self {
            crud: CrudService::new(transport),
        }
    }

    /// Lists clients visible to the authenticated user.
    pub async fn list(&self) -> Result<Vec<WorkspaceClient>> {
        self.crud.list().await
    }

    /// Lists the projects belonging to a client.
    pub async fn list_projects(&self, id: i64) -> Result<Vec<Project>> {
        self.crud
            .transport()
            .request(Method::GET, &format!("clients/{id}/projects"), None)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<WorkspaceClient> {
        self.crud.get(id).await
    }

    /// Creates a new client in the workspace named by `workspace_id`.
    pub async fn create(&self, client: &WorkspaceClient) -> Result<WorkspaceClient> {
        self.crud.create(client).await
    }

    pub async fn update(&self, client: &WorkspaceClient) -> Result<WorkspaceClient> {
        self.crud.update(client).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.crud.delete(id).await
    }
}
