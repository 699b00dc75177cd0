use crate::client::Transport;
use crate::domain::WorkspaceUser;
use crate::error::Result;

use super::CrudService;

/// Operations on workspace memberships.
///
/// Toggl API docs: <https://github.com/toggl/toggl_api_docs/blob/master/chapters/workspace_users.md>
pub struct WorkspaceUsersService<'a> {
    crud: CrudService<'a, WorkspaceUser>,
}

impl<'a> WorkspaceUsersService<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self {
            crud: CrudService::new(transport),
        }
    }

    /// Updates a workspace membership. Only the admin flag is honored by the
    /// remote side.
    pub async fn update(&self, workspace_user: &WorkspaceUser) -> Result<WorkspaceUser> {
        self.crud.update(workspace_user).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.crud.delete(id).await
    }
}
