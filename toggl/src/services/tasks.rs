use crate::client::Transport;
use crate::domain::Task;
use crate::error::Result;

use super::CrudService;

/// Operations on tasks. Tasks are a paid-workspace feature; on free
/// workspaces the remote rejects these calls.
///
/// Toggl API docs: <https://github.com/toggl/toggl_api_docs/blob/master/chapters/tasks.md>
pub struct TasksService<'a> {
    crud: CrudService<'a, Task>,
}

impl<'a> TasksService<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self {
            crud: CrudService::new(transport),
        }
    }

    pub async fn create(&self, task: &Task) -> Result<Task> {
        self.crud.create(task).await
    }

    pub async fn get(&self, id: i64) -> Result<Task> {
        self.crud.get(id).await
    }

    pub async fn update(&self, task: &Task) -> Result<Task> {
        self.crud.update(task).await
    }

    /// Applies the same change to several tasks; the ids travel comma-joined
    /// in the URL path.
    pub async fn mass_update(&self, ids: &[i64], task: &Task) -> Result<Vec<Task>> {
        self.crud.mass_update(ids, task).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.crud.delete(id).await
    }

    pub async fn mass_delete(&self, ids: &[i64]) -> Result<()> {
        self.crud.mass_delete(ids).await
    }
}
