use reqwest::Method;

use crate::client::Transport;
use crate::domain::{Project, ProjectUser};
use crate::error::Result;

use super::CrudService;

/// Operations on projects.
///
/// Toggl API docs: <https://github.com/toggl/toggl_api_docs/blob/master/chapters/projects.md>
pub struct ProjectsService<'a> {
    crud: CrudService<'a, Project>,
}

impl<'a> ProjectsService<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self {
            crud: CrudService::new(transport),
        }
    }

    pub async fn create(&self, project: &Project) -> Result<Project> {
        self.crud.create(project).await
    }

    pub async fn get(&self, id: i64) -> Result<Project> {
        self.crud.get(id).await
    }

    pub async fn update(&self, project: &Project) -> Result<Project> {
        self.crud.update(project).await
    }

    /// Lists the user associations of a project.
    pub async fn list_project_users(&self, id: i64) -> Result<Vec<ProjectUser>> {
        self.crud
            .transport()
            .request(Method::GET, &format!("projects/{id}/project_users"), None)
            .await
    }
}
