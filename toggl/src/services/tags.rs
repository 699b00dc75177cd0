use crate::client::Transport;
use crate::domain::Tag;
use crate::error::Result;

use super::CrudService;

/// Operations on tags.
///
/// Toggl API docs: <https://github.com/toggl/toggl_api_docs/blob/master/chapters/tags.md>
pub struct TagsService<'a> {
    crud: CrudService<'a, Tag>,
}

impl<'a> TagsService<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self {
            crud: CrudService::new(transport),
        }
    }

    pub async fn create(&self, tag: &Tag) -> Result<Tag> {
        self.crud.create(tag).await
    }

    pub async fn update(&self, tag: &Tag) -> Result<Tag> {
        self.crud.update(tag).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.crud.delete(id).await
    }
}
