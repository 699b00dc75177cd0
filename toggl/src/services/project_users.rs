use reqwest::Method;

use crate::client::Transport;
use crate::domain::{ProjectUser, ProjectUserBatch};
use crate::error::Result;

use super::{envelope, CrudService, DataEnvelope, Resource};

/// Operations on project-user associations.
///
/// Toggl API docs: <https://github.com/toggl/toggl_api_docs/blob/master/chapters/project_users.md>
pub struct ProjectUsersService<'a> {
    crud: CrudService<'a, ProjectUser>,
}

impl<'a> ProjectUsersService<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self {
            crud: CrudService::new(transport),
        }
    }

    pub async fn create(&self, project_user: &ProjectUser) -> Result<ProjectUser> {
        self.crud.create(project_user).await
    }

    /// Creates one association per user id carried in the batch form, all
    /// for the same project.
    pub async fn mass_create(&self, batch: &ProjectUserBatch) -> Result<Vec<ProjectUser>> {
        let body = envelope(ProjectUser::ENVELOPE, batch)?;
        let response: DataEnvelope<Vec<ProjectUser>> = self
            .crud
            .transport()
            .request(Method::POST, ProjectUser::PATH, Some(body))
            .await?;
        Ok(response.data)
    }

    pub async fn update(&self, project_user: &ProjectUser) -> Result<ProjectUser> {
        self.crud.update(project_user).await
    }

    /// Applies the same change to several associations; the ids travel
    /// comma-joined in the URL path.
    pub async fn mass_update(
        &self,
        ids: &[i64],
        project_user: &ProjectUser,
    ) -> Result<Vec<ProjectUser>> {
        self.crud.mass_update(ids, project_user).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.crud.delete(id).await
    }

    pub async fn mass_delete(&self, ids: &[i64]) -> Result<()> {
        self.crud.mass_delete(ids).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::domain::{ProjectUser, ProjectUserBatch};
    use crate::error::Error;
    use crate::TogglClient;

    async fn mock_client() -> (MockServer, TogglClient) {
        let server = MockServer::start().await;
        let client = TogglClient::with_base_url(&server.uri(), "token").unwrap();
        (server, client)
    }

    #[tokio::test]
    async fn create_wraps_the_request_in_a_project_user_envelope() {
        let (server, client) = mock_client().await;
        Mock::given(method("POST"))
            .and(path("/project_users"))
            .and(body_json(json!({"project_user": {"pid": 2, "uid": 9}})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"id": 1, "pid": 2, "uid": 9}})),
            )
            .mount(&server)
            .await;

        let created = client
            .project_users()
            .create(&ProjectUser {
                project_id: Some(2),
                user_id: Some(9),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.id, Some(1));
    }

    #[tokio::test]
    async fn mass_create_sends_comma_joined_user_ids_and_decodes_the_data_array() {
        let (server, client) = mock_client().await;
        Mock::given(method("POST"))
            .and(path("/project_users"))
            .and(body_json(json!({"project_user": {"pid": 2, "uid": "7,8"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"id": 1, "pid": 2, "uid": 7},
                    {"id": 2, "pid": 2, "uid": 8}
                ]
            })))
            .mount(&server)
            .await;

        let created = client
            .project_users()
            .mass_create(&ProjectUserBatch {
                project_id: Some(2),
                user_ids: Some("7,8".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.len(), 2);
        assert_eq!(created[1].user_id, Some(8));
    }

    #[tokio::test]
    async fn mass_update_puts_to_the_comma_joined_path() {
        let (server, client) = mock_client().await;
        Mock::given(method("PUT"))
            .and(path("/project_users/1,2"))
            .and(body_json(json!({"project_user": {"manager": true}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"id": 1, "manager": true},
                    {"id": 2, "manager": true}
                ]
            })))
            .mount(&server)
            .await;

        let updated = client
            .project_users()
            .mass_update(
                &[1, 2],
                &ProjectUser {
                    manager: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.len(), 2);
        assert_eq!(updated[0].manager, Some(true));
    }

    #[tokio::test]
    async fn mass_delete_hits_the_comma_joined_path() {
        let (server, client) = mock_client().await;
        Mock::given(method("DELETE"))
            .and(path("/project_users/4,1,7"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        client.project_users().mass_delete(&[4, 1, 7]).await.unwrap();
    }

    #[tokio::test]
    async fn mass_delete_with_no_ids_fails_before_any_network_call() {
        let client = TogglClient::with_base_url("http://127.0.0.1:1/", "token").unwrap();

        let err = client.project_users().mass_delete(&[]).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
