use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::services::{
    ClientsService, ProjectUsersService, ProjectsService, TagsService, TasksService,
    TimeEntriesService, UsersService, WorkspaceUsersService, WorkspacesService,
};

/// Default Toggl API base URL.
pub const BASE_URL: &str = "https://toggl.com/api/v8/";

const USER_AGENT: &str = concat!("toggl/", env!("CARGO_PKG_VERSION"));

/// Manages communication with the Toggl API.
///
/// Holds the shared transport: base URL, HTTP client and the precomputed
/// basic-auth header. None of it is mutated after construction, so a client
/// can be used from concurrent tasks freely. Per-resource operations live on
/// the facades returned by the accessor methods.
#[derive(Debug)]
pub struct TogglClient {
    transport: Transport,
}

impl TogglClient {
    /// Creates a client for the default API base URL. The API token can be
    /// found at <https://www.toggl.com/user/edit>.
    pub fn new(api_token: &str) -> Self {
        Self::with_base_url(BASE_URL, api_token).expect("default client configuration is valid")
    }

    /// Creates a client against a custom base URL. A missing trailing slash
    /// is added so relative paths resolve under the full base path.
    pub fn with_base_url(base_url: &str, api_token: &str) -> Result<Self> {
        let mut base_url = base_url.trim_end_matches('/').to_string();
        base_url.push('/');
        let base_url = Url::parse(&base_url).map_err(|e| Error::Url(e.to_string()))?;

        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        // HTTP Basic with username = token and password = the literal string
        // "api_token", encoded once here.
        let basic_auth = format!("Basic {}", STANDARD.encode(format!("{api_token}:api_token")));

        Ok(Self {
            transport: Transport {
                http,
                base_url,
                basic_auth,
            },
        })
    }

    pub fn clients(&self) -> ClientsService<'_> {
        ClientsService::new(&self.transport)
    }

    pub fn projects(&self) -> ProjectsService<'_> {
        ProjectsService::new(&self.transport)
    }

    pub fn project_users(&self) -> ProjectUsersService<'_> {
        ProjectUsersService::new(&self.transport)
    }

    pub fn tags(&self) -> TagsService<'_> {
        TagsService::new(&self.transport)
    }

    pub fn tasks(&self) -> TasksService<'_> {
        TasksService::new(&self.transport)
    }

    pub fn time_entries(&self) -> TimeEntriesService<'_> {
        TimeEntriesService::new(&self.transport)
    }

    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(&self.transport)
    }

    pub fn workspaces(&self) -> WorkspacesService<'_> {
        WorkspacesService::new(&self.transport)
    }

    pub fn workspace_users(&self) -> WorkspaceUsersService<'_> {
        WorkspaceUsersService::new(&self.transport)
    }
}

/// The transport core shared by every resource facade. One HTTP exchange per
/// call: no retry, no backoff, no timeout override.
#[derive(Debug)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: Url,
    basic_auth: String,
}

impl Transport {
    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Url(format!("{path}: {e}")))
    }

    /// Sends one request and returns the raw success body. Statuses outside
    /// the 200 range are reported with the method, resolved URL, status code
    /// and the full body text.
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<String> {
        let url = self.endpoint(path)?;

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(AUTHORIZATION, self.basic_auth.as_str());
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(%method, %url, status = status.as_u16(), "toggl api exchange");

        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::Remote {
                method,
                url: url.to_string(),
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }

    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let text = self.send(method, path, body).await?;
        serde_json::from_str(&text).map_err(Error::Decode)
    }

    /// Same exchange, response body discarded.
    pub(crate) async fn request_discard(&self, method: Method, path: &str) -> Result<()> {
        self.send(method, path, None).await?;
        Ok(())
    }
}
