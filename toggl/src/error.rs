use reqwest::Method;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by Toggl API operations. All of them are terminal for the
/// call that produced them; nothing is retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// A local precondition failed before any network call was made.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The base URL or a relative request path could not be parsed.
    #[error("invalid request url: {0}")]
    Url(String),

    /// The request body could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Transport-level failure, surfaced as-is from the HTTP stack.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a status outside the 200 range. Carries the
    /// raw response body; there is no structured error payload to parse.
    #[error("{method} {url}: {status} {body}")]
    Remote {
        method: Method,
        url: String,
        status: u16,
        body: String,
    },

    /// The success response body was not valid JSON for the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}
