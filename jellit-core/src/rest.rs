//! Blocking HTTPS plumbing shared by the entry store and the auth service.

use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;

use crate::error::RemoteError;
use crate::session::Session;

const TIMEOUT: Duration = Duration::from_secs(30);

/// A client for one hosted backend project: its base url and public (anon) key.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
    anon_key: String,
}

/// Error body shape used by both the REST and auth endpoints.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self, RemoteError> {
        let http = Client::builder()
            .timeout(TIMEOUT)
            .user_agent(concat!("jellit/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        })
    }

    /// `{base_url}/{path}`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// A request carrying the project key, authorised as `session` when given and as
    /// the anonymous role otherwise.
    pub fn request(&self, method: Method, path: &str, session: Option<&Session>) -> RequestBuilder {
        let token = session
            .map(|s| s.access_token.as_str())
            .unwrap_or(self.anon_key.as_str());
        self.http
            .request(method, self.endpoint(path))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
    }

    /// Sends `request` and returns the body of a successful response.
    pub fn send(&self, request: RequestBuilder) -> Result<String, RemoteError> {
        let response = request.send()?;
        read_body(response)
    }
}

fn read_body(response: Response) -> Result<String, RemoteError> {
    let status = response.status();
    let body = response.text()?;
    if status.is_success() {
        return Ok(body);
    }
    tracing::debug!(status = status.as_u16(), %body, "remote call rejected");
    if status.as_u16() == 401 || status.as_u16() == 403 {
        return Err(RemoteError::PermissionDenied);
    }
    Err(RemoteError::Status {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Picks the human message out of an error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .message
        .or(parsed.msg)
        .or(parsed.error_description)
        .unwrap_or_else(|| body.trim().to_string())
}
