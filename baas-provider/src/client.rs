//! HTTP client for the backup-and-recovery REST API
//!
//! One method per HTTP verb. Every call sends the tenant header and the
//! bearer token when present, and turns any non-2xx answer into
//! [`ApiError::Status`] carrying the raw status and body. Nothing is retried.

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Header carrying the tenant id on every request
pub const TENANT_HEADER: &str = "X-IBM-Tenant-Id";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("invalid endpoint URL '{0}'")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }

    /// Raw response as "<status> <body>", when the backend answered
    pub fn response(&self) -> Option<String> {
        match self {
            ApiError::Status { status, body } => Some(format!("{} {}", status, body)),
            ApiError::Decode { body, .. } => Some(body.clone()),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone)]
pub struct BackupRecoveryClient {
    http: Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl BackupRecoveryClient {
    /// Create a client for the API rooted at `endpoint`
    /// (e.g. `https://backup.example.com/v2`)
    pub fn new(endpoint: &str, auth_token: Option<String>) -> ApiResult<Self> {
        let base_url = Url::parse(endpoint).map_err(|_| ApiError::InvalidUrl(endpoint.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(endpoint.to_string()));
        }
        let http = Client::builder()
            .user_agent(concat!("baas/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url,
            auth_token,
        })
    }

    /// Append path segments to the base URL, percent-encoding each one
    pub fn url<S: AsRef<str>>(&self, segments: &[S]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url, tenant_id: &str) -> RequestBuilder {
        log::debug!("{} {}", method, url);
        let mut builder = self
            .http
            .request(method, url)
            .header(TENANT_HEADER, tenant_id);
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub async fn get<S: AsRef<str>, T: DeserializeOwned>(
        &self,
        segments: &[S],
        tenant_id: &str,
        query: &[(String, String)],
    ) -> ApiResult<T> {
        let url = self.url(segments)?;
        let request = self.request(Method::GET, url, tenant_id).query(query);
        decode(send(request).await?)
    }

    pub async fn post<S: AsRef<str>, B: Serialize, T: DeserializeOwned>(
        &self,
        segments: &[S],
        tenant_id: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.url(segments)?;
        let request = self.request(Method::POST, url, tenant_id).json(body);
        decode(send(request).await?)
    }

    pub async fn put<S: AsRef<str>, B: Serialize, T: DeserializeOwned>(
        &self,
        segments: &[S],
        tenant_id: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.url(segments)?;
        let request = self.request(Method::PUT, url, tenant_id).json(body);
        decode(send(request).await?)
    }

    /// DELETE; the response body, if any, is ignored
    pub async fn delete<S: AsRef<str>>(&self, segments: &[S], tenant_id: &str) -> ApiResult<()> {
        let url = self.url(segments)?;
        send(self.request(Method::DELETE, url, tenant_id)).await?;
        Ok(())
    }
}

async fn send(request: RequestBuilder) -> ApiResult<String> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        log::debug!("response {} {}", status, body);
        return Err(ApiError::Status { status, body });
    }
    Ok(body)
}

fn decode<T: DeserializeOwned>(body: String) -> ApiResult<T> {
    let text = if body.trim().is_empty() { "{}" } else { body.as_str() };
    serde_json::from_str(text).map_err(|source| ApiError::Decode { source, body })
}
