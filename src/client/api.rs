//! API Client
//!
//! Request builder for the DataVision backend: resolves paths against the
//! base URL, attaches the stored bearer token and turns error statuses into
//! [`ClientError::Status`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;
use std::time::Duration;

use super::error::{ClientError, ClientResult};
use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::query::{CountQuery, CountResult};
use crate::session::{LoginRequest, LoginResponse, MeResponse};
use crate::storage::{keys, Storage};

/// Default backend URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Client-side timeout for the analytics query
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Backend endpoints
pub mod endpoints {
    pub const ME: &str = "/auth/me";
    pub const LOGIN: &str = "/auth/login";
    pub const COUNT: &str = "/api/pcmo-count";
}

/// Per-request options for [`ApiClient::get`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub params: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn params(params: Vec<(String, String)>) -> Self {
        Self {
            params,
            timeout: None,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// The three backend operations the client consumes
#[async_trait(?Send)]
pub trait Backend {
    /// `GET /auth/me`
    async fn me(&self) -> ClientResult<MeResponse>;

    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse>;

    /// `GET /api/pcmo-count`
    async fn count(&self, query: &CountQuery) -> ClientResult<CountResult>;
}

/// HTTP client adapter bound to one backend
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
    storage: Rc<dyn Storage>,
    query_timeout: Duration,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: &str, transport: T, storage: Rc<dyn Storage>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            storage,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Override the analytics query timeout
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET {base}{path}?{params}`
    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ClientResult<R> {
        let mut request = HttpRequest::new(Method::Get, self.url(path, &options.params));
        request.timeout = options.timeout;
        self.execute(request).await
    }

    /// `POST {base}{path}` with a JSON body
    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<R> {
        let body = serde_json::to_string(body).map_err(|e| ClientError::Encode(e.to_string()))?;

        let mut request = HttpRequest::new(Method::Post, self.url(path, &[]));
        request
            .headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        request.body = Some(body);
        self.execute(request).await
    }

    fn url(&self, path: &str, params: &[(String, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    async fn execute<R: DeserializeOwned>(&self, mut request: HttpRequest) -> ClientResult<R> {
        // Read at send time so a fresh login applies to the very next call
        if let Some(token) = self.storage.get(keys::AUTH_TOKEN).filter(|t| !t.is_empty()) {
            request
                .headers
                .push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let method = request.method;
        let url = request.url.clone();
        tracing::debug!(%method, %url, "Sending request");

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::debug!(%method, %url, error = %e, "Request failed");
            e
        })?;

        if !response.is_success() {
            tracing::debug!(%method, %url, status = response.status, "Error response");
            return Err(error_from_response(&response));
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}

/// Map an error response, keeping only a string `error` field from its body
fn error_from_response(response: &HttpResponse) -> ClientError {
    let message = serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|body| body.get("error")?.as_str().map(str::to_string));

    ClientError::Status {
        status: response.status,
        message,
    }
}

#[async_trait(?Send)]
impl<T: Transport> Backend for ApiClient<T> {
    async fn me(&self) -> ClientResult<MeResponse> {
        self.get(endpoints::ME, RequestOptions::default()).await
    }

    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        self.post(endpoints::LOGIN, request).await
    }

    async fn count(&self, query: &CountQuery) -> ClientResult<CountResult> {
        let options = RequestOptions::params(query.params()).timeout(self.query_timeout);
        self.get(endpoints::COUNT, options).await
    }
}
