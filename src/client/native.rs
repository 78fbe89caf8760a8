//! reqwest transport for native builds

use async_trait::async_trait;
use std::time::Duration;

use super::error::{ClientError, ClientResult};
use super::transport::{HttpRequest, HttpResponse, Method, Transport};

/// Transport backed by a pooled [`reqwest::Client`]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// `default_timeout` applies to requests that don't carry their own
    pub fn new(default_timeout: Duration) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(default_timeout)
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn map_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Network(err.to_string())
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> ClientResult<HttpResponse> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(map_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_error)?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ApiClient, Backend};
    use crate::query::QueryForm;
    use crate::session::LoginRequest;
    use crate::storage::{keys, MemoryStorage, Storage};
    use axum::{
        http::{HeaderMap, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use serde_json::json;
    use std::rc::Rc;

    /// Stub backend on an ephemeral port
    async fn spawn_backend() -> String {
        let router = Router::new()
            .route(
                "/auth/me",
                get(|headers: HeaderMap| async move {
                    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
                        Some("Bearer good-token") => {
                            (StatusCode::OK, Json(json!({"user": {"name": "Anna"}})))
                        }
                        _ => (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({"error": "Not authenticated"})),
                        ),
                    }
                }),
            )
            .route(
                "/auth/login",
                post(|Json(body): Json<serde_json::Value>| async move {
                    if body["password"] == "secret" {
                        (
                            StatusCode::OK,
                            Json(json!({"token": "good-token", "user": {"name": "Anna"}})),
                        )
                    } else {
                        (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({"error": "Invalid credentials"})),
                        )
                    }
                }),
            )
            .route(
                "/api/pcmo-count",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    Json(json!({"from": "2024-01-01", "to": "2024-01-31", "count": 1}))
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{}", addr)
    }

    fn client(base: &str, storage: MemoryStorage) -> ApiClient<ReqwestTransport> {
        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        ApiClient::new(base, transport, Rc::new(storage))
    }

    #[tokio::test]
    async fn test_login_then_me_against_stub() {
        let base = spawn_backend().await;
        let storage = MemoryStorage::new();
        let client = client(&base, storage.clone());

        assert!(client.me().await.unwrap_err().is_unauthorized());

        let response = client
            .login(&LoginRequest {
                username: "anna".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();
        assert_eq!(response.token, "good-token");

        storage.set(keys::AUTH_TOKEN, &response.token).unwrap();
        let me = client.me().await.unwrap();
        assert_eq!(me.user.display_name(), "Anna");
    }

    #[tokio::test]
    async fn test_error_payload_from_stub() {
        let base = spawn_backend().await;
        let client = client(&base, MemoryStorage::new());

        let err = client
            .login(&LoginRequest {
                username: "anna".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.api_message(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_query_timeout() {
        let base = spawn_backend().await;
        let client =
            client(&base, MemoryStorage::new()).with_query_timeout(Duration::from_millis(100));

        let query = QueryForm::new("", "2024-01-01", "2024-01-31")
            .validate()
            .unwrap();
        assert_eq!(client.count(&query).await.unwrap_err(), ClientError::Timeout);
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = ReqwestTransport::from_client(reqwest::Client::new());
        let client = ApiClient::new(
            &format!("http://{}", addr),
            transport,
            Rc::new(MemoryStorage::new()),
        );
        assert!(matches!(
            client.me().await.unwrap_err(),
            ClientError::Network(_)
        ));
    }
}
