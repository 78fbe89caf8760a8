//! Fetch Transport
//!
//! [`Transport`] over the browser `fetch` API. A request timeout is raced
//! against a timer; the losing fetch is dropped and its response ignored.

use async_trait::async_trait;
use futures_util::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;

use datavision::client::{ClientError, ClientResult, HttpRequest, HttpResponse, Method, Transport};

/// `gloo-net` backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl GlooTransport {
    fn build(request: &HttpRequest) -> ClientResult<Request> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match &request.body {
            Some(body) => builder.body(body.as_str()),
            None => builder.build(),
        };
        built.map_err(|e| ClientError::Encode(e.to_string()))
    }

    async fn exchange(request: Request) -> ClientResult<HttpResponse> {
        let response = request.send().await.map_err(network)?;
        let status = response.status();
        let body = response.text().await.map_err(network)?;
        Ok(HttpResponse::new(status, body))
    }
}

fn network(err: gloo_net::Error) -> ClientError {
    ClientError::Network(err.to_string())
}

fn millis(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> ClientResult<HttpResponse> {
        let fetch = Self::exchange(Self::build(&request)?);

        let Some(timeout) = request.timeout else {
            return fetch.await;
        };

        match select(Box::pin(fetch), Box::pin(TimeoutFuture::new(millis(timeout)))).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(((), _)) => {
                web_sys::console::warn_1(
                    &format!("{} {} timed out after {:?}", request.method, request.url, timeout)
                        .into(),
                );
                Err(ClientError::Timeout)
            }
        }
    }
}
