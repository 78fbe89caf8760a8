//! HTTP Client Adapter
//!
//! Outbound calls to the DataVision backend.
//!
//! - **transport**: the [`Transport`] seam plus request/response types
//! - **api**: [`ApiClient`] (`get`/`post`, bearer injection, error mapping)
//!   and the [`Backend`] operations built on it
//! - **native**: reqwest transport (feature `native`)
//!
//! Calls are at-most-once: nothing here retries.

mod api;
mod error;
#[cfg(test)]
pub(crate) mod mock;
#[cfg(feature = "native")]
mod native;
mod transport;

pub use api::{
    endpoints, ApiClient, Backend, RequestOptions, DEFAULT_API_BASE, DEFAULT_QUERY_TIMEOUT,
};
pub use error::{ClientError, ClientResult};
#[cfg(feature = "native")]
pub use native::ReqwestTransport;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
