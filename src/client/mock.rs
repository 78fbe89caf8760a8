//! Scripted transport for tests

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::error::{ClientError, ClientResult};
use super::transport::{HttpRequest, HttpResponse, Transport};

/// Replays queued outcomes in order and records every request.
///
/// Clones share the queue and the log. An empty queue answers with a
/// network error.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    outcomes: Rc<RefCell<VecDeque<ClientResult<HttpResponse>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.outcomes
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, error: ClientError) {
        self.outcomes.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> ClientResult<HttpResponse> {
        self.requests.borrow_mut().push(request);
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Network("no scripted response".into())))
    }
}
