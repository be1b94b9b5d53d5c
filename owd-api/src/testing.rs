//! In-memory [`Fetch`] for tests.

use crate::error::TransportError;
use crate::fetch::{Fetch, RawResponse};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

/// One request observed by [`ScriptedFetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub body: Option<String>,
}

/// Replays queued responses per URL and records every call.
///
/// A URL with nothing queued fails with a [`TransportError`].
#[derive(Debug, Default)]
pub struct ScriptedFetch {
    responses: RefCell<HashMap<String, VecDeque<Result<RawResponse, TransportError>>>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl ScriptedFetch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next request to `url`.
    pub fn respond(&self, url: &str, status: u16, body: &str) -> &Self {
        self.push(url, Ok(RawResponse::new(status, body)))
    }

    /// Queue a transport failure for the next request to `url`.
    pub fn fail(&self, url: &str, message: &str) -> &Self {
        self.push(url, Err(TransportError::new(message)))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.url == url).count()
    }

    fn push(&self, url: &str, response: Result<RawResponse, TransportError>) -> &Self {
        self.responses
            .borrow_mut()
            .entry(url.to_string())
            .or_default()
            .push_back(response);
        self
    }

    fn next(&self, method: &'static str, url: &str, body: Option<&str>) -> Result<RawResponse, TransportError> {
        self.calls.borrow_mut().push(RecordedCall {
            method,
            url: url.to_string(),
            body: body.map(str::to_string),
        });
        self.responses
            .borrow_mut()
            .get_mut(url)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(TransportError::new(format!("no scripted response for {}", url))))
    }
}

#[async_trait(?Send)]
impl Fetch for ScriptedFetch {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        self.next("GET", url, None)
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<RawResponse, TransportError> {
        self.next("POST", url, Some(body))
    }
}
