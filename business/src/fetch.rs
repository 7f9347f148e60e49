//! One-shot users fetch.
//!
//! The transport sits behind [`FetchService`] so the UI can run against the real
//! endpoint while tests inject canned outcomes. Every failure, whether transport,
//! HTTP status or decoding, collapses into a single [`FetchError`] carrying a
//! human-readable message.

use std::fmt::Debug;

use ehttp::{Request, Response};
use log::{error, info};
use thiserror::Error;

use crate::{BusinessConfig, User};

/// Any failure to obtain the users list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn status(status: u16) -> Self {
        Self::new(format!("Request failed with status code {status}"))
    }

    fn decode(err: &serde_json::Error) -> Self {
        Self::new(format!("Failed to parse users: {err}"))
    }
}

pub type FetchResult = Result<Vec<User>, FetchError>;

pub type OnFetchDone = Box<dyn FnOnce(ehttp::Result<Response>) + Send + 'static>;

pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: OnFetchDone);
}

/// Production transport backed by `ehttp`.
///
/// Completes on a background thread on native targets.
#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: OnFetchDone) {
        ehttp::fetch(request, on_done);
    }
}

/// Turns a raw response into users, without any field validation.
pub fn decode_users(status: u16, body: &[u8]) -> FetchResult {
    if !(200..300).contains(&status) {
        return Err(FetchError::status(status));
    }
    serde_json::from_slice(body).map_err(|err| FetchError::decode(&err))
}

/// Issues the users request and hands the outcome to `on_done`.
///
/// `on_done` may run on another thread. Nothing retries.
pub fn fetch_users(
    service: &dyn FetchService,
    config: &BusinessConfig,
    on_done: impl FnOnce(FetchResult) + Send + 'static,
) {
    let url = config.users_url();
    info!("Fetching users from {url}");

    let request = Request::get(&url);
    service.fetch(
        request,
        Box::new(move |result| {
            let outcome = match result {
                Ok(response) => decode_users(response.status, &response.bytes),
                Err(err) => Err(FetchError::new(err)),
            };
            match &outcome {
                Ok(users) => info!("Fetched {} users from {url}", users.len()),
                Err(err) => error!("Fetching users from {url} failed: {err}"),
            }
            on_done(outcome);
        }),
    );
}
