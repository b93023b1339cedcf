//! Reconciliation client: the HTTP bridge between optimistic local state and
//! the remote system of record.
//!
//! Requests are plain JSON over the same origin as the app. A bearer token is
//! attached to every request when one has been stored; how the token is
//! obtained and refreshed is handled by the authentication screens, not here.
//! Callers surface failures as toasts and refetch the affected collection;
//! nothing in this module retries.

use std::cell::RefCell;

use reqwasm::http::{Request, Response};
use thiserror::Error;

use crate::model::api::ErrorDto;

pub mod applications;
pub mod cvs;
pub mod pipelines;

pub const API_BASE: &str = "/api";

thread_local! {
    static BEARER_TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Store the bearer token attached to subsequent requests. The browser event
/// loop is single-threaded, so thread-local storage is app-global here.
pub fn set_bearer_token(token: impl Into<String>) {
    BEARER_TOKEN.with(|t| *t.borrow_mut() = Some(token.into()));
}

pub fn clear_bearer_token() {
    BEARER_TOKEN.with(|t| *t.borrow_mut() = None);
}

fn authorized(request: Request) -> Request {
    BEARER_TOKEN.with(|token| match token.borrow().as_deref() {
        Some(token) => request.header("Authorization", &format!("Bearer {token}")),
        None => request,
    })
}

/// Error surface for every API call. Components render these as error toasts
/// with the server-provided message when one was parseable.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (network failure, CORS, etc).
    #[error("Failed to send request: {0}")]
    Request(String),
    /// The server answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body could not be decoded into the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

async fn send(request: Request) -> Result<Response, ApiError> {
    authorized(request)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))
}

fn json_body(value: &impl serde::Serialize) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Build the error for a non-success response, preferring the server's
/// `ErrorDto` message and falling back to the raw body text.
async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let message = if let Ok(dto) = response.json::<ErrorDto>().await {
        dto.error
    } else {
        response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string())
    };
    ApiError::Status { status, message }
}

async fn expect_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    match response.status() {
        200 | 201 => response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string())),
        _ => Err(status_error(response).await),
    }
}

async fn expect_empty(response: Response) -> Result<(), ApiError> {
    match response.status() {
        200 | 204 => Ok(()),
        _ => Err(status_error(response).await),
    }
}
