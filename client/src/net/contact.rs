//! Contact form submission: request building, response classification, and
//! the submit flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page posts `FormData` as JSON to `/api/contact`. Message delivery is
//! handled by a separate backend; this module only cares about the status
//! code and an optional `error` string in the response body.
//!
//! ERROR HANDLING
//! ==============
//! Network failures, non-2xx responses, and unparseable bodies all end up as
//! a `SubmitError`, which the state machine turns into a single user-facing
//! message. Nothing here retries.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::time::Duration;

use serde::Deserialize;

use crate::state::contact::{ContactState, ContactStore, FormData, PendingSubmission};

/// Path of the message-delivery endpoint.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Shown for a non-2xx response without a usable `error` field.
pub const SERVER_FALLBACK_MESSAGE: &str = "Error al enviar el mensaje";

/// Shown when a failure carries no text of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Hubo un error al enviar el mensaje. Por favor, inténtalo de nuevo.";

// =============================================================================
// ERRORS
// =============================================================================

/// Ways a contact submission can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status.
    #[error("server rejected message: status {status}")]
    Server { status: u16, message: Option<String> },

    /// A 2xx response whose body is not JSON, or a payload that could not be encoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl SubmitError {
    /// Text surfaced in the form's error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(message) if message.trim().is_empty() => GENERIC_FAILURE_MESSAGE.to_owned(),
            Self::Network(message) | Self::MalformedResponse(message) => message.clone(),
            Self::Server { message: Some(message), .. } => message.clone(),
            Self::Server { message: None, .. } => SERVER_FALLBACK_MESSAGE.to_owned(),
        }
    }
}

// =============================================================================
// WIRE
// =============================================================================

/// A JSON `POST` ready to hand to a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonRequest {
    pub path: String,
    pub content_type: &'static str,
    pub body: String,
}

/// Status and raw body of a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<serde_json::Value>,
}

/// Build the contact request for `form`.
///
/// # Errors
///
/// Returns [`SubmitError::MalformedResponse`] if the payload cannot be encoded.
pub fn contact_request(form: &FormData) -> Result<JsonRequest, SubmitError> {
    let body = serde_json::to_string(form).map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;
    Ok(JsonRequest { path: CONTACT_ENDPOINT.to_owned(), content_type: JSON_CONTENT_TYPE, body })
}

/// Map a raw response onto the submission outcome.
///
/// 2xx requires a JSON body. Anything else is a server rejection whose
/// message is the body's `error` string when present and non-empty.
///
/// # Errors
///
/// Returns [`SubmitError::Server`] or [`SubmitError::MalformedResponse`].
pub fn classify_response(status: u16, body: &str) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<serde_json::Value>(body)
            .map(|_| ())
            .map_err(|e| SubmitError::MalformedResponse(e.to_string()));
    }
    Err(SubmitError::Server { status, message: server_error_message(body) })
}

fn server_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.error? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

// =============================================================================
// SEAMS
// =============================================================================

/// Outbound HTTP for the contact endpoint. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait ContactTransport {
    /// Send `request` as a `POST`.
    ///
    /// # Errors
    ///
    /// Returns the failure text when no response was received.
    async fn post(&self, request: &JsonRequest) -> Result<RawResponse, String>;
}

/// Timer used for the success revert.
#[async_trait::async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}

/// Send `form` once and classify the reply.
///
/// # Errors
///
/// Returns a [`SubmitError`] for network, server, or body failures.
pub async fn deliver<T: ContactTransport + ?Sized>(transport: &T, form: &FormData) -> Result<(), SubmitError> {
    let request = contact_request(form)?;
    let response = transport.post(&request).await.map_err(SubmitError::Network)?;
    classify_response(response.status, &response.body)
}

// =============================================================================
// SUBMITTER
// =============================================================================

/// What happened to a `submit` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing was sent.
    Skipped,
    Delivered,
    Failed(SubmitError),
    /// The store went away or a newer submission took over before the outcome landed.
    Superseded,
}

/// Drives one contact form through `ContactState` transitions.
#[derive(Clone, Debug)]
pub struct ContactSubmitter<S, T, D> {
    store: S,
    transport: T,
    delay: D,
}

impl<S, T, D> ContactSubmitter<S, T, D>
where
    S: ContactStore,
    T: ContactTransport,
    D: Delay,
{
    pub fn new(store: S, transport: T, delay: D) -> Self {
        Self { store, transport, delay }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Synchronously enter `Submitting`. `None` when already submitting.
    pub fn begin(&self) -> Option<PendingSubmission> {
        self.store.update_contact(ContactState::begin_submit).flatten()
    }

    /// Deliver a begun submission, record the result, and run the success revert.
    pub async fn complete(&self, pending: PendingSubmission) -> SubmitOutcome {
        let result = deliver(&self.transport, &pending.payload).await;
        if let Err(e) = &result {
            leptos::logging::warn!("contact submission {} failed: {e}", pending.seq);
        }

        let outcome = match &result {
            Ok(()) => SubmitOutcome::Delivered,
            Err(e) => SubmitOutcome::Failed(e.clone()),
        };
        let recorded = self.store.update_contact(|s| {
            let current = s.submission_seq == pending.seq && s.is_submitting();
            (current, s.finish_submit(pending.seq, result))
        });
        let ticket = match recorded {
            Some((true, ticket)) => ticket,
            _ => return SubmitOutcome::Superseded,
        };

        if let Some(ticket) = ticket {
            self.delay.sleep(ticket.after).await;
            let reverted = self.store.update_contact(|s| s.revert_success(ticket)).unwrap_or(false);
            if !reverted {
                leptos::logging::log!("contact submission {} revert superseded", ticket.seq);
            }
        }
        outcome
    }

    /// `begin` followed by `complete`.
    pub async fn submit(&self) -> SubmitOutcome {
        match self.begin() {
            Some(pending) => self.complete(pending).await,
            None => SubmitOutcome::Skipped,
        }
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `gloo-net` transport for the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl ContactTransport for BrowserTransport {
    async fn post(&self, request: &JsonRequest) -> Result<RawResponse, String> {
        let resp = gloo_net::http::Request::post(&request.path)
            .header("Content-Type", request.content_type)
            .body(request.body.clone())
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| e.to_string())?;
        Ok(RawResponse { status, body })
    }
}

/// `gloo-timers` delay for the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDelay;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl Delay for BrowserDelay {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
