//! Contact form data and submission status.
//!
//! DESIGN
//! ======
//! `ContactState` is a plain struct with explicit transition methods. The
//! submission flow in `net::contact` drives it through a `ContactStore`, so
//! the same transitions run against a Leptos `RwSignal` in the browser and
//! against a `RefCell` in tests.
//!
//! Every submission gets a sequence number. Completions and success reverts
//! carry the number they belong to and are dropped once a newer submission
//! has started, so a stale 5 second revert never clobbers fresh state.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::time::Duration;

use leptos::prelude::{RwSignal, Update};
use serde::{Deserialize, Serialize};

use crate::net::contact::SubmitError;

/// How long the success banner stays up before the form returns to idle.
pub const SUCCESS_REVERT_DELAY: Duration = Duration::from_millis(5000);

/// The three-field contact payload. Serialized as the request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Addressable form fields, keyed by the input's `name` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Resolve an input `name` attribute to a field.
    pub fn from_input_name(raw: &str) -> Option<Self> {
        match raw {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    pub fn input_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Progress and outcome of the current submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Snapshot handed out when a submit begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    pub seq: u64,
    pub payload: FormData,
}

/// Deferred `Succeeded -> Idle` transition owed to submission `seq`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevertTicket {
    pub seq: u64,
    pub after: Duration,
}

/// Contact form state: field values, status, and the submission counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: FormData,
    pub status: SubmissionStatus,
    pub submission_seq: u64,
}

impl ContactState {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.form.name,
            ContactField::Email => &self.form.email,
            ContactField::Message => &self.form.message,
        }
    }

    /// Replace a single field value. Status is left alone.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.form.name,
            ContactField::Email => &mut self.form.email,
            ContactField::Message => &mut self.form.message,
        };
        *slot = value;
    }

    /// Route an input event by the element's `name` attribute.
    ///
    /// Unknown names are ignored and return `false`.
    pub fn set_named_field(&mut self, name: &str, value: String) -> bool {
        let Some(field) = ContactField::from_input_name(name) else {
            return false;
        };
        self.set_field(field, value);
        true
    }

    /// Enter `Submitting` and snapshot the payload.
    ///
    /// Returns `None` without touching anything when a submission is already
    /// in flight.
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        if self.is_submitting() {
            return None;
        }
        self.submission_seq += 1;
        self.status = SubmissionStatus::Submitting;
        Some(PendingSubmission { seq: self.submission_seq, payload: self.form.clone() })
    }

    /// Apply the network outcome of submission `seq`.
    ///
    /// On success the form is cleared and a revert ticket is returned for the
    /// caller to schedule. Outcomes for a stale `seq`, or arriving when the
    /// state is no longer `Submitting`, are ignored.
    pub fn finish_submit(&mut self, seq: u64, outcome: Result<(), SubmitError>) -> Option<RevertTicket> {
        if seq != self.submission_seq || !self.is_submitting() {
            return None;
        }
        match outcome {
            Ok(()) => {
                self.form = FormData::default();
                self.status = SubmissionStatus::Succeeded;
                Some(RevertTicket { seq, after: SUCCESS_REVERT_DELAY })
            }
            Err(err) => {
                self.status = SubmissionStatus::Failed(err.user_message());
                None
            }
        }
    }

    /// Fire a scheduled revert. Returns `true` when it moved the state to `Idle`.
    pub fn revert_success(&mut self, ticket: RevertTicket) -> bool {
        if ticket.seq != self.submission_seq || self.status != SubmissionStatus::Succeeded {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn success_visible(&self) -> bool {
        self.status == SubmissionStatus::Succeeded
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

// =============================================================================
// STORE
// =============================================================================

/// Shared, mutable home of a `ContactState`.
///
/// Returns `None` when the backing storage is gone (e.g. a disposed signal).
pub trait ContactStore {
    fn update_contact<R>(&self, f: impl FnOnce(&mut ContactState) -> R) -> Option<R>;
}

impl ContactStore for RwSignal<ContactState> {
    fn update_contact<R>(&self, f: impl FnOnce(&mut ContactState) -> R) -> Option<R> {
        self.try_update(f)
    }
}
