//! Contact form controller — owns the form fields and drives one submission
//! through the relay, reporting the outcome to the injected notification sink.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::contact::fields::{ContactFormFields, FieldName};
use crate::contact::notify::{Notification, NotificationSink, NotificationVariant};
use crate::contact::state::{SubmissionState, FALLBACK_ERROR_MESSAGE};
use crate::relay_client::FormRelay;

const SUCCESS_TITLE: &str = "Message sent successfully!";
const SUCCESS_DESCRIPTION: &str = "Thanks for reaching out. I'll get back to you soon.";
const FAILURE_TITLE: &str = "Something went wrong";

pub struct ContactFormController {
    fields: ContactFormFields,
    state: SubmissionState,
    relay: Arc<dyn FormRelay>,
    notifier: Arc<dyn NotificationSink>,
}

impl ContactFormController {
    pub fn new(relay: Arc<dyn FormRelay>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            fields: ContactFormFields::default(),
            state: SubmissionState::Idle,
            relay,
            notifier,
        }
    }

    pub fn fields(&self) -> &ContactFormFields {
        &self.fields
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// True while a relay call is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting)
    }

    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    /// Sends the current fields to the relay once and records the outcome.
    ///
    /// Never fails: every relay problem ends in `SubmissionState::Failed` plus
    /// a destructive notification. On success the fields are cleared.
    pub async fn submit(&mut self) -> &SubmissionState {
        let mut guard = SubmittingGuard::enter(&mut self.state);

        match deliver(self.relay.as_ref(), &self.fields).await {
            Ok(()) => {
                guard.settle(SubmissionState::Succeeded);
                self.fields.clear();
                info!("Contact message relayed");
                self.notifier.notify(Notification {
                    title: SUCCESS_TITLE.to_string(),
                    description: SUCCESS_DESCRIPTION.to_string(),
                    variant: NotificationVariant::Default,
                });
            }
            Err(message) => {
                guard.settle(SubmissionState::Failed(message.clone()));
                warn!("Contact message not relayed: {message}");
                self.notifier.notify(Notification {
                    title: FAILURE_TITLE.to_string(),
                    description: message,
                    variant: NotificationVariant::Destructive,
                });
            }
        }

        drop(guard);
        &self.state
    }

    /// "Send another message": Succeeded goes back to Idle, anything else is
    /// left alone.
    #[allow(dead_code)]
    pub fn reset_after_success(&mut self) {
        if self.state == SubmissionState::Succeeded {
            self.state = SubmissionState::Idle;
        }
    }
}

/// Marks the state as Submitting for as long as it lives. If it is dropped
/// without being settled (the submit future was cancelled), the state falls
/// back to Failed so the form is never stuck submitting.
struct SubmittingGuard<'a> {
    state: &'a mut SubmissionState,
}

impl<'a> SubmittingGuard<'a> {
    fn enter(state: &'a mut SubmissionState) -> Self {
        *state = SubmissionState::Submitting;
        Self { state }
    }

    fn settle(&mut self, next: SubmissionState) {
        *self.state = next;
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        if *self.state == SubmissionState::Submitting {
            *self.state = SubmissionState::Failed(FALLBACK_ERROR_MESSAGE.to_string());
        }
    }
}

/// One relay round trip. `Err` carries the message to show the visitor.
async fn deliver(relay: &dyn FormRelay, fields: &ContactFormFields) -> Result<(), String> {
    let response = relay.send(fields).await.map_err(|e| {
        warn!("Form relay transport failure: {e}");
        FALLBACK_ERROR_MESSAGE.to_string()
    })?;

    if response.is_success() {
        // The body of a 2xx reply is not inspected.
        return Ok(());
    }

    warn!("Form relay rejected submission with status {}", response.status);
    Err(rejection_message(&response.body))
}

/// The relay's own `error` string when it sent one, the fallback otherwise.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}
