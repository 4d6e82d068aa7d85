use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::contact::{
    ContactFormController, ContactFormFields, FieldName, Notification, SubmissionState, ToastQueue,
};
use crate::content::{ContactDetails, Resume, SkillCategory, CONTACT_DETAILS, RESUME, SKILL_CATEGORIES};
use crate::state::AppState;

/// GET /api/v1/resume
pub async fn handle_get_resume() -> Json<Resume> {
    Json(RESUME)
}

/// GET /api/v1/skills
pub async fn handle_get_skills() -> Json<&'static [SkillCategory]> {
    Json(SKILL_CATEGORIES)
}

/// GET /api/v1/contact-info
pub async fn handle_get_contact_info() -> Json<ContactDetails> {
    Json(CONTACT_DETAILS)
}

#[derive(Serialize)]
pub struct ContactSubmissionResponse {
    pub submission: SubmissionState,
    pub notifications: Vec<Notification>,
}

/// POST /api/v1/contact
/// Same workflow as the HTML form. Always 200: the outcome is in `submission.status`.
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    Json(fields): Json<ContactFormFields>,
) -> Json<ContactSubmissionResponse> {
    let toasts = Arc::new(ToastQueue::new());
    let mut controller = ContactFormController::new(state.relay, toasts.clone());

    for field in FieldName::ALL {
        controller.update_field(field, fields.get(field));
    }

    let submission = controller.submit().await.clone();

    Json(ContactSubmissionResponse {
        submission,
        notifications: toasts.drain(),
    })
}
