use std::sync::Arc;

use axum::{extract::State, response::Html, Form};

use crate::contact::{ContactFormController, FieldName, Notification, ToastQueue};
use crate::content::{CONTACT_DETAILS, RESUME, SKILL_CATEGORIES};
use crate::errors::AppError;
use crate::state::AppState;
use crate::views::{contact::render_contact, render_page, resume::render_resume, skills::render_skills};

fn page(controller: &ContactFormController, toasts: &[Notification]) -> Html<String> {
    Html(render_page(
        &render_resume(&RESUME),
        &render_skills(SKILL_CATEGORIES),
        &render_contact(controller, &CONTACT_DETAILS),
        toasts,
    ))
}

/// GET /
/// Fresh page with an empty, idle contact form. Also where "Send Another
/// Message" lands.
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    let controller = ContactFormController::new(state.relay, Arc::new(ToastQueue::new()));
    page(&controller, &[])
}

/// POST /contact
/// Takes the urlencoded form, submits it once and re-renders the page with
/// the outcome. Relay failures still answer 200 with the error shown inline.
pub async fn handle_contact_form(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let toasts = Arc::new(ToastQueue::new());
    let mut controller = ContactFormController::new(state.relay, toasts.clone());

    for (name, value) in pairs {
        let field = name
            .parse::<FieldName>()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        controller.update_field(field, value);
    }

    controller.submit().await;

    Ok(page(&controller, &toasts.drain()))
}
