pub mod api;
pub mod health;
pub mod pages;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Server-rendered page
        .route("/", get(pages::handle_index))
        .route("/contact", post(pages::handle_contact_form))
        // JSON API
        .route("/api/v1/resume", get(api::handle_get_resume))
        .route("/api/v1/skills", get(api::handle_get_skills))
        .route("/api/v1/contact-info", get(api::handle_get_contact_info))
        .route("/api/v1/contact", post(api::handle_submit_contact))
        .fallback(not_found)
        .with_state(state)
}
