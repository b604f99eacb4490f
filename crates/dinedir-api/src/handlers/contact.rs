// ============================================================================
// DineDir API - Contact Handler
// File: crates/dinedir-api/src/handlers/contact.rs
// ============================================================================
//! Contact form handler; submissions are logged, delivery is a stub

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use validator::Validate;

use crate::state::AppState;
use crate::templates::render_page;

/// Contact form payload
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Contact submission - POST /contact
pub async fn submit(State(state): State<AppState>, Form(payload): Form<ContactRequest>) -> Response {
    if payload.validate().is_err() {
        let mut response = render_page(
            &state.templates,
            "contact_received",
            &json!({ "appName": state.config.app.name, "ok": false }),
        );
        *response.status_mut() = StatusCode::BAD_REQUEST;
        return response;
    }

    // TODO: deliver submissions somewhere durable once a channel is chosen
    info!(
        name = %payload.name,
        email = %payload.email,
        message = %payload.message,
        "Contact form submission received"
    );

    render_page(
        &state.templates,
        "contact_received",
        &json!({ "appName": state.config.app.name, "ok": true }),
    )
}
