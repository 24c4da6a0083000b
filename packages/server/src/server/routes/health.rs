use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AxumAppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: String,
    email_configured: bool,
    whatsapp_configured: bool,
}

/// Health check endpoint
///
/// Always 200 while the process is serving; reports which transports will
/// really deliver and which will only simulate.
pub async fn health_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let deps = &state.server_deps;

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            email_configured: deps.email.is_configured(),
            whatsapp_configured: deps.messaging.is_configured(),
        }),
    )
}
