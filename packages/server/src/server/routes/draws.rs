use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rand::{rngs::StdRng, SeedableRng};

use crate::domains::draw::{run_draw, DrawRequest, DrawResponse};
use crate::server::app::AxumAppState;

/// Draw POST endpoint
///
/// 200 when the draw happened (even if some deliveries failed),
/// 422 when the request could not be drawn, 400 when the body is malformed.
pub async fn create_draw_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<DrawRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Malformed draw request");
            let body = DrawResponse::rejected(format!(
                "Malformed request: {}",
                rejection.body_text()
            ));
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let mut rng = StdRng::from_entropy();
    let response = run_draw(request, &state.server_deps, &mut rng).await;

    let status = if response.success {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    (status, Json(response)).into_response()
}
