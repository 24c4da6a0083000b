//! Run draw action

use rand::Rng;
use tracing::{info, warn};

use crate::domains::draw::{validate, AssignmentEngine, DrawRequest, DrawResponse};
use crate::domains::notifications::{assemble_response, dispatch_notifications};
use crate::kernel::ServerDeps;

/// Validate the request, draw the gift cycle and notify every giver.
///
/// Always returns a structured response. Only precondition failures and an
/// exhausted search produce `success: false`; delivery problems are recorded
/// per edge in the log.
#[tracing::instrument(skip_all, fields(draw_id = %uuid::Uuid::new_v4()))]
pub async fn run_draw<R: Rng + Send>(
    request: DrawRequest,
    deps: &ServerDeps,
    rng: &mut R,
) -> DrawResponse {
    let draw = match validate(request) {
        Ok(draw) => draw,
        Err(e) => {
            warn!(reason = %e, "Draw rejected");
            return DrawResponse::failed(&e);
        }
    };

    let engine = AssignmentEngine::new(deps.max_draw_attempts);
    let outcome = match engine.assign(&draw.participants, &draw.exclusions, rng) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(
                participants = draw.participants.len(),
                exclusions = draw.exclusions.len(),
                reason = %e,
                "Draw failed"
            );
            return DrawResponse::failed(&e);
        }
    };

    info!(
        participants = draw.participants.len(),
        exclusions = draw.exclusions.len(),
        attempts = outcome.attempts,
        method = %draw.method,
        "Draw accepted"
    );

    let log =
        dispatch_notifications(&outcome.assignments, &draw.event, &draw.method, deps).await;

    assemble_response(log)
}
