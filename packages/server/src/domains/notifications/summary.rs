use super::models::{DeliveryStatus, NotificationLogEntry};
use crate::domains::draw::DrawResponse;

pub const EMAIL_NOT_CONFIGURED: &str = "Draw complete! Email credentials are not configured, so the emails were simulated in the server log.";
pub const MESSAGING_SIMULATED: &str = "Draw complete! WhatsApp is not configured, so the messages were simulated in the server log.";
pub const ALL_DELIVERED: &str =
    "Secret Santa draw complete! Every assignment was sent to its giver.";
pub const SOME_FAILED: &str = "Draw complete, but some notifications had problems. Check the delivery log for details.";

/// Pick the user-facing message for a finished dispatch.
pub fn summarize(log: &[NotificationLogEntry]) -> &'static str {
    let any = |status: DeliveryStatus| log.iter().any(|e| e.status == status);

    if any(DeliveryStatus::NotConfigured) {
        EMAIL_NOT_CONFIGURED
    } else if !log.is_empty() && log.iter().all(|e| e.status == DeliveryStatus::Simulated) {
        MESSAGING_SIMULATED
    } else if log.iter().all(|e| e.status == DeliveryStatus::Sent) {
        ALL_DELIVERED
    } else {
        SOME_FAILED
    }
}

/// A draw that reached dispatch is a success, whatever happened to delivery.
pub fn assemble_response(log: Vec<NotificationLogEntry>) -> DrawResponse {
    DrawResponse::completed(summarize(&log), log)
}
