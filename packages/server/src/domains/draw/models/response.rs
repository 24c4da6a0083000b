use serde::{Deserialize, Serialize};

use crate::domains::draw::DrawError;
use crate::domains::notifications::NotificationLogEntry;

/// Structured result returned for every draw request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignments_log: Option<Vec<NotificationLogEntry>>,
}

impl DrawResponse {
    pub fn completed(message: impl Into<String>, log: Vec<NotificationLogEntry>) -> Self {
        Self {
            success: true,
            message: message.into(),
            assignments_log: Some(log),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            assignments_log: None,
        }
    }

    pub fn failed(error: &DrawError) -> Self {
        Self::rejected(error.to_string())
    }
}
