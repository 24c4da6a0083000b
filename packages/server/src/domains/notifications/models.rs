use serde::{Deserialize, Serialize};

use crate::common::Channel;

/// Outcome of delivering one assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryStatus {
    Sent,
    Failed,
    /// Email transport has no credentials; the message was only logged
    NotConfigured,
    /// WhatsApp transport has no credentials; the message was only logged
    Simulated,
}

/// Record of what was rendered and sent for one giver → receiver edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationLogEntry {
    pub giver_id: String,
    pub giver_name: String,
    pub giver_contact: String,
    pub receiver_name: String,
    pub subject: String,
    pub body_html: String,
    pub body_text: String,
    pub status: DeliveryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub method: Channel,
}
