use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Channel;

fn generate_participant_id() -> String {
    Uuid::new_v4().to_string()
}

/// Someone taking part in a draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Caller-assigned token; a UUID is generated when the caller omits it
    #[serde(default = "generate_participant_id")]
    pub id: String,
    pub name: String,
    /// Email address or phone number, depending on `contact_method`
    #[serde(alias = "email")]
    pub contact: String,
    pub contact_method: Channel,
}

impl Participant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
        contact_method: Channel,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
            contact_method,
        }
    }
}
