use serde::{Deserialize, Serialize};

use super::{ExclusionRule, Participant};
use crate::common::{Channel, EventDetails};

/// Everything a caller supplies for one draw
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawRequest {
    pub event_title: String,
    #[serde(default)]
    pub event_description: Option<String>,
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub exclusions: Vec<ExclusionRule>,
    pub notification_method: Channel,
}

impl DrawRequest {
    pub fn event(&self) -> EventDetails {
        EventDetails::new(self.event_title.trim(), self.event_description.clone())
    }
}
