use serde::{Deserialize, Serialize};

use super::Participant;

/// One edge of the gift cycle: `giver` buys for `receiver`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub giver: Participant,
    pub receiver: Participant,
}
