//! Typed failures for the draw domain.
//!
//! The display text of each variant is what the caller sees in the
//! `message` field of a failed response.

use thiserror::Error;

use crate::common::Channel;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("The event title cannot be empty.")]
    EmptyTitle,

    #[error("At least two participants are required (got {count}).")]
    NotEnoughParticipants { count: usize },

    #[error("Exclusions cannot be applied with fewer than 3 participants.")]
    ExclusionsNeedThreeParticipants,

    /// A participant's contact method differs from the event's notification method
    #[error(
        "Configuration mismatch: participant \"{participant}\" uses {found} but the event notifies via {expected}."
    )]
    ContactMethodMismatch {
        participant: String,
        expected: Channel,
        found: Channel,
    },

    #[error("Invalid participant \"{participant}\": {reason}")]
    InvalidParticipant { participant: String, reason: String },

    #[error("The contact {contact} has already been added.")]
    DuplicateContact { contact: String },

    #[error("The participant id {id} is used more than once.")]
    DuplicateParticipantId { id: String },

    #[error("A participant cannot be excluded from themselves ({id}).")]
    SelfExclusion { id: String },

    #[error(
        "Could not find a valid assignment that respects every exclusion rule after {attempts} attempts. Please adjust the exclusions or the number of participants."
    )]
    NoValidAssignment { attempts: usize },
}

impl DrawError {
    /// True for input problems detected before any assignment is attempted
    pub fn is_precondition(&self) -> bool {
        !matches!(self, DrawError::NoValidAssignment { .. })
    }
}
