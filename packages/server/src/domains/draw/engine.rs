//! Assignment engine: bounded random search for a single gift cycle.
//!
//! Every attempt shuffles the participants and links each one to the next,
//! wrapping around at the end. That cycle already gives everybody exactly one
//! giver and one receiver with no self-pairs, so the only thing left to check
//! is the exclusion rules. An attempt is dropped at the first forbidden edge.
//!
//! Only single cycles are ever produced. An assignment that exists solely as
//! several disjoint cycles will not be found, and the search gives up once the
//! attempt budget runs out.

use rand::Rng;

use super::constraints::{violates, ExclusionSet};
use super::error::DrawError;
use super::models::{Assignment, Participant};
use super::shuffle::shuffle;

/// Attempts made before reporting that no assignment exists
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// An accepted assignment and the attempt that produced it (1-based)
#[derive(Debug, Clone)]
pub struct DrawOutcome {
    pub assignments: Vec<Assignment>,
    pub attempts: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct AssignmentEngine {
    max_attempts: usize,
}

impl Default for AssignmentEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl AssignmentEngine {
    /// Budget is clamped to at least one attempt
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Draw a single-cycle assignment that avoids every excluded pair.
    pub fn assign<R: Rng + ?Sized>(
        &self,
        participants: &[Participant],
        exclusions: &ExclusionSet,
        rng: &mut R,
    ) -> Result<DrawOutcome, DrawError> {
        let count = participants.len();
        if count < 2 {
            return Err(DrawError::NotEnoughParticipants { count });
        }
        if count < 3 && !exclusions.is_empty() {
            return Err(DrawError::ExclusionsNeedThreeParticipants);
        }

        for attempt in 1..=self.max_attempts {
            let order = shuffle(participants, rng);
            if let Some(assignments) = link_cycle(&order, exclusions) {
                tracing::debug!(attempt, participants = count, "Found valid assignment");
                return Ok(DrawOutcome {
                    assignments,
                    attempts: attempt,
                });
            }
        }

        tracing::debug!(
            attempts = self.max_attempts,
            participants = count,
            exclusions = exclusions.len(),
            "Attempt budget exhausted"
        );
        Err(DrawError::NoValidAssignment {
            attempts: self.max_attempts,
        })
    }
}

/// Pair each position with the next one, or `None` at the first bad edge.
fn link_cycle(order: &[Participant], exclusions: &ExclusionSet) -> Option<Vec<Assignment>> {
    let mut assignments = Vec::with_capacity(order.len());

    for (i, giver) in order.iter().enumerate() {
        let receiver = &order[(i + 1) % order.len()];

        if giver.id == receiver.id || violates(giver, receiver, exclusions) {
            return None;
        }

        assignments.push(Assignment {
            giver: giver.clone(),
            receiver: receiver.clone(),
        });
    }

    Some(assignments)
}
