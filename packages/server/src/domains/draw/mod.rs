//! Draw domain - builds the gift-giving cycle for one event
//!
//! Flow for a single request:
//!   validate(request) → AssignmentEngine::assign → dispatch_notifications → assemble_response
//!
//! Responsibilities:
//! - Participant and exclusion intake checks
//! - Unbiased shuffling with an injected random source
//! - Bounded-retry search for a single cycle that honors every exclusion

pub mod actions;
pub mod constraints;
pub mod engine;
pub mod error;
pub mod models;
pub mod shuffle;
pub mod validation;

pub use actions::run_draw;
pub use constraints::{violates, ExclusionSet};
pub use engine::{AssignmentEngine, DrawOutcome, DEFAULT_MAX_ATTEMPTS};
pub use error::DrawError;
pub use models::*;
pub use shuffle::shuffle;
pub use validation::{validate, ValidatedDraw};
