use std::collections::HashSet;

use super::models::{ExclusionRule, Participant};

/// Exclusion rules indexed by their unordered pair of participant ids.
///
/// Duplicate rules (in either orientation) collapse into one entry. Ids that
/// don't belong to any participant are kept and simply never match.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    pairs: HashSet<(String, String)>,
}

fn canonical(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl ExclusionSet {
    pub fn new(rules: &[ExclusionRule]) -> Self {
        Self {
            pairs: rules
                .iter()
                .map(|rule| canonical(&rule.participant1_id, &rule.participant2_id))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// True when `a` and `b` may not be paired in either direction
    pub fn forbids(&self, a: &str, b: &str) -> bool {
        self.pairs.contains(&canonical(a, b))
    }
}

impl From<&[ExclusionRule]> for ExclusionSet {
    fn from(rules: &[ExclusionRule]) -> Self {
        Self::new(rules)
    }
}

/// Whether the edge `giver → receiver` breaks one of the exclusion rules.
pub fn violates(giver: &Participant, receiver: &Participant, rules: &ExclusionSet) -> bool {
    rules.forbids(&giver.id, &receiver.id)
}
