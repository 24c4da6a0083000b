use serde::{Deserialize, Serialize};

/// Two participants who must never be paired, in either direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusionRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub participant1_id: String,
    pub participant2_id: String,
}

impl ExclusionRule {
    pub fn new(participant1_id: impl Into<String>, participant2_id: impl Into<String>) -> Self {
        Self {
            id: None,
            participant1_id: participant1_id.into(),
            participant2_id: participant2_id.into(),
        }
    }

    /// True when the rule pairs `a` with `b`, regardless of order
    pub fn matches(&self, a: &str, b: &str) -> bool {
        (self.participant1_id == a && self.participant2_id == b)
            || (self.participant1_id == b && self.participant2_id == a)
    }

    /// Copy of the rule with surrounding whitespace removed from both ids
    pub fn trimmed(&self) -> Self {
        Self {
            id: self.id.clone(),
            participant1_id: self.participant1_id.trim().to_string(),
            participant2_id: self.participant2_id.trim().to_string(),
        }
    }

    pub fn is_self_exclusion(&self) -> bool {
        self.participant1_id == self.participant2_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_symmetric() {
        let rule = ExclusionRule::new("a", "b");
        assert!(rule.matches("a", "b"));
        assert!(rule.matches("b", "a"));
        assert!(!rule.matches("a", "c"));
        assert!(!rule.matches("a", "a"));
    }

    #[test]
    fn trimmed_strips_both_ids() {
        let rule = ExclusionRule::new(" a ", "\tb").trimmed();
        assert_eq!(rule.participant1_id, "a");
        assert_eq!(rule.participant2_id, "b");
        assert!(ExclusionRule::new("a", " a").trimmed().is_self_exclusion());
    }

    #[test]
    fn deserializes_wire_shape() {
        let rule: ExclusionRule = serde_json::from_str(
            r#"{"id":"r1","participant1Id":"a","participant2Id":"b"}"#,
        )
        .unwrap();
        assert_eq!(rule.id.as_deref(), Some("r1"));
        assert!(rule.matches("b", "a"));
    }
}
