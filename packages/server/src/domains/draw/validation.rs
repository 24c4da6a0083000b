//! Request intake checks, run before the engine is ever attempted.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use super::constraints::ExclusionSet;
use super::error::DrawError;
use super::models::{DrawRequest, ExclusionRule, Participant};
use crate::common::{Channel, EventDetails};

/// Fewest digits accepted in a messaging contact
const MIN_PHONE_DIGITS: usize = 7;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"\S+@\S+\.\S+").expect("valid email regex");
}

/// A request that passed every precondition, with names and contacts trimmed
#[derive(Debug, Clone)]
pub struct ValidatedDraw {
    pub event: EventDetails,
    pub participants: Vec<Participant>,
    pub exclusions: ExclusionSet,
    pub method: Channel,
}

fn check_contact(participant: &Participant) -> Result<(), DrawError> {
    let invalid = |reason: &str| DrawError::InvalidParticipant {
        participant: participant.name.clone(),
        reason: reason.to_string(),
    };

    match participant.contact_method {
        Channel::Email if !EMAIL_REGEX.is_match(&participant.contact) => {
            Err(invalid("enter a valid email address"))
        }
        Channel::WhatsApp
            if participant
                .contact
                .chars()
                .filter(char::is_ascii_digit)
                .count()
                < MIN_PHONE_DIGITS =>
        {
            Err(invalid("enter a valid phone number"))
        }
        _ => Ok(()),
    }
}

/// Check a request and normalize it for the engine.
///
/// Failures are returned in the order a person filling the form would hit
/// them: title, participant count, exclusion eligibility, then per-participant
/// problems and finally malformed exclusion rules.
pub fn validate(request: DrawRequest) -> Result<ValidatedDraw, DrawError> {
    let event = request.event();
    if event.title.is_empty() {
        return Err(DrawError::EmptyTitle);
    }

    let count = request.participants.len();
    if count < 2 {
        return Err(DrawError::NotEnoughParticipants { count });
    }
    if count < 3 && !request.exclusions.is_empty() {
        return Err(DrawError::ExclusionsNeedThreeParticipants);
    }

    let method = request.notification_method;
    let mut seen_ids = HashSet::new();
    let mut seen_contacts = HashSet::new();
    let mut participants = Vec::with_capacity(count);

    for raw in request.participants {
        let participant = Participant::new(
            raw.id.trim(),
            raw.name.trim(),
            raw.contact.trim(),
            raw.contact_method,
        );

        if participant.name.is_empty() || participant.contact.is_empty() {
            return Err(DrawError::InvalidParticipant {
                participant: participant.name.clone(),
                reason: "name and contact cannot be empty".to_string(),
            });
        }
        if participant.contact_method != method {
            return Err(DrawError::ContactMethodMismatch {
                participant: participant.name.clone(),
                expected: method.clone(),
                found: participant.contact_method.clone(),
            });
        }
        check_contact(&participant)?;

        if !seen_ids.insert(participant.id.clone()) {
            return Err(DrawError::DuplicateParticipantId {
                id: participant.id.clone(),
            });
        }
        if !seen_contacts.insert(participant.contact.to_lowercase()) {
            return Err(DrawError::DuplicateContact {
                contact: participant.contact.clone(),
            });
        }

        participants.push(participant);
    }

    // Rule ids must be normalized like participant ids or they never match
    let exclusions: Vec<ExclusionRule> = request
        .exclusions
        .iter()
        .map(ExclusionRule::trimmed)
        .collect();

    if let Some(rule) = exclusions.iter().find(|r| r.is_self_exclusion()) {
        return Err(DrawError::SelfExclusion {
            id: rule.participant1_id.clone(),
        });
    }

    Ok(ValidatedDraw {
        event,
        participants,
        exclusions: ExclusionSet::new(&exclusions),
        method,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(id: &str) -> Participant {
        Participant::new(id, format!("Person {id}"), format!("{id}@example.com"), Channel::Email)
    }

    fn request(participants: Vec<Participant>, exclusions: Vec<ExclusionRule>) -> DrawRequest {
        DrawRequest {
            event_title: "Office Party".to_string(),
            event_description: None,
            participants,
            exclusions,
            notification_method: Channel::Email,
        }
    }

    #[test]
    fn accepts_a_plain_request() {
        let draw = validate(request(vec![email("a"), email("b"), email("c")], vec![])).unwrap();

        assert_eq!(draw.participants.len(), 3);
        assert_eq!(draw.event.title, "Office Party");
        assert_eq!(draw.method, Channel::Email);
        assert!(draw.exclusions.is_empty());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut req = request(vec![email("a"), email("b")], vec![]);
        req.event_title = "   ".to_string();

        assert_eq!(validate(req).unwrap_err(), DrawError::EmptyTitle);
    }

    #[test]
    fn one_participant_is_not_enough() {
        let err = validate(request(vec![email("a")], vec![])).unwrap_err();
        assert_eq!(err, DrawError::NotEnoughParticipants { count: 1 });
    }

    #[test]
    fn exclusions_with_two_participants_are_rejected_whatever_they_say() {
        let err = validate(request(
            vec![email("a"), email("b")],
            vec![ExclusionRule::new("x", "y")],
        ))
        .unwrap_err();

        assert_eq!(err, DrawError::ExclusionsNeedThreeParticipants);
    }

    #[test]
    fn mixed_contact_methods_are_a_configuration_error() {
        let phone = Participant::new("b", "Bea", "+34 600 111 222", Channel::WhatsApp);
        let err = validate(request(vec![email("a"), phone], vec![])).unwrap_err();

        assert!(matches!(err, DrawError::ContactMethodMismatch { .. }));
        assert!(err.to_string().contains("Configuration mismatch"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let bad = Participant::new("b", "Bea", "bea-at-example", Channel::Email);
        let err = validate(request(vec![email("a"), bad], vec![])).unwrap_err();

        assert!(matches!(err, DrawError::InvalidParticipant { .. }));
    }

    #[test]
    fn short_phone_number_is_rejected() {
        let mut req = request(
            vec![
                Participant::new("a", "Ana", "+34 600 111 222", Channel::WhatsApp),
                Participant::new("b", "Bea", "12-34", Channel::WhatsApp),
            ],
            vec![],
        );
        req.notification_method = Channel::WhatsApp;

        assert!(matches!(
            validate(req).unwrap_err(),
            DrawError::InvalidParticipant { .. }
        ));
    }

    #[test]
    fn duplicate_contacts_ignore_case_and_whitespace() {
        let dup = Participant::new("b", "Bea", "  A@Example.com ", Channel::Email);
        let err = validate(request(vec![email("a"), dup], vec![])).unwrap_err();

        assert!(matches!(err, DrawError::DuplicateContact { .. }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut twin = email("b");
        twin.id = "a".to_string();
        let err = validate(request(vec![email("a"), twin], vec![])).unwrap_err();

        assert_eq!(err, DrawError::DuplicateParticipantId { id: "a".to_string() });
    }

    #[test]
    fn self_exclusion_is_rejected() {
        let err = validate(request(
            vec![email("a"), email("b"), email("c")],
            vec![ExclusionRule::new("a", "a")],
        ))
        .unwrap_err();

        assert_eq!(err, DrawError::SelfExclusion { id: "a".to_string() });
    }

    #[test]
    fn exclusion_ids_are_trimmed_like_participant_ids() {
        let mut padded = email("a");
        padded.id = " a ".to_string();
        let draw = validate(request(
            vec![padded, email("b"), email("c")],
            vec![ExclusionRule::new(" a ", "b\t")],
        ))
        .unwrap();

        assert_eq!(draw.participants[0].id, "a");
        assert!(draw.exclusions.forbids("a", "b"));
        assert!(draw.exclusions.forbids("b", "a"));
    }

    #[test]
    fn padded_self_exclusion_is_rejected() {
        let err = validate(request(
            vec![email("a"), email("b"), email("c")],
            vec![ExclusionRule::new("a", " a")],
        ))
        .unwrap_err();

        assert_eq!(err, DrawError::SelfExclusion { id: "a".to_string() });
    }

    #[test]
    fn names_and_contacts_are_trimmed() {
        let padded = Participant::new("b", "  Bea ", " bea@example.com ", Channel::Email);
        let draw = validate(request(vec![email("a"), padded, email("c")], vec![])).unwrap();

        assert_eq!(draw.participants[1].name, "Bea");
        assert_eq!(draw.participants[1].contact, "bea@example.com");
    }

    #[test]
    fn unsupported_method_passes_when_everyone_shares_it() {
        let sms = |id: &str| {
            Participant::new(id, id, format!("+1 555 000 00{id}"), Channel::from("sms"))
        };
        let mut req = request(vec![sms("1"), sms("2")], vec![]);
        req.notification_method = Channel::from("sms");

        let draw = validate(req).unwrap();
        assert_eq!(draw.method, Channel::Unsupported("sms".to_string()));
    }

    #[test]
    fn padded_unsupported_tags_are_not_a_mismatch() {
        let mut req = request(
            vec![
                Participant::new("1", "Ana", "+1 555 000 0001", Channel::from("sms ")),
                Participant::new("2", "Bea", "+1 555 000 0002", Channel::from(" sms")),
            ],
            vec![],
        );
        req.notification_method = Channel::from("sms");

        assert!(validate(req).is_ok());
    }
}
