// Common types used across multiple domains and layers
//
// These types are shared between the draw and notification domains so neither
// has to reach into the other for basic vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a participant is reached, and how an event delivers its assignments.
///
/// Any wire value other than `"email"` or `"whatsapp"` is kept, trimmed, as
/// `Unsupported` so it can be reported back instead of rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Channel {
    Email,
    WhatsApp,
    Unsupported(String),
}

impl Channel {
    pub fn as_str(&self) -> &str {
        match self {
            Channel::Email => "email",
            Channel::WhatsApp => "whatsapp",
            Channel::Unsupported(tag) => tag,
        }
    }
}

impl From<String> for Channel {
    fn from(value: String) -> Self {
        let tag = value.trim();
        match tag.to_ascii_lowercase().as_str() {
            "email" => Channel::Email,
            "whatsapp" => Channel::WhatsApp,
            _ => Channel::Unsupported(tag.to_string()),
        }
    }
}

impl From<&str> for Channel {
    fn from(value: &str) -> Self {
        Channel::from(value.to_string())
    }
}

impl From<Channel> for String {
    fn from(channel: Channel) -> Self {
        channel.as_str().to_string()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title and free-form description of a gift exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    pub title: String,
    pub description: Option<String>,
}

impl EventDetails {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }

    /// Description with surrounding whitespace removed, `None` when blank.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_parses_known_tags_case_insensitively() {
        assert_eq!(Channel::from("email"), Channel::Email);
        assert_eq!(Channel::from(" WhatsApp "), Channel::WhatsApp);
        assert_eq!(
            Channel::from("carrier-pigeon"),
            Channel::Unsupported("carrier-pigeon".to_string())
        );
    }

    #[test]
    fn unsupported_tags_are_trimmed_like_known_ones() {
        assert_eq!(Channel::from("sms "), Channel::from(" sms"));
        assert_eq!(Channel::from("\tsms\n"), Channel::Unsupported("sms".to_string()));
    }

    #[test]
    fn channel_round_trips_through_json() {
        let json = serde_json::to_string(&Channel::WhatsApp).unwrap();
        assert_eq!(json, "\"whatsapp\"");

        let parsed: Channel = serde_json::from_str("\"sms\"").unwrap();
        assert_eq!(parsed, Channel::Unsupported("sms".to_string()));
        assert_eq!(parsed.to_string(), "sms");
    }

    #[test]
    fn blank_description_is_treated_as_absent() {
        let event = EventDetails::new("Office Party", Some("   \n ".to_string()));
        assert_eq!(event.description(), None);

        let event = EventDetails::new("Office Party", Some(" Budget 20€\n".to_string()));
        assert_eq!(event.description(), Some("Budget 20€"));
    }
}
