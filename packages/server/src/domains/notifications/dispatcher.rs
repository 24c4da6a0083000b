use tracing::{info, warn};

use super::models::{DeliveryStatus, NotificationLogEntry};
use super::templates::{render_assignment, RenderedMessage};
use crate::common::{Channel, EventDetails};
use crate::domains::draw::Assignment;
use crate::kernel::ServerDeps;

/// Deliver every assignment in order, one transport call at a time.
///
/// Each edge yields exactly one log entry. A failed or skipped delivery never
/// stops the remaining edges from being processed.
pub async fn dispatch_notifications(
    assignments: &[Assignment],
    event: &EventDetails,
    method: &Channel,
    deps: &ServerDeps,
) -> Vec<NotificationLogEntry> {
    let mut log = Vec::with_capacity(assignments.len());

    for assignment in assignments {
        let giver = &assignment.giver;
        let receiver = &assignment.receiver;
        let message = render_assignment(&giver.name, &receiver.name, event);

        let (status, error) = deliver(assignment, &message, event, method, deps).await;
        info!(
            giver = %giver.id,
            method = %method,
            status = ?status,
            "Assignment notification processed"
        );

        log.push(NotificationLogEntry {
            giver_id: giver.id.clone(),
            giver_name: giver.name.clone(),
            giver_contact: giver.contact.clone(),
            receiver_name: receiver.name.clone(),
            subject: message.subject,
            body_html: message.html,
            body_text: message.text,
            status,
            error,
            method: method.clone(),
        });
    }

    log
}

async fn deliver(
    assignment: &Assignment,
    message: &RenderedMessage,
    event: &EventDetails,
    method: &Channel,
    deps: &ServerDeps,
) -> (DeliveryStatus, Option<String>) {
    let giver = &assignment.giver;
    let receiver = &assignment.receiver;

    match method {
        Channel::Email => {
            if !deps.email.is_configured() {
                info!(
                    to = %giver.contact,
                    receiver = %receiver.name,
                    subject = %message.subject,
                    "SIMULATION (email credentials not configured):\n{}",
                    message.html
                );
                return (DeliveryStatus::NotConfigured, None);
            }

            match deps
                .email
                .send_email(&giver.contact, &message.subject, &message.html, &message.text)
                .await
            {
                Ok(()) => (DeliveryStatus::Sent, None),
                Err(e) => {
                    warn!(to = %giver.contact, error = %e, "Email delivery failed");
                    (DeliveryStatus::Failed, Some(format!("{:#}", e)))
                }
            }
        }
        Channel::WhatsApp => {
            if !deps.messaging.is_configured() {
                info!(
                    to = %giver.contact,
                    receiver = %receiver.name,
                    "SIMULATION (WhatsApp not configured):\n{}",
                    message.text
                );
                return (DeliveryStatus::Simulated, None);
            }

            match deps
                .messaging
                .send_assignment(&giver.contact, &giver.name, &event.title, &receiver.name)
                .await
            {
                Ok(()) => (DeliveryStatus::Sent, None),
                Err(e) => {
                    warn!(to = %giver.contact, error = %e, "WhatsApp delivery failed");
                    (DeliveryStatus::Failed, Some(format!("{:#}", e)))
                }
            }
        }
        Channel::Unsupported(tag) => (
            DeliveryStatus::Failed,
            Some(format!("Unsupported notification method: {}", tag)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::draw::Participant;
    use crate::kernel::{MockEmailTransport, MockMessagingTransport, TestDependencies};

    fn edge(giver: &str, receiver: &str, channel: Channel) -> Assignment {
        let contact = |id: &str| match channel {
            Channel::WhatsApp => format!("+34 600 000 00{}", id.len()),
            _ => format!("{id}@example.com"),
        };
        Assignment {
            giver: Participant::new(giver, giver, contact(giver), channel.clone()),
            receiver: Participant::new(receiver, receiver, contact(receiver), channel.clone()),
        }
    }

    fn event() -> EventDetails {
        EventDetails::new("Office Party", Some("Budget 20".to_string()))
    }

    #[tokio::test]
    async fn configured_email_sends_each_edge_in_order() {
        let test_deps = TestDependencies::new();
        let edges = vec![
            edge("ana", "bea", Channel::Email),
            edge("bea", "cris", Channel::Email),
            edge("cris", "ana", Channel::Email),
        ];

        let log =
            dispatch_notifications(&edges, &event(), &Channel::Email, &test_deps.server_deps()).await;

        assert_eq!(log.len(), 3);
        assert!(log.iter().all(|e| e.status == DeliveryStatus::Sent));
        let recipients: Vec<String> = test_deps
            .email
            .sent_emails()
            .into_iter()
            .map(|m| m.to)
            .collect();
        assert_eq!(
            recipients,
            vec!["ana@example.com", "bea@example.com", "cris@example.com"]
        );
    }

    #[tokio::test]
    async fn one_failure_does_not_stop_the_rest() {
        let test_deps = TestDependencies::new()
            .mock_email(MockEmailTransport::new().failing_for("bea@example.com"));
        let edges = vec![
            edge("ana", "bea", Channel::Email),
            edge("bea", "cris", Channel::Email),
            edge("cris", "ana", Channel::Email),
        ];

        let log =
            dispatch_notifications(&edges, &event(), &Channel::Email, &test_deps.server_deps()).await;

        let statuses: Vec<DeliveryStatus> = log.iter().map(|e| e.status).collect();
        assert_eq!(
            statuses,
            vec![DeliveryStatus::Sent, DeliveryStatus::Failed, DeliveryStatus::Sent]
        );
        assert!(log[1].error.as_deref().unwrap().contains("mailbox unavailable"));
        assert_eq!(test_deps.email.sent_emails().len(), 3);
    }

    #[tokio::test]
    async fn unconfigured_email_renders_but_never_sends() {
        let test_deps = TestDependencies::new().mock_email(MockEmailTransport::new().unconfigured());
        let edges = vec![edge("ana", "bea", Channel::Email), edge("bea", "ana", Channel::Email)];

        let log =
            dispatch_notifications(&edges, &event(), &Channel::Email, &test_deps.server_deps()).await;

        assert!(log.iter().all(|e| e.status == DeliveryStatus::NotConfigured));
        assert!(log[0].body_html.contains("bea"));
        assert!(test_deps.email.sent_emails().is_empty());
    }

    #[tokio::test]
    async fn whatsapp_sends_template_parameters() {
        let test_deps = TestDependencies::new();
        let edges = vec![
            edge("ana", "bea", Channel::WhatsApp),
            edge("bea", "ana", Channel::WhatsApp),
        ];

        let log = dispatch_notifications(&edges, &event(), &Channel::WhatsApp, &test_deps.server_deps())
            .await;

        assert!(log.iter().all(|e| e.status == DeliveryStatus::Sent));
        let sent = test_deps.messaging.sent_messages();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].giver_name, "ana");
        assert_eq!(sent[0].event_title, "Office Party");
        assert_eq!(sent[0].receiver_name, "bea");
        assert!(test_deps.email.sent_emails().is_empty());
    }

    #[tokio::test]
    async fn unconfigured_whatsapp_is_simulated() {
        let test_deps =
            TestDependencies::new().mock_messaging(MockMessagingTransport::new().unconfigured());
        let edges = vec![
            edge("ana", "bea", Channel::WhatsApp),
            edge("bea", "ana", Channel::WhatsApp),
        ];

        let log = dispatch_notifications(&edges, &event(), &Channel::WhatsApp, &test_deps.server_deps())
            .await;

        assert!(log.iter().all(|e| e.status == DeliveryStatus::Simulated));
        assert!(test_deps.messaging.sent_messages().is_empty());
    }

    #[tokio::test]
    async fn unsupported_method_fails_every_edge() {
        let test_deps = TestDependencies::new();
        let sms = Channel::from("sms");
        let edges = vec![edge("ana", "bea", sms.clone()), edge("bea", "ana", sms.clone())];

        let log = dispatch_notifications(&edges, &event(), &sms, &test_deps.server_deps()).await;

        assert_eq!(log.len(), 2);
        for entry in &log {
            assert_eq!(entry.status, DeliveryStatus::Failed);
            assert_eq!(
                entry.error.as_deref(),
                Some("Unsupported notification method: sms")
            );
        }
    }
}
