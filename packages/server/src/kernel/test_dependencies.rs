// TestDependencies - mock implementations for testing
//
// Provides mock transports that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseEmailTransport, BaseMessagingTransport, ServerDeps};
use crate::domains::draw::DEFAULT_MAX_ATTEMPTS;

// =============================================================================
// Mock Email Transport
// =============================================================================

/// Arguments captured from a send_email call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

pub struct MockEmailTransport {
    configured: bool,
    failing_recipients: Vec<String>,
    sent: Arc<Mutex<Vec<SentEmail>>>,
}

impl MockEmailTransport {
    pub fn new() -> Self {
        Self {
            configured: true,
            failing_recipients: Vec::new(),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Report missing credentials
    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    /// Make every send to `recipient` fail
    pub fn failing_for(mut self, recipient: &str) -> Self {
        self.failing_recipients.push(recipient.to_string());
        self
    }

    /// Get all emails that were attempted, in order
    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockEmailTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseEmailTransport for MockEmailTransport {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn send_email(&self, to: &str, subject: &str, html: &str, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
            text: text.to_string(),
        });

        if self.failing_recipients.iter().any(|r| r == to) {
            anyhow::bail!("mailbox unavailable: {}", to);
        }
        Ok(())
    }
}

// =============================================================================
// Mock Messaging Transport
// =============================================================================

/// Arguments captured from a send_assignment call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentAssignment {
    pub to: String,
    pub giver_name: String,
    pub event_title: String,
    pub receiver_name: String,
}

pub struct MockMessagingTransport {
    configured: bool,
    failing_recipients: Vec<String>,
    sent: Arc<Mutex<Vec<SentAssignment>>>,
}

impl MockMessagingTransport {
    pub fn new() -> Self {
        Self {
            configured: true,
            failing_recipients: Vec::new(),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Report missing template settings
    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    /// Make every send to `recipient` fail
    pub fn failing_for(mut self, recipient: &str) -> Self {
        self.failing_recipients.push(recipient.to_string());
        self
    }

    /// Get all messages that were attempted, in order
    pub fn sent_messages(&self) -> Vec<SentAssignment> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockMessagingTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseMessagingTransport for MockMessagingTransport {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn send_assignment(
        &self,
        to: &str,
        giver_name: &str,
        event_title: &str,
        receiver_name: &str,
    ) -> Result<()> {
        self.sent.lock().unwrap().push(SentAssignment {
            to: to.to_string(),
            giver_name: giver_name.to_string(),
            event_title: event_title.to_string(),
            receiver_name: receiver_name.to_string(),
        });

        if self.failing_recipients.iter().any(|r| r == to) {
            anyhow::bail!("(#131026) Message undeliverable");
        }
        Ok(())
    }
}

// =============================================================================
// TestDependencies - Builder for test dependencies
// =============================================================================

#[derive(Clone)]
pub struct TestDependencies {
    pub email: Arc<MockEmailTransport>,
    pub messaging: Arc<MockMessagingTransport>,
    pub max_draw_attempts: usize,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            email: Arc::new(MockEmailTransport::new()),
            messaging: Arc::new(MockMessagingTransport::new()),
            max_draw_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Set a mock email transport
    pub fn mock_email(mut self, email: MockEmailTransport) -> Self {
        self.email = Arc::new(email);
        self
    }

    /// Set a mock messaging transport
    pub fn mock_messaging(mut self, messaging: MockMessagingTransport) -> Self {
        self.messaging = Arc::new(messaging);
        self
    }

    pub fn max_draw_attempts(mut self, attempts: usize) -> Self {
        self.max_draw_attempts = attempts;
        self
    }

    /// Convert into ServerDeps, keeping handles to the mocks for assertions
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.email.clone(),
            self.messaging.clone(),
            self.max_draw_attempts,
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
