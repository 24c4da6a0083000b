// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Rendering messages and deciding delivery status live in the notifications domain.
//
// Naming convention: Base* for trait names (e.g., BaseEmailTransport)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Email Transport Trait (Infrastructure - SMTP)
// =============================================================================

#[async_trait]
pub trait BaseEmailTransport: Send + Sync {
    /// False when credentials are missing; callers must not attempt a send
    fn is_configured(&self) -> bool;

    /// Send one message with both an HTML and a plain-text body
    async fn send_email(&self, to: &str, subject: &str, html: &str, text: &str) -> Result<()>;
}

// =============================================================================
// Messaging Transport Trait (Infrastructure - WhatsApp templates)
// =============================================================================

#[async_trait]
pub trait BaseMessagingTransport: Send + Sync {
    /// False when any of the template settings is missing
    fn is_configured(&self) -> bool;

    /// Send the assignment template to a phone-like address
    async fn send_assignment(
        &self,
        to: &str,
        giver_name: &str,
        event_title: &str,
        receiver_name: &str,
    ) -> Result<()>;
}
