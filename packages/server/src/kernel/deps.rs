//! Server dependencies for the draw flow (using traits for testability)
//!
//! Transports are built once from configuration at startup and shared
//! read-only by every request.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use whatsapp::WhatsAppService;

use crate::kernel::{BaseEmailTransport, BaseMessagingTransport};

// =============================================================================
// WhatsAppService Adapter (implements BaseMessagingTransport trait)
// =============================================================================

/// Wrapper around WhatsAppService that implements BaseMessagingTransport.
/// `None` means the service is not configured.
pub struct WhatsAppAdapter(pub Option<Arc<WhatsAppService>>);

impl WhatsAppAdapter {
    pub fn new(service: Option<WhatsAppService>) -> Self {
        Self(service.map(Arc::new))
    }

    pub fn unconfigured() -> Self {
        Self(None)
    }
}

#[async_trait]
impl BaseMessagingTransport for WhatsAppAdapter {
    fn is_configured(&self) -> bool {
        self.0.is_some()
    }

    async fn send_assignment(
        &self,
        to: &str,
        giver_name: &str,
        event_title: &str,
        receiver_name: &str,
    ) -> Result<()> {
        let service = self
            .0
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("WhatsApp service is not configured"))?;

        service
            .send_template(to, &[giver_name, event_title, receiver_name])
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to the draw flow (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub email: Arc<dyn BaseEmailTransport>,
    pub messaging: Arc<dyn BaseMessagingTransport>,
    /// Attempt budget handed to the assignment engine
    pub max_draw_attempts: usize,
}

impl ServerDeps {
    pub fn new(
        email: Arc<dyn BaseEmailTransport>,
        messaging: Arc<dyn BaseMessagingTransport>,
        max_draw_attempts: usize,
    ) -> Self {
        Self {
            email,
            messaging,
            max_draw_attempts,
        }
    }
}
