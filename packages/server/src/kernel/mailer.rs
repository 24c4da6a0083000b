use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info, warn};

use crate::config::EmailCredentials;
use crate::kernel::BaseEmailTransport;

const SENDER_NAME: &str = "Secret Santa Sorter";

struct Relay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

/// SMTP mailer.
/// Without credentials it reports itself unconfigured and never opens a connection.
pub struct SmtpMailer {
    relay: Option<Relay>,
}

impl SmtpMailer {
    /// Build a mailer for `host`. Must be called inside a tokio runtime.
    pub fn new(host: &str, credentials: Option<EmailCredentials>) -> Result<Self> {
        let Some(credentials) = credentials else {
            warn!("Email credentials (EMAIL_USER, EMAIL_PASS) not configured; emails will be simulated");
            return Ok(Self::unconfigured());
        };

        let from = Mailbox::new(
            Some(SENDER_NAME.to_string()),
            credentials
                .username
                .parse()
                .context("EMAIL_USER must be an email address")?,
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .with_context(|| format!("Invalid SMTP relay host: {}", host))?
            .credentials(Credentials::new(credentials.username, credentials.password))
            .build();

        info!(host, "SMTP mailer configured");
        Ok(Self {
            relay: Some(Relay { transport, from }),
        })
    }

    pub fn unconfigured() -> Self {
        Self { relay: None }
    }
}

#[async_trait]
impl BaseEmailTransport for SmtpMailer {
    fn is_configured(&self) -> bool {
        self.relay.is_some()
    }

    async fn send_email(&self, to: &str, subject: &str, html: &str, text: &str) -> Result<()> {
        let Some(relay) = &self.relay else {
            bail!("Email service not initialized: EMAIL_USER and EMAIL_PASS are missing");
        };

        let recipient: Mailbox = to
            .parse()
            .with_context(|| format!("Invalid recipient address: {}", to))?;

        let message = Message::builder()
            .from(relay.from.clone())
            .to(recipient)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(
                text.to_string(),
                html.to_string(),
            ))
            .context("Failed to build email")?;

        info!("Sending email to: {}", to);

        relay.transport.send(message).await.map_err(|e| {
            error!("SMTP send to {} failed: {}", to, e);
            anyhow::anyhow!("SMTP error: {}", e)
        })?;

        Ok(())
    }
}
