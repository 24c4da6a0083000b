// https://developers.facebook.com/docs/whatsapp/cloud-api/guides/send-message-templates

pub mod models;

use reqwest::{header, Client};
use thiserror::Error;

use crate::models::{ErrorEnvelope, MessageResponse, TemplateMessageRequest};

pub const DEFAULT_BASE_URL: &str = "https://graph.facebook.com";
pub const DEFAULT_API_VERSION: &str = "v19.0";

#[derive(Debug, Error)]
pub enum WhatsAppError {
    #[error("request to WhatsApp failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("recipient has no digits: {0:?}")]
    InvalidRecipient(String),
}

#[derive(Debug, Clone)]
pub struct WhatsAppOptions {
    pub access_token: String,
    pub phone_number_id: String,
    pub template_name: String,
    pub language_code: String,
    pub api_version: String,
}

impl WhatsAppOptions {
    /// Builds options only when every required setting is present and non-blank.
    pub fn from_parts(
        access_token: Option<String>,
        phone_number_id: Option<String>,
        template_name: Option<String>,
        language_code: Option<String>,
    ) -> Option<Self> {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        Some(Self {
            access_token: present(access_token)?,
            phone_number_id: present(phone_number_id)?,
            template_name: present(template_name)?,
            language_code: present(language_code)?,
            api_version: DEFAULT_API_VERSION.to_string(),
        })
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct WhatsAppService {
    options: WhatsAppOptions,
    base_url: String,
    client: Client,
}

/// Strip everything but ASCII digits (`+34 600-111 222` -> `34600111222`).
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

impl WhatsAppService {
    pub fn new(options: WhatsAppOptions) -> Self {
        Self {
            options,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Point the client at a different host (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn messages_url(&self) -> String {
        format!(
            "{base}/{version}/{phone_id}/messages",
            base = self.base_url,
            version = self.options.api_version,
            phone_id = self.options.phone_number_id,
        )
    }

    /// Send the configured template to `recipient`, filling the body parameters in order.
    pub async fn send_template(
        &self,
        recipient: &str,
        params: &[&str],
    ) -> Result<MessageResponse, WhatsAppError> {
        let to = normalize_phone(recipient);
        if to.is_empty() {
            return Err(WhatsAppError::InvalidRecipient(recipient.to_string()));
        }

        let body = TemplateMessageRequest::new(
            to,
            &self.options.template_name,
            &self.options.language_code,
            params,
        );

        let response = self
            .client
            .post(self.messages_url())
            .bearer_auth(&self.options.access_token)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&error_body)
                .ok()
                .and_then(|envelope| envelope.error.message)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

            tracing::warn!(status = status.as_u16(), %message, "WhatsApp returned an error");
            return Err(WhatsAppError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<MessageResponse>().await?)
    }
}
