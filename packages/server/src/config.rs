use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use whatsapp::WhatsAppOptions;

use crate::domains::draw::DEFAULT_MAX_ATTEMPTS;

/// SMTP username/password pair for the email transport
#[derive(Debug, Clone)]
pub struct EmailCredentials {
    pub username: String,
    pub password: String,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub smtp_host: String,
    pub email_user: Option<String>,
    pub email_pass: Option<String>,
    pub whatsapp_access_token: Option<String>,
    pub whatsapp_phone_number_id: Option<String>,
    pub whatsapp_template_name: Option<String>,
    pub whatsapp_template_lang: Option<String>,
    pub whatsapp_api_version: String,
    pub draw_max_attempts: usize,
}

/// Read a variable, treating unset and blank the same way
fn optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let draw_max_attempts: usize = optional_var("DRAW_MAX_ATTEMPTS")
            .unwrap_or_else(|| DEFAULT_MAX_ATTEMPTS.to_string())
            .parse()
            .context("DRAW_MAX_ATTEMPTS must be a valid number")?;
        if draw_max_attempts == 0 {
            bail!("DRAW_MAX_ATTEMPTS must be at least 1");
        }

        Ok(Self {
            port: optional_var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            smtp_host: optional_var("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
            email_user: optional_var("EMAIL_USER"),
            email_pass: optional_var("EMAIL_PASS"),
            whatsapp_access_token: optional_var("WHATSAPP_ACCESS_TOKEN"),
            whatsapp_phone_number_id: optional_var("WHATSAPP_PHONE_NUMBER_ID"),
            whatsapp_template_name: optional_var("WHATSAPP_TEMPLATE_NAME"),
            whatsapp_template_lang: optional_var("WHATSAPP_TEMPLATE_LANG"),
            whatsapp_api_version: optional_var("WHATSAPP_API_VERSION")
                .unwrap_or_else(|| whatsapp::DEFAULT_API_VERSION.to_string()),
            draw_max_attempts,
        })
    }

    /// Credentials for the SMTP relay, only when both halves are set
    pub fn email_credentials(&self) -> Option<EmailCredentials> {
        Some(EmailCredentials {
            username: self.email_user.clone()?,
            password: self.email_pass.clone()?,
        })
    }

    /// WhatsApp Cloud API options, only when all four settings are set
    pub fn whatsapp_options(&self) -> Option<WhatsAppOptions> {
        WhatsAppOptions::from_parts(
            self.whatsapp_access_token.clone(),
            self.whatsapp_phone_number_id.clone(),
            self.whatsapp_template_name.clone(),
            self.whatsapp_template_lang.clone(),
        )
        .map(|options| options.with_api_version(self.whatsapp_api_version.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_config() -> Config {
        Config {
            port: 8080,
            smtp_host: "smtp.gmail.com".to_string(),
            email_user: None,
            email_pass: None,
            whatsapp_access_token: None,
            whatsapp_phone_number_id: None,
            whatsapp_template_name: None,
            whatsapp_template_lang: None,
            whatsapp_api_version: whatsapp::DEFAULT_API_VERSION.to_string(),
            draw_max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    #[test]
    fn email_credentials_need_both_settings() {
        let mut config = blank_config();
        config.email_user = Some("santa@example.com".to_string());
        assert!(config.email_credentials().is_none());

        config.email_pass = Some("app-secret".to_string());
        let creds = config.email_credentials().unwrap();
        assert_eq!(creds.username, "santa@example.com");
        assert_eq!(creds.password, "app-secret");
    }

    #[test]
    fn whatsapp_options_need_all_four_settings() {
        let mut config = blank_config();
        config.whatsapp_access_token = Some("token".to_string());
        config.whatsapp_phone_number_id = Some("1234".to_string());
        config.whatsapp_template_name = Some("secret_santa".to_string());
        assert!(config.whatsapp_options().is_none());

        config.whatsapp_template_lang = Some("en_US".to_string());
        config.whatsapp_api_version = "v20.0".to_string();
        let options = config.whatsapp_options().unwrap();
        assert_eq!(options.template_name, "secret_santa");
        assert_eq!(options.api_version, "v20.0");
    }
}
