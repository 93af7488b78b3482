use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::super::repository::{EmailReceipt, MailError, MailSender, OutboundEmail};

pub const DEFAULT_RESEND_URL: &str = "https://api.resend.com";

#[derive(Debug, Deserialize)]
struct ResendResponse {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    message: Option<String>,
}

/// Resend HTTP API client. One request per email, no retries.
#[derive(Clone)]
pub struct ResendMailer {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ResendMailer {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self::with_client(Client::new(), api_key, base_url)
    }

    pub fn with_client(client: Client, api_key: String, base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_RESEND_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            client,
            base_url,
            api_key,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

impl std::fmt::Debug for ResendMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendMailer")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MailSender for ResendMailer {
    async fn send(&self, email: OutboundEmail) -> Result<EmailReceipt, MailError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&email)
            .send()
            .await
            .map_err(|err| MailError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ResendErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.message)
                .unwrap_or(body);
            return Err(MailError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ResendResponse = response
            .json()
            .await
            .map_err(|err| MailError::Transport(err.to_string()))?;
        Ok(EmailReceipt { id: parsed.id })
    }
}
