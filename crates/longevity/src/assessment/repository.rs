use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::domain::{Answers, Submission};

/// Denormalized row written once per submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRow {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub answers: Answers,
    pub longevity_score: u8,
}

impl SubmissionRow {
    pub fn from_submission(submission: &Submission, longevity_score: u8) -> Self {
        Self {
            first_name: submission.first_name.clone(),
            last_name: submission.last_name().map(str::to_string),
            email: submission.email.clone(),
            answers: submission.answers.clone(),
            longevity_score,
        }
    }
}

/// Storage abstraction so the service can be exercised without a database.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn insert(&self, row: SubmissionRow) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
    #[error("repository rejected row ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Rendered report ready for the mail provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Provider acknowledgement; the id is absent when the provider omits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailReceipt {
    pub id: Option<String>,
}

/// Outbound mail hook (e.g., Resend or a local outbox).
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<EmailReceipt, MailError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail transport unavailable: {0}")]
    Transport(String),
    #[error("mail provider returned {status}: {message}")]
    Provider { status: u16, message: String },
}
