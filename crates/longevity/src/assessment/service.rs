use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::domain::Submission;
use super::recommendations::{Recommendation, RecommendationConfig, RecommendationEngine};
use super::report::{email_subject, render_email_html, ResultsView};
use super::repository::{
    MailError, MailSender, OutboundEmail, SubmissionRepository, SubmissionRow,
};
use super::scoring;

pub const DEFAULT_SENDER: &str = "Longevity Assessment <onboarding@resend.dev>";

/// Delivery settings shared by every submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentConfig {
    pub sender: String,
    pub recommendations: RecommendationConfig,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            sender: DEFAULT_SENDER.to_string(),
            recommendations: RecommendationConfig::default(),
        }
    }
}

/// Outcome reported back to the caller after the report was mailed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub longevity_score: u8,
    pub email_id: Option<String>,
    pub recommendations: Vec<Recommendation>,
    pub persisted: bool,
}

/// Service composing the shared rules, the submission store, and the mailer.
pub struct AssessmentService<R, M> {
    repository: Arc<R>,
    mailer: Arc<M>,
    engine: Arc<RecommendationEngine>,
    sender: String,
}

impl<R, M> AssessmentService<R, M>
where
    R: SubmissionRepository + 'static,
    M: MailSender + 'static,
{
    pub fn new(repository: Arc<R>, mailer: Arc<M>, config: AssessmentConfig) -> Self {
        let AssessmentConfig {
            sender,
            recommendations,
        } = config;

        Self {
            repository,
            mailer,
            engine: Arc::new(RecommendationEngine::new(recommendations)),
            sender,
        }
    }

    pub fn recommendation_config(&self) -> &RecommendationConfig {
        self.engine.config()
    }

    /// Results for immediate display; no side effects.
    pub fn preview(&self, submission: &Submission) -> ResultsView {
        ResultsView::build(
            &submission.first_name,
            &submission.answers,
            self.engine.config(),
        )
    }

    /// Scores the submission, stores it (best effort), and mails the report.
    /// Only a mail failure fails the call.
    pub async fn submit(
        &self,
        submission: Submission,
    ) -> Result<SubmissionReceipt, AssessmentServiceError> {
        info!(recipient = %submission.email, "processing assessment submission");

        let longevity_score = scoring::score(&submission.answers);
        let recommendations = self.engine.recommend(&submission.answers);

        let row = SubmissionRow::from_submission(&submission, longevity_score);
        let persisted = match self.repository.insert(row).await {
            Ok(()) => true,
            Err(err) => {
                error!(error = %err, "failed to persist assessment submission");
                false
            }
        };

        let email = OutboundEmail {
            from: self.sender.clone(),
            to: vec![submission.email.clone()],
            subject: email_subject(longevity_score),
            html: render_email_html(&submission.first_name, longevity_score, &recommendations),
        };
        let receipt = self.mailer.send(email).await?;

        info!(
            longevity_score,
            email_id = receipt.id.as_deref().unwrap_or("unknown"),
            persisted,
            "assessment report sent"
        );

        Ok(SubmissionReceipt {
            longevity_score,
            email_id: receipt.id,
            recommendations,
            persisted,
        })
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Mail(#[from] MailError),
}
