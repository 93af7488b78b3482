use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{Answers, Submission};
use crate::assessment::questionnaire::ids;
use crate::assessment::repository::{
    EmailReceipt, MailError, MailSender, OutboundEmail, RepositoryError, SubmissionRepository,
    SubmissionRow,
};
use crate::assessment::service::{AssessmentConfig, AssessmentService};

/// Best possible answer on every scored question.
pub(super) fn ideal_answers() -> Answers {
    Answers::new()
        .with(ids::SLEEP_QUALITY, "Excellent (8+ hours, wake refreshed)")
        .with(ids::SLEEP_SCHEDULE, "Yes")
        .with(ids::DIET_STYLE, "Mediterranean")
        .with(ids::PROCESSED_FOODS, "Rarely (1-2 times per week)")
        .with(ids::HYDRATION, "8+ glasses")
        .with(ids::EXERCISE_FREQUENCY, "5+ times per week")
        .with(ids::STRESS_LEVEL, 1u8)
        .with(ids::STRESS_MANAGEMENT, "Yes, regularly (meditation, yoga, etc.)")
        .with(ids::HEALTH_SYMPTOMS, vec!["None of the above"])
        .with(ids::ENERGY_LEVELS, "Consistently high energy")
        .with(ids::MENTAL_CLARITY, "Excellent focus and sharp thinking")
}

/// Worst answer on every scored question, with all four real symptoms.
pub(super) fn worst_answers() -> Answers {
    Answers::new()
        .with(ids::SLEEP_QUALITY, "Poor (Less than 6 hours, often tired)")
        .with(ids::SLEEP_SCHEDULE, "No")
        .with(ids::DIET_STYLE, "Standard Western Diet")
        .with(ids::PROCESSED_FOODS, "Daily or multiple times daily")
        .with(ids::HYDRATION, "Less than 4 glasses")
        .with(ids::EXERCISE_FREQUENCY, "Rarely or never")
        .with(ids::STRESS_LEVEL, 5u8)
        .with(ids::STRESS_MANAGEMENT, "No, I don't have time")
        .with(
            ids::HEALTH_SYMPTOMS,
            vec![
                "Joint pain or stiffness",
                "Chronic fatigue or low energy",
                "Lack of motivation or energy",
                "Ear ringing (tinnitus)",
            ],
        )
        .with(ids::GUT_SKIN_ISSUES, "Yes")
        .with(ids::ENERGY_LEVELS, "Low energy most of the day")
        .with(ids::MENTAL_CLARITY, "Poor focus and frequent brain fog")
}

/// A typical respondent scoring 69.
pub(super) fn sample_answers() -> Answers {
    Answers::new()
        .with(ids::SLEEP_QUALITY, "Good (7-8 hours, mostly refreshed)")
        .with(ids::SLEEP_SCHEDULE, "Yes")
        .with(ids::DIET_STYLE, "Standard Western Diet")
        .with(ids::PROCESSED_FOODS, "Often (5-6 times per week)")
        .with(ids::HYDRATION, "6-7 glasses")
        .with(ids::EXERCISE_FREQUENCY, "1-2 times per week")
        .with(ids::EXERCISE_INTENSITY, "Light intensity (walking, yoga)")
        .with(ids::STRESS_LEVEL, 3u8)
        .with(ids::STRESS_MANAGEMENT, "Sometimes (occasional relaxation)")
        .with(ids::CURRENT_SUPPLEMENTS, "Yes")
        .with(ids::SUPPLEMENT_TYPES, vec!["Vitamin D", "Omega-3"])
        .with(ids::HEALTH_SYMPTOMS, vec!["Chronic fatigue or low energy"])
        .with(ids::GUT_SKIN_ISSUES, "No")
        .with(ids::ENERGY_LEVELS, "Moderate energy with afternoon crashes")
        .with(ids::MENTAL_CLARITY, "Good focus with occasional brain fog")
}

pub(super) fn submission() -> Submission {
    Submission {
        first_name: "Ada".to_string(),
        last_name: Some("Lovelace".to_string()),
        email: "ada@example.com".to_string(),
        answers: sample_answers(),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    rows: Arc<Mutex<Vec<SubmissionRow>>>,
}

impl MemoryRepository {
    pub(super) fn rows(&self) -> Vec<SubmissionRow> {
        self.rows.lock().expect("lock").clone()
    }
}

#[async_trait]
impl SubmissionRepository for MemoryRepository {
    async fn insert(&self, row: SubmissionRow) -> Result<(), RepositoryError> {
        self.rows.lock().expect("lock").push(row);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

#[async_trait]
impl SubmissionRepository for UnavailableRepository {
    async fn insert(&self, _row: SubmissionRow) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryMailer {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
}

impl MemoryMailer {
    pub(super) fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().expect("lock").clone()
    }
}

#[async_trait]
impl MailSender for MemoryMailer {
    async fn send(&self, email: OutboundEmail) -> Result<EmailReceipt, MailError> {
        let mut guard = self.sent.lock().expect("lock");
        guard.push(email);
        Ok(EmailReceipt {
            id: Some(format!("email-{}", guard.len())),
        })
    }
}

/// Accepts every message but reports no provider id.
pub(super) struct AnonymousMailer;

#[async_trait]
impl MailSender for AnonymousMailer {
    async fn send(&self, _email: OutboundEmail) -> Result<EmailReceipt, MailError> {
        Ok(EmailReceipt { id: None })
    }
}

pub(super) struct RejectingMailer;

#[async_trait]
impl MailSender for RejectingMailer {
    async fn send(&self, _email: OutboundEmail) -> Result<EmailReceipt, MailError> {
        Err(MailError::Provider {
            status: 422,
            message: "The `to` field must be a valid email".to_string(),
        })
    }
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryRepository, MemoryMailer>,
    Arc<MemoryRepository>,
    Arc<MemoryMailer>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let mailer = Arc::new(MemoryMailer::default());
    let service = AssessmentService::new(
        repository.clone(),
        mailer.clone(),
        AssessmentConfig::default(),
    );
    (service, repository, mailer)
}

pub(super) fn titles(recommendations: &[crate::assessment::Recommendation]) -> Vec<&'static str> {
    recommendations
        .iter()
        .map(|recommendation| recommendation.title)
        .collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
