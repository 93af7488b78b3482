use super::common::*;
use std::sync::Arc;

use crate::assessment::recommendations::RecommendationConfig;
use crate::assessment::repository::MailError;
use crate::assessment::scoring::score;
use crate::assessment::service::{
    AssessmentConfig, AssessmentService, AssessmentServiceError, DEFAULT_SENDER,
};

#[tokio::test]
async fn submit_persists_row_and_mails_report() {
    let (service, repository, mailer) = build_service();
    let submission = submission();
    let expected_score = score(&submission.answers);

    let receipt = service.submit(submission.clone()).await.expect("submit succeeds");

    assert_eq!(receipt.longevity_score, expected_score);
    assert_eq!(receipt.email_id.as_deref(), Some("email-1"));
    assert!(receipt.persisted);
    assert_eq!(receipt.recommendations.len(), 4);

    let rows = repository.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].first_name, "Ada");
    assert_eq!(rows[0].last_name.as_deref(), Some("Lovelace"));
    assert_eq!(rows[0].longevity_score, expected_score);
    assert_eq!(rows[0].answers, submission.answers);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from, DEFAULT_SENDER);
    assert_eq!(sent[0].to, vec!["ada@example.com".to_string()]);
    assert_eq!(
        sent[0].subject,
        "Your Longevity Score: 69/100 - Personalized Health Recommendations"
    );
    assert!(sent[0].html.contains("Hello Ada!"));
}

#[tokio::test]
async fn blank_last_name_is_stored_as_null() {
    let (service, repository, _) = build_service();
    let mut submission = submission();
    submission.last_name = Some("  ".to_string());

    service.submit(submission).await.expect("submit succeeds");

    assert_eq!(repository.rows()[0].last_name, None);
}

#[tokio::test]
async fn storage_failure_does_not_block_email() {
    let mailer = Arc::new(MemoryMailer::default());
    let service = AssessmentService::new(
        Arc::new(UnavailableRepository),
        mailer.clone(),
        AssessmentConfig::default(),
    );

    let receipt = service.submit(submission()).await.expect("submit succeeds");

    assert!(!receipt.persisted);
    assert_eq!(receipt.longevity_score, 69);
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test]
async fn mail_failure_fails_the_submission() {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(
        repository.clone(),
        Arc::new(RejectingMailer),
        AssessmentConfig::default(),
    );

    let err = service
        .submit(submission())
        .await
        .expect_err("mail failure surfaces");

    match &err {
        AssessmentServiceError::Mail(MailError::Provider { status, .. }) => {
            assert_eq!(*status, 422)
        }
        other => panic!("expected provider error, got {other:?}"),
    }
    assert!(err.to_string().contains("valid email"));
    assert_eq!(repository.rows().len(), 1);
}

#[tokio::test]
async fn configured_sender_and_diet_policy_apply() {
    let mailer = Arc::new(MemoryMailer::default());
    let service = AssessmentService::new(
        Arc::new(MemoryRepository::default()),
        mailer.clone(),
        AssessmentConfig {
            sender: "Vitality Lab <hello@example.com>".to_string(),
            recommendations: RecommendationConfig {
                alternative_diet_guides: false,
            },
        },
    );
    let mut submission = submission();
    submission.answers = ideal_answers();

    let receipt = service.submit(submission).await.expect("submit succeeds");

    assert_eq!(
        titles(&receipt.recommendations),
        vec!["Optimize Your Sleep for Longevity"]
    );
    assert_eq!(mailer.sent()[0].from, "Vitality Lab <hello@example.com>");
    assert!(!service.recommendation_config().alternative_diet_guides);
}

#[test]
fn preview_matches_submission_scoring() {
    let (service, repository, mailer) = build_service();
    let submission = submission();

    let view = service.preview(&submission);

    assert_eq!(view.first_name, "Ada");
    assert_eq!(view.longevity_score, score(&submission.answers));
    assert!(repository.rows().is_empty());
    assert!(mailer.sent().is_empty());
}
