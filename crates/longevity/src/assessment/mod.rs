//! Longevity assessment: questionnaire schema, the shared scoring and
//! recommendation rules, the respondent wizard, and report delivery.
//!
//! Every surface (HTTP backend, results preview, terminal quiz) goes through
//! [`scoring`] and [`recommendations`]; nothing re-implements the rules.

pub mod delivery;
pub mod domain;
pub mod questionnaire;
pub mod recommendations;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use delivery::{ResendMailer, SupabaseSubmissionRepository};
pub use domain::{AnswerValue, Answers, Submission};
pub use questionnaire::{find_question, ids, questions, AnswerType, Question, QuestionCategory};
pub use recommendations::{
    recommend, top_picks, Recommendation, RecommendationCategory, RecommendationConfig,
    RecommendationEngine,
};
pub use report::{email_subject, render_email_html, ResultsView};
pub use repository::{
    EmailReceipt, MailError, MailSender, OutboundEmail, RepositoryError, SubmissionRepository,
    SubmissionRow,
};
pub use router::assessment_router;
pub use scoring::{breakdown, score, ScoreBreakdown, ScoreComponent, ScoreFactor, ScoreLevel};
pub use service::{
    AssessmentConfig, AssessmentService, AssessmentServiceError, SubmissionReceipt,
};
pub use wizard::{QuizWizard, WizardError, WizardStep};
