use async_trait::async_trait;
use chrono::{DateTime, Utc};
use longevity::assessment::{
    AssessmentConfig, AssessmentService, EmailReceipt, MailError, MailSender, OutboundEmail,
    RepositoryError, ResendMailer, SubmissionRepository, SubmissionRow,
    SupabaseSubmissionRepository,
};
use longevity::config::{AppConfig, MailConfig, StorageConfig};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Debug, Clone)]
pub(crate) struct StoredSubmission {
    pub(crate) received_at: DateTime<Utc>,
    pub(crate) row: SubmissionRow,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionRepository {
    rows: Arc<Mutex<Vec<StoredSubmission>>>,
}

impl InMemorySubmissionRepository {
    #[cfg(test)]
    pub(crate) fn submissions(&self) -> Vec<StoredSubmission> {
        self.rows
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn insert(&self, row: SubmissionRow) -> Result<(), RepositoryError> {
        let mut guard = self
            .rows
            .lock()
            .map_err(|_| RepositoryError::Unavailable("submission store poisoned".to_string()))?;
        let stored = StoredSubmission {
            received_at: Utc::now(),
            row,
        };
        debug!(
            received_at = %stored.received_at,
            email = %stored.row.email,
            "submission kept in memory"
        );
        guard.push(stored);
        Ok(())
    }
}

/// Keeps rendered reports in memory when no mail provider is configured.
#[derive(Default, Clone)]
pub(crate) struct OutboxMailer {
    sequence: Arc<AtomicU64>,
    messages: Arc<Mutex<Vec<OutboundEmail>>>,
}

impl OutboxMailer {
    #[cfg(test)]
    pub(crate) fn messages(&self) -> Vec<OutboundEmail> {
        self.messages
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MailSender for OutboxMailer {
    async fn send(&self, email: OutboundEmail) -> Result<EmailReceipt, MailError> {
        let id = format!("outbox-{:06}", self.sequence.fetch_add(1, Ordering::Relaxed) + 1);
        info!(
            id = %id,
            to = ?email.to,
            subject = %email.subject,
            "report stored in local outbox"
        );
        self.messages
            .lock()
            .map_err(|_| MailError::Transport("outbox poisoned".to_string()))?
            .push(email);
        Ok(EmailReceipt { id: Some(id) })
    }
}

pub(crate) enum ConfiguredRepository {
    Supabase(SupabaseSubmissionRepository),
    InMemory(InMemorySubmissionRepository),
}

impl ConfiguredRepository {
    pub(crate) fn from_config(config: &StorageConfig) -> Self {
        match config {
            StorageConfig::Supabase {
                url,
                service_key,
                table,
            } => {
                info!(%url, %table, "persisting submissions to supabase");
                Self::Supabase(SupabaseSubmissionRepository::new(
                    url.clone(),
                    service_key.clone(),
                    table.clone(),
                ))
            }
            StorageConfig::InMemory => {
                warn!("SUPABASE_URL not set; submissions are kept in memory only");
                Self::InMemory(InMemorySubmissionRepository::default())
            }
        }
    }
}

#[async_trait]
impl SubmissionRepository for ConfiguredRepository {
    async fn insert(&self, row: SubmissionRow) -> Result<(), RepositoryError> {
        match self {
            Self::Supabase(repository) => repository.insert(row).await,
            Self::InMemory(repository) => repository.insert(row).await,
        }
    }
}

pub(crate) enum ConfiguredMailer {
    Resend(ResendMailer),
    Outbox(OutboxMailer),
}

impl ConfiguredMailer {
    pub(crate) fn from_config(config: &MailConfig) -> Self {
        match &config.api_key {
            Some(api_key) => {
                info!(api_url = %config.api_url, "sending reports through resend");
                Self::Resend(ResendMailer::new(
                    api_key.clone(),
                    Some(config.api_url.clone()),
                ))
            }
            None => {
                warn!("RESEND_API_KEY not set; reports go to the local outbox");
                Self::Outbox(OutboxMailer::default())
            }
        }
    }
}

#[async_trait]
impl MailSender for ConfiguredMailer {
    async fn send(&self, email: OutboundEmail) -> Result<EmailReceipt, MailError> {
        match self {
            Self::Resend(mailer) => mailer.send(email).await,
            Self::Outbox(mailer) => mailer.send(email).await,
        }
    }
}

pub(crate) fn assessment_config(config: &AppConfig) -> AssessmentConfig {
    AssessmentConfig {
        sender: config.mail.sender.clone(),
        recommendations: config.recommendations.clone(),
    }
}

pub(crate) fn build_assessment_service(
    config: &AppConfig,
) -> Arc<AssessmentService<ConfiguredRepository, ConfiguredMailer>> {
    Arc::new(AssessmentService::new(
        Arc::new(ConfiguredRepository::from_config(&config.storage)),
        Arc::new(ConfiguredMailer::from_config(&config.mail)),
        assessment_config(config),
    ))
}
