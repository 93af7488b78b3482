use async_trait::async_trait;
use reqwest::Client;

use super::super::repository::{RepositoryError, SubmissionRepository, SubmissionRow};

/// Inserts submission rows through Supabase's PostgREST interface using the
/// service-role key.
#[derive(Clone)]
pub struct SupabaseSubmissionRepository {
    client: Client,
    base_url: String,
    service_key: String,
    table: String,
}

impl SupabaseSubmissionRepository {
    pub fn new(base_url: String, service_key: String, table: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
            table,
        }
    }

    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

impl std::fmt::Debug for SupabaseSubmissionRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseSubmissionRepository")
            .field("base_url", &self.base_url)
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SubmissionRepository for SupabaseSubmissionRepository {
    async fn insert(&self, row: SubmissionRow) -> Result<(), RepositoryError> {
        let response = self
            .client
            .post(self.table_url())
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await
            .map_err(|err| RepositoryError::Unavailable(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        Err(RepositoryError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
