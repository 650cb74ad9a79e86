use async_trait::async_trait;

use super::BackendClient;
use crate::queue::{CollaboratorError, UsageReporter};

/// Increments the listener's play counter on the backend.
pub struct HttpUsageReporter {
    backend: BackendClient,
}

impl HttpUsageReporter {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl UsageReporter for HttpUsageReporter {
    async fn report_play(&self) -> Result<(), CollaboratorError> {
        let token = self.backend.token()?;
        let api_url = format!(
            "{url}?userId={user_id}",
            url = self.backend.url("music/individual/count"),
            user_id = self.backend.user_id()
        );

        self.backend
            .http()
            .post(&api_url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
