use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::time::sleep;

use super::BackendClient;
use crate::{
    queue::{CollaboratorError, DefaultQueueLoader},
    types::PlayList,
};

const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Loads the listener's representative playlist from the backend.
pub struct HttpDefaultQueueLoader {
    backend: BackendClient,
}

impl HttpDefaultQueueLoader {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl DefaultQueueLoader for HttpDefaultQueueLoader {
    /// Fetches the representative playlist.
    ///
    /// `404 Not Found` and `204 No Content` mean the listener has none and
    /// yield `Ok(None)`. `502 Bad Gateway` is retried a few times before the
    /// error is handed back.
    async fn load_default(&self) -> Result<Option<PlayList>, CollaboratorError> {
        let token = self.backend.token()?;
        let api_url = format!(
            "{url}?userId={user_id}",
            url = self.backend.url("music/playlists/representative"),
            user_id = self.backend.user_id()
        );

        let mut attempt = 0;
        loop {
            attempt += 1;
            let response = self
                .backend
                .http()
                .get(&api_url)
                .bearer_auth(token)
                .send()
                .await?;

            match response.status() {
                StatusCode::NOT_FOUND | StatusCode::NO_CONTENT => return Ok(None),
                StatusCode::BAD_GATEWAY if attempt < MAX_ATTEMPTS => {
                    log::debug!(
                        "representative playlist: bad gateway, retry {}/{}",
                        attempt,
                        MAX_ATTEMPTS - 1
                    );
                    sleep(RETRY_DELAY).await;
                    continue;
                }
                status if !status.is_success() => {
                    return Err(CollaboratorError::Status(status.as_u16()));
                }
                _ => {}
            }

            let playlist = response.json::<PlayList>().await?;
            return Ok(Some(playlist));
        }
    }
}
