use async_trait::async_trait;

use super::CollaboratorError;
use crate::types::PlayList;

/// Source of the playlist offered before the user selects anything.
#[async_trait]
pub trait DefaultQueueLoader: Send + Sync {
    async fn load_default(&self) -> Result<Option<PlayList>, CollaboratorError>;
}

/// Loader answering with a fixed playlist.
pub struct StaticLoader(pub Option<PlayList>);

#[async_trait]
impl DefaultQueueLoader for StaticLoader {
    async fn load_default(&self) -> Result<Option<PlayList>, CollaboratorError> {
        Ok(self.0.clone())
    }
}
