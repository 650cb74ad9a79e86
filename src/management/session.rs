use std::{fmt, path::PathBuf};

use crate::{config, types::Session};

#[derive(Debug)]
pub enum SessionError {
    IoError(std::io::Error),
    SerdeError(serde_json::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::IoError(e) => write!(f, "session cache unavailable: {}", e),
            SessionError::SerdeError(e) => write!(f, "session cache corrupt: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::IoError(err)
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::SerdeError(err)
    }
}

/// Keeps the listener's session in the local cache.
pub struct SessionManager {
    session: Session,
}

impl SessionManager {
    pub fn new(session: Session) -> Self {
        SessionManager { session }
    }

    pub async fn load() -> Result<Self, SessionError> {
        Self::load_from(&Self::session_path()).await
    }

    pub async fn load_from(path: &PathBuf) -> Result<Self, SessionError> {
        let content = async_fs::read_to_string(path).await?;
        let session: Session = serde_json::from_str(&content)?;
        Ok(Self { session })
    }

    pub async fn persist(&self) -> Result<(), SessionError> {
        self.persist_to(&Self::session_path()).await
    }

    pub async fn persist_to(&self, path: &PathBuf) -> Result<(), SessionError> {
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.session)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    pub fn is_expired(&self) -> bool {
        self.session.is_expired()
    }

    pub fn access_token(&self) -> &str {
        &self.session.access_token
    }

    pub fn user_id(&self) -> &str {
        &self.session.user_id
    }

    pub fn current_session(&self) -> &Session {
        &self.session
    }

    pub fn session_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/session.json");
        path
    }
}
