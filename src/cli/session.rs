use crate::{error, management::SessionManager, success, types::Session};

pub async fn session(user_id: String, token: String, expires_in: u64) {
    let manager = SessionManager::new(Session::new(user_id, token, expires_in));

    if let Err(e) = manager.persist().await {
        error!("Failed to save session to cache: {}", e);
    }

    success!(
        "Session for {} stored in {}",
        manager.user_id(),
        SessionManager::session_path().display()
    );
}
