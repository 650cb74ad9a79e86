use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    backend::HttpDefaultQueueLoader,
    error,
    queue::{DefaultQueueLoader, QueueProjection},
    warning,
};

use super::{backend_client, queue::print_queue};

pub async fn default_playlist() {
    let backend = match backend_client().await {
        Some(backend) => backend,
        None => error!("Cannot load the default playlist without session and TUNEQUEUE_API_URL."),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching default playlist...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let loader = HttpDefaultQueueLoader::new(backend);
    let result = loader.load_default().await;
    pb.finish_and_clear();

    match result {
        Ok(Some(playlist)) => {
            let projection = QueueProjection::from_playlist(Some(&playlist));
            print_queue(&playlist, &projection);
        }
        Ok(None) => warning!("No default playlist available for this listener."),
        Err(e) => warning!("Failed to load default playlist. Err: {}", e),
    }
}
