use std::sync::Arc;

use crate::{
    backend::{HttpDefaultQueueLoader, HttpUsageReporter},
    config, error, info,
    queue::{self, NoopReporter, QueueController, UsageReporter},
    server, success, warning,
};

use super::backend_client;

pub async fn serve() {
    let settings = match config::queue_settings() {
        Ok(settings) => settings,
        Err(e) => error!("Invalid configuration. Err: {}", e),
    };

    let backend = backend_client().await;

    let reporter: Arc<dyn UsageReporter> = match &backend {
        Some(backend) => Arc::new(HttpUsageReporter::new(backend.clone())),
        None => {
            warning!("Plays will not be counted in this session.");
            Arc::new(NoopReporter)
        }
    };

    info!(
        "Counting plays after {} ms ({:?})",
        settings.dwell.as_millis(),
        settings.policy
    );

    let shared = QueueController::new(reporter, settings).shared();

    if let Some(backend) = backend {
        let seed_queue = Arc::clone(&shared);
        tokio::spawn(async move {
            let loader = HttpDefaultQueueLoader::new(backend);
            if queue::seed_from_loader(&seed_queue, &loader).await {
                success!("Queue seeded with the default playlist");
            }
        });
    }

    if let Err(e) = server::start_api_server(shared).await {
        error!("Queue surface stopped. Err: {}", e);
    }
}
