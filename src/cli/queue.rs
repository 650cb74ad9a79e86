use std::{path::PathBuf, sync::Arc};

use tabled::Table;

use crate::{
    error, info,
    queue::{NoopReporter, QueueController, QueueProjection, QueueSettings},
    source::Selection,
    success,
    types::PlayList,
    utils, warning,
};

pub async fn queue(file: PathBuf, start: usize) {
    let raw = match async_fs::read_to_string(&file).await {
        Ok(raw) => raw,
        Err(e) => error!("Cannot read {}. Err: {}", file.display(), e),
    };

    let selection = match Selection::from_json_str(&raw) {
        Ok(selection) => selection,
        Err(e) => error!("Cannot queue {}. Err: {}", file.display(), e),
    };

    info!("Queue {} from {}", selection.kind(), file.display());

    let mut controller = QueueController::new(Arc::new(NoopReporter), QueueSettings::default());
    let playlist = controller.change_playlist(selection, start);

    if start > 0 && start >= playlist.len() {
        warning!(
            "Start position {} is past the end of the queue, order kept.",
            start
        );
    }

    print_queue(&playlist, &controller.projection());
}

pub(super) fn print_queue(playlist: &PlayList, projection: &QueueProjection) {
    info!("{} ({})", playlist.name, playlist.description);

    if playlist.is_empty() {
        warning!("Queue is empty.");
        return;
    }

    let table = Table::new(utils::queue_table_rows(playlist, projection));
    println!("{}", table);
    success!("{} tracks queued", projection.len());
}
