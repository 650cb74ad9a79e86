use axum::{Extension, Json};

use crate::{
    queue::SharedQueue,
    types::{PlaybackEvent, PlaybackState},
};

pub async fn player_callback(
    Extension(queue): Extension<SharedQueue>,
    Json(event): Json<PlaybackEvent>,
) -> Json<PlaybackState> {
    let mut queue = queue.lock().await;
    queue.player_callback(event);
    Json(queue.playback_state().clone())
}
