use axum::{Extension, Json, extract::Query, http::StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    queue::{QueueSnapshot, SharedQueue},
    source::Selection,
};

#[derive(Debug, Default, Deserialize)]
pub struct StartParams {
    pub start: Option<usize>,
}

pub async fn get_queue(Extension(queue): Extension<SharedQueue>) -> Json<QueueSnapshot> {
    Json(queue.lock().await.snapshot())
}

pub async fn change_queue(
    Query(params): Query<StartParams>,
    Extension(queue): Extension<SharedQueue>,
    Json(body): Json<Value>,
) -> Result<Json<QueueSnapshot>, (StatusCode, Json<Value>)> {
    let selection = match Selection::from_json(body) {
        Ok(selection) => selection,
        Err(e) => {
            log::warn!("rejected selection: {}", e);
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": e.to_string() })),
            ));
        }
    };

    let mut queue = queue.lock().await;
    queue.change_playlist(selection, params.start.unwrap_or(0));
    Ok(Json(queue.snapshot()))
}
