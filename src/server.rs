use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};

use crate::{Res, api, config, info, queue::SharedQueue};

pub fn router(queue: SharedQueue) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/queue", get(api::get_queue).post(api::change_queue))
        .route("/player/callback", post(api::player_callback))
        .layer(Extension(queue))
}

pub async fn start_api_server(queue: SharedQueue) -> Res<()> {
    let addr = SocketAddr::from_str(&config::server_addr())?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Queue surface listening on http://{}", addr);

    axum::serve(listener, router(queue)).await?;
    Ok(())
}
