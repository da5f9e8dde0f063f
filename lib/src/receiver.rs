//! Local HTTP receiver for exported bookmarks.
//!
//! ```text
//! POST /bookmarks   JSON array of URLs -> stored, {"status":"success",...}
//! ```
//!
//! CORS is open to every origin so a browser page can post here as well.

use crate::error::Result;
use crate::store::BookmarkStore;
use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Address matching the exporter's fixed endpoint
pub const LISTEN_ADDR: &str = "localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiveResponse {
    pub status: String,
    pub message: String,
}

impl ReceiveResponse {
    fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: "Bookmarks received".to_string(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
        }
    }
}

/// Create the receiver router writing into `store`.
///
/// The whole collection arrives in one request, so the body size is not capped.
pub fn create_router(store: BookmarkStore) -> Router {
    Router::new()
        .route("/bookmarks", post(receive_bookmarks))
        .layer(DefaultBodyLimit::disable())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(store))
}

async fn receive_bookmarks(
    State(store): State<Arc<BookmarkStore>>,
    Json(urls): Json<Vec<String>>,
) -> impl IntoResponse {
    let count = urls.len();
    let saved = tokio::task::spawn_blocking(move || store.save(&urls)).await;

    match saved {
        Ok(Ok(())) => {
            log::info!("Received {} bookmarks", count);
            (StatusCode::OK, Json(ReceiveResponse::success()))
        }
        Ok(Err(e)) => {
            log::error!("Failed to store bookmarks: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReceiveResponse::error(e.to_string())),
            )
        }
        Err(e) => {
            log::error!("Store task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReceiveResponse::error(e.to_string())),
            )
        }
    }
}

/// Bind `addr` and serve until the process ends
pub async fn serve(addr: &str, store: BookmarkStore) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!(
        "Receiver listening on {} (storing to {:?})",
        listener.local_addr()?,
        store.path()
    );
    axum::serve(listener, create_router(store)).await?;
    Ok(())
}
