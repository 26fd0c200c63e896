pub mod hotels;

use axum::{routing::get, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(hotels::routes())
}
