use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::error::AppError;
use crate::middleware::AuthUser;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/hotels", get(get_hotels))
        .route("/hotels/{hotel_id}", get(get_hotel_by_id))
}

// GET /hotels
async fn get_hotels(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let hotels = state.hotels.list_hotels(user.user_id).await?;
    Ok((StatusCode::OK, Json(hotels)))
}

// GET /hotels/{hotel_id} - массив из одного отеля с вложенными номерами
async fn get_hotel_by_id(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(hotel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = state
        .hotels
        .get_hotel_with_rooms(user.user_id, hotel_id)
        .await?;
    Ok((StatusCode::OK, Json(vec![hotel])))
}
