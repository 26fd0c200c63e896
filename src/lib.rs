pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use repositories::{HotelGateway, TicketGateway};
use services::hotels::HotelAccessService;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub hotels: HotelAccessService,
}

impl AppState {
    pub fn new(
        config: config::Config,
        tickets: Arc<dyn TicketGateway>,
        hotels: Arc<dyn HotelGateway>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            hotels: HotelAccessService::new(tickets, hotels),
        })
    }

    /// Оба шлюза поверх одного пула Postgres
    pub fn with_database(config: config::Config, db: database::Database) -> Arc<Self> {
        let db = Arc::new(db);
        Self::new(config, db.clone(), db)
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
