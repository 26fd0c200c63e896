#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use fake::faker::lorem::en::Word;
use fake::faker::name::en::Name;
use fake::Fake;
use std::sync::Arc;
use tower::ServiceExt;

use conference_hotels::config::{AppConfig, Config, DatabaseConfig, JwtConfig};
use conference_hotels::error::GatewayError;
use conference_hotels::middleware::issue_token;
use conference_hotels::models::{Hotel, HotelWithRooms, Room, Ticket, TicketStatus, TicketType};
use conference_hotels::repositories::memory::InMemoryStore;
use conference_hotels::repositories::{HotelGateway, TicketGateway};
use conference_hotels::{router, AppState};

pub fn test_config() -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            environment: "test".into(),
            rust_log: "conference_hotels=debug".into(),
        },
        database: DatabaseConfig {
            url: "postgres://unused".into(),
            pool_size: 1,
        },
        jwt: JwtConfig {
            secret: "integration-secret".into(),
            expires_in_hours: 1,
        },
    }
}

pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let state = AppState::new(test_config(), store.clone(), store.clone());
        Self {
            store,
            router: router(state),
        }
    }

    pub fn token_for(&self, user_id: i32) -> String {
        issue_token(user_id, &test_config().jwt).unwrap()
    }

    pub async fn create_hotel(&self) -> Hotel {
        let name: String = Name().fake();
        let image = format!("https://images.example/{}.png", Word().fake::<String>());
        self.store.add_hotel(&name, &image).await
    }

    pub async fn create_room(&self, hotel_id: i32) -> Room {
        let name: String = Name().fake();
        let capacity: i32 = (1..4).fake();
        self.store.add_room(hotel_id, &name, capacity).await
    }

    pub async fn create_ticket_type(&self, is_remote: bool, includes_hotel: bool) -> TicketType {
        let name: String = Name().fake();
        let price: i32 = (100..1000).fake();
        self.store
            .add_ticket_type(&name, price, is_remote, includes_hotel)
            .await
    }

    pub async fn create_ticket(&self, user_id: i32, ticket_type: &TicketType, status: TicketStatus) -> Ticket {
        self.store.add_ticket(user_id, ticket_type, status).await
    }
}

pub async fn get(router: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Vec<u8>) {
    let mut request = Request::builder().uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let response = router
        .clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

pub fn text(body: &[u8]) -> &str {
    std::str::from_utf8(body).unwrap()
}

/// Хранилище, которое всегда падает
pub struct BrokenStore;

#[async_trait]
impl TicketGateway for BrokenStore {
    async fn find_ticket_by_user(&self, _user_id: i32) -> Result<Option<Ticket>, GatewayError> {
        Err(GatewayError::Unavailable("connection refused".into()))
    }
}

#[async_trait]
impl HotelGateway for BrokenStore {
    async fn find_all_hotels(&self) -> Result<Vec<Hotel>, GatewayError> {
        Err(GatewayError::Unavailable("connection refused".into()))
    }

    async fn find_hotel_with_rooms(&self, _hotel_id: i32) -> Result<Option<HotelWithRooms>, GatewayError> {
        Err(GatewayError::Unavailable("connection refused".into()))
    }
}
