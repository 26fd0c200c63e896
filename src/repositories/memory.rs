use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{HotelGateway, TicketGateway};
use crate::error::GatewayError;
use crate::models::{Hotel, HotelWithRooms, Room, Ticket, TicketStatus, TicketType};

#[derive(Default)]
struct Inner {
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
    // user_id -> билет (один enrollment на пользователя)
    tickets: HashMap<i32, Ticket>,
    next_id: i32,
}

impl Inner {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Хранилище в памяти с теми же контрактами чтения, что и Postgres.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_hotel(&self, name: &str, image: &str) -> Hotel {
        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let hotel = Hotel {
            id: inner.next_id(),
            name: name.to_string(),
            image: image.to_string(),
            created_at: now,
            updated_at: now,
        };
        inner.hotels.push(hotel.clone());
        hotel
    }

    pub async fn add_room(&self, hotel_id: i32, name: &str, capacity: i32) -> Room {
        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let room = Room {
            id: inner.next_id(),
            name: name.to_string(),
            capacity,
            hotel_id,
            created_at: now,
            updated_at: now,
        };
        inner.rooms.push(room.clone());
        room
    }

    pub async fn add_ticket_type(
        &self,
        name: &str,
        price: i32,
        is_remote: bool,
        includes_hotel: bool,
    ) -> TicketType {
        let mut inner = self.inner.write().await;
        let now = Utc::now();
        TicketType {
            id: inner.next_id(),
            name: name.to_string(),
            price,
            is_remote,
            includes_hotel,
            created_at: now,
            updated_at: now,
        }
    }

    /// Выдает пользователю билет; повторный вызов заменяет предыдущий.
    pub async fn add_ticket(
        &self,
        user_id: i32,
        ticket_type: &TicketType,
        status: TicketStatus,
    ) -> Ticket {
        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let ticket = Ticket {
            id: inner.next_id(),
            enrollment_id: inner.next_id(),
            status,
            ticket_type: ticket_type.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.tickets.insert(user_id, ticket.clone());
        ticket
    }
}

#[async_trait]
impl TicketGateway for InMemoryStore {
    async fn find_ticket_by_user(&self, user_id: i32) -> Result<Option<Ticket>, GatewayError> {
        Ok(self.inner.read().await.tickets.get(&user_id).cloned())
    }
}

#[async_trait]
impl HotelGateway for InMemoryStore {
    async fn find_all_hotels(&self) -> Result<Vec<Hotel>, GatewayError> {
        Ok(self.inner.read().await.hotels.clone())
    }

    async fn find_hotel_with_rooms(
        &self,
        hotel_id: i32,
    ) -> Result<Option<HotelWithRooms>, GatewayError> {
        let inner = self.inner.read().await;

        Ok(inner.hotels.iter().find(|h| h.id == hotel_id).map(|hotel| {
            HotelWithRooms {
                hotel: hotel.clone(),
                rooms: inner
                    .rooms
                    .iter()
                    .filter(|r| r.hotel_id == hotel_id)
                    .cloned()
                    .collect(),
            }
        }))
    }
}
