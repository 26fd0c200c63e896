//! Границы хранилища: что ядру нужно прочитать о билетах и отелях.
//!
//! Реализации: `Database` (Postgres, см. [`postgres`]) и [`memory::InMemoryStore`]
//! для тестов и локального запуска.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::models::{Hotel, HotelWithRooms, Ticket};

#[async_trait]
pub trait TicketGateway: Send + Sync {
    /// Билет пользователя (через его enrollment) вместе с типом билета.
    async fn find_ticket_by_user(&self, user_id: i32) -> Result<Option<Ticket>, GatewayError>;
}

#[async_trait]
pub trait HotelGateway: Send + Sync {
    async fn find_all_hotels(&self) -> Result<Vec<Hotel>, GatewayError>;

    /// `None`, если отеля с таким id нет.
    async fn find_hotel_with_rooms(
        &self,
        hotel_id: i32,
    ) -> Result<Option<HotelWithRooms>, GatewayError>;
}
