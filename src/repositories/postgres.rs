use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::{HotelGateway, TicketGateway};
use crate::database::Database;
use crate::error::GatewayError;
use crate::models::{Hotel, HotelWithRooms, Room, Ticket, TicketStatus, TicketType};

// Плоская строка из JOIN tickets + enrollments + ticket_types
#[derive(FromRow)]
struct TicketRow {
    id: i32,
    enrollment_id: i32,
    status: TicketStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    type_id: i32,
    type_name: String,
    type_price: i32,
    is_remote: bool,
    includes_hotel: bool,
    type_created_at: DateTime<Utc>,
    type_updated_at: DateTime<Utc>,
}

impl From<TicketRow> for Ticket {
    fn from(row: TicketRow) -> Self {
        Ticket {
            id: row.id,
            enrollment_id: row.enrollment_id,
            status: row.status,
            ticket_type: TicketType {
                id: row.type_id,
                name: row.type_name,
                price: row.type_price,
                is_remote: row.is_remote,
                includes_hotel: row.includes_hotel,
                created_at: row.type_created_at,
                updated_at: row.type_updated_at,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl TicketGateway for Database {
    async fn find_ticket_by_user(&self, user_id: i32) -> Result<Option<Ticket>, GatewayError> {
        let row: Option<TicketRow> = sqlx::query_as(
            r#"
            SELECT t.id, t.enrollment_id, t.status, t.created_at, t.updated_at,
                   tt.id AS type_id, tt.name AS type_name, tt.price AS type_price,
                   tt.is_remote, tt.includes_hotel,
                   tt.created_at AS type_created_at, tt.updated_at AS type_updated_at
            FROM tickets t
            JOIN enrollments e ON e.id = t.enrollment_id
            JOIN ticket_types tt ON tt.id = t.ticket_type_id
            WHERE e.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Ticket::from))
    }
}

#[async_trait]
impl HotelGateway for Database {
    async fn find_all_hotels(&self) -> Result<Vec<Hotel>, GatewayError> {
        let hotels = sqlx::query_as::<_, Hotel>(
            "SELECT id, name, image, created_at, updated_at FROM hotels ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(hotels)
    }

    async fn find_hotel_with_rooms(
        &self,
        hotel_id: i32,
    ) -> Result<Option<HotelWithRooms>, GatewayError> {
        // Отель и номера - из одного снимка
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let hotel = sqlx::query_as::<_, Hotel>(
            "SELECT id, name, image, created_at, updated_at FROM hotels WHERE id = $1",
        )
        .bind(hotel_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(hotel) = hotel else {
            tx.commit().await?;
            return Ok(None);
        };

        let rooms = sqlx::query_as::<_, Room>(
            "SELECT id, name, capacity, hotel_id, created_at, updated_at
             FROM rooms
             WHERE hotel_id = $1
             ORDER BY id",
        )
        .bind(hotel_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(HotelWithRooms { hotel, rooms }))
    }
}
