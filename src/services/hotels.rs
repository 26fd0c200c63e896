use std::sync::Arc;
use tracing::info;

use super::eligibility::check_eligibility;
use crate::error::AppError;
use crate::models::{Hotel, HotelWithRooms};
use crate::repositories::{HotelGateway, TicketGateway};

/// Каталог отелей за проверкой билета. Никаких данных до успешной проверки.
#[derive(Clone)]
pub struct HotelAccessService {
    tickets: Arc<dyn TicketGateway>,
    hotels: Arc<dyn HotelGateway>,
}

impl HotelAccessService {
    pub fn new(tickets: Arc<dyn TicketGateway>, hotels: Arc<dyn HotelGateway>) -> Self {
        Self { tickets, hotels }
    }

    pub async fn list_hotels(&self, user_id: i32) -> Result<Vec<Hotel>, AppError> {
        check_eligibility(self.tickets.as_ref(), user_id).await?;

        let hotels = self.hotels.find_all_hotels().await?;
        info!(user_id, count = hotels.len(), "Listed hotels");
        Ok(hotels)
    }

    pub async fn get_hotel_with_rooms(
        &self,
        user_id: i32,
        hotel_id: i32,
    ) -> Result<HotelWithRooms, AppError> {
        check_eligibility(self.tickets.as_ref(), user_id).await?;

        // id - положительный первичный ключ, в хранилище не ходим
        if hotel_id < 1 {
            return Err(AppError::NotFound);
        }

        self.hotels
            .find_hotel_with_rooms(hotel_id)
            .await?
            .ok_or(AppError::NotFound)
    }
}
