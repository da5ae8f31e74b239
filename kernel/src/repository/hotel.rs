use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    hotel::{Hotel, HotelWithRooms},
    id::HotelId,
};

#[mockall::automock]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn find_hotels(&self) -> AppResult<Vec<Hotel>>;
    // None when no hotel has this id
    async fn find_hotel_rooms(&self, hotel_id: HotelId) -> AppResult<Option<HotelWithRooms>>;
}
