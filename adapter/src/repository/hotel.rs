use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    hotel::{Hotel, HotelWithRooms, Room},
    id::HotelId,
};
use kernel::repository::hotel::HotelRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::hotel::{HotelRow, RoomRow},
    ConnectionPool,
};

#[derive(new)]
pub struct HotelRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HotelRepository for HotelRepositoryImpl {
    async fn find_hotels(&self) -> AppResult<Vec<Hotel>> {
        let rows: Vec<HotelRow> = sqlx::query_as(
            r#"
                SELECT
                    hotel_id,
                    name,
                    image,
                    created_at,
                    updated_at
                FROM hotels
                ORDER BY hotel_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_hotel_rooms(&self, hotel_id: HotelId) -> AppResult<Option<HotelWithRooms>> {
        let hotel: Option<HotelRow> = sqlx::query_as(
            r#"
                SELECT
                    hotel_id,
                    name,
                    image,
                    created_at,
                    updated_at
                FROM hotels
                WHERE hotel_id = $1
            "#,
        )
        .bind(hotel_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(hotel) = hotel else {
            return Ok(None);
        };

        let rooms: Vec<RoomRow> = sqlx::query_as(
            r#"
                SELECT
                    room_id,
                    name,
                    capacity,
                    hotel_id,
                    created_at,
                    updated_at
                FROM rooms
                WHERE hotel_id = $1
                ORDER BY room_id ASC
            "#,
        )
        .bind(hotel_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(Some(HotelWithRooms {
            hotel: hotel.into(),
            rooms: rooms.into_iter().map(Room::from).collect(),
        }))
    }
}
