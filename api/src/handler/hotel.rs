use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::id::HotelId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::hotel::{HotelResponse, HotelWithRoomsResponse},
};

pub async fn show_hotel_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<HotelResponse>>> {
    registry
        .hotel_service()
        .list_available_hotels(user.id())
        .await
        .map(|hotels| hotels.into_iter().map(HotelResponse::from).collect())
        .map(Json)
}

pub async fn show_hotel_rooms(
    user: AuthorizedUser,
    Path(hotel_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HotelWithRoomsResponse>> {
    let hotel_id: HotelId = hotel_id.parse().map_err(|_| {
        AppError::InvalidData(vec![format!("hotelId `{hotel_id}` is not an integer")])
    })?;

    registry
        .hotel_service()
        .list_hotel_rooms(hotel_id, user.id())
        .await
        .map(HotelWithRoomsResponse::from)
        .map(Json)
}
