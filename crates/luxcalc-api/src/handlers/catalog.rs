//! Read-only reference tables

use axum::Json;
use luxcalc_core::tables::{
    BulbTypeEntry, RoomTypeEntry, SurfaceColorEntry, BULB_TYPES, ROOM_TYPES, STANDARD_WATTAGES,
    SURFACE_COLORS,
};

pub async fn list_room_types() -> Json<Vec<RoomTypeEntry>> {
    Json(ROOM_TYPES.to_vec())
}

pub async fn list_bulb_types() -> Json<Vec<BulbTypeEntry>> {
    Json(BULB_TYPES.to_vec())
}

pub async fn list_surface_colors() -> Json<Vec<SurfaceColorEntry>> {
    Json(SURFACE_COLORS.to_vec())
}

pub async fn list_standard_wattages() -> Json<Vec<u32>> {
    Json(STANDARD_WATTAGES.to_vec())
}
