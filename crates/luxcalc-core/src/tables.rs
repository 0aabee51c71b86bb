//! Compiled-in reference data: illuminance norms per room type, bulb efficacies,
//! surface reflectances, and the standard bulb wattage series.
//!
//! Every table is a `static` array, so nothing here can be added to or mutated at
//! runtime. Each closed enum resolves to its entry infallibly; string identifiers
//! go through the `find_*` lookups, which return `None` for unknown ids.

pub mod bulbs;
pub mod rooms;
pub mod surfaces;

pub use bulbs::{find_bulb_type, BulbType, BulbTypeEntry, BULB_TYPES};
pub use rooms::{find_room_type, RoomType, RoomTypeEntry, ROOM_TYPES};
pub use surfaces::{find_surface_color, SurfaceColor, SurfaceColorEntry, SURFACE_COLORS};

/// Standard bulb wattages (W), ascending
pub const STANDARD_WATTAGES: [u32; 14] = [3, 5, 7, 9, 11, 15, 18, 20, 25, 30, 40, 60, 75, 100];
