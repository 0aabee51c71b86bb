mod calculate;
mod catalog;
mod health;
mod layout;
mod share;

pub use calculate::handle_calculate;
pub use catalog::{list_bulb_types, list_room_types, list_standard_wattages, list_surface_colors};
pub use health::health_check;
pub use layout::handle_layout;
pub use share::{create_share_link, open_share_link};
