//! Lighting computation engine
//!
//! Pure, deterministic functions: the same input always yields the same output,
//! and nothing here holds state between calls.

pub mod layout;
pub mod pipeline;

pub use layout::{optimal_fixture_layout, LAYOUT_MARGIN};
pub use pipeline::{
    area, bulb_lumens, bulb_lumens_for_id, bulb_wattage, bulb_wattage_for_id, lamp_plan,
    mounting_height, nearest_standard_wattage, number_of_fixtures, perform_full_calculation,
    required_lumens, required_lumens_for_id, room_index, utilization_factor,
    DEFAULT_WORK_SURFACE_HEIGHT, FIXTURE_DROP, MAINTENANCE_FACTOR, UNIFORMITY_FACTOR,
};
