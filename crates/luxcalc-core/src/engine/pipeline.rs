//! Illuminance calculation by the utilization-factor method:
//!
//! ```text
//! Φ = E × S × K × Z / η
//! ```
//!
//! where `E` is the lux norm of the room type, `S` the floor area, `K` the
//! maintenance factor, `Z` the uniformity factor and `η` the utilization factor.

use crate::models::{CalculationInput, CalculationResult, LampPlan, Reflectances};
use crate::tables::{find_bulb_type, find_room_type, BulbType, RoomType, STANDARD_WATTAGES};

/// Derating for lamp aging and dirt
pub const MAINTENANCE_FACTOR: f64 = 1.2;

/// Derating for uneven light distribution
pub const UNIFORMITY_FACTOR: f64 = 1.1;

/// Drop of the lamp housing below the ceiling (m)
pub const FIXTURE_DROP: f64 = 0.1;

/// Typical desk height (m)
pub const DEFAULT_WORK_SURFACE_HEIGHT: f64 = 0.8;

const BASE_UTILIZATION: f64 = 0.3;
const MAX_UTILIZATION: f64 = 0.8;
const REFLECTION_WEIGHT: f64 = 0.3;

/// Floor area (m²)
pub fn area(length: f64, width: f64) -> f64 {
    length * width
}

/// Fixture height above the work plane; not clamped, may be zero or negative
pub fn mounting_height(ceiling_height: f64, work_surface_height: f64) -> f64 {
    ceiling_height - work_surface_height - FIXTURE_DROP
}

/// Room index `i = S / (h × (a + b))`, or exactly 0 when `h <= 0`
pub fn room_index(area: f64, length: f64, width: f64, mounting_height: f64) -> f64 {
    if mounting_height <= 0.0 {
        return 0.0;
    }
    area / (mounting_height * (length + width))
}

/// Empirical utilization factor from surface reflectances and room index.
///
/// Non-decreasing in both the average reflectance and the room index, and within
/// [0.3, 0.8] for reflectances in [0, 1] and a non-negative index.
pub fn utilization_factor(room_index: f64, reflectances: Reflectances) -> f64 {
    let reflection_bonus = reflectances.average() * REFLECTION_WEIGHT;

    let index_bonus = if room_index < 1.0 {
        room_index * 0.1
    } else if room_index < 2.0 {
        0.1 + (room_index - 1.0) * 0.15
    } else if room_index < 3.0 {
        0.25 + (room_index - 2.0) * 0.1
    } else {
        0.35
    };

    (BASE_UTILIZATION + reflection_bonus + index_bonus).min(MAX_UTILIZATION)
}

/// Total luminous flux needed for the room (lm), rounded to the nearest lumen
pub fn required_lumens(room_type: RoomType, area: f64, utilization_factor: f64) -> u64 {
    lumens_for_lux(room_type.lux(), area, utilization_factor)
}

/// Like [`required_lumens`], but degrades to 0 for an unknown room type id
pub fn required_lumens_for_id(room_type_id: &str, area: f64, utilization_factor: f64) -> u64 {
    match find_room_type(room_type_id) {
        Some(entry) => lumens_for_lux(entry.lux, area, utilization_factor),
        None => {
            tracing::warn!(room_type = room_type_id, "Unknown room type, required lumens is 0");
            0
        }
    }
}

fn lumens_for_lux(lux: u32, area: f64, utilization_factor: f64) -> u64 {
    if utilization_factor <= 0.0 {
        return 0;
    }
    let lumens =
        f64::from(lux) * area * MAINTENANCE_FACTOR * UNIFORMITY_FACTOR / utilization_factor;
    lumens.round() as u64
}

/// Light output of one bulb of the given wattage (lm)
pub fn bulb_lumens(bulb_type: BulbType, wattage: f64) -> f64 {
    f64::from(bulb_type.lumens_per_watt()) * wattage
}

/// Like [`bulb_lumens`], but degrades to 0 for an unknown bulb type id
pub fn bulb_lumens_for_id(bulb_type_id: &str, wattage: f64) -> f64 {
    match find_bulb_type(bulb_type_id) {
        Some(entry) => f64::from(entry.lumens_per_watt) * wattage,
        None => {
            tracing::warn!(bulb_type = bulb_type_id, "Unknown bulb type, bulb lumens is 0");
            0.0
        }
    }
}

/// Fixtures needed to deliver `required_lumens`, rounding up.
///
/// Returns 0 when nothing is required or when a fixture emits no light.
pub fn number_of_fixtures(required_lumens: u64, bulb_lumens: f64, lamps_per_fixture: u32) -> u32 {
    let lumens_per_fixture = bulb_lumens * f64::from(lamps_per_fixture);
    if required_lumens == 0 || lumens_per_fixture <= 0.0 {
        return 0;
    }
    (required_lumens as f64 / lumens_per_fixture).ceil() as u32
}

/// Wattage of a bulb emitting `lumens` (W), rounded to the nearest watt
pub fn bulb_wattage(bulb_type: BulbType, lumens: f64) -> u32 {
    (lumens / f64::from(bulb_type.lumens_per_watt())).round() as u32
}

/// Like [`bulb_wattage`], but degrades to 0 for an unknown bulb type id
pub fn bulb_wattage_for_id(bulb_type_id: &str, lumens: f64) -> u32 {
    match find_bulb_type(bulb_type_id) {
        Some(entry) => (lumens / f64::from(entry.lumens_per_watt)).round() as u32,
        None => {
            tracing::warn!(bulb_type = bulb_type_id, "Unknown bulb type, bulb wattage is 0");
            0
        }
    }
}

/// Smallest standard wattage `>= wattage`, saturating at the largest (100 W)
pub fn nearest_standard_wattage(wattage: u32) -> u32 {
    STANDARD_WATTAGES
        .iter()
        .copied()
        .find(|&w| w >= wattage)
        .unwrap_or(STANDARD_WATTAGES[STANDARD_WATTAGES.len() - 1])
}

/// Run every pipeline step for one input.
///
/// The per-fixture wattage is derived after the fixture count is fixed and then
/// snapped to the standard series, so the installed flux can differ from the
/// required flux when only a few fixtures are needed.
pub fn perform_full_calculation(input: &CalculationInput) -> CalculationResult {
    let area = area(input.length, input.width);
    let mounting_height = mounting_height(input.ceiling_height, input.work_surface_height);
    let room_index = room_index(area, input.length, input.width, mounting_height);
    let utilization_factor = utilization_factor(room_index, input.reflectances);

    let required_lumens = required_lumens(input.room_type, area, utilization_factor);

    let target_lumens = bulb_lumens(input.bulb_type, input.target_wattage);
    let number_of_fixtures = number_of_fixtures(required_lumens, target_lumens, 1);

    let bulb_wattage = if number_of_fixtures == 0 {
        0
    } else {
        bulb_wattage(input.bulb_type, required_lumens as f64 / f64::from(number_of_fixtures))
    };
    let standard_wattage = nearest_standard_wattage(bulb_wattage);
    let total_power = standard_wattage * number_of_fixtures;

    tracing::debug!(
        room_type = %input.room_type,
        bulb_type = %input.bulb_type,
        area,
        room_index,
        utilization_factor,
        required_lumens,
        number_of_fixtures,
        standard_wattage,
        "Lighting calculation complete"
    );

    CalculationResult {
        area,
        mounting_height,
        room_index,
        utilization_factor,
        required_lumens,
        number_of_fixtures,
        bulb_wattage,
        standard_wattage,
        total_power,
    }
}

/// Fixtures needed for `required_lumens` when each one holds `lamps_per_fixture`
/// bulbs of the input's target wattage
pub fn lamp_plan(
    input: &CalculationInput,
    required_lumens: u64,
    lamps_per_fixture: u32,
) -> LampPlan {
    let lumens = bulb_lumens(input.bulb_type, input.target_wattage);
    let fixtures = number_of_fixtures(required_lumens, lumens, lamps_per_fixture);
    LampPlan {
        lamps_per_fixture,
        fixtures,
        total_lamps: fixtures.saturating_mul(lamps_per_fixture),
    }
}
