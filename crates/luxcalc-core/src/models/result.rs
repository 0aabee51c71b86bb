use serde::{Deserialize, Serialize};

use crate::tables::BulbType;

/// Output of the calculation pipeline
///
/// `total_power` always equals `standard_wattage * number_of_fixtures`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Floor area (m²)
    pub area: f64,
    /// Fixture height above the work plane (m)
    pub mounting_height: f64,
    pub room_index: f64,
    /// Fraction of emitted flux reaching the work plane, in [0.3, 0.8]
    pub utilization_factor: f64,
    /// Total luminous flux to install (lm)
    pub required_lumens: u64,
    pub number_of_fixtures: u32,
    /// Per-fixture wattage before snapping to the standard series (W)
    pub bulb_wattage: u32,
    /// Per-fixture wattage from the standard series (W)
    pub standard_wattage: u32,
    /// Installed power of all fixtures (W)
    pub total_power: u32,
}

impl CalculationResult {
    /// One-line installation advice for this result
    pub fn recommendation(&self, bulb_type: BulbType) -> String {
        if self.number_of_fixtures == 0 {
            return "No fixtures required for these inputs".to_string();
        }

        let noun = if self.number_of_fixtures == 1 { "fixture" } else { "fixtures" };
        format!(
            "Install {} {} with {} W {} bulbs, {} W in total",
            self.number_of_fixtures,
            noun,
            self.standard_wattage,
            bulb_type.entry().name,
            self.total_power
        )
    }
}

/// Fixture count when each fixture carries several lamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LampPlan {
    pub lamps_per_fixture: u32,
    pub fixtures: u32,
    pub total_lamps: u32,
}
