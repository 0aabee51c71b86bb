use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_WORK_SURFACE_HEIGHT;
use crate::tables::{BulbType, RoomType, SurfaceColor};

/// Reflection coefficients of the room's surfaces, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reflectances {
    pub ceiling: f64,
    pub wall: f64,
    pub floor: f64,
}

impl Reflectances {
    pub fn new(ceiling: f64, wall: f64, floor: f64) -> Self {
        Self { ceiling, wall, floor }
    }

    /// Resolve surface colors to their reflection coefficients
    pub fn from_colors(ceiling: SurfaceColor, wall: SurfaceColor, floor: SurfaceColor) -> Self {
        Self::new(ceiling.reflection(), wall.reflection(), floor.reflection())
    }

    /// Arithmetic mean of the three coefficients
    pub fn average(&self) -> f64 {
        (self.ceiling + self.wall + self.floor) / 3.0
    }
}

/// Parameters for one run of the calculation pipeline
///
/// Ranges are validated by the caller (see [`crate::models::CalculatorState::validate`]);
/// the pipeline only guards against division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Room length (m)
    pub length: f64,
    /// Room width (m)
    pub width: f64,
    /// Ceiling height (m)
    pub ceiling_height: f64,
    /// Height of the work plane above the floor (m)
    pub work_surface_height: f64,
    pub room_type: RoomType,
    pub bulb_type: BulbType,
    pub reflectances: Reflectances,
    /// Wattage of the bulb the user intends to buy (W)
    pub target_wattage: f64,
}

impl CalculationInput {
    /// Create an input with the default work surface height and a 10 W target bulb
    pub fn new(
        length: f64,
        width: f64,
        ceiling_height: f64,
        room_type: RoomType,
        bulb_type: BulbType,
        reflectances: Reflectances,
    ) -> Self {
        Self {
            length,
            width,
            ceiling_height,
            work_surface_height: DEFAULT_WORK_SURFACE_HEIGHT,
            room_type,
            bulb_type,
            reflectances,
            target_wattage: 10.0,
        }
    }

    pub fn with_work_surface_height(mut self, height: f64) -> Self {
        self.work_surface_height = height;
        self
    }

    pub fn with_target_wattage(mut self, wattage: f64) -> Self {
        self.target_wattage = wattage;
        self
    }
}
