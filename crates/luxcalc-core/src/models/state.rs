//! Presentation-layer snapshot of the calculator inputs.
//!
//! Front-ends own a `CalculatorState`, persist it, and turn it into a
//! [`CalculationInput`] on every change. The engine never sees this type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LuxcalcError, Result};
use crate::models::{CalculationInput, Reflectances};
use crate::share::ShareQuery;
use crate::tables::{BulbType, RoomType, SurfaceColor};

pub const LENGTH_RANGE: (f64, f64) = (1.0, 20.0);
pub const WIDTH_RANGE: (f64, f64) = (1.0, 20.0);
pub const CEILING_HEIGHT_RANGE: (f64, f64) = (2.2, 4.0);
pub const WORK_SURFACE_HEIGHT_RANGE: (f64, f64) = (0.0, 1.2);
pub const TARGET_WATTAGE_RANGE: (u32, u32) = (3, 100);

/// Largest fixture grid a front-end will ask the layout algorithm for
pub const MAX_LAYOUT_FIXTURES: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorState {
    pub length: f64,
    pub width: f64,
    pub ceiling_height: f64,
    pub work_surface_height: f64,
    pub room_type: RoomType,
    pub bulb_type: BulbType,
    pub target_wattage: u32,
    pub ceiling_color: SurfaceColor,
    pub wall_color: SurfaceColor,
    pub floor_color: SurfaceColor,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            length: 4.0,
            width: 3.0,
            ceiling_height: 2.7,
            work_surface_height: 0.8,
            room_type: RoomType::Living,
            bulb_type: BulbType::LedNeutral,
            target_wattage: 10,
            ceiling_color: SurfaceColor::White,
            wall_color: SurfaceColor::LightBeige,
            floor_color: SurfaceColor::Gray,
        }
    }
}

impl CalculatorState {
    pub fn reflectances(&self) -> Reflectances {
        Reflectances::from_colors(self.ceiling_color, self.wall_color, self.floor_color)
    }

    /// Build the pipeline input for this snapshot
    pub fn to_input(&self) -> CalculationInput {
        CalculationInput {
            length: self.length,
            width: self.width,
            ceiling_height: self.ceiling_height,
            work_surface_height: self.work_surface_height,
            room_type: self.room_type,
            bulb_type: self.bulb_type,
            reflectances: self.reflectances(),
            target_wattage: f64::from(self.target_wattage),
        }
    }

    /// Overlay the fields present in a decoded share query
    pub fn apply_share(&mut self, query: &ShareQuery) {
        if let Some(length) = query.length {
            self.length = length;
        }
        if let Some(width) = query.width {
            self.width = width;
        }
        if let Some(ceiling_height) = query.ceiling_height {
            self.ceiling_height = ceiling_height;
        }
        if let Some(room_type) = query.room_type {
            self.room_type = room_type;
        }
        if let Some(bulb_type) = query.bulb_type {
            self.bulb_type = bulb_type;
        }
    }

    /// Check every numeric field against the calculator's input bounds
    pub fn validate(&self) -> Result<()> {
        check_range("length", self.length, LENGTH_RANGE)?;
        check_range("width", self.width, WIDTH_RANGE)?;
        check_range("ceiling_height", self.ceiling_height, CEILING_HEIGHT_RANGE)?;
        check_range("work_surface_height", self.work_surface_height, WORK_SURFACE_HEIGHT_RANGE)?;

        let (min, max) = TARGET_WATTAGE_RANGE;
        if !(min..=max).contains(&self.target_wattage) {
            return Err(LuxcalcError::InvalidInput {
                field: "target_wattage".to_string(),
                reason: format!("{} W is outside {}-{} W", self.target_wattage, min, max),
            });
        }

        Ok(())
    }
}

/// Check a standalone layout request against the same room bounds as the calculator
///
/// Rooms narrower than twice the wall margin would push fixtures outside the walls.
pub fn validate_layout_request(length: f64, width: f64, fixtures: u32) -> Result<()> {
    check_range("length", length, LENGTH_RANGE)?;
    check_range("width", width, WIDTH_RANGE)?;

    if fixtures > MAX_LAYOUT_FIXTURES {
        return Err(LuxcalcError::InvalidInput {
            field: "fixtures".to_string(),
            reason: format!("{} is above the limit of {}", fixtures, MAX_LAYOUT_FIXTURES),
        });
    }

    Ok(())
}

fn check_range(field: &str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if !value.is_finite() {
        return Err(LuxcalcError::InvalidInput {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }
    if value < min || value > max {
        return Err(LuxcalcError::InvalidInput {
            field: field.to_string(),
            reason: format!("{} m is outside {}-{} m", value, min, max),
        });
    }
    Ok(())
}

/// Persisted form of the state, stamped with the save time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedState {
    pub state: CalculatorState,
    pub saved_at: DateTime<Utc>,
}

impl SavedState {
    pub fn now(state: CalculatorState) -> Self {
        Self { state, saved_at: Utc::now() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = CalculatorState::default();
        assert_eq!(state.length, 4.0);
        assert_eq!(state.width, 3.0);
        assert_eq!(state.ceiling_height, 2.7);
        assert_eq!(state.work_surface_height, 0.8);
        assert_eq!(state.room_type, RoomType::Living);
        assert_eq!(state.bulb_type, BulbType::LedNeutral);
        assert_eq!(state.target_wattage, 10);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_to_input_resolves_colors() {
        let input = CalculatorState::default().to_input();
        assert_eq!(input.reflectances, Reflectances::new(0.7, 0.5, 0.3));
        assert_eq!(input.target_wattage, 10.0);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let state = CalculatorState { length: 25.0, ..Default::default() };
        let err = state.validate().unwrap_err();
        assert!(err.to_string().contains("length"));

        let state = CalculatorState { ceiling_height: f64::NAN, ..Default::default() };
        assert!(state.validate().is_err());

        let state = CalculatorState { target_wattage: 150, ..Default::default() };
        assert!(state.validate().is_err());
    }

    #[test]
    fn test_layout_request_bounds() {
        assert!(validate_layout_request(4.0, 3.0, 4).is_ok());
        assert!(validate_layout_request(1.0, 1.0, 0).is_ok());
        assert!(validate_layout_request(4.0, 3.0, MAX_LAYOUT_FIXTURES).is_ok());

        let err = validate_layout_request(0.2, 0.2, 4).unwrap_err();
        assert!(err.to_string().contains("length"));

        let err = validate_layout_request(4.0, 0.9, 4).unwrap_err();
        assert!(err.to_string().contains("width"));

        let err = validate_layout_request(4.0, 3.0, u32::MAX).unwrap_err();
        assert!(err.to_string().contains("fixtures"));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let state: CalculatorState =
            serde_json::from_str(r#"{"length": 6.5, "room_type": "kitchen"}"#).unwrap();
        assert_eq!(state.length, 6.5);
        assert_eq!(state.room_type, RoomType::Kitchen);
        assert_eq!(state.width, 3.0);
        assert_eq!(state.floor_color, SurfaceColor::Gray);
    }

    #[test]
    fn test_apply_share_overlays_present_fields() {
        let mut state = CalculatorState::default();
        let query = ShareQuery {
            length: Some(5.0),
            room_type: Some(RoomType::Office),
            ..Default::default()
        };
        state.apply_share(&query);

        assert_eq!(state.length, 5.0);
        assert_eq!(state.room_type, RoomType::Office);
        assert_eq!(state.width, 3.0);
        assert_eq!(state.bulb_type, BulbType::LedNeutral);
    }
}
