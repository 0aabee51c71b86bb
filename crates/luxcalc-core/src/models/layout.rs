use serde::{Deserialize, Serialize};

/// Fixture center in room-local meters, origin at one corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixturePosition {
    pub x: f64,
    pub y: f64,
}

/// Grid arrangement of fixtures over the floor plan
///
/// `positions` is row-major and holds exactly the requested number of fixtures;
/// the last row may be partially filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureLayout {
    pub rows: u32,
    pub cols: u32,
    pub positions: Vec<FixturePosition>,
}

impl FixtureLayout {
    pub fn fixture_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of grid cells left empty
    pub fn empty_cells(&self) -> usize {
        (self.rows as usize * self.cols as usize).saturating_sub(self.positions.len())
    }
}
