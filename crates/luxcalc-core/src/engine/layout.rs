//! Near-square fixture grid over a rectangular floor plan.

use crate::models::{FixtureLayout, FixturePosition};

/// Clearance between the outermost grid cells and the walls (m)
pub const LAYOUT_MARGIN: f64 = 0.5;

/// Arrange `fixtures` lights on a grid whose column count follows the room's
/// aspect ratio, and place each light at the centroid of its cell.
///
/// Cells are filled row by row; when `fixtures` is not a multiple of `cols`, the
/// last row is left partially empty. Both `rows` and `cols` are at least 1.
pub fn optimal_fixture_layout(length: f64, width: f64, fixtures: u32) -> FixtureLayout {
    let aspect_ratio = length / width;
    let count = f64::from(fixtures);

    let mut cols = ((count.sqrt() * aspect_ratio.sqrt()).round() as u32).max(1);
    let rows = fixtures.div_ceil(cols).max(1);

    // Single corrective pass for rounding artifacts
    if u64::from(rows) * u64::from(cols) < u64::from(fixtures) {
        cols = fixtures.div_ceil(rows);
    }

    let step_x = (length - 2.0 * LAYOUT_MARGIN) / f64::from(cols);
    let step_y = (width - 2.0 * LAYOUT_MARGIN) / f64::from(rows);

    let positions: Vec<FixturePosition> = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .take(fixtures as usize)
        .map(|(row, col)| FixturePosition {
            x: LAYOUT_MARGIN + f64::from(col) * step_x + step_x / 2.0,
            y: LAYOUT_MARGIN + f64::from(row) * step_y + step_y / 2.0,
        })
        .collect();

    tracing::debug!(length, width, fixtures, rows, cols, "Computed fixture layout");

    FixtureLayout { rows, cols, positions }
}
