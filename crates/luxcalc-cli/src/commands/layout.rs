//! Layout command implementation

use crate::cli::LayoutArgs;
use crate::output::OutputWriter;
use crate::output_types::{LayoutOutput, PositionRow};
use anyhow::Result;
use luxcalc_core::models::validate_layout_request;
use luxcalc_core::optimal_fixture_layout;

pub fn execute(args: LayoutArgs, output: &OutputWriter) -> Result<()> {
    validate_layout_request(args.length, args.width, args.fixtures)?;

    let layout = optimal_fixture_layout(args.length, args.width, args.fixtures);
    let empty_cells = layout.empty_cells();

    if output.is_json() {
        output.result(LayoutOutput {
            length: args.length,
            width: args.width,
            layout,
            empty_cells,
        })?;
        return Ok(());
    }

    output.section("Fixture Layout");
    output.kv("Room", format!("{} × {} m", args.length, args.width));
    output.kv("Grid", format!("{} rows × {} cols", layout.rows, layout.cols));
    output.kv("Fixtures", layout.fixture_count());
    if empty_cells > 0 {
        output.kv("Empty Cells", empty_cells);
    }

    println!();
    output.table(PositionRow::from_layout(&layout));

    Ok(())
}
