//! Catalog command implementation

use crate::cli::{CatalogArgs, CatalogTable};
use crate::output::OutputWriter;
use crate::output_types::{BulbRow, CatalogOutput, RoomRow, SurfaceRow};
use anyhow::Result;
use luxcalc_core::tables::{BULB_TYPES, ROOM_TYPES, STANDARD_WATTAGES, SURFACE_COLORS};

pub fn execute(args: CatalogArgs, output: &OutputWriter) -> Result<()> {
    let show = |table: CatalogTable| args.table.map_or(true, |selected| selected == table);

    if output.is_json() {
        let catalog = CatalogOutput {
            room_types: show(CatalogTable::Rooms).then(|| ROOM_TYPES.to_vec()),
            bulb_types: show(CatalogTable::Bulbs).then(|| BULB_TYPES.to_vec()),
            surface_colors: show(CatalogTable::Surfaces).then(|| SURFACE_COLORS.to_vec()),
            standard_wattages: show(CatalogTable::Wattages).then(|| STANDARD_WATTAGES.to_vec()),
        };
        output.result(catalog)?;
        return Ok(());
    }

    if show(CatalogTable::Rooms) {
        output.section("Room Types");
        output.table(ROOM_TYPES.iter().map(RoomRow::from).collect());
    }

    if show(CatalogTable::Bulbs) {
        output.section("Bulb Types");
        output.table(BULB_TYPES.iter().map(BulbRow::from).collect());
    }

    if show(CatalogTable::Surfaces) {
        output.section("Surface Colors");
        output.table(SURFACE_COLORS.iter().map(SurfaceRow::from).collect());
    }

    if show(CatalogTable::Wattages) {
        output.section("Standard Wattages");
        let wattages: Vec<String> = STANDARD_WATTAGES.iter().map(|w| format!("{} W", w)).collect();
        println!("{}", wattages.join(", "));
    }

    Ok(())
}
