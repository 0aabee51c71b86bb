//! State command implementation

use crate::cli::{StateArgs, StateCommand};
use crate::output::OutputWriter;
use crate::output_types::StateOutput;
use crate::storage::Workspace;
use anyhow::Result;
use luxcalc_core::models::CalculatorState;
use luxcalc_core::share::decode_query;

pub fn execute(args: StateArgs, output: &OutputWriter, workspace: &Workspace) -> Result<()> {
    let config = workspace.load_config()?;

    match args.command {
        StateCommand::Show => {
            let saved = workspace.load_saved()?;
            let (state, saved_at) = match saved {
                Some(saved) => (saved.state, Some(saved.saved_at)),
                None => (config.default_state(), None),
            };
            render(output, workspace, state, saved_at)
        }
        StateCommand::Reset => {
            let saved = workspace.save_state(&config.default_state())?;
            output.success("Calculator state reset to defaults");
            render(output, workspace, saved.state, Some(saved.saved_at))
        }
        StateCommand::Import(import) => {
            let query = decode_query(&import.url)?;
            let mut state = workspace.load_state_or_default(&config)?;
            state.apply_share(&query);
            state.validate()?;

            let saved = workspace.save_state(&state)?;
            output.success("Imported share link into the saved state");
            render(output, workspace, saved.state, Some(saved.saved_at))
        }
    }
}

fn render(
    output: &OutputWriter,
    workspace: &Workspace,
    state: CalculatorState,
    saved_at: Option<chrono::DateTime<chrono::Utc>>,
) -> Result<()> {
    if output.is_json() {
        output.result(StateOutput {
            state,
            saved_at,
            path: workspace.state_path().display().to_string(),
        })?;
        return Ok(());
    }

    output.section("Calculator State");
    output.kv("Length", format!("{} m", state.length));
    output.kv("Width", format!("{} m", state.width));
    output.kv("Ceiling Height", format!("{} m", state.ceiling_height));
    output.kv("Work Surface Height", format!("{} m", state.work_surface_height));
    output.kv("Room Type", state.room_type);
    output.kv("Bulb Type", state.bulb_type);
    output.kv("Target Wattage", format!("{} W", state.target_wattage));
    output.kv("Ceiling Color", state.ceiling_color);
    output.kv("Wall Color", state.wall_color);
    output.kv("Floor Color", state.floor_color);

    match saved_at {
        Some(at) => output.kv("Saved At", at.format("%Y-%m-%d %H:%M:%S UTC")),
        None => output.info("No saved state yet; showing defaults"),
    }

    Ok(())
}
