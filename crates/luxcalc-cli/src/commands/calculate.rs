//! Calculate command implementation

use crate::cli::CalculateArgs;
use crate::output::OutputWriter;
use crate::output_types::{CalculateOutput, ExplainStep, PositionRow};
use crate::storage::Workspace;
use anyhow::Result;
use luxcalc_core::config::{parse_lamps_per_fixture, CliConfigOverrides};
use luxcalc_core::engine::{self, FIXTURE_DROP, MAINTENANCE_FACTOR, UNIFORMITY_FACTOR};
use luxcalc_core::models::{CalculationResult, CalculatorState};
use luxcalc_core::share::decode_query;
use luxcalc_core::{optimal_fixture_layout, perform_full_calculation};

pub fn execute(args: CalculateArgs, output: &OutputWriter, workspace: &Workspace) -> Result<()> {
    let mut config = workspace.load_config()?;
    config.update_from_cli(CliConfigOverrides {
        lamps_per_fixture: args.lamps_per_fixture,
        ..Default::default()
    });
    let lamps_per_fixture = parse_lamps_per_fixture(config.lamps_per_fixture.value)?;

    let mut state = if args.fresh {
        config.default_state()
    } else {
        workspace.load_state_or_default(&config)?
    };

    // Share link first, explicit flags win over it
    if let Some(ref url) = args.url {
        let query = decode_query(url)?;
        if query.is_empty() {
            output.warning("Share link carried no calculator parameters");
        }
        state.apply_share(&query);
    }
    apply_overrides(&mut state, &args)?;
    state.validate()?;

    let result = perform_full_calculation(&state.to_input());
    let recommendation = result.recommendation(state.bulb_type);

    let layout = args
        .layout
        .then(|| optimal_fixture_layout(state.length, state.width, result.number_of_fixtures));
    let steps = args.explain.then(|| explain_steps(&state, &result));
    let lamp_plan = (lamps_per_fixture > 1).then(|| {
        engine::lamp_plan(&state.to_input(), result.required_lumens, lamps_per_fixture)
    });

    if args.save {
        workspace.save_state(&state)?;
    }

    if output.is_json() {
        output.result(CalculateOutput {
            state,
            result,
            recommendation,
            layout,
            steps,
            lamp_plan,
            saved: args.save,
        })?;
        return Ok(());
    }

    output.section("Room");
    output.kv(
        "Dimensions",
        format!(
            "{} × {} m, ceiling {} m, work surface {} m",
            state.length, state.width, state.ceiling_height, state.work_surface_height
        ),
    );
    output.kv(
        "Room Type",
        format!("{} ({} lx)", state.room_type.entry().name, state.room_type.lux()),
    );
    output.kv(
        "Bulb",
        format!("{}, target {} W", state.bulb_type.entry().name, state.target_wattage),
    );
    output.kv(
        "Surfaces",
        format!(
            "ceiling {}, walls {}, floor {}",
            state.ceiling_color, state.wall_color, state.floor_color
        ),
    );

    output.section("Result");
    output.kv("Area", format!("{:.2} m²", result.area));
    output.kv("Required Flux", format!("{} lm", result.required_lumens));
    output.kv("Fixtures", result.number_of_fixtures);
    output.kv("Bulb Wattage", format!("{} W", result.standard_wattage));
    output.kv("Total Power", format!("{} W", result.total_power));

    if let Some(plan) = lamp_plan {
        output.kv(
            "With Multi-Lamp Fixtures",
            format!(
                "{} fixtures × {} lamps ({} lamps)",
                plan.fixtures, plan.lamps_per_fixture, plan.total_lamps
            ),
        );
    }

    if let Some(steps) = steps {
        output.section("Calculation Steps");
        output.table(steps);
    }

    if let Some(layout) = layout {
        output.section(format!("Layout ({} rows × {} cols)", layout.rows, layout.cols));
        output.table(PositionRow::from_layout(&layout));
    }

    println!();
    output.success(recommendation);
    if args.save {
        output.info(format!("State saved to {}", workspace.state_path().display()));
    }

    Ok(())
}

/// Overlay explicit flags onto the state; identifiers are checked against the tables
fn apply_overrides(state: &mut CalculatorState, args: &CalculateArgs) -> Result<()> {
    if let Some(length) = args.length {
        state.length = length;
    }
    if let Some(width) = args.width {
        state.width = width;
    }
    if let Some(ceiling_height) = args.ceiling_height {
        state.ceiling_height = ceiling_height;
    }
    if let Some(work_surface_height) = args.work_surface_height {
        state.work_surface_height = work_surface_height;
    }
    if let Some(ref room_type) = args.room_type {
        state.room_type = room_type.parse()?;
    }
    if let Some(ref bulb_type) = args.bulb_type {
        state.bulb_type = bulb_type.parse()?;
    }
    if let Some(target_wattage) = args.target_wattage {
        state.target_wattage = target_wattage;
    }
    if let Some(ref color) = args.ceiling_color {
        state.ceiling_color = color.parse()?;
    }
    if let Some(ref color) = args.wall_color {
        state.wall_color = color.parse()?;
    }
    if let Some(ref color) = args.floor_color {
        state.floor_color = color.parse()?;
    }
    Ok(())
}

fn explain_steps(state: &CalculatorState, result: &CalculationResult) -> Vec<ExplainStep> {
    let reflectances = state.reflectances();
    let lux = state.room_type.lux();
    let efficacy = state.bulb_type.lumens_per_watt();
    let bulb_lumens = engine::bulb_lumens(state.bulb_type, f64::from(state.target_wattage));

    let step = |step: &str, formula: String, value: String| ExplainStep {
        step: step.to_string(),
        formula,
        value,
    };

    vec![
        step(
            "Area",
            format!("{} × {}", state.length, state.width),
            format!("{:.2} m²", result.area),
        ),
        step(
            "Mounting height",
            format!(
                "{} − {} − {}",
                state.ceiling_height, state.work_surface_height, FIXTURE_DROP
            ),
            format!("{:.2} m", result.mounting_height),
        ),
        step(
            "Room index",
            format!(
                "{:.2} / ({:.2} × ({} + {}))",
                result.area, result.mounting_height, state.length, state.width
            ),
            format!("{:.3}", result.room_index),
        ),
        step(
            "Utilization factor",
            format!(
                "reflectances {}/{}/{}, index {:.3}",
                reflectances.ceiling, reflectances.wall, reflectances.floor, result.room_index
            ),
            format!("{:.3}", result.utilization_factor),
        ),
        step(
            "Required flux",
            format!(
                "{} × {:.2} × {} × {} / {:.3}",
                lux, result.area, MAINTENANCE_FACTOR, UNIFORMITY_FACTOR, result.utilization_factor
            ),
            format!("{} lm", result.required_lumens),
        ),
        step(
            "Bulb flux",
            format!("{} W × {} lm/W", state.target_wattage, efficacy),
            format!("{} lm", bulb_lumens),
        ),
        step(
            "Fixtures",
            format!("⌈{} / {}⌉", result.required_lumens, bulb_lumens),
            result.number_of_fixtures.to_string(),
        ),
        step(
            "Bulb wattage",
            format!("{} / {} / {}", result.required_lumens, result.number_of_fixtures, efficacy),
            format!("{} W", result.bulb_wattage),
        ),
        step(
            "Standard wattage",
            format!("nearest standard ≥ {} W", result.bulb_wattage),
            format!("{} W", result.standard_wattage),
        ),
        step(
            "Total power",
            format!("{} W × {}", result.standard_wattage, result.number_of_fixtures),
            format!("{} W", result.total_power),
        ),
    ]
}
