//! Share command implementation

use crate::cli::ShareArgs;
use crate::output::OutputWriter;
use crate::output_types::ShareOutput;
use crate::storage::Workspace;
use anyhow::Result;
use luxcalc_core::config::CliConfigOverrides;
use luxcalc_core::share::{encode_query, share_url};

pub fn execute(args: ShareArgs, output: &OutputWriter, workspace: &Workspace) -> Result<()> {
    let mut config = workspace.load_config()?;
    config.update_from_cli(CliConfigOverrides {
        share_base_url: args.base_url,
        ..Default::default()
    });

    let state = workspace.load_state_or_default(&config)?;
    let share = ShareOutput {
        query: encode_query(&state),
        url: share_url(&config.share_base_url.value, &state),
    };

    if output.is_json() {
        output.result(share)?;
    } else {
        println!("{}", share.url);
    }

    Ok(())
}
