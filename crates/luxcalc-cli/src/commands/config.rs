//! Config command implementation

use crate::cli::ConfigArgs;
use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput};
use crate::storage::Workspace;
use anyhow::Result;
use luxcalc_core::config::CliConfigOverrides;

pub fn execute(args: ConfigArgs, output: &OutputWriter, workspace: &Workspace) -> Result<()> {
    let mut config = workspace.load_config()?;
    config.update_from_cli(CliConfigOverrides {
        share_base_url: args.share_base_url,
        ..Default::default()
    });

    let mut entries: Vec<ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigEntry { key, value, source })
        .collect();
    entries.sort_by(|a, b| a.key.cmp(&b.key));

    if output.is_json() {
        output.result(ConfigOutput { entries })?;
        return Ok(());
    }

    output.section("Effective Configuration");
    output.kv("Config File", workspace.config_path().display());
    println!();
    output.table(entries);

    Ok(())
}
