//! Integration tests for the luxcalc binary
//!
//! Every test runs against its own temporary workspace.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn luxcalc(workspace: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_luxcalc"))
        .arg("--workspace")
        .arg(workspace)
        .args(args)
        .env_remove("LUXCALC_WORK_SURFACE_HEIGHT")
        .env_remove("LUXCALC_TARGET_WATTAGE")
        .env_remove("LUXCALC_LAMPS_PER_FIXTURE")
        .env_remove("LUXCALC_SHARE_BASE_URL")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Output should be valid JSON")
}

#[test]
fn test_calculate_defaults_json() {
    let dir = TempDir::new().unwrap();
    let output = luxcalc(dir.path(), &["calculate", "--json"]);
    assert!(output.status.success(), "Command should succeed");

    let parsed = json(&output);
    assert_eq!(parsed["status"], "success");

    let result = &parsed["data"]["result"];
    assert_eq!(result["required_lumens"], 5810);
    assert_eq!(result["number_of_fixtures"], 6);
    assert_eq!(result["standard_wattage"], 9);
    assert_eq!(result["total_power"], 54);
    assert!(parsed["data"]["layout"].is_null());
}

#[test]
fn test_calculate_with_layout_and_overrides() {
    let dir = TempDir::new().unwrap();
    let output = luxcalc(
        dir.path(),
        &["calculate", "--room-type", "kitchen", "--length", "5", "--layout", "--json"],
    );
    assert!(output.status.success());

    let data = &json(&output)["data"];
    assert_eq!(data["state"]["room_type"], "kitchen");

    let fixtures = data["result"]["number_of_fixtures"].as_u64().unwrap();
    let positions = data["layout"]["positions"].as_array().unwrap();
    assert_eq!(positions.len() as u64, fixtures);
}

#[test]
fn test_calculate_rejects_unknown_room_type() {
    let dir = TempDir::new().unwrap();
    let output = luxcalc(dir.path(), &["calculate", "--room-type", "garage"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown room type: garage"));
    assert!(stderr.contains("luxcalc catalog rooms"));
}

#[test]
fn test_calculate_rejects_out_of_range() {
    let dir = TempDir::new().unwrap();
    let output = luxcalc(dir.path(), &["calculate", "--length", "40"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid length"));
}

#[test]
fn test_calculate_without_save_leaves_workspace_untouched() {
    let dir = TempDir::new().unwrap();
    let output = luxcalc(dir.path(), &["calculate", "--length", "6"]);

    assert!(output.status.success());
    assert!(!dir.path().join(".luxcalc").join("state.json").exists());
}

#[test]
fn test_save_show_reset_cycle() {
    let dir = TempDir::new().unwrap();

    let output = luxcalc(dir.path(), &["calculate", "--length", "6", "--save"]);
    assert!(output.status.success());
    assert!(dir.path().join(".luxcalc").join("state.json").exists());

    let shown = json(&luxcalc(dir.path(), &["state", "show", "--json"]));
    assert_eq!(shown["data"]["state"]["length"], 6.0);
    assert!(shown["data"]["saved_at"].is_string());

    let reset = json(&luxcalc(dir.path(), &["state", "reset", "--json"]));
    assert_eq!(reset["data"]["state"]["length"], 4.0);

    let shown = json(&luxcalc(dir.path(), &["state", "show", "--json"]));
    assert_eq!(shown["data"]["state"]["length"], 4.0);
}

#[test]
fn test_share_url_for_defaults() {
    let dir = TempDir::new().unwrap();
    let output = luxcalc(dir.path(), &["share", "--base-url", "https://lux.example/calc"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        "https://lux.example/calc?l=4&w=3&h=2.7&rt=living&bt=led-neutral"
    );
}

#[test]
fn test_import_then_share_round_trip() {
    let dir = TempDir::new().unwrap();
    let link = "http://localhost:5173/?l=5.5&w=4&h=3&rt=office&bt=led-cold";

    let output = luxcalc(dir.path(), &["state", "import", link]);
    assert!(output.status.success());

    let shared = json(&luxcalc(dir.path(), &["share", "--json"]));
    assert_eq!(shared["data"]["query"], "l=5.5&w=4&h=3&rt=office&bt=led-cold");
}

#[test]
fn test_calculate_from_share_url_flags_take_precedence() {
    let dir = TempDir::new().unwrap();
    let output = luxcalc(
        dir.path(),
        &["calculate", "--url", "l=8&w=6&rt=bedroom", "--width", "5", "--json"],
    );
    assert!(output.status.success());

    let state = &json(&output)["data"]["state"];
    assert_eq!(state["length"], 8.0);
    assert_eq!(state["width"], 5.0);
    assert_eq!(state["room_type"], "bedroom");
}

#[test]
fn test_config_file_seeds_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".luxcalc")).unwrap();
    std::fs::write(
        dir.path().join(".luxcalc").join("config.toml"),
        "target_wattage = 15\nshare_base_url = \"https://lux.example/\"\n",
    )
    .unwrap();

    let calculated = json(&luxcalc(dir.path(), &["calculate", "--json"]));
    assert_eq!(calculated["data"]["state"]["target_wattage"], 15);

    let config = json(&luxcalc(dir.path(), &["config", "--json"]));
    let entries = config["data"]["entries"].as_array().unwrap();
    let url = entries.iter().find(|e| e["key"] == "share_base_url").unwrap();
    assert_eq!(url["value"], "https://lux.example/");
    assert_eq!(url["source"], "File");
}

#[test]
fn test_catalog_single_table_json() {
    let dir = TempDir::new().unwrap();
    let parsed = json(&luxcalc(dir.path(), &["catalog", "bulbs", "--json"]));

    let bulbs = parsed["data"]["bulb_types"].as_array().unwrap();
    assert_eq!(bulbs.len(), 5);
    assert_eq!(bulbs[0]["id"], "led-warm");
    assert!(parsed["data"].get("room_types").is_none());
}

#[test]
fn test_layout_command_json() {
    let dir = TempDir::new().unwrap();
    let parsed = json(&luxcalc(
        dir.path(),
        &["layout", "--length", "4", "--width", "3", "--fixtures", "5", "--json"],
    ));

    let data = &parsed["data"];
    assert_eq!(data["layout"]["cols"], 3);
    assert_eq!(data["layout"]["rows"], 2);
    assert_eq!(data["empty_cells"], 1);
    assert_eq!(data["layout"]["positions"].as_array().unwrap().len(), 5);
}

#[test]
fn test_layout_rejects_room_narrower_than_margins() {
    let dir = TempDir::new().unwrap();
    let output = luxcalc(dir.path(), &["layout", "--length", "0.2", "--width", "0.2", "-n", "4"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid length"));
}

#[test]
fn test_layout_rejects_oversized_grid() {
    let dir = TempDir::new().unwrap();
    let output =
        luxcalc(dir.path(), &["layout", "--length", "4", "--width", "3", "-n", "4294967295"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid fixtures"));
}

#[test]
fn test_json_mode_keeps_stdout_to_one_document() {
    let dir = TempDir::new().unwrap();

    let output = luxcalc(dir.path(), &["calculate", "--url", "utm_source=mail", "--json"]);
    assert!(output.status.success());
    assert_eq!(json(&output)["data"]["state"]["length"], 4.0);

    let stderr = String::from_utf8_lossy(&output.stderr);
    let warning: serde_json::Value = serde_json::from_str(stderr.trim()).unwrap();
    assert_eq!(warning["status"], "warning");

    let output = luxcalc(dir.path(), &["state", "reset", "--json"]);
    assert_eq!(json(&output)["status"], "success");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("reset to defaults"));
}
