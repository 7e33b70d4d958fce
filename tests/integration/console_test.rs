//! Console loop integration tests.

use std::io::Write;

use verbsh::commands::handlers::{builtin_catalog, register_builtins, ConsoleContext, Handler};
use verbsh::commands::{Catalog, CommandOutput, CommandSpec, OutputFormat, Token};
use verbsh::config::Config;
use verbsh::console::{Console, COMMAND_NOT_FOUND};
use verbsh::error::Result;

fn handle_start_oracle(_ctx: &ConsoleContext<'_>, args: &[Token]) -> Result<CommandOutput> {
    Ok(CommandOutput::info(format!("oracle started ({} args)", args.len())))
}

fn run_script(
    config: &Config,
    catalog: &Catalog<Handler>,
    format: OutputFormat,
    script: &str,
) -> String {
    let console = Console::new(catalog, config, format);
    let mut out = Vec::new();
    console.run(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn quiet_config() -> Config {
    let mut config = Config::default();
    config.console.show_prompt = false;
    config
}

#[test]
fn test_script_with_custom_command() {
    let catalog = register_builtins(Catalog::builder())
        .register(
            CommandSpec::new("start oracle", handle_start_oracle as Handler)
                .category("Oracle Commands"),
        )
        .build()
        .unwrap();

    let out = run_script(
        &quiet_config(),
        &catalog,
        OutputFormat::Text,
        "start oracle\n\"start oracle\"   fast\nstop oracle\n",
    );

    assert_eq!(
        out,
        format!(
            "oracle started (0 args)\noracle started (1 args)\nerror: {}\n",
            COMMAND_NOT_FOUND
        )
    );
}

#[test]
fn test_json_output() {
    let catalog = builtin_catalog().unwrap();
    let out = run_script(
        &quiet_config(),
        &catalog,
        OutputFormat::Json,
        "echo hi\nbogus\nexit\n",
    );

    let records: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["output"]["value"], "hi");
    assert_eq!(records[1]["output"]["type"], "error");
    assert_eq!(records[2]["input"], "exit");
    assert_eq!(records[2]["output"]["type"], "exit");
}

#[test]
fn test_echo_with_json_output_stays_json() {
    let catalog = builtin_catalog().unwrap();
    let mut config = quiet_config();
    config.console.echo = true;

    let out = run_script(&config, &catalog, OutputFormat::Json, "  echo hi\nexit\n");

    let records: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["input"], "  echo hi");
    assert_eq!(records[0]["echo"], "echo hi");
    assert_eq!(records[0]["output"]["value"], "hi");
    assert_eq!(records[1]["echo"], "exit");
}

#[test]
fn test_config_file_drives_console() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[console]\nprompt = \"node> \"\nresolution = \"first\"").unwrap();
    let config = Config::load_from_file(file.path()).unwrap();

    let catalog = Catalog::builder()
        .register(CommandSpec::new("show", handle_start_oracle as Handler))
        .register(CommandSpec::new("show tokens", handle_start_oracle as Handler))
        .build()
        .unwrap();

    let out = run_script(&config, &catalog, OutputFormat::Text, "show tokens x\n");
    assert_eq!(out, "node> oracle started (3 args)\nnode> ");
}

#[test]
fn test_help_lists_registered_categories() {
    let catalog = register_builtins(Catalog::builder())
        .register(
            CommandSpec::new("start oracle", handle_start_oracle as Handler)
                .category("Oracle Commands")
                .description("Start the oracle service"),
        )
        .build()
        .unwrap();

    let out = run_script(&quiet_config(), &catalog, OutputFormat::Text, "help start\n");
    assert_eq!(
        out,
        "Oracle Commands:\n  start oracle     - Start the oracle service\n"
    );
}
