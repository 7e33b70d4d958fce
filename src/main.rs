//! verbsh - console command tokenizer and multi-word verb dispatcher.

mod cli;

use std::fs::File;
use std::io::{self, BufReader};

use cli::Cli;
use tracing::{error, info};
use verbsh::commands::handlers::builtin_catalog;
use verbsh::config::Config;
use verbsh::console::Console;
use verbsh::error::{ConsoleError, Result};
use verbsh::logging;

fn main() {
    let cli = Cli::parse_args();

    if cli.is_interactive() {
        logging::init_file_logging();
    } else {
        logging::init_stderr_logging();
    }

    if let Err(e) = run(&cli) {
        error!("{}: {}", e.category(), e);
        eprintln!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let mut config = Config::load_from_file(&config_path)?;

    // Precedence: CLI flags, then environment, then config file.
    config.console.apply_env_overrides();
    cli.apply_overrides(&mut config.console);

    let catalog = builtin_catalog()?;
    let console = Console::new(&catalog, &config, cli.output_format()?);
    let mut stdout = io::stdout().lock();

    let executed = match (&cli.command, cli.script.as_deref()) {
        (Some(line), _) => console.run(line.as_bytes(), &mut stdout)?,
        (None, Some("-")) => console.run(io::stdin().lock(), &mut stdout)?,
        (None, Some(path)) => {
            let file = File::open(path).map_err(|e| {
                ConsoleError::config(format!("Failed to open script {path}: {e}"))
            })?;
            console.run(BufReader::new(file), &mut stdout)?
        }
        (None, None) => console.run(io::stdin().lock(), &mut stdout)?,
    };

    info!("Console finished after {} lines", executed);
    Ok(())
}
