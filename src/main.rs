//! pheno-check CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pheno_check::cli::{run_checks, Cli};
use pheno_check::ui::{create_ui, should_use_colors};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for configuration errors, before any check ran.
const EXIT_CONFIG_ERROR: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so logs stay out of the report
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pheno_check=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pheno_check=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pheno-check starting with args: {:?}", cli);

    let colors = !cli.no_color && should_use_colors();
    let mut ui = create_ui(cli.output_mode(), colors);

    match run_checks(&cli, ui.as_mut()) {
        Ok(report) => {
            if cli.json {
                match report.to_json() {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        ui.error(&format!("Error: {}", e));
                        return ExitCode::from(1);
                    }
                }
            }
            ExitCode::from(report.exit_code() as u8)
        }
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}
