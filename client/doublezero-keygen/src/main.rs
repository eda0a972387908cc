use clap::{error::ErrorKind, Parser};
use std::{io, path::PathBuf, process};

mod command;

use command::{display::OutputArgs, generate::GenerateCliCommand, load::LoadCliCommand};
use doublezero_keypair::read_keygen_config;

#[derive(Parser, Debug)]
#[command(term_width = 0)]
#[command(name = "doublezero-keygen")]
#[command(version = option_env!("BUILD_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")))]
#[command(about = "Create a new DoubleZero account keypair or inspect an existing one", long_about = None)]
#[command(after_help = "Examples:
  doublezero-keygen                    Create new keypair
  doublezero-keygen --save id.json     Create new keypair and save it to id.json
  doublezero-keygen <keypair.json>     Load keypair from file")]
struct App {
    /// Keypair file to load: a JSON array of 32 (seed) or 64 (keypair) bytes
    #[arg(value_name = "KEYPAIR_FILE")]
    keypair_file: Option<PathBuf>,
    #[command(flatten)]
    generate: GenerateCliCommand,
    #[command(flatten)]
    output: OutputArgs,
    /// Path to the keygen config file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,
}

/// Parse arguments, exiting with status 1 on misuse.
fn parse_app() -> App {
    match App::try_parse() {
        Ok(app) => app,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Exiting either way; a failed write to stderr has nowhere to go.
            let _ = e.print();
            process::exit(1);
        }
    }
}

fn run(app: App) -> eyre::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match app.keypair_file {
        Some(path) => LoadCliCommand { path }.execute(&app.output, &mut handle),
        None => {
            // The config only affects generation.
            let (config_file, config) = read_keygen_config(app.config.as_deref())?;
            if let Some(config_file) = config_file {
                log::debug!("using keygen config: {}", config_file.display());
            }

            let stdin = io::stdin();
            app.generate
                .execute(&config, &app.output, &mut stdin.lock(), &mut handle)
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app = parse_app();
    if let Err(e) = run(app) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
