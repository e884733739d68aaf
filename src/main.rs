//! main.rs
//! Entry point for rmtk

use rmtk::app::{AppState, Navigator};
use rmtk::config::Config;
use rmtk::core::error::{EXIT_FAILURE, EXIT_OK, Error};
use rmtk::core::terminal::{self, LoopExit};
use rmtk::core::viewer::{self, ExternalViewer};
use rmtk::utils::cli::Cli;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|info| {
        terminal::restore_terminal();

        eprintln!("\n[rmtk] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let cli = Cli::parse();
    init_logging();

    if cli.init {
        return match Config::generate_default(&cli.config_path()) {
            Ok(()) => ExitCode::from(EXIT_OK),
            Err(e) => {
                eprintln!("[rmtk] Error: {}", e);
                ExitCode::from(EXIT_FAILURE)
            }
        };
    }

    let config = Config::load(cli.config.as_deref());

    let code = match browse(&cli, &config) {
        Ok(LoopExit::Quit) => EXIT_OK,
        Ok(LoopExit::Handoff(path)) => {
            let launcher = ExternalViewer::from_config(config.viewer());
            viewer::hand_off(&launcher, &path)
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("[rmtk] Error: {}", e);
            EXIT_FAILURE
        }
    };
    ExitCode::from(code)
}

/// Lists the startup directory and runs the browser until quit or handoff.
fn browse(cli: &Cli, config: &Config) -> Result<LoopExit, Error> {
    let start = startup_path(cli, config);
    log::info!("rmtk starting in {:?}", start);

    let mut app = AppState::new(Navigator::open(&start)?);
    terminal::run_terminal(&mut app)
}

/// CLI argument, then the configured default path, then the working directory.
fn startup_path(cli: &Cli, config: &Config) -> PathBuf {
    if let Some(path) = &cli.path {
        return path.clone();
    }
    if let Some(path) = config.general().default_path() {
        return path;
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Logs go to the file named by `RMTK_LOG`, never to the terminal.
fn init_logging() {
    let Some(path) = std::env::var_os("RMTK_LOG") else {
        return;
    };

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = OpenOptions::new().create(true).append(true).open(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}
