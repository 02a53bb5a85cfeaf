mod commands;
mod terminal;

use std::process::ExitCode;

use commands::CommandLine;
use macshift_common::config::Config;
use macshift_common::error::MacError;
use macshift_common::platform::Platform;
use macshift_core::backup::BackupStore;
use macshift_core::command::SystemRunner;
use macshift_core::platform;
use macshift_core::session::Session;
use terminal::logging::Logger;
use terminal::print;
use terminal::prompt::TerminalUi;
use tracing::{debug, error};

fn main() -> ExitCode {
    let cfg: Config = CommandLine::parse_args().into_config();

    if cfg.no_color {
        colored::control::set_override(false);
    }

    // Held until the end of `main` so the final error line still reaches the log file.
    let _logger = match Logger::init(&cfg) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    print::banner();

    match run(&cfg) {
        Ok(()) => {
            print::end_of_program();
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cfg: &Config) -> Result<(), MacError> {
    let driver = platform::driver_for(Platform::detect()?, SystemRunner);
    debug!("Detected platform: {}", driver.platform());
    let session = Session::new(driver, BackupStore::new(&cfg.backup_dir));

    let mut ui = TerminalUi::new();
    let report = session.run(&mut ui)?;
    debug!(?report, "Session finished");
    Ok(())
}
