use std::path::PathBuf;

use clap::Parser;
use macshift_common::config::{Config, DEFAULT_BACKUP_DIR, DEFAULT_LOG_FILE};

#[derive(Parser, Debug)]
#[command(name = "macshift")]
#[command(version)]
#[command(about = "Change a network interface's MAC address, with backup and restore.")]
pub struct CommandLine {
    /// Append every log line to this file as well as the console
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Directory for the <interface>_mac_backup.txt files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_BACKUP_DIR)]
    pub backup_dir: PathBuf,

    /// Also log commands being run and the session summary
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        Config {
            log_file: self.log_file,
            backup_dir: self.backup_dir,
            verbose: self.verbose,
            no_color: self.no_color,
        }
    }
}
