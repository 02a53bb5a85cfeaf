use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "mac_change.log";
pub const DEFAULT_BACKUP_DIR: &str = ".";

pub struct Config {
    /// File that receives a copy of every log line shown on the console.
    ///
    /// Opened in append mode, never rotated.
    pub log_file: PathBuf,
    /// Directory holding the `<interface>_mac_backup.txt` records.
    pub backup_dir: PathBuf,
    /// Emit DEBUG events (commands being run, the final session report).
    pub verbose: bool,
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            backup_dir: PathBuf::from(DEFAULT_BACKUP_DIR),
            verbose: false,
            no_color: false,
        }
    }
}
