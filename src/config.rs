use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_REFRESH_RATE_MS: u64 = 2000;

#[derive(Debug, Clone)]
pub struct Config {
    pub refresh_rate_ms: u64,
    /// Filesystem whose usage is shown on the Disk line.
    pub disk_path: PathBuf,
    pub monochrome: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            refresh_rate_ms: DEFAULT_REFRESH_RATE_MS,
            disk_path: PathBuf::from("/"),
            monochrome: false,
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.refresh_rate_ms)
    }
}
