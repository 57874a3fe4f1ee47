pub const DEFAULT_CONFIG_DIR: &str = "zapper";
pub const DEFAULT_CONFIG_FILE: &str = "zapper.toml";
pub const DEFAULT_LOG_FILE: &str = "zapper.log";
pub const DEFAULT_PLAYERS: [&str; 2] = ["vlc", "mpv"];
pub const FETCH_TIMEOUT_SECS: u64 = 10;
pub const UNGROUPED: &str = "Ungrouped";
pub const FUZZY_THRESHOLD: f64 = 0.8;
