use anyhow::Result;
use clap::Parser;
use std::{
    fs,
    path::{Path, PathBuf},
};
use toml::{Table, Value};

use crate::constants;

#[derive(Debug, Parser)]
#[command(version, about, author, long_about = None)]
pub struct CliOptions {
    /// URL or local path of the M3U playlist (default: prompt interactively).
    #[arg(short = 'u', long = "url")]
    pub url: Option<String>,

    /// Command used to launch the media player
    /// (default: the first of `vlc`, `mpv` found on the system).
    #[arg(short = 'p', long = "player")]
    pub player: Option<String>,

    /// Path to the config file (default: <config_dir>/zapper/zapper.toml).
    #[arg(short = 'c', long = "config")]
    pub config_file: Option<PathBuf>,

    /// Path to the log file (default: <cache_dir>/zapper.log).
    #[arg(short = 'l', long = "log")]
    pub log_file: Option<PathBuf>,

    /// Print logs to stderr instead of the log file (default: false).
    #[arg(long = "stderr")]
    pub log_stderr: bool,
}

#[derive(Debug, Default)]
pub struct SessionConfig {
    pub url: Option<String>,
}

#[derive(Debug, Default)]
pub struct PlayerConfig {
    pub command: Option<String>,
}

#[derive(Debug, Default)]
pub struct Config {
    pub session_config: SessionConfig,
    pub player_config: PlayerConfig,
}

impl SessionConfig {
    pub fn try_new(content: impl AsRef<str>) -> Result<Self> {
        let mut config = Self::default();
        let table = content.as_ref().parse::<Table>()?;
        for (key, val) in table {
            if let ("url", Value::String(url)) = (key.as_str(), val) {
                config.url = Some(url);
            }
        }

        Ok(config)
    }
}

impl PlayerConfig {
    pub fn try_new(content: impl AsRef<str>) -> Result<Self> {
        let mut config = Self::default();
        let table = content.as_ref().parse::<Table>()?;
        for (key, val) in table {
            if let ("player", Value::String(command)) = (key.as_str(), val) {
                config.command = Some(command);
            }
        }

        Ok(config)
    }
}

impl Config {
    pub fn try_from_file(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                // a missing default config file is not an error
                let Some(config_dir) = dirs::config_dir() else {
                    return Ok(Self::default());
                };
                let default_path = config_dir
                    .join(constants::DEFAULT_CONFIG_DIR)
                    .join(constants::DEFAULT_CONFIG_FILE);
                if !default_path.is_file() {
                    return Ok(Self::default());
                }
                default_path
            }
        };
        let content = fs::read_to_string(path)?;
        let session_config = SessionConfig::try_new(&content)?;
        let player_config = PlayerConfig::try_new(&content)?;

        Ok(Self {
            session_config,
            player_config,
        })
    }

    pub fn merge_with_cli(self, cli_opts: CliOptions) -> Self {
        let session_config = SessionConfig {
            url: cli_opts.url.or(self.session_config.url),
        };
        let player_config = PlayerConfig {
            command: cli_opts.player.or(self.player_config.command),
        };

        Self {
            session_config,
            player_config,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn config_from_toml() {
        let content = r#"
url = "http://example.com/list.m3u"
player = "mpv"
"#;
        let session_config = SessionConfig::try_new(content).unwrap();
        let player_config = PlayerConfig::try_new(content).unwrap();
        assert_eq!(
            session_config.url.as_deref(),
            Some("http://example.com/list.m3u")
        );
        assert_eq!(player_config.command.as_deref(), Some("mpv"));
    }

    #[test]
    fn unknown_keys_ignored() {
        let content = "volume = 50\nurl = \"file.m3u\"\n";
        let session_config = SessionConfig::try_new(content).unwrap();
        assert_eq!(session_config.url.as_deref(), Some("file.m3u"));
        let player_config = PlayerConfig::try_new(content).unwrap();
        assert!(player_config.command.is_none());
    }

    #[test]
    fn cli_wins_over_file() {
        let config = Config {
            session_config: SessionConfig {
                url: Some("from-file.m3u".into()),
            },
            player_config: PlayerConfig {
                command: Some("vlc".into()),
            },
        };
        let cli_opts = CliOptions {
            url: Some("from-cli.m3u".into()),
            player: None,
            config_file: None,
            log_file: None,
            log_stderr: false,
        };
        let merged = config.merge_with_cli(cli_opts);
        assert_eq!(merged.session_config.url.as_deref(), Some("from-cli.m3u"));
        assert_eq!(merged.player_config.command.as_deref(), Some("vlc"));
    }
}
