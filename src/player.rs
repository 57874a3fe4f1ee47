use anyhow::{Result, anyhow, bail};
use std::{
    env,
    path::PathBuf,
    process::{Command, Stdio},
};

use crate::{config::PlayerConfig, constants, error::AppError};

/// Launches the external media player as a blocking subprocess.
/// Discovery is done per launch so an unavailable player
/// only warns instead of killing the session.
pub struct Player {
    command: Option<String>,
}

impl Player {
    pub fn new(config: PlayerConfig) -> Self {
        let PlayerConfig { command } = config;
        Self { command }
    }

    fn resolve(&self) -> Result<PathBuf> {
        match &self.command {
            Some(command) => Ok(PathBuf::from(command)),
            None => find_player().ok_or(anyhow!(AppError::Player(format!(
                "no media player found (tried {})",
                constants::DEFAULT_PLAYERS.join(", ")
            )))),
        }
    }

    /// Plays `url`, blocking until the player exits.
    pub fn play(&self, url: &str) -> Result<()> {
        let command = self.resolve()?;
        log::info!("launching `{}` with `{}`", command.display(), url);
        let status = Command::new(&command)
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| {
                anyhow!(AppError::Player(format!(
                    "failed to start `{}`: {}",
                    command.display(),
                    e
                )))
            })?;
        if !status.success() {
            bail!(AppError::Player(format!(
                "`{}` exited with {}",
                command.display(),
                status
            )));
        }

        Ok(())
    }
}

fn find_in_path(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|path| path.is_file())
}

fn well_known_paths() -> &'static [&'static str] {
    if cfg!(target_os = "windows") {
        &[
            r"C:\Program Files\VideoLAN\VLC\vlc.exe",
            r"C:\Program Files (x86)\VideoLAN\VLC\vlc.exe",
        ]
    } else if cfg!(target_os = "macos") {
        &["/Applications/VLC.app/Contents/MacOS/VLC"]
    } else {
        &[
            "/usr/bin/vlc",
            "/usr/local/bin/vlc",
            "/usr/bin/mpv",
            "/usr/local/bin/mpv",
        ]
    }
}

fn find_player() -> Option<PathBuf> {
    for candidate in constants::DEFAULT_PLAYERS {
        if let Some(path) = find_in_path(candidate) {
            return Some(path);
        }
    }
    well_known_paths()
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nonexistent_binary_is_player_error() {
        let player = Player::new(PlayerConfig {
            command: Some("/tmp/zapper-no-such-player".into()),
        });
        let res = player.play("http://example.com/a.m3u8");
        assert!(res.is_err());
        assert!(res.unwrap_err().to_string().contains("failed to start"));
    }

    #[test]
    fn nonzero_exit_is_player_error() {
        let player = Player::new(PlayerConfig {
            command: Some("/bin/false".into()),
        });
        let res = player.play("http://example.com/a.m3u8");
        assert!(res.is_err());
        assert!(res.unwrap_err().to_string().contains("exited with"));
    }

    #[test]
    fn configured_command_wins_over_discovery() {
        let player = Player::new(PlayerConfig {
            command: Some("my-player".into()),
        });
        assert_eq!(player.resolve().unwrap(), PathBuf::from("my-player"));
    }
}
