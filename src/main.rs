use anyhow::{Result, bail};
use clap::Parser;
use std::process::ExitCode;

use crate::{
    browser::Browser,
    config::{CliOptions, Config},
    error::AppError,
    model::playlist::Playlist,
    player::Player,
};

mod browser;
mod config;
mod constants;
mod error;
mod fetcher;
mod player;

mod model;
mod parsers;

fn load_playlist(source: &str) -> Result<Playlist> {
    let raw = fetcher::fetch(source)?;
    let channels = parsers::m3u::parse(&raw);
    if channels.is_empty() {
        bail!(AppError::Playlist("no channels found in playlist".into()));
    }
    log::info!("parsed {} channels from `{}`", channels.len(), source);

    Ok(Playlist::new(channels))
}

// returns None when the user quits at the prompt
fn prompt_for_playlist() -> Result<Option<Playlist>> {
    loop {
        let source = browser::prompt("M3U playlist URL (`q` to quit)")?;
        match source.as_str() {
            "q" | "Q" => return Ok(None),
            "" => continue,
            source => match load_playlist(source) {
                Ok(playlist) => return Ok(Some(playlist)),
                Err(e) => {
                    log::error!("{}", e);
                    println!("error: {}", e);
                }
            },
        }
    }
}

fn run(cli_options: CliOptions) -> Result<()> {
    let config =
        Config::try_from_file(cli_options.config_file.as_deref())?.merge_with_cli(cli_options);
    let Config {
        session_config,
        player_config,
    } = config;

    // a source given up front must work; the interactive prompt may retry
    let playlist = match session_config.url {
        Some(source) => load_playlist(&source)?,
        None => match prompt_for_playlist()? {
            Some(playlist) => playlist,
            None => return Ok(()),
        },
    };
    println!("loaded {} channels", playlist.len());

    let player = Player::new(player_config);
    let browser = Browser::new(playlist, player);

    browser.run()
}

fn init_logging(cli_options: &CliOptions) {
    if cli_options.log_stderr {
        simple_logging::log_to_stderr(log::LevelFilter::Info);
        return;
    }
    let log_file = cli_options.log_file.clone().unwrap_or_else(|| {
        dirs::cache_dir()
            .unwrap_or(".".into())
            .join(constants::DEFAULT_LOG_FILE)
    });
    let _ = simple_logging::log_to_file(log_file, log::LevelFilter::Info);
}

fn main() -> ExitCode {
    let cli_options = CliOptions::parse();
    init_logging(&cli_options);
    log::info!("session started");
    if let Err(e) = run(cli_options) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
