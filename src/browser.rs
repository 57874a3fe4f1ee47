use anyhow::Result;
use std::io::{self, Write};

use crate::{
    model::{action::Action, channel::Channel, playlist::Playlist},
    player::Player,
};

/// The interactive session: owns the playlist and the player handle,
/// renders menus on stdout and reads selections from stdin.
pub struct Browser {
    playlist: Playlist,
    player: Player,
}

impl Browser {
    pub fn new(playlist: Playlist, player: Player) -> Self {
        Self { playlist, player }
    }

    pub fn run(&self) -> Result<()> {
        loop {
            println!();
            println!("zapper — {} channels", self.playlist.len());
            println!("[1] all channels");
            println!("[2] browse by group");
            println!("[3] search");
            println!("[4] quit");
            let input = prompt("choose an option")?;
            let quit = match input.as_str() {
                "1" => {
                    let channels: Vec<_> = self.playlist.channels().iter().collect();
                    self.browse(&channels)? == Action::Quit
                }
                "2" => self.browse_groups()? == Action::Quit,
                "3" => self.search_menu()? == Action::Quit,
                "4" | "q" | "Q" => true,
                other => {
                    println!("invalid option `{}`", other);
                    false
                }
            };
            if quit {
                log::info!("session over");
                break Ok(());
            }
        }
    }

    // returns Back when the submenu is left normally, Quit to end the session
    fn browse(&self, channels: &[&Channel]) -> Result<Action> {
        if channels.is_empty() {
            println!("no channels to show");
            return Ok(Action::Back);
        }
        loop {
            self.display(channels);
            let input = prompt("channel number to play, `b` for back")?;
            match Action::from(input.as_str()) {
                Action::Select(i) => match channels.get(i) {
                    Some(channel) => self.play(channel),
                    None => println!("invalid channel number `{}`", input),
                },
                Action::Back => break Ok(Action::Back),
                Action::Quit => break Ok(Action::Quit),
                Action::Invalid => println!("invalid input `{}`", input),
            }
        }
    }

    fn browse_groups(&self) -> Result<Action> {
        let groups = self.playlist.grouped();
        loop {
            println!();
            for (i, (name, channels)) in groups.iter().enumerate() {
                println!("[{}] {} ({} channels)", i + 1, name, channels.len());
            }
            let input = prompt("group number, `b` for back")?;
            match Action::from(input.as_str()) {
                Action::Select(i) => match groups.get(i) {
                    Some((_, channels)) => {
                        if self.browse(channels)? == Action::Quit {
                            break Ok(Action::Quit);
                        }
                    }
                    None => println!("invalid group number `{}`", input),
                },
                Action::Back => break Ok(Action::Back),
                Action::Quit => break Ok(Action::Quit),
                Action::Invalid => println!("invalid input `{}`", input),
            }
        }
    }

    fn search_menu(&self) -> Result<Action> {
        loop {
            let query = prompt("search term (`b` for back)")?;
            match query.as_str() {
                "b" | "B" => break Ok(Action::Back),
                "q" | "Q" => break Ok(Action::Quit),
                "" => continue,
                query => {
                    let results = self.playlist.search(query);
                    if results.is_empty() {
                        println!("no channels found");
                    } else if self.browse(&results)? == Action::Quit {
                        break Ok(Action::Quit);
                    }
                }
            }
        }
    }

    fn play(&self, channel: &Channel) {
        println!("playing `{}`...", channel.name);
        if let Err(e) = self.player.play(&channel.url) {
            log::warn!("{}", e);
            println!("warning: {}", e);
        }
    }

    fn display(&self, channels: &[&Channel]) {
        println!();
        println!("{:>4}  {:<40} {:<20} {}", "#", "name", "group", "language");
        for (i, channel) in channels.iter().enumerate() {
            println!(
                "{:>4}  {:<40} {:<20} {}",
                i + 1,
                channel.name,
                channel.group_name(),
                channel.language.as_deref().unwrap_or("-"),
            );
        }
    }
}

/// Prints `msg`, then reads one trimmed line from stdin.
/// EOF counts as quitting.
pub fn prompt(msg: &str) -> Result<String> {
    print!("{}: ", msg);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok("q".into());
    }

    Ok(line.trim().to_string())
}
