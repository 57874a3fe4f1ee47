use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum AppError {
    Fetch(String),
    Playlist(String),
    Player(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "FetchError: {}", e),
            Self::Playlist(e) => write!(f, "PlaylistError: {}", e),
            Self::Player(e) => write!(f, "PlayerError: {}", e),
        }
    }
}

impl std::error::Error for AppError {}
