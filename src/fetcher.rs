use anyhow::{Result, anyhow, bail};
use std::{fs, time::Duration};
use url::Url;

use crate::{constants, error::AppError};

pub fn looks_like_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn validate_url(source: &str) -> Result<Url> {
    let url = Url::parse(source).map_err(|e| anyhow!(AppError::Fetch(e.to_string())))?;
    if !url.has_host() {
        bail!(AppError::Fetch(format!("`{}` has no host", source)));
    }

    Ok(url)
}

fn fetch_remote(source: &str) -> Result<String> {
    let url = validate_url(source)?;
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(constants::FETCH_TIMEOUT_SECS))
        .build()?;
    let response = client
        .get(url)
        .send()
        .map_err(|e| anyhow!(AppError::Fetch(e.to_string())))?;
    let status = response.status();
    if !status.is_success() {
        bail!(AppError::Fetch(format!("server returned {}", status)));
    }

    Ok(response.text()?)
}

/// Retrieves raw playlist text from an http(s) url or a local path
/// and rejects anything that isn't an extended M3U playlist.
pub fn fetch(source: &str) -> Result<String> {
    log::info!("fetching playlist from `{}`", source);
    let raw = if looks_like_url(source) {
        fetch_remote(source)?
    } else {
        fs::read_to_string(source)
            .map_err(|e| anyhow!(AppError::Fetch(format!("`{}`: {}", source, e))))?
    };
    if !raw.trim_start().starts_with("#EXTM3U") {
        bail!(AppError::Playlist("missing #EXTM3U header".into()));
    }

    Ok(raw)
}
