use std::collections::HashMap;
use unidecode::unidecode;

use crate::{constants, model::channel::Channel};

/// The session's channel list, immutable once parsed.
/// Grouping and search views are recomputed on demand.
pub struct Playlist(Vec<Channel>);

impl Playlist {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self(channels)
    }

    pub fn channels(&self) -> &[Channel] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Buckets channels by their group, keeping the order
    /// in which the groups first appear in the playlist.
    pub fn grouped(&self) -> Vec<(&str, Vec<&Channel>)> {
        let mut buckets: Vec<(&str, Vec<&Channel>)> = Vec::new();
        let mut indices: HashMap<&str, usize> = HashMap::new();
        for channel in &self.0 {
            let group = channel.group_name();
            match indices.get(group) {
                Some(&i) => buckets[i].1.push(channel),
                None => {
                    indices.insert(group, buckets.len());
                    buckets.push((group, vec![channel]));
                }
            }
        }

        buckets
    }

    /// Channels whose name contains `query` (case-insensitive),
    /// widened by a fuzzy per-word match so near-misses still surface.
    pub fn search(&self, query: &str) -> Vec<&Channel> {
        let query = normalize(query);
        if query.is_empty() {
            return Vec::new();
        }

        self.0
            .iter()
            .filter(|channel| {
                let name = normalize(&channel.name);
                name.contains(&query)
                    || name
                        .split_whitespace()
                        .any(|word| strsim::jaro_winkler(word, &query) >= constants::FUZZY_THRESHOLD)
            })
            .collect()
    }
}

fn normalize(s: &str) -> String {
    unidecode(s.trim()).to_lowercase()
}
