use crate::constants;

/// One playable entry extracted from a playlist.
/// The stream url is always non-empty, everything besides the name is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub group: Option<String>,
    pub url: String,
    pub logo: Option<String>,
    pub epg_id: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
}

impl Channel {
    pub fn group_name(&self) -> &str {
        self.group.as_deref().unwrap_or(constants::UNGROUPED)
    }
}
