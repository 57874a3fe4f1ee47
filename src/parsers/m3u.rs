use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use crate::model::channel::Channel;

lazy_static! {
    static ref ATTRIBUTE_REGEX: Regex =
        Regex::new(r#"([A-Za-z0-9-]+)="([^"]*)""#).expect("regular expression error");
}

fn parse_attributes(extinf: &str) -> HashMap<&str, &str> {
    let mut attributes = HashMap::new();
    for caps in ATTRIBUTE_REGEX.captures_iter(extinf) {
        let (_, [key, value]) = caps.extract();
        attributes.insert(key, value);
    }

    attributes
}

// tvg-name wins; otherwise the display name is whatever follows
// the last comma of the EXTINF line
fn display_name(extinf: &str, attributes: &HashMap<&str, &str>) -> Option<String> {
    if let Some(name) = attributes.get("tvg-name").filter(|name| !name.is_empty()) {
        return Some((*name).to_string());
    }
    extinf
        .rsplit_once(',')
        .map(|(_, name)| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

fn close_channel(extinf: &str, extgrp: Option<String>, url: &str) -> Channel {
    let attributes = parse_attributes(extinf);
    let attribute = |key: &str| {
        attributes
            .get(key)
            .filter(|value| !value.is_empty())
            .map(|value| (*value).to_string())
    };
    let name = display_name(extinf, &attributes).unwrap_or_else(|| url.to_string());
    let group = attribute("group-title").or(extgrp);

    Channel {
        name,
        group,
        url: url.to_string(),
        logo: attribute("tvg-logo"),
        epg_id: attribute("tvg-id"),
        country: attribute("tvg-country"),
        language: attribute("tvg-language"),
    }
}

/// Scans `content` line by line: an `#EXTINF` line opens a channel record,
/// the next non-comment line supplies its stream url and closes it.
/// Records without a url line are skipped, never fatal.
pub fn parse(content: &str) -> Vec<Channel> {
    let mut channels = Vec::new();
    let mut extinf: Option<&str> = None;
    let mut extgrp: Option<String> = None;
    for line in content.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }
        if line.starts_with("#EXTINF:") {
            if let Some(skipped) = extinf.replace(line) {
                log::warn!("skipping entry without a stream url: `{}`", skipped);
            }
            continue;
        }
        if let Some(group) = line.strip_prefix("#EXTGRP:") {
            extgrp = Some(group.trim().to_string());
            continue;
        }
        if line.starts_with('#') {
            continue;
        }
        // a url line without preceding metadata doesn't form a channel
        if let Some(header) = extinf.take() {
            channels.push(close_channel(header, extgrp.take(), line));
        }
        extgrp = None;
    }
    if let Some(skipped) = extinf {
        log::warn!("skipping entry without a stream url: `{}`", skipped);
    }

    channels
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn one_channel_per_pair() {
        let content = "#EXTINF:-1 group-title=\"News\",Channel A\nhttp://example.com/a.m3u8";
        let channels = parse(content);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name, "Channel A");
        assert_eq!(channels[0].group.as_deref(), Some("News"));
        assert_eq!(channels[0].url, "http://example.com/a.m3u8");
    }

    #[test]
    fn all_attributes_extracted() {
        let content = r#"#EXTINF:-1 tvg-id="ch.a" tvg-name="Channel A" tvg-logo="http://example.com/a.png" tvg-country="PL" tvg-language="Polish" group-title="News",Fallback Name
http://example.com/a.m3u8"#;
        let channels = parse(content);
        assert_eq!(channels.len(), 1);
        let channel = &channels[0];
        assert_eq!(channel.name, "Channel A");
        assert_eq!(channel.epg_id.as_deref(), Some("ch.a"));
        assert_eq!(channel.logo.as_deref(), Some("http://example.com/a.png"));
        assert_eq!(channel.country.as_deref(), Some("PL"));
        assert_eq!(channel.language.as_deref(), Some("Polish"));
        assert_eq!(channel.group.as_deref(), Some("News"));
    }

    #[test]
    fn name_falls_back_to_text_after_comma() {
        let content = "#EXTINF:-1 tvg-id=\"b\",Channel B\nhttp://example.com/b.m3u8";
        let channels = parse(content);
        assert_eq!(channels[0].name, "Channel B");
    }

    #[test]
    fn metadata_without_url_is_skipped() {
        let content = "\
#EXTINF:-1,Broken
#EXTINF:-1,Channel C
http://example.com/c.m3u8
#EXTINF:-1,Trailing";
        let channels = parse(content);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name, "Channel C");
    }

    #[test]
    fn bare_url_lines_are_ignored() {
        let content = "http://example.com/orphan.m3u8\n#EXTINF:-1,D\nhttp://example.com/d.m3u8";
        let channels = parse(content);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name, "D");
    }

    #[test]
    fn extgrp_fills_in_missing_group() {
        let content = "\
#EXTINF:-1,Channel E
#EXTGRP:Movies
http://example.com/e.m3u8
#EXTINF:-1 group-title=\"News\",Channel F
#EXTGRP:Movies
http://example.com/f.m3u8
#EXTINF:-1,Channel G
http://example.com/g.m3u8";
        let channels = parse(content);
        assert_eq!(channels.len(), 3);
        assert_eq!(channels[0].group.as_deref(), Some("Movies"));
        // group-title wins over EXTGRP
        assert_eq!(channels[1].group.as_deref(), Some("News"));
        // EXTGRP doesn't leak into the next record
        assert_eq!(channels[2].group, None);
    }

    #[test]
    fn source_order_and_duplicates_preserved() {
        let content = "\
#EXTM3U
#EXTINF:-1,First
http://example.com/same.m3u8

#EXTINF:-1,Second
http://example.com/same.m3u8";
        let channels = parse(content);
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].name, "First");
        assert_eq!(channels[1].name, "Second");
        assert_eq!(channels[0].url, channels[1].url);
    }

    #[test]
    fn unnamed_entry_uses_url_as_name() {
        let content = "#EXTINF:-1\nhttp://example.com/x.m3u8";
        let channels = parse(content);
        assert_eq!(channels[0].name, "http://example.com/x.m3u8");
    }
}
