//! Enrichment of channels with their streams, logo and country.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::{CatalogSnapshot, Channel, Country, Logo, Stream};

/// Lookup tables over one snapshot, keyed by channel id or country code.
///
/// Streams keep their dataset order. For logos, the first logo without a feed
/// wins; a channel that only has feed-specific logos gets the first of those.
/// Rows pointing at unknown channels are indexed but never looked up.
#[derive(Debug)]
pub struct CatalogIndex<'a> {
    streams: HashMap<&'a str, Vec<&'a Stream>>,
    logos: HashMap<&'a str, &'a Logo>,
    countries: HashMap<&'a str, &'a Country>,
}

impl<'a> CatalogIndex<'a> {
    pub fn build(snapshot: &'a CatalogSnapshot) -> Self {
        let mut streams: HashMap<&str, Vec<&Stream>> = HashMap::new();
        for stream in &snapshot.streams {
            if let Some(key) = stream.channel_key() {
                streams.entry(key).or_default().push(stream);
            }
        }

        let mut logos: HashMap<&str, &Logo> = HashMap::new();
        for logo in &snapshot.logos {
            let Some(key) = logo.channel.as_deref() else {
                continue;
            };
            logos
                .entry(key)
                .and_modify(|chosen| {
                    if chosen.feed.is_some() && logo.feed.is_none() {
                        *chosen = logo;
                    }
                })
                .or_insert(logo);
        }

        let countries = snapshot
            .countries
            .iter()
            .map(|c| (c.code.as_str(), c))
            .collect();

        Self {
            streams,
            logos,
            countries,
        }
    }

    pub fn streams_for(&self, channel_id: &str) -> &[&'a Stream] {
        self.streams
            .get(channel_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn stream_count(&self, channel_id: &str) -> usize {
        self.streams_for(channel_id).len()
    }

    pub fn logo_for(&self, channel_id: &str) -> Option<&'a Logo> {
        self.logos.get(channel_id).copied()
    }

    pub fn country(&self, code: &str) -> Option<&'a Country> {
        self.countries.get(code).copied()
    }

    /// Attach streams, logo and country metadata. Never fails.
    pub fn enrich(&self, channel: &Channel) -> EnrichedChannel {
        let country = channel.country.as_deref().and_then(|c| self.country(c));

        EnrichedChannel {
            id: channel.id.clone(),
            name: channel.name.clone(),
            alt_names: channel.alt_names.clone(),
            network: channel.network.clone(),
            owners: channel.owners.clone(),
            country: channel.country.clone(),
            country_name: country.map(|c| c.name.clone()),
            country_flag: country.and_then(|c| c.flag.clone()),
            categories: channel.categories.clone(),
            is_nsfw: channel.is_nsfw,
            launched: channel.launched.clone(),
            closed: channel.closed.clone(),
            replaced_by: channel.replaced_by.clone(),
            website: channel.website.clone(),
            logo: self.logo_for(&channel.id).map(|l| l.url.clone()),
            streams: self
                .streams_for(&channel.id)
                .iter()
                .map(|s| StreamInfo::from(*s))
                .collect(),
        }
    }

    pub fn summarize(&self, channel: &Channel) -> ChannelSummary {
        ChannelSummary {
            id: channel.id.clone(),
            name: channel.name.clone(),
            logo: self.logo_for(&channel.id).map(|l| l.url.clone()),
        }
    }
}

/// A channel with its related rows attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedChannel {
    pub id: String,
    pub name: String,
    pub alt_names: Vec<String>,
    pub network: Option<String>,
    pub owners: Vec<String>,
    pub country: Option<String>,
    pub country_name: Option<String>,
    pub country_flag: Option<String>,
    pub categories: Vec<String>,
    pub is_nsfw: bool,
    pub launched: Option<String>,
    pub closed: Option<String>,
    pub replaced_by: Option<String>,
    pub website: Option<String>,
    /// URL of the chosen logo.
    pub logo: Option<String>,
    pub streams: Vec<StreamInfo>,
}

/// Stream as shown on an enriched channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamInfo {
    pub url: String,
    pub title: Option<String>,
    pub quality: Option<String>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub feed: Option<String>,
}

impl From<&Stream> for StreamInfo {
    fn from(s: &Stream) -> Self {
        Self {
            url: s.url.clone(),
            title: s.title.clone(),
            quality: s.quality.clone(),
            referrer: s.referrer.clone(),
            user_agent: s.user_agent.clone(),
            feed: s.feed.clone(),
        }
    }
}

/// Short channel reference used inside aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelSummary {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
}
