//! Entities of the IPTV dataset.
//!
//! Field names follow the upstream JSON documents. Optional fields are
//! resolved at deserialization: absent lists become empty, absent scalars
//! become `None`, and `is_nsfw` defaults to `false`.

use serde::{Deserialize, Serialize};

/// A broadcast channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Unique channel id (e.g., "BBCOne.uk").
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub alt_names: Vec<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub owners: Vec<String>,
    /// ISO country code.
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub is_nsfw: bool,
    #[serde(default)]
    pub launched: Option<String>,
    #[serde(default)]
    pub closed: Option<String>,
    /// Id of the channel that replaced this one.
    #[serde(default)]
    pub replaced_by: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// A playable stream URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub feed: Option<String>,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub referrer: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Stream {
    /// Key joined against `Channel::id`: the channel when set, else the feed.
    pub fn channel_key(&self) -> Option<&str> {
        self.channel.as_deref().or(self.feed.as_deref())
    }
}

/// An image asset for a channel, optionally scoped to one feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub feed: Option<String>,
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Country metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// The four collections a query runs against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub channels: Vec<Channel>,
    pub streams: Vec<Stream>,
    pub logos: Vec<Logo>,
    pub countries: Vec<Country>,
}

impl CatalogSnapshot {
    /// Look up a channel by exact id.
    pub fn channel(&self, id: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }
}

/// The collections making up a snapshot, one JSON document each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Channels,
    Streams,
    Logos,
    Countries,
}

impl Dataset {
    pub const ALL: [Dataset; 4] = [
        Dataset::Channels,
        Dataset::Streams,
        Dataset::Logos,
        Dataset::Countries,
    ];

    /// File name of the document, both on disk and on the static host.
    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::Channels => "channels.json",
            Dataset::Streams => "streams.json",
            Dataset::Logos => "logos.json",
            Dataset::Countries => "countries.json",
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dataset::Channels => "channels",
            Dataset::Streams => "streams",
            Dataset::Logos => "logos",
            Dataset::Countries => "countries",
        };
        f.write_str(name)
    }
}
