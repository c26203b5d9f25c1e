//! Testing utilities: dataset fixtures and a mock catalog source.
//!
//! # Example
//!
//! ```rust,ignore
//! use iptv_catalog_core::testing::{fixtures, MockCatalogSource};
//!
//! let source = MockCatalogSource::new(fixtures::sample_snapshot());
//! source.fail_next(CatalogError::Status { dataset: Dataset::Streams, status: 503 }).await;
//! ```

mod mock_source;

pub use mock_source::MockCatalogSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::path::Path;

    use crate::catalog::{CatalogSnapshot, Channel, Country, Dataset, Logo, Stream};

    /// Create a channel with the given country and categories.
    pub fn channel(id: &str, name: &str, country: Option<&str>, categories: &[&str]) -> Channel {
        Channel {
            id: id.to_string(),
            name: name.to_string(),
            alt_names: Vec::new(),
            network: None,
            owners: Vec::new(),
            country: country.map(str::to_string),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            is_nsfw: false,
            launched: None,
            closed: None,
            replaced_by: None,
            website: None,
        }
    }

    /// Create a stream joined to `channel`.
    pub fn stream(channel: &str, url: &str, quality: Option<&str>) -> Stream {
        Stream {
            channel: Some(channel.to_string()),
            feed: None,
            url: url.to_string(),
            title: Some(channel.to_string()),
            quality: quality.map(str::to_string),
            referrer: None,
            user_agent: None,
        }
    }

    /// Create a logo, optionally scoped to a feed.
    pub fn logo(channel: &str, feed: Option<&str>, url: &str) -> Logo {
        Logo {
            channel: Some(channel.to_string()),
            feed: feed.map(str::to_string),
            url: url.to_string(),
            width: Some(512),
            height: Some(512),
            format: Some("PNG".to_string()),
            tags: Vec::new(),
        }
    }

    pub fn country(code: &str, name: &str, flag: &str, languages: &[&str]) -> Country {
        Country {
            code: code.to_string(),
            name: name.to_string(),
            flag: Some(flag.to_string()),
            languages: languages.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// A small dataset covering the interesting join and filter cases:
    /// feed-scoped logos, feed-keyed streams, dangling rows, an NSFW channel,
    /// a channel without country and one with an unknown country code.
    pub fn sample_snapshot() -> CatalogSnapshot {
        let channels = vec![
            Channel {
                alt_names: vec!["BBC 1".to_string()],
                network: Some("BBC".to_string()),
                owners: vec!["BBC".to_string()],
                website: Some("https://www.bbc.co.uk/bbcone".to_string()),
                launched: Some("1936-11-02".to_string()),
                ..channel("BBCOne.uk", "BBC One", Some("UK"), &["general"])
            },
            Channel {
                owners: vec!["BBC".to_string()],
                ..channel("BBCNews.uk", "BBC News", Some("UK"), &["news"])
            },
            Channel {
                alt_names: vec!["Cable News Network".to_string()],
                network: Some("Warner Bros. Discovery".to_string()),
                owners: vec!["Warner Bros. Discovery".to_string()],
                ..channel("CNN.us", "CNN", Some("US"), &["news"])
            },
            channel("FoxNews.us", "Fox News Channel", Some("US"), &["news"]),
            channel("ESPN.us", "ESPN", Some("US"), &["sports"]),
            channel("Canal+.fr", "Canal+", Some("FR"), &["general", "movies"]),
            channel("France24.fr", "France 24", Some("FR"), &["news"]),
            Channel {
                is_nsfw: true,
                ..channel("AdultOne.us", "Adult One", Some("US"), &["xxx"])
            },
            Channel {
                closed: Some("2010-01-01".to_string()),
                replaced_by: Some("BBCOne.uk".to_string()),
                ..channel("OldChannel.uk", "Old Channel", Some("UK"), &["general"])
            },
            channel("NowhereTV", "Nowhere TV", None, &["general"]),
            channel("Atlantis.xx", "Atlantis TV", Some("XX"), &[]),
        ];

        let streams = vec![
            stream("BBCOne.uk", "http://bbc.example/one-hd.m3u8", Some("1080p")),
            stream("CNN.us", "http://cnn.example/1.m3u8", Some("720p")),
            stream("BBCNews.uk", "http://bbc.example/news.m3u8", None),
            stream("CNN.us", "http://cnn.example/2.m3u8", None),
            stream("BBCOne.uk", "http://bbc.example/one-sd.m3u8", Some("576p")),
            stream("ESPN.us", "http://espn.example/live.m3u8", Some("720p")),
            stream("CNN.us", "http://cnn.example/3.m3u8", Some("1080p")),
            Stream {
                channel: None,
                feed: Some("Canal+.fr".to_string()),
                ..stream("Canal+.fr", "http://canal.example/live.m3u8", None)
            },
            stream("Ghost.zz", "http://ghost.example/live.m3u8", None),
        ];

        let logos = vec![
            logo("BBCOne.uk", Some("HD"), "http://logos.example/bbc-one-hd.png"),
            logo("BBCOne.uk", None, "http://logos.example/bbc-one.png"),
            logo("CNN.us", None, "http://logos.example/cnn.png"),
            logo("ESPN.us", Some("East"), "http://logos.example/espn-east.png"),
            logo("Ghost.zz", None, "http://logos.example/ghost.png"),
        ];

        let countries = vec![
            country("UK", "United Kingdom", "🇬🇧", &["eng"]),
            country("US", "United States", "🇺🇸", &["eng", "spa"]),
            country("FR", "France", "🇫🇷", &["fra"]),
            country("DE", "Germany", "🇩🇪", &["deu"]),
        ];

        CatalogSnapshot {
            channels,
            streams,
            logos,
            countries,
        }
    }

    /// Ten channels: three in "news", seven in "general".
    pub fn category_snapshot() -> CatalogSnapshot {
        let mut channels = Vec::new();
        for i in 1..=3 {
            channels.push(channel(
                &format!("News{}", i),
                &format!("News {}", i),
                Some("US"),
                &["news"],
            ));
        }
        for i in 1..=7 {
            channels.push(channel(
                &format!("Gen{}", i),
                &format!("General {}", i),
                Some("US"),
                &["general"],
            ));
        }

        CatalogSnapshot {
            channels,
            streams: Vec::new(),
            logos: Vec::new(),
            countries: vec![country("US", "United States", "🇺🇸", &["eng"])],
        }
    }

    /// Write the snapshot as the four bundle files into `dir`.
    pub fn write_bundle(dir: &Path, snapshot: &CatalogSnapshot) -> std::io::Result<()> {
        let write = |dataset: Dataset, json: serde_json::Result<Vec<u8>>| {
            std::fs::write(dir.join(dataset.file_name()), json?)
        };
        write(Dataset::Channels, serde_json::to_vec(&snapshot.channels))?;
        write(Dataset::Streams, serde_json::to_vec(&snapshot.streams))?;
        write(Dataset::Logos, serde_json::to_vec(&snapshot.logos))?;
        write(Dataset::Countries, serde_json::to_vec(&snapshot.countries))?;
        Ok(())
    }
}
