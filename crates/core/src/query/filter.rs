//! Channel predicates.
//!
//! Every predicate is conjunctive, so the order they are applied in does not
//! change the result. The has-streams gate is not here: it needs the joined
//! stream index and is applied by the engine after the join.

use crate::catalog::Channel;

/// Filters applied to the channel collection.
///
/// Empty or whitespace-only strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelFilter {
    /// Case-insensitive substring matched against name and alt names.
    pub text: Option<String>,
    /// Also match `text` against network and owners.
    pub text_in_network: bool,
    /// Case-insensitive country code.
    pub country: Option<String>,
    /// Case-insensitive category name.
    pub category: Option<String>,
    /// Exact NSFW flag; `None` means either.
    pub nsfw: Option<bool>,
    /// Require at least one joined stream.
    pub has_streams: bool,
}

impl ChannelFilter {
    /// Filter with only a text query.
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            text: Some(query.into()),
            ..Default::default()
        }
    }

    /// Prepare the filter for repeated matching.
    pub fn compile(&self) -> CompiledFilter {
        CompiledFilter {
            needle: normalized(self.text.as_deref()),
            text_in_network: self.text_in_network,
            country: normalized(self.country.as_deref()),
            category: normalized(self.category.as_deref()),
            nsfw: self.nsfw,
        }
    }

    /// Channels matching all pre-join predicates, in dataset order.
    pub fn apply<'a>(&self, channels: &'a [Channel]) -> Vec<&'a Channel> {
        let compiled = self.compile();
        channels.iter().filter(|c| compiled.matches(c)).collect()
    }
}

/// Lowercased, trimmed predicate values.
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    needle: Option<String>,
    text_in_network: bool,
    country: Option<String>,
    category: Option<String>,
    nsfw: Option<bool>,
}

impl CompiledFilter {
    pub fn matches(&self, channel: &Channel) -> bool {
        self.matches_text(channel)
            && self.matches_country(channel)
            && self.matches_category(channel)
            && self.matches_nsfw(channel)
    }

    fn matches_text(&self, channel: &Channel) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        let hit = |s: &str| s.to_lowercase().contains(needle.as_str());

        if hit(&channel.name) || channel.alt_names.iter().any(|a| hit(a)) {
            return true;
        }
        self.text_in_network
            && (channel.network.as_deref().is_some_and(hit) || channel.owners.iter().any(|o| hit(o)))
    }

    fn matches_country(&self, channel: &Channel) -> bool {
        match &self.country {
            None => true,
            Some(code) => channel
                .country
                .as_deref()
                .is_some_and(|c| c.to_lowercase() == *code),
        }
    }

    fn matches_category(&self, channel: &Channel) -> bool {
        match &self.category {
            None => true,
            Some(category) => channel
                .categories
                .iter()
                .any(|c| c.to_lowercase() == *category),
        }
    }

    fn matches_nsfw(&self, channel: &Channel) -> bool {
        self.nsfw.is_none_or(|flag| channel.is_nsfw == flag)
    }
}

fn normalized(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}
