//! Per-country and per-category channel counts.

use std::collections::HashMap;

use serde::Serialize;

use super::join::{CatalogIndex, ChannelSummary};
use crate::catalog::CatalogSnapshot;

/// Channels shown per category.
pub const TOP_CHANNELS_PER_CATEGORY: usize = 5;

/// A country that has at least one channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummary {
    pub code: String,
    pub name: String,
    pub flag: Option<String>,
    pub languages: Vec<String>,
    pub channel_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ChannelSummary>>,
}

/// A category with its channel count and first few channels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub name: String,
    pub channel_count: usize,
    pub top_channels: Vec<ChannelSummary>,
}

/// Countries with at least one channel, most channels first.
///
/// `code` narrows the list to one country (case-insensitive). With
/// `include_channels` every entry lists its channels in dataset order.
pub fn country_summaries(
    snapshot: &CatalogSnapshot,
    index: &CatalogIndex<'_>,
    code: Option<&str>,
    include_channels: bool,
) -> Vec<CountrySummary> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for channel in &snapshot.channels {
        if let Some(cc) = channel.country.as_deref() {
            *counts.entry(cc).or_default() += 1;
        }
    }

    let code = code.map(str::trim).filter(|c| !c.is_empty());

    let mut summaries: Vec<CountrySummary> = snapshot
        .countries
        .iter()
        .filter(|c| code.is_none_or(|wanted| c.code.eq_ignore_ascii_case(wanted)))
        .filter_map(|country| {
            let channel_count = counts.get(country.code.as_str()).copied().unwrap_or(0);
            if channel_count == 0 {
                return None;
            }
            let channels = include_channels.then(|| {
                snapshot
                    .channels
                    .iter()
                    .filter(|ch| ch.country.as_deref() == Some(country.code.as_str()))
                    .map(|ch| index.summarize(ch))
                    .collect()
            });
            Some(CountrySummary {
                code: country.code.clone(),
                name: country.name.clone(),
                flag: country.flag.clone(),
                languages: country.languages.clone(),
                channel_count,
                channels,
            })
        })
        .collect();

    // Stable: ties keep dataset order
    summaries.sort_by(|a, b| b.channel_count.cmp(&a.channel_count));
    summaries
}

/// All categories, most channels first.
pub fn category_summaries(
    snapshot: &CatalogSnapshot,
    index: &CatalogIndex<'_>,
) -> Vec<CategorySummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut members: HashMap<&str, Vec<usize>> = HashMap::new();

    for (i, channel) in snapshot.channels.iter().enumerate() {
        for category in &channel.categories {
            let entry = members.entry(category.as_str()).or_insert_with(|| {
                order.push(category.as_str());
                Vec::new()
            });
            // A channel listing a category twice still counts once
            if entry.last() != Some(&i) {
                entry.push(i);
            }
        }
    }

    let mut summaries: Vec<CategorySummary> = order
        .into_iter()
        .map(|name| {
            let channels = &members[name];
            CategorySummary {
                name: name.to_string(),
                channel_count: channels.len(),
                top_channels: channels
                    .iter()
                    .take(TOP_CHANNELS_PER_CATEGORY)
                    .map(|&i| index.summarize(&snapshot.channels[i]))
                    .collect(),
            }
        })
        .collect();

    summaries.sort_by(|a, b| b.channel_count.cmp(&a.channel_count));
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[test]
    fn test_countries_only_with_channels_sorted_by_count() {
        let snapshot = fixtures::sample_snapshot();
        let index = CatalogIndex::build(&snapshot);

        let summaries = country_summaries(&snapshot, &index, None, false);
        let codes: Vec<_> = summaries.iter().map(|s| s.code.as_str()).collect();
        // DE has no channels, XX is not a known country
        assert_eq!(codes, ["US", "UK", "FR"]);
        assert_eq!(summaries[0].channel_count, 4);
        assert_eq!(summaries[1].channel_count, 3);
        assert_eq!(summaries[2].channel_count, 2);
        assert!(summaries.iter().all(|s| s.channels.is_none()));
    }

    #[test]
    fn test_country_code_filter_case_insensitive() {
        let snapshot = fixtures::sample_snapshot();
        let index = CatalogIndex::build(&snapshot);

        let summaries = country_summaries(&snapshot, &index, Some("fr"), true);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "France");
        let ids: Vec<_> = summaries[0]
            .channels
            .as_ref()
            .unwrap()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["Canal+.fr", "France24.fr"]);
    }

    #[test]
    fn test_country_code_without_channels_is_empty() {
        let snapshot = fixtures::sample_snapshot();
        let index = CatalogIndex::build(&snapshot);
        assert!(country_summaries(&snapshot, &index, Some("DE"), false).is_empty());
    }

    #[test]
    fn test_categories_count_and_cap() {
        let snapshot = fixtures::category_snapshot();
        let index = CatalogIndex::build(&snapshot);

        let summaries = category_summaries(&snapshot, &index);
        let news = summaries.iter().find(|s| s.name == "news").unwrap();
        assert_eq!(news.channel_count, 3);
        let ids: Vec<_> = news.top_channels.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["News1", "News2", "News3"]);

        let general = summaries.iter().find(|s| s.name == "general").unwrap();
        assert_eq!(general.channel_count, 7);
        assert_eq!(general.top_channels.len(), TOP_CHANNELS_PER_CATEGORY);
        assert_eq!(summaries[0].name, "general");
    }

    #[test]
    fn test_duplicate_category_counts_once() {
        let mut snapshot = fixtures::sample_snapshot();
        snapshot.channels = vec![fixtures::channel("Dup", "Dup TV", None, &["news", "news"])];
        let index = CatalogIndex::build(&snapshot);

        let summaries = category_summaries(&snapshot, &index);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].channel_count, 1);
    }
}
