//! Query engine over one catalog snapshot.
//!
//! A [`QueryEngine`] is built per request and runs
//! filter → join → has-streams gate → sort → paginate. Only the channels that
//! end up in the response are fully enriched; counting and sorting go through
//! the join index.

mod aggregate;
mod filter;
mod join;
mod paginate;

pub use aggregate::*;
pub use filter::*;
pub use join::*;
pub use paginate::*;

use std::cmp::Reverse;

use tracing::debug;

use crate::catalog::{CatalogSnapshot, Channel};

/// Order of search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Dataset order.
    #[default]
    Dataset,
    /// Most streams first; ties keep dataset order.
    StreamCountDesc,
}

/// Truncated result with the count of all matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Matches {
    pub channels: Vec<EnrichedChannel>,
    /// Matches before truncation.
    pub total: usize,
}

/// Result of the country listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryReport {
    pub countries: Vec<CountrySummary>,
    /// Sum of the listed countries' channel counts.
    pub total_channels: usize,
}

/// Result of the category listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    pub categories: Vec<CategorySummary>,
    /// Size of the channel collection.
    pub total_channels: usize,
}

/// Read-only query engine bound to one snapshot.
pub struct QueryEngine<'a> {
    snapshot: &'a CatalogSnapshot,
    index: CatalogIndex<'a>,
}

impl<'a> QueryEngine<'a> {
    pub fn new(snapshot: &'a CatalogSnapshot) -> Self {
        Self {
            snapshot,
            index: CatalogIndex::build(snapshot),
        }
    }

    pub fn index(&self) -> &CatalogIndex<'a> {
        &self.index
    }

    /// Channels passing every predicate, including the has-streams gate.
    pub fn select(&self, filter: &ChannelFilter, sort: SortOrder) -> Vec<&'a Channel> {
        let mut selected = filter.apply(&self.snapshot.channels);

        if filter.has_streams {
            selected.retain(|c| self.index.stream_count(&c.id) > 0);
        }

        if sort == SortOrder::StreamCountDesc {
            selected.sort_by_key(|c| Reverse(self.index.stream_count(&c.id)));
        }

        debug!(
            "Selected {} of {} channels with {:?}",
            selected.len(),
            self.snapshot.channels.len(),
            filter
        );
        selected
    }

    /// Limit mode: first `limit` matches in dataset order.
    pub fn search(&self, filter: &ChannelFilter, limit: usize) -> Matches {
        let selected = self.select(filter, SortOrder::Dataset);
        let total = selected.len();
        let channels = truncate(selected, limit)
            .into_iter()
            .map(|c| self.index.enrich(c))
            .collect();
        Matches { channels, total }
    }

    /// Window mode: `limit` matches starting at `offset`.
    pub fn search_page(
        &self,
        filter: &ChannelFilter,
        sort: SortOrder,
        limit: usize,
        offset: usize,
    ) -> Page<EnrichedChannel> {
        paginate(self.select(filter, sort), limit, offset).map(|c| self.index.enrich(c))
    }

    /// One channel by exact id.
    pub fn channel(&self, id: &str) -> Option<EnrichedChannel> {
        self.snapshot.channel(id).map(|c| self.index.enrich(c))
    }

    pub fn countries(&self, code: Option<&str>, include_channels: bool) -> CountryReport {
        let countries = country_summaries(self.snapshot, &self.index, code, include_channels);
        let total_channels = countries.iter().map(|c| c.channel_count).sum();
        CountryReport {
            countries,
            total_channels,
        }
    }

    pub fn categories(&self) -> CategoryReport {
        CategoryReport {
            categories: category_summaries(self.snapshot, &self.index),
            total_channels: self.snapshot.channels.len(),
        }
    }
}
