pub mod catalog;
pub mod config;
pub mod query;
pub mod testing;

pub use catalog::{
    create_catalog_source, BundledCatalog, CatalogError, CatalogSnapshot, CatalogSource, Channel,
    Country, Dataset, Logo, RemoteCatalog, Stream,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, DatasetSourceKind,
    SanitizedConfig, ServerConfig,
};
pub use query::{
    parse_flag, parse_or, CategoryReport, CategorySummary, ChannelFilter, ChannelSummary,
    CountryReport, CountrySummary, EnrichedChannel, Matches, Page, Pagination, QueryEngine,
    SortOrder, StreamInfo,
};
