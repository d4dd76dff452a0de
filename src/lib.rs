pub mod aggregation;
pub mod ai;
pub mod api;
mod climate_stats;
mod clients;
mod config;
mod error;
pub mod store;
mod types;

#[cfg(test)]
mod test_support;

pub use climate_stats::*;
pub use config::{ConfigError, Settings};
pub use error::{ClimateError, ErrorBody};

pub use clients::analytics_client::*;
pub use clients::annual_client::*;
pub use clients::insights_client::*;
pub use clients::monthly_client::*;
pub use clients::stations_client::*;

pub use types::analytics::*;
pub use types::climate_data::*;
pub use types::month::{month_name, month_number, MONTH_COLUMNS};
pub use types::reading::Reading;
pub use types::station::Station;

pub use aggregation::error::StatsError;
pub use aggregation::stats::{
    compute_annual_mean, compute_annual_std, compute_sigma_bounds, round_to,
};
pub use ai::client::CompletionClient;
pub use ai::error::LlmError;
pub use ai::grok::GrokClient;
pub use ai::types::{AskResponse, ChatMessage, Insight, InsightType, InsightsResponse, Role};
pub use store::directory::StationDirectory;
pub use store::error::{DataLoadError, DataLoadErrorKind, StoreError};
pub use store::filtering::ReadingFrameFilterExt;
pub use store::tabular_store::{StoreSnapshot, TabularStore};
