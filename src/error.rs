use crate::ai::error::LlmError;
use crate::config::ConfigError;
use crate::store::error::{DataLoadError, StoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimateError {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("At least one station id is required")]
    EmptyStationSelection,

    #[error("Stations not found: {}", station_ids.join(", "))]
    StationNotFound { station_ids: Vec<String> },

    #[error("Invalid year range {year_from:?}..={year_to:?}: {reason}")]
    InvalidYearRange {
        year_from: Option<i32>,
        year_to: Option<i32>,
        reason: String,
    },

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),
}

impl ClimateError {
    /// Client-visible error category.
    pub fn error_type(&self) -> &'static str {
        match self {
            ClimateError::StationNotFound { .. } => "station_not_found",
            ClimateError::InvalidYearRange { .. } => "invalid_date_range",
            ClimateError::EmptyStationSelection => "empty_station_selection",
            ClimateError::InvalidQuestion(_) => "invalid_question",
            ClimateError::Llm(_) => "llm_error",
            ClimateError::DataLoad(_) | ClimateError::Store(StoreError::Load(_)) => {
                "data_load_error"
            }
            ClimateError::Store(_) | ClimateError::Config(_) => {
                "internal_error"
            }
        }
    }

    /// HTTP status an HTTP layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ClimateError::StationNotFound { .. } => 404,
            ClimateError::InvalidYearRange { .. }
            | ClimateError::EmptyStationSelection
            | ClimateError::InvalidQuestion(_) => 400,
            ClimateError::Llm(_) => 503,
            _ => 500,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        let details = match self {
            ClimateError::StationNotFound { station_ids } => {
                Some(serde_json::json!({ "station_ids": station_ids }))
            }
            ClimateError::InvalidYearRange {
                year_from, year_to, ..
            } => Some(serde_json::json!({ "year_from": year_from, "year_to": year_to })),
            _ => None,
        };
        ErrorBody {
            error: self.error_type().to_string(),
            message: self.to_string(),
            details,
        }
    }
}

/// Serialisable error payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
