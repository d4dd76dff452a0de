use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("Insufficient data: need {required} points, got {available}")]
    InsufficientData { required: usize, available: usize },
}
