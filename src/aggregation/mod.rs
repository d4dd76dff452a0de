pub mod analytics;
pub mod annual;
pub mod error;
pub mod monthly;
pub mod stats;
