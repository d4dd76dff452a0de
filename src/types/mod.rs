pub mod analytics;
pub mod climate_data;
pub mod month;
pub mod reading;
pub mod station;
