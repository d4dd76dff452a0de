pub mod analytics_client;
pub mod annual_client;
pub mod insights_client;
pub mod monthly_client;
pub mod stations_client;
