pub mod client;
pub mod error;
pub mod grok;
pub mod insights;
pub mod mock;
pub mod prompts;
pub mod types;
