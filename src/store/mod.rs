pub mod directory;
pub mod error;
pub mod extractor;
pub mod filtering;
pub mod loader;
pub mod tabular_store;
