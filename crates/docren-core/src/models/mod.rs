//! Data models: extraction results and naming configuration.

pub mod config;
pub mod result;

pub use config::NamingConfig;
pub use result::ExtractionResult;
