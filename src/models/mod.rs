// src/models/mod.rs

//! Domain models for the application.

mod config;
mod post;

// Re-export all public types
pub use config::{
    AnalyzerConfig, Config, HttpConfig, LoggingConfig, OutputConfig, SourceConfig, StorageConfig,
};
pub use post::{PostRecord, PostView};
