//! Music Catalog Server Library
//!
//! HTTP CRUD service for music records and the genres they belong to.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::MusicService;
pub use state::AppState;
