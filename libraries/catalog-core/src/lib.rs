//! Music Catalog Core
//!
//! Domain types, the persistence contract, and error handling shared by the
//! storage layer and the server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Music`, `Genre`, `GenreRef`, `Page`
//! - **Storage Contract**: `CatalogStorage` and `CatalogTransaction`
//! - **Error Handling**: Unified `CatalogError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use catalog_core::types::{Genre, GenreRef, Music};
//!
//! let rock = Genre::new(1, "Rock");
//! let song = Music::new(7, "Paranoid", GenreRef::Present(rock));
//!
//! assert_eq!(song.genre.name(), Some("Rock"));
//! assert_eq!(song.genre.id(), Some(1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CatalogError, Result};
pub use storage::{CatalogStorage, CatalogTransaction};

pub use types::{
    CreateGenre, Genre, GenreId, GenreRef, Music, MusicId, NewMusic, Page, PageRequest,
};
