//! Domain types for the music catalog

mod genre;
mod music;
mod page;

pub use genre::{CreateGenre, Genre, GenreId, GenreRef};
pub use music::{Music, MusicId, NewMusic};
pub use page::{Page, PageRequest};
