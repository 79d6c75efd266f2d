//! HTML page handlers for songshelf-web

pub mod add_song;
pub mod delete;
pub mod health;
pub mod index;
pub mod layout;
pub mod search;

pub use add_song::{add_song_form, add_song_submit};
pub use delete::delete;
pub use health::health_routes;
pub use index::index;
pub use search::search;
