//! Session orchestration for Cielo
//!
//! Ties user intents (search, select, use-my-location, toggle favorite)
//! to the geocoding and forecast clients, the favorites store, and the
//! persisted last-viewed city, publishing an immutable [`ViewState`]
//! per transition over a watch channel.

pub mod error;
pub mod favorites;
pub mod session;
pub mod storage;

pub use error::SessionError;
pub use favorites::FavoritesStore;
pub use session::{Status, ViewState, WeatherSession, CURRENT_LOCATION_LABEL};
pub use storage::{FileStorage, MemoryStorage, Storage};
