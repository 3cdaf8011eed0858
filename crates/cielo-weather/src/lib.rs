//! Weather data access for Cielo
//!
//! Open-Meteo geocoding and forecast clients, the pure condition
//! classifier, ambient-effect lookup tables, and the device
//! geolocation capability seam.

pub mod conditions;
pub mod effects;
pub mod forecast;
pub mod format;
pub mod geocode;
pub mod location;
pub mod types;

pub use conditions::{description_for, gradient_for, icon_for, Gradient, Icon};
pub use effects::{ambient_effect, Effect, ParticleLayer};
pub use forecast::ForecastClient;
pub use format::{format_hour, round_temperature};
pub use geocode::GeocodingClient;
pub use location::{Coordinates, GeolocationError, GeolocationProvider, UnsupportedGeolocation};
pub use types::*;
