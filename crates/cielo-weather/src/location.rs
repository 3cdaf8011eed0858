//! Device geolocation capability.
//!
//! A one-shot asynchronous request with two terminal outcomes: coordinates,
//! or a reason the platform couldn't provide them. The session cares about
//! the distinction between denial and absence, so the error keeps it.

use async_trait::async_trait;

/// Raw device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Geolocation capability errors
#[derive(Debug, thiserror::Error)]
pub enum GeolocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Geolocation not supported on this platform")]
    Unsupported,
    #[error("Location error: {0}")]
    Other(String),
}

/// Platform-provided one-shot location capability.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn locate(&self) -> Result<Coordinates, GeolocationError>;
}

/// Default provider for hosts without a location capability.
#[derive(Debug, Default)]
pub struct UnsupportedGeolocation;

#[async_trait]
impl GeolocationProvider for UnsupportedGeolocation {
    async fn locate(&self) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::Unsupported)
    }
}
