//! Session-level error taxonomy.
//!
//! Every member surfaces to the UI as a single message string in
//! `ViewState.error`; none are fatal. The user retries with a fresh
//! action.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Transport or decoding failure while fetching a forecast.
    #[error("connection error")]
    Connection,

    /// Geocoding produced no candidate for the requested name.
    #[error("location not found")]
    NotFound,

    /// The user refused the device-location request.
    #[error("location permission denied")]
    PermissionDenied,

    /// The platform has no geolocation capability.
    #[error("geolocation not supported")]
    Unsupported,
}

impl SessionError {
    /// User-facing message, as rendered by the dashboard.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Connection => "Error de conexión",
            Self::NotFound => "No se encontró la ubicación",
            Self::PermissionDenied => "Permiso de ubicación denegado",
            Self::Unsupported => "Geolocalización no soportada",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_distinct() {
        let all = [
            SessionError::Connection,
            SessionError::NotFound,
            SessionError::PermissionDenied,
            SessionError::Unsupported,
        ];
        for a in &all {
            for b in &all {
                if a != b {
                    assert_ne!(a.user_message(), b.user_message());
                }
            }
        }
    }

    #[test]
    fn test_denial_and_unsupported_differ() {
        assert_ne!(
            SessionError::PermissionDenied.user_message(),
            SessionError::Unsupported.user_message()
        );
    }
}
