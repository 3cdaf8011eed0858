//! The orchestrating state machine behind the dashboard.
//!
//! Every user intent funnels through [`WeatherSession`], which talks to the
//! geocoding and forecast clients, the favorites store, and durable
//! storage, and publishes a fresh [`ViewState`] per transition over a
//! watch channel.
//!
//! Fetches carry a monotonically increasing generation; a completion whose
//! generation is no longer current is discarded, so the last *issued*
//! request wins rather than the last one to complete.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::instrument;

use cielo_core::WeatherConfig;
use cielo_weather::{
    ForecastClient, GeocodingClient, GeolocationError, GeolocationProvider, Location,
    WeatherError, WeatherSnapshot,
};

use crate::error::SessionError;
use crate::favorites::FavoritesStore;
use crate::storage::Storage;

/// Sentinel label for device-located weather. Never persisted as the
/// last-viewed city.
pub const CURRENT_LOCATION_LABEL: &str = "Ubicación Actual";

pub(crate) const LAST_CITY_KEY: &str = "last_city";

/// Session status.
///
/// While `Loading`, any previous snapshot stays in the state but the
/// dashboard renders a full-page skeleton in its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Immutable view model consumed by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub snapshot: Option<WeatherSnapshot>,
    pub status: Status,
    pub error: Option<String>,
    pub search_candidates: Vec<Location>,
    pub favorites: Vec<Location>,
}

pub struct WeatherSession {
    geocoder: GeocodingClient,
    forecast: ForecastClient,
    geolocation: Box<dyn GeolocationProvider>,
    storage: Arc<dyn Storage>,
    favorites: Mutex<FavoritesStore>,
    search_limit: u8,
    default_city: String,
    state: watch::Sender<ViewState>,
    generation: AtomicU64,
}

impl WeatherSession {
    /// Build a session: construct the API clients from config and hydrate
    /// favorites from durable storage.
    pub fn new(
        config: &WeatherConfig,
        storage: Arc<dyn Storage>,
        geolocation: Box<dyn GeolocationProvider>,
    ) -> Result<Self> {
        let geocoder = GeocodingClient::new(
            config.geocoding_url.as_str(),
            config.language.as_str(),
            config.timeout_secs,
        )?;
        let forecast = ForecastClient::new(config.forecast_url.as_str(), config.timeout_secs)?;
        let favorites = FavoritesStore::load(storage.clone())?;

        let initial = ViewState {
            favorites: favorites.entries().to_vec(),
            ..ViewState::default()
        };
        let (state, _) = watch::channel(initial);

        Ok(Self {
            geocoder,
            forecast,
            geolocation,
            storage,
            favorites: Mutex::new(favorites),
            search_limit: config.search_limit,
            default_city: config.default_city.clone(),
            state,
            generation: AtomicU64::new(0),
        })
    }

    /// Current view model.
    pub fn view(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Subscribe to view model changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Startup: load the last-viewed city, or the configured default when
    /// none is stored, and fetch it.
    #[instrument(skip(self))]
    pub async fn start(&self) -> Result<()> {
        let city = self
            .storage
            .read(LAST_CITY_KEY)
            .context("Failed to read last-viewed city")?
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .filter(|city| !city.trim().is_empty())
            .unwrap_or_else(|| self.default_city.clone());

        self.select_by_name(&city).await;
        Ok(())
    }

    /// Resolve a place name to its best candidate and fetch its weather.
    #[instrument(skip(self))]
    pub async fn select_by_name(&self, name: &str) {
        let generation = self.begin_fetch();

        match self.geocoder.resolve_best(name).await {
            Ok(location) => {
                let country = location.country.clone();
                self.fetch_and_commit(
                    generation,
                    location.latitude,
                    location.longitude,
                    &location.name,
                    &country,
                )
                .await;
            }
            Err(WeatherError::NotFound(_)) => {
                self.fail(generation, SessionError::NotFound);
            }
            Err(e) => {
                tracing::warn!("Geocoding failed for {:?}: {}", name, e);
                self.fail(generation, SessionError::Connection);
            }
        }
    }

    /// Fetch weather for known coordinates, labeled with a display name.
    #[instrument(skip(self))]
    pub async fn select_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        label: &str,
        country: &str,
    ) {
        let generation = self.begin_fetch();
        self.fetch_and_commit(generation, latitude, longitude, label, country)
            .await;
    }

    /// Confirm a search candidate: clears the candidate list, then behaves
    /// like a coordinate selection.
    pub async fn select_candidate(&self, candidate: Location) {
        self.state.send_modify(|state| {
            state.search_candidates.clear();
        });
        self.select_by_coordinates(
            candidate.latitude,
            candidate.longitude,
            &candidate.name,
            &candidate.country,
        )
        .await;
    }

    /// Search-as-you-type. Queries of three characters or more fetch
    /// candidates; shorter queries clear them. Never touches the main
    /// snapshot, status, or error.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) {
        if query.trim().chars().count() <= 2 {
            self.state.send_modify(|state| {
                state.search_candidates.clear();
            });
            return;
        }

        let candidates = self.geocoder.search(query, self.search_limit).await;
        self.state.send_modify(|state| {
            state.search_candidates = candidates;
        });
    }

    /// Ask the platform for device coordinates and fetch weather there.
    #[instrument(skip(self))]
    pub async fn use_device_location(&self) {
        let generation = self.begin_fetch();

        match self.geolocation.locate().await {
            Ok(coords) => {
                self.fetch_and_commit(
                    generation,
                    coords.latitude,
                    coords.longitude,
                    CURRENT_LOCATION_LABEL,
                    "",
                )
                .await;
            }
            Err(GeolocationError::PermissionDenied) => {
                self.fail(generation, SessionError::PermissionDenied);
            }
            Err(e) => {
                tracing::debug!("Geolocation unavailable: {}", e);
                self.fail(generation, SessionError::Unsupported);
            }
        }
    }

    /// Toggle a favorite and reflect the new set in the view. Status is
    /// untouched.
    pub fn toggle_favorite(&self, location: &Location) -> Result<()> {
        let mut favorites = self.favorites.lock();
        let entries = favorites.toggle(location)?.to_vec();
        drop(favorites);

        self.state.send_modify(|state| {
            state.favorites = entries;
        });
        Ok(())
    }

    /// Issue a new fetch generation and enter Loading.
    fn begin_fetch(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| {
            state.status = Status::Loading;
            state.error = None;
        });
        generation
    }

    async fn fetch_and_commit(
        &self,
        generation: u64,
        latitude: f64,
        longitude: f64,
        label: &str,
        country: &str,
    ) {
        match self.forecast.fetch(latitude, longitude).await {
            Ok(snapshot) => {
                let snapshot = snapshot.with_place(label, country);
                let committed = self.commit(generation, |state| {
                    state.snapshot = Some(snapshot);
                    state.status = Status::Ready;
                    state.error = None;
                });

                // The sentinel never becomes the remembered city.
                if committed && label != CURRENT_LOCATION_LABEL {
                    if let Err(e) = self.storage.write(LAST_CITY_KEY, label.as_bytes()) {
                        tracing::warn!("Failed to persist last-viewed city: {}", e);
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Forecast fetch failed: {}", e);
                self.fail(generation, SessionError::Connection);
            }
        }
    }

    /// Surface an error, leaving any existing snapshot untouched.
    fn fail(&self, generation: u64, error: SessionError) {
        self.commit(generation, |state| {
            state.status = Status::Error;
            state.error = Some(error.user_message().to_string());
        });
    }

    /// Apply a transition only if `generation` is still the latest issued.
    /// Returns whether the transition was applied.
    fn commit(&self, generation: u64, apply: impl FnOnce(&mut ViewState)) -> bool {
        self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                tracing::debug!("Discarding stale fetch completion (generation {})", generation);
                return false;
            }
            apply(state);
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_state_is_idle() {
        let state = ViewState::default();
        assert_eq!(state.status, Status::Idle);
        assert!(state.snapshot.is_none());
        assert!(state.error.is_none());
        assert!(state.search_candidates.is_empty());
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn test_sentinel_label() {
        assert_eq!(CURRENT_LOCATION_LABEL, "Ubicación Actual");
    }
}
