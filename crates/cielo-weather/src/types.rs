use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A resolved or candidate place with coordinates and display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Transient rank/identity assigned by the geocoding API for a
    /// single result set. Not stable across queries.
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub country: String,
    /// First-level administrative region, when the API reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin1: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Favorites identity: two locations are the same place when name and
    /// country match. This conflates distinct towns that share both; the
    /// geocoding result's region or coordinates are deliberately not
    /// consulted, matching the behavior users already rely on.
    pub fn same_place(&self, other: &Location) -> bool {
        self.name == other.name && self.country == other.country
    }
}

/// Current conditions at a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Air temperature, °C
    pub temperature: f64,
    /// Apparent ("feels like") temperature, °C
    pub apparent_temperature: f64,
    /// Relative humidity, percent
    pub relative_humidity: u8,
    /// Precipitation over the last hour, mm
    pub precipitation: f64,
    /// Cloud cover, percent
    pub cloud_cover: u8,
    /// Mean sea-level pressure, hPa
    pub pressure_msl: f64,
    /// Wind speed, km/h
    pub wind_speed: f64,
    /// Wind direction, degrees
    pub wind_direction: u16,
    /// WMO weather code
    pub weather_code: i32,
    pub is_day: bool,
}

/// One hour of the forecast, offset from "now".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyEntry {
    pub time: NaiveDateTime,
    pub temperature: f64,
    pub weather_code: i32,
}

/// One day of the 7-day forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub weather_code: i32,
    pub temp_max: f64,
    pub temp_min: f64,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
    pub uv_index_max: f64,
}

/// One immutable fetched weather result for a location.
///
/// Replaced wholesale on every successful fetch, never patched
/// field-by-field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub country: String,
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyEntry>,
    pub daily: Vec<DailyEntry>,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Attach the display name the forecast endpoint doesn't know about.
    pub fn with_place(mut self, city: impl Into<String>, country: impl Into<String>) -> Self {
        self.city = city.into();
        self.country = country.into();
        self
    }
}

/// Weather client errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("No location found for: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn loc(name: &str, country: &str) -> Location {
        Location {
            id: 0,
            name: name.to_string(),
            country: country.to_string(),
            admin1: None,
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    #[test]
    fn test_same_place_matches_name_and_country() {
        assert!(loc("Madrid", "España").same_place(&loc("Madrid", "España")));
        assert!(!loc("Madrid", "España").same_place(&loc("Madrid", "México")));
        assert!(!loc("Madrid", "España").same_place(&loc("Toledo", "España")));
    }

    #[test]
    fn test_same_place_ignores_coordinates_and_region() {
        let mut a = loc("Springfield", "Estados Unidos");
        a.admin1 = Some("Illinois".to_string());
        a.latitude = 39.78;
        let mut b = loc("Springfield", "Estados Unidos");
        b.admin1 = Some("Missouri".to_string());
        b.latitude = 37.21;
        // Known looseness: distinct towns collapse to one favorite.
        assert!(a.same_place(&b));
    }

    #[test]
    fn test_location_deserializes_without_optional_fields() {
        let loc: Location = serde_json::from_str(
            r#"{"name": "Madrid", "latitude": 40.4168, "longitude": -3.7038}"#,
        )
        .unwrap();
        assert_eq!(loc.id, 0);
        assert_eq!(loc.country, "");
        assert!(loc.admin1.is_none());
    }
}
