//! Forecast retrieval from the Open-Meteo forecast API.
//!
//! The endpoint is name-agnostic: it returns conditions for coordinates,
//! and the caller attaches the display name afterwards.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use crate::types::{
    CurrentConditions, DailyEntry, HourlyEntry, WeatherError, WeatherSnapshot,
};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,is_day,\
                              precipitation,weather_code,cloud_cover,pressure_msl,\
                              wind_speed_10m,wind_direction_10m";
const HOURLY_FIELDS: &str = "temperature_2m,weather_code";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,sunrise,sunset,\
                            uv_index_max";

// Open-Meteo timestamps carry minute precision and no zone suffix.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
    hourly: HourlyBlock,
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    relative_humidity_2m: u8,
    apparent_temperature: f64,
    is_day: u8,
    precipitation: f64,
    weather_code: i32,
    cloud_cover: u8,
    pressure_msl: f64,
    wind_speed_10m: f64,
    wind_direction_10m: u16,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    weather_code: Vec<i32>,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    weather_code: Vec<i32>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    sunrise: Vec<String>,
    sunset: Vec<String>,
    uv_index_max: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch current conditions plus the hourly and 7-day series for the
    /// given coordinates. The returned snapshot has empty city/country.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current={}&hourly={}&daily={}&timezone=auto",
            self.base_url, latitude, longitude, CURRENT_FIELDS, HOURLY_FIELDS, DAILY_FIELDS,
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        Ok(WeatherSnapshot {
            city: String::new(),
            country: String::new(),
            current: CurrentConditions {
                temperature: body.current.temperature_2m,
                apparent_temperature: body.current.apparent_temperature,
                relative_humidity: body.current.relative_humidity_2m,
                precipitation: body.current.precipitation,
                cloud_cover: body.current.cloud_cover,
                pressure_msl: body.current.pressure_msl,
                wind_speed: body.current.wind_speed_10m,
                wind_direction: body.current.wind_direction_10m,
                weather_code: body.current.weather_code,
                is_day: body.current.is_day != 0,
            },
            hourly: parse_hourly(body.hourly)?,
            daily: parse_daily(body.daily)?,
            fetched_at: Utc::now(),
        })
    }
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(raw, TIME_FORMAT)
        .map_err(|e| WeatherError::Parse(format!("bad timestamp {raw:?}: {e}")))
}

fn parse_date(raw: &str) -> Result<NaiveDate, WeatherError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| WeatherError::Parse(format!("bad date {raw:?}: {e}")))
}

/// Zip the hourly parallel arrays, requiring equal lengths.
fn parse_hourly(block: HourlyBlock) -> Result<Vec<HourlyEntry>, WeatherError> {
    if block.time.len() != block.temperature_2m.len()
        || block.time.len() != block.weather_code.len()
    {
        return Err(WeatherError::Parse(
            "hourly series lengths do not match".to_string(),
        ));
    }

    block
        .time
        .iter()
        .zip(block.temperature_2m)
        .zip(block.weather_code)
        .map(|((time, temperature), weather_code)| {
            Ok(HourlyEntry {
                time: parse_timestamp(time)?,
                temperature,
                weather_code,
            })
        })
        .collect()
}

/// Zip the daily parallel arrays, requiring equal lengths.
fn parse_daily(block: DailyBlock) -> Result<Vec<DailyEntry>, WeatherError> {
    let n = block.time.len();
    if [
        block.weather_code.len(),
        block.temperature_2m_max.len(),
        block.temperature_2m_min.len(),
        block.sunrise.len(),
        block.sunset.len(),
        block.uv_index_max.len(),
    ]
    .iter()
    .any(|&len| len != n)
    {
        return Err(WeatherError::Parse(
            "daily series lengths do not match".to_string(),
        ));
    }

    (0..n)
        .map(|i| {
            Ok(DailyEntry {
                date: parse_date(&block.time[i])?,
                weather_code: block.weather_code[i],
                temp_max: block.temperature_2m_max[i],
                temp_min: block.temperature_2m_min[i],
                sunrise: parse_timestamp(&block.sunrise[i])?,
                sunset: parse_timestamp(&block.sunset[i])?,
                uv_index_max: block.uv_index_max[i],
            })
        })
        .collect()
}
