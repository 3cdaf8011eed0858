use anyhow::Result;
use std::sync::Arc;

use cielo_session::{FileStorage, WeatherSession};
use cielo_weather::{description_for, round_temperature, UnsupportedGeolocation};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    cielo_core::init()?;

    tracing::info!("Cielo application started");

    let (config, _validation) = cielo_core::Config::load_validated()?;

    let storage = Arc::new(FileStorage::new(config.config_dir.join("state"))?);
    let session =
        WeatherSession::new(&config.weather, storage, Box::new(UnsupportedGeolocation))?;

    // Resolve the last-viewed city (or the default) and fetch it
    session.start().await?;

    let view = session.view();
    match view.snapshot {
        Some(snapshot) => {
            println!(
                "{} — {}°C, {}",
                snapshot.city,
                round_temperature(snapshot.current.temperature),
                description_for(snapshot.current.weather_code)
            );
            println!("Favoritos guardados: {}", view.favorites.len());
        }
        None => {
            let message = view
                .error
                .unwrap_or_else(|| "estado desconocido".to_string());
            println!("No se pudo cargar el tiempo: {}", message);
        }
    }

    Ok(())
}
