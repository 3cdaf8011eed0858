//! Small display-format helpers shared by the presentation layer.

use chrono::NaiveDateTime;

/// Round a temperature to the integer shown in the UI.
pub fn round_temperature(celsius: f64) -> i32 {
    celsius.round() as i32
}

/// Format an hourly timestamp as "HH:MM".
pub fn format_hour(time: NaiveDateTime) -> String {
    time.format("%H:%M").to_string()
}
