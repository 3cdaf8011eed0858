//! Pure condition classification: WMO weather code to icon, description,
//! and background gradient.
//!
//! Icon and description bands are deliberately different: code 1 renders
//! the generic cloud icon but still reads "Cielo Despejado". Keep the two
//! tables independent.

/// Icon category for a weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sun,
    Moon,
    Cloud,
    CloudRain,
    CloudSnow,
    CloudLightning,
}

/// Select the icon for a weather code. Only code 0 gets the sun/moon
/// treatment; codes 1-3 share the generic cloud.
pub fn icon_for(code: i32, is_day: bool) -> Icon {
    match code {
        0 => {
            if is_day {
                Icon::Sun
            } else {
                Icon::Moon
            }
        }
        1..=3 => Icon::Cloud,
        51..=67 => Icon::CloudRain,
        71..=77 => Icon::CloudSnow,
        c if c >= 95 => Icon::CloudLightning,
        _ => Icon::Sun,
    }
}

/// Human-readable condition description (Spanish, as shown in the UI).
pub fn description_for(code: i32) -> &'static str {
    match code {
        0 | 1 => "Cielo Despejado",
        2 => "Parcialmente Nublado",
        3 => "Nublado",
        51..=67 => "Lluvia",
        71..=77 => "Nieve",
        c if c >= 95 => "Tormenta Eléctrica",
        _ => "Condiciones Varias",
    }
}

/// Background gradient: three hex color stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub via: &'static str,
    pub to: &'static str,
}

/// Deep indigo night, used whenever the sun is down.
pub const NIGHT: Gradient = Gradient {
    from: "#0f172a",
    via: "#1e1b4b",
    to: "#312e81",
};

/// Bright sky blue for clear days.
pub const CLEAR_DAY: Gradient = Gradient {
    from: "#60a5fa",
    via: "#3b82f6",
    to: "#2563eb",
};

/// Cloudy gray/blue.
pub const CLOUDY_DAY: Gradient = Gradient {
    from: "#94a3b8",
    via: "#64748b",
    to: "#475569",
};

/// Rainy blue.
pub const RAIN_DAY: Gradient = Gradient {
    from: "#3b82f6",
    via: "#1d4ed8",
    to: "#1e3a8a",
};

/// Snowy white/gray.
pub const SNOW_DAY: Gradient = Gradient {
    from: "#cbd5e1",
    via: "#94a3b8",
    to: "#64748b",
};

/// Stormy purple, kept dark for contrast.
pub const STORM: Gradient = Gradient {
    from: "#5b21b6",
    via: "#4c1d95",
    to: "#1e1b4b",
};

/// Default day gradient for codes outside every band.
pub const DEFAULT_DAY: Gradient = Gradient {
    from: "#3b82f6",
    via: "#2563eb",
    to: "#1d4ed8",
};

/// Select the background gradient. Night overrides every code band.
pub fn gradient_for(code: i32, is_day: bool) -> Gradient {
    if !is_day {
        return NIGHT;
    }

    match code {
        0 => CLEAR_DAY,
        1..=3 => CLOUDY_DAY,
        51..=67 => RAIN_DAY,
        71..=77 => SNOW_DAY,
        c if c >= 95 => STORM,
        _ => DEFAULT_DAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_clear_sky_follows_daylight() {
        assert_eq!(icon_for(0, true), Icon::Sun);
        assert_eq!(icon_for(0, false), Icon::Moon);
    }

    #[test]
    fn test_icon_codes_one_to_three_are_cloud() {
        for code in 1..=3 {
            assert_eq!(icon_for(code, true), Icon::Cloud);
            assert_eq!(icon_for(code, false), Icon::Cloud);
        }
    }

    #[test]
    fn test_icon_rain_band() {
        for code in [51, 55, 61, 63, 67] {
            assert_eq!(icon_for(code, true), Icon::CloudRain);
        }
    }

    #[test]
    fn test_icon_snow_band() {
        for code in [71, 73, 75, 77] {
            assert_eq!(icon_for(code, true), Icon::CloudSnow);
        }
    }

    #[test]
    fn test_icon_thunderstorm_band_is_open_ended() {
        for code in [95, 96, 99, 120] {
            assert_eq!(icon_for(code, true), Icon::CloudLightning);
        }
    }

    #[test]
    fn test_icon_unlisted_codes_default_to_sun() {
        for code in [4, 45, 50, 68, 70, 80, 94] {
            assert_eq!(icon_for(code, true), Icon::Sun);
            assert_eq!(icon_for(code, false), Icon::Sun);
        }
    }

    #[test]
    fn test_description_golden_table() {
        assert_eq!(description_for(0), "Cielo Despejado");
        assert_eq!(description_for(1), "Cielo Despejado");
        assert_eq!(description_for(2), "Parcialmente Nublado");
        assert_eq!(description_for(3), "Nublado");
        for code in [51, 55, 61, 63, 67] {
            assert_eq!(description_for(code), "Lluvia");
        }
        for code in [71, 73, 75, 77] {
            assert_eq!(description_for(code), "Nieve");
        }
        for code in [95, 96, 99] {
            assert_eq!(description_for(code), "Tormenta Eléctrica");
        }
        for code in [4, 45, 50, 68, 70, 80, 94] {
            assert_eq!(description_for(code), "Condiciones Varias");
        }
    }

    #[test]
    fn test_icon_description_boundaries_differ_at_code_one() {
        // Code 1 is clear by description but cloud by icon.
        assert_eq!(description_for(1), description_for(0));
        assert_ne!(icon_for(1, true), icon_for(0, true));
        assert_eq!(icon_for(1, true), Icon::Cloud);
    }

    #[test]
    fn test_gradient_night_overrides_every_band() {
        for code in [0, 1, 2, 3, 51, 61, 71, 77, 95, 99, 42] {
            assert_eq!(gradient_for(code, false), NIGHT);
        }
    }

    #[test]
    fn test_gradient_day_bands() {
        assert_eq!(gradient_for(0, true), CLEAR_DAY);
        assert_eq!(gradient_for(1, true), CLOUDY_DAY);
        assert_eq!(gradient_for(3, true), CLOUDY_DAY);
        assert_eq!(gradient_for(61, true), RAIN_DAY);
        assert_eq!(gradient_for(75, true), SNOW_DAY);
        assert_eq!(gradient_for(96, true), STORM);
        assert_eq!(gradient_for(42, true), DEFAULT_DAY);
    }

    #[test]
    fn test_classification_is_total() {
        // Every code classifies into exactly one description and icon.
        for code in -10..200 {
            let _ = description_for(code);
            let _ = icon_for(code, true);
            let _ = gradient_for(code, true);
        }
    }
}
