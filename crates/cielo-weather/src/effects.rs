//! Ambient-effect lookup tables.
//!
//! Each condition band maps to a fixed set of particle layers (or a glow
//! variant for clear skies). These are static presentation tables; the
//! renderer scales and animates them, nothing here is computed.

/// One depth layer of falling particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleLayer {
    /// Particles in this layer
    pub count: u16,
    /// Layer opacity, 0..=1
    pub opacity: f32,
    /// Fall-speed multiplier relative to the middle layer
    pub speed: f32,
    /// Particle-size multiplier relative to the middle layer
    pub size: f32,
    /// Blur radius in pixels
    pub blur: f32,
}

const fn layer(count: u16, opacity: f32, speed: f32, size: f32, blur: f32) -> ParticleLayer {
    ParticleLayer {
        count,
        opacity,
        speed,
        size,
        blur,
    }
}

/// Rain depth stack, far background to very close foreground.
pub const RAIN_LAYERS: [ParticleLayer; 5] = [
    layer(80, 0.20, 0.5, 0.6, 1.0),
    layer(120, 0.40, 0.7, 0.8, 0.5),
    layer(150, 0.70, 1.0, 1.0, 0.0),
    layer(80, 0.90, 1.4, 1.3, 0.0),
    layer(40, 0.95, 1.8, 1.5, 0.5),
];

/// Snow depth stack, far background to very close foreground.
pub const SNOW_LAYERS: [ParticleLayer; 5] = [
    layer(60, 0.30, 0.4, 0.6, 2.0),
    layer(70, 0.50, 0.6, 0.8, 1.5),
    layer(80, 0.75, 1.0, 1.0, 0.5),
    layer(50, 0.90, 1.3, 1.4, 0.0),
    layer(30, 0.95, 1.5, 1.8, 0.0),
];

/// Storm rain: a single dense, fast sheet behind the lightning flash.
pub const STORM_LAYERS: [ParticleLayer; 1] = [layer(150, 1.0, 1.5, 1.2, 0.0)];

/// Ambient effect for a condition band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Warm sun glow
    ClearDay,
    /// Cool moon glow
    ClearNight,
    /// Slow drifting cloud shapes
    CloudDrift,
    Rain(&'static [ParticleLayer]),
    Snow(&'static [ParticleLayer]),
    Storm {
        rain: &'static [ParticleLayer],
        flash: bool,
    },
    None,
}

/// Look up the ambient effect for a weather code.
pub fn ambient_effect(code: i32, is_day: bool) -> Effect {
    match code {
        0 | 1 => {
            if is_day {
                Effect::ClearDay
            } else {
                Effect::ClearNight
            }
        }
        2..=3 => Effect::CloudDrift,
        51..=67 => Effect::Rain(&RAIN_LAYERS),
        71..=77 => Effect::Snow(&SNOW_LAYERS),
        c if c >= 95 => Effect::Storm {
            rain: &STORM_LAYERS,
            flash: true,
        },
        _ => Effect::None,
    }
}
