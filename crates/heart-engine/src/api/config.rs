use serde::{Deserialize, Serialize};

use crate::error::{HeartError, Result};
use crate::renderer::pixel::Rgba8;

/// Tunables for the heart animation. Read once at startup.
///
/// Every field has a default, so a JSON config only needs the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartConfig {
    /// Maximum number of live particles (ring capacity).
    pub capacity: usize,
    /// Particle lifetime in seconds.
    pub duration: f64,
    /// Initial particle speed in pixels per second.
    pub velocity: f64,
    /// Acceleration as a multiple of the initial velocity. Negative values
    /// slow particles down and curl them back.
    pub effect: f64,
    /// Sprite edge length in pixels.
    pub sprite_size: u32,
    /// Sprite fill colour, `#rrggbb`.
    pub color: Rgba8,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            capacity: 3500,
            duration: 2.5,
            velocity: 136.0,
            effect: -0.95,
            sprite_size: 13,
            color: Rgba8::rgb(0x99, 0xff, 0x99),
        }
    }
}

impl HeartConfig {
    /// Parse a config from a JSON string. Does not validate.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the preconditions the pool, driver and sprite rely on.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(HeartError::ZeroCapacity);
        }
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(HeartError::InvalidConfig(format!(
                "duration must be positive, got {}",
                self.duration
            )));
        }
        if !self.velocity.is_finite() || !self.effect.is_finite() {
            return Err(HeartError::InvalidConfig(
                "velocity and effect must be finite".into(),
            ));
        }
        if self.sprite_size == 0 {
            return Err(HeartError::InvalidConfig("sprite_size must be at least 1".into()));
        }
        Ok(())
    }

    /// Particles spawned per second. Chosen so that at steady state the pool
    /// holds exactly one lifetime's worth of particles.
    pub fn particle_rate(&self) -> f64 {
        self.capacity as f64 / self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_tuning() {
        let c = HeartConfig::default();
        assert_eq!(c.capacity, 3500);
        assert_eq!(c.duration, 2.5);
        assert_eq!(c.velocity, 136.0);
        assert_eq!(c.effect, -0.95);
        assert_eq!(c.sprite_size, 13);
        assert_eq!(c.color.to_hex(), "#99ff99");
        assert_eq!(c.particle_rate(), 1400.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn parse_partial_json() {
        let c = HeartConfig::from_json(r##"{ "capacity": 100, "color": "#ff0000" }"##).unwrap();
        assert_eq!(c.capacity, 100);
        assert_eq!(c.color, Rgba8::rgb(255, 0, 0));
        assert_eq!(c.duration, 2.5);
    }

    #[test]
    fn parse_empty_object_gives_defaults() {
        assert_eq!(HeartConfig::from_json("{}").unwrap(), HeartConfig::default());
    }

    #[test]
    fn bad_json_and_bad_color_are_config_errors() {
        assert!(matches!(HeartConfig::from_json("{"), Err(HeartError::Config(_))));
        assert!(matches!(
            HeartConfig::from_json(r#"{ "color": "pink" }"#),
            Err(HeartError::Config(_))
        ));
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let mut c = HeartConfig { capacity: 0, ..Default::default() };
        assert!(matches!(c.validate(), Err(HeartError::ZeroCapacity)));

        c = HeartConfig { duration: 0.0, ..Default::default() };
        assert!(matches!(c.validate(), Err(HeartError::InvalidConfig(_))));

        c = HeartConfig { velocity: f64::NAN, ..Default::default() };
        assert!(c.validate().is_err());

        c = HeartConfig { sprite_size: 0, ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn serializes_color_as_hex() {
        let json = serde_json::to_string(&HeartConfig::default()).unwrap();
        assert!(json.contains("\"#99ff99\""), "{json}");
    }
}
