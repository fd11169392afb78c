// config.rs - Surface geometry, speed bounds and colors

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, LifeResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Drawing surface size in points.
    pub surface_width: u32,
    pub surface_height: u32,
    /// Edge length of one cell's square.
    pub resolution: u32,
    /// Generations per second offered by the speed slider.
    pub min_speed: u32,
    pub max_speed: u32,
    pub initial_speed: u32,
    pub live_color: [u8; 3],
    pub dead_color: [u8; 3],
    pub border_color: [u8; 3],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: 800,
            surface_height: 600,
            resolution: 20,
            min_speed: 1,
            max_speed: 60,
            initial_speed: 10,
            live_color: [0x00, 0x00, 0x00],
            dead_color: [0xff, 0xff, 0xff],
            border_color: [0xcc, 0xcc, 0xcc],
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> LifeResult<Self> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> LifeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> LifeResult<()> {
        if self.resolution == 0 {
            return Err(LifeError::Config("resolution must be positive".into()));
        }
        if self.columns() == 0 || self.rows() == 0 {
            return Err(LifeError::Config(format!(
                "surface {}x{} holds no cell of size {}",
                self.surface_width, self.surface_height, self.resolution
            )));
        }
        if self.min_speed == 0 || self.min_speed > self.max_speed {
            return Err(LifeError::Config(format!(
                "speed range {}..={} is empty or starts at zero",
                self.min_speed, self.max_speed
            )));
        }
        if !(self.min_speed..=self.max_speed).contains(&self.initial_speed) {
            return Err(LifeError::Config(format!(
                "initial speed {} outside {}..={}",
                self.initial_speed, self.min_speed, self.max_speed
            )));
        }
        Ok(())
    }

    pub fn columns(&self) -> usize {
        (self.surface_width / self.resolution.max(1)) as usize
    }

    pub fn rows(&self) -> usize {
        (self.surface_height / self.resolution.max(1)) as usize
    }

    pub fn clamp_speed(&self, speed: u32) -> u32 {
        speed.clamp(self.min_speed, self.max_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_surface_is_forty_by_thirty() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.columns(), 40);
        assert_eq!(config.rows(), 30);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "resolution": 10, "max_speed": 30 }"#).unwrap();
        assert_eq!(config.columns(), 80);
        assert_eq!(config.rows(), 60);
        assert_eq!(config.max_speed, 30);
        assert_eq!(config.initial_speed, 10);
    }

    #[test]
    fn rejects_zero_resolution() {
        let err = Config::from_json(r#"{ "resolution": 0 }"#).unwrap_err();
        assert!(matches!(err, LifeError::Config(_)));
    }

    #[test]
    fn rejects_surface_smaller_than_a_cell() {
        let config = Config {
            surface_width: 10,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(LifeError::Config(_))));
    }

    #[test]
    fn rejects_bad_speed_range() {
        let inverted = Config {
            min_speed: 20,
            max_speed: 5,
            initial_speed: 10,
            ..Config::default()
        };
        assert!(inverted.validate().is_err());

        let outside = Config {
            initial_speed: 61,
            ..Config::default()
        };
        assert!(outside.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = Config::from_json("{ resolution: ").unwrap_err();
        assert!(matches!(err, LifeError::Serialization(_)));
    }

    #[test]
    fn clamp_speed_respects_range() {
        let config = Config::default();
        assert_eq!(config.clamp_speed(0), 1);
        assert_eq!(config.clamp_speed(25), 25);
        assert_eq!(config.clamp_speed(500), 60);
    }
}
