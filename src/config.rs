//! Render settings.

use log::warn;

use crate::color::{self, Color};
use crate::point_store::GrowthPolicy;

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 500;
pub const DEFAULT_STEP: usize = 20;
/// Largest width or height accepted from the environment.
pub const MAX_DIMENSION: u32 = 16_384;

/// Settings shared by everything that builds and renders a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    /// Growth policy for point stores created by the scene builder.
    pub growth: GrowthPolicy,
    /// Samples per circle for sphere, torus, circle and curve generators.
    pub step: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: color::BLACK,
            growth: GrowthPolicy::default(),
            step: DEFAULT_STEP,
        }
    }
}

impl RenderConfig {
    /// Defaults overridden by `ZRASTER_WIDTH`, `ZRASTER_HEIGHT` and
    /// `ZRASTER_STEP`. Unparsable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(width) = parse_dimension(&lookup, "ZRASTER_WIDTH") {
            config.width = width;
        }
        if let Some(height) = parse_dimension(&lookup, "ZRASTER_HEIGHT") {
            config.height = height;
        }
        if let Some(step) = parse_var(&lookup, "ZRASTER_STEP") {
            config.step = step;
        }
        config
    }
}

fn parse_var<T: std::str::FromStr>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {key}={raw:?}: not a valid number");
            None
        }
    }
}

fn parse_dimension(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<u32> {
    let value: u32 = parse_var(lookup, key)?;
    if value == 0 || value > MAX_DIMENSION {
        warn!("ignoring {key}={value}: must be in 1..={MAX_DIMENSION}");
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_overrides_defaults() {
        let config = RenderConfig::from_lookup(|key| match key {
            "ZRASTER_WIDTH" => Some("640".into()),
            "ZRASTER_STEP" => Some(" 8 ".into()),
            _ => None,
        });
        assert_eq!(config.width, 640);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.step, 8);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = RenderConfig::from_lookup(|key| match key {
            "ZRASTER_HEIGHT" => Some("tall".into()),
            _ => None,
        });
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn out_of_range_dimensions_fall_back() {
        let config = RenderConfig::from_lookup(|key| match key {
            "ZRASTER_WIDTH" => Some("0".into()),
            "ZRASTER_HEIGHT" => Some("100000".into()),
            _ => None,
        });
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);

        let config = RenderConfig::from_lookup(|key| match key {
            "ZRASTER_WIDTH" => Some(MAX_DIMENSION.to_string()),
            _ => None,
        });
        assert_eq!(config.width, MAX_DIMENSION);
    }
}
