//! Tunable constants of the particle network.
//!
//! [`FieldConfig::default`] reproduces the hero-banner animation exactly;
//! hosts may override any subset of fields from a JSON document.

use crate::types::Rgba;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a [`FieldConfig`] from disk or text.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for the particle field, fixed once an animator is built.
///
/// Distances are in surface pixels and speeds in pixels per frame. Values
/// are taken as given: a negative count or radius is not rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Particles seeded when the surface is at least `mobile_breakpoint` wide.
    pub desktop_particle_count: usize,
    /// Particles seeded on narrow surfaces.
    pub mobile_particle_count: usize,
    pub mobile_breakpoint: f32,
    /// Pairs closer than this are joined by a line.
    pub max_link_distance: f32,
    /// Scale of the random baseline velocities.
    pub base_speed: f32,
    pub pointer_influence_radius: f32,
    /// Converts normalised repulsion into a velocity delta.
    pub pointer_force_scale: f32,
    /// Fraction of the gap to baseline velocity closed each frame.
    pub damping_factor: f32,
    /// Alpha of a link at zero length; fades linearly to zero at the threshold.
    pub link_alpha: f32,
    pub link_width: f32,
    pub pointer_link_width: f32,
    pub pointer_indicator_radius: f32,
    pub particle_color: Rgba,
    pub pointer_indicator_color: Rgba,
    /// Fixed RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            desktop_particle_count: 50,
            mobile_particle_count: 25,
            mobile_breakpoint: 768.0,
            max_link_distance: 150.0,
            base_speed: 0.3,
            pointer_influence_radius: 150.0,
            pointer_force_scale: 0.5,
            damping_factor: 0.05,
            link_alpha: 0.25,
            link_width: 1.0,
            pointer_link_width: 1.5,
            pointer_indicator_radius: 5.0,
            particle_color: Rgba::new(26, 77, 92, 0.25),
            pointer_indicator_color: Rgba::new(26, 77, 92, 0.3),
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Number of particles to seed for a surface of the given width.
    pub fn particle_count_for(&self, width: f32) -> usize {
        if width < self.mobile_breakpoint {
            self.mobile_particle_count
        } else {
            self.desktop_particle_count
        }
    }

    /// Parses a JSON document; absent fields keep their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json_str(&text)?;
        log::debug!("loaded field config from {}", path.display());
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(320.0, 25)]
    #[case(767.9, 25)]
    #[case(768.0, 50)]
    #[case(1920.0, 50)]
    fn particle_count_follows_mobile_breakpoint(#[case] width: f32, #[case] expected: usize) {
        let cfg = FieldConfig::default();
        assert_eq!(cfg.particle_count_for(width), expected);
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let cfg = FieldConfig::from_json_str(r#"{ "max_link_distance": 90.0, "seed": 7 }"#)
            .expect("valid config");

        assert_eq!(cfg.max_link_distance, 90.0);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.desktop_particle_count, 50);
        assert_eq!(cfg.damping_factor, 0.05);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = FieldConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error_naming_the_path() {
        let err = FieldConfig::load("/definitely/not/here.json").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.json"))
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
