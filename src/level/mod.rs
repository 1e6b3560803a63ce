//! Level data: the immutable catalog of platform definitions, load-time
//! validation, and a seeded tower generator for when no level file is
//! configured.

use std::collections::HashSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

/// Platform variant tag carrying the variant-specific field, so telling
/// platforms apart never needs runtime type inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformKind {
  Static,
  Spinning {
    /// Absolute angle delta compounded once per simulation tick.
    angular_speed: f32,
  },
}

/// One immutable platform record. The identity key deduplicating loads is
/// the y coordinate, unique per definition within a level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformDefinition {
  pub x: f32,
  pub y: f32,
  pub width: f32,
  pub height: f32,
  /// Fixed pre-rotation applied once at spawn. Only meaningful for static
  /// platforms; spinning ones start from it and compound onward.
  pub angle: f32,
  pub kind: PlatformKind,
}

impl PlatformDefinition {
  /// Exact-bits identity key.
  pub fn key(&self) -> u32 {
    self.y.to_bits()
  }
}

/// The ordered sequence of platform definitions for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelData {
  pub platforms: Vec<PlatformDefinition>,
}

#[derive(Debug)]
pub enum LevelError {
  Parse(toml::de::Error),
  /// Two definitions share a y coordinate; one of them would silently never
  /// load, so the level is rejected outright.
  DuplicateKey(f32),
  /// A spinning platform without an angular speed.
  MissingAngularSpeed(f32),
}

impl fmt::Display for LevelError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LevelError::Parse(err) => write!(f, "level file is not valid TOML: {err}"),
      LevelError::DuplicateKey(y) => {
        write!(f, "duplicate platform identity key y={y}")
      }
      LevelError::MissingAngularSpeed(y) => {
        write!(f, "spinning platform at y={y} has no angular_speed")
      }
    }
  }
}

impl std::error::Error for LevelError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      LevelError::Parse(err) => Some(err),
      _ => None,
    }
  }
}

#[derive(Deserialize, Debug, Clone)]
struct RawLevel {
  platforms: Vec<RawPlatform>,
}

#[derive(Deserialize, Debug, Clone)]
struct RawPlatform {
  x: f32,
  y: f32,
  width: f32,
  height: f32,
  #[serde(rename = "type")]
  kind: RawKind,
  angular_speed: Option<f32>,
  #[serde(default)]
  angle: f32,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
enum RawKind {
  Platform,
  Spinning,
}

/// Tower-shape parameters for the seeded generator.
#[derive(Deserialize, Debug, Clone)]
pub struct GeneratorConfig {
  pub base_y: f32,
  pub top_y: f32,
  pub spacing_min: f32,
  pub spacing_max: f32,
  pub x_span: f32,
  pub width_min: f32,
  pub width_max: f32,
  pub height: f32,
  pub spinning_chance: f64,
  pub spin_min: f32,
  pub spin_max: f32,
}

impl LevelData {
  /// Parses and validates a TOML level file. Rejects malformed data up
  /// front rather than letting a duplicate key suppress a load later.
  pub fn from_toml_str(raw: &str) -> Result<Self, LevelError> {
    let raw: RawLevel = toml::from_str(raw).map_err(LevelError::Parse)?;
    let mut platforms = Vec::with_capacity(raw.platforms.len());
    for record in raw.platforms {
      let kind = match record.kind {
        RawKind::Platform => PlatformKind::Static,
        RawKind::Spinning => PlatformKind::Spinning {
          angular_speed: record
            .angular_speed
            .ok_or(LevelError::MissingAngularSpeed(record.y))?,
        },
      };
      platforms.push(PlatformDefinition {
        x: record.x,
        y: record.y,
        width: record.width,
        height: record.height,
        angle: record.angle,
        kind,
      });
    }
    let level = LevelData { platforms };
    level.validate()?;
    Ok(level)
  }

  /// Checks the identity-key uniqueness invariant.
  pub fn validate(&self) -> Result<(), LevelError> {
    let mut seen = HashSet::with_capacity(self.platforms.len());
    for def in &self.platforms {
      if !seen.insert(def.key()) {
        return Err(LevelError::DuplicateKey(def.y));
      }
    }
    Ok(())
  }

  /// Builds a tower of platforms from a seeded RNG. Spacing is strictly
  /// positive, so identity keys are unique by construction.
  pub fn generate(seed: u64, cfg: &GeneratorConfig) -> Self {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut platforms = Vec::new();
    let mut y = cfg.base_y;
    while y < cfg.top_y {
      let width = rng.random_range(cfg.width_min..cfg.width_max);
      let x = rng.random_range(-cfg.x_span..cfg.x_span);
      let kind = if rng.random_bool(cfg.spinning_chance) {
        PlatformKind::Spinning {
          angular_speed: rng.random_range(cfg.spin_min..cfg.spin_max),
        }
      } else {
        PlatformKind::Static
      };
      platforms.push(PlatformDefinition {
        x,
        y,
        width,
        height: cfg.height,
        angle: 0.0,
        kind,
      });
      y += rng.random_range(cfg.spacing_min..cfg.spacing_max);
    }
    LevelData { platforms }
  }
}
