mod plugin;

use bevy::{asset::Asset, prelude::*, reflect::TypePath};
pub use plugin::ConfigPlugin;
use serde::Deserialize;

use crate::level::GeneratorConfig;

#[derive(Asset, TypePath, Deserialize, Debug, Clone)]
pub struct GameConfig {
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub physics: PhysicsConfig,
  pub player: PlayerConfig,
  pub grapple: GrappleConfig,
  pub streaming: StreamingConfig,
  pub session: SessionConfig,
  pub level: LevelConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WindowConfig {
  pub width: u32,
  pub height: u32,
  pub title: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CameraConfig {
  pub viewport_width: f32,
  pub viewport_height: f32,
  /// Follow smoothing factor (higher = snappier, lower = smoother).
  pub smoothness: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PhysicsConfig {
  pub gravity: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlayerConfig {
  pub spawn_x: f32,
  pub spawn_y: f32,
  pub radius: f32,
  pub restitution: f32,
}

/// Spring and arm tuning for the grapple. Arm speed is distance per
/// simulation tick, matching the fixed 60 Hz step.
#[derive(Deserialize, Debug, Clone)]
pub struct GrappleConfig {
  pub arm_speed: f32,
  pub arm_length: f32,
  pub stiffness: f32,
  pub damping: f32,
  pub rest_length: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StreamingConfig {
  /// Radius around the player's height within which platform definitions
  /// are materialized, and behind which entities are evicted.
  pub load_distance: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SessionConfig {
  pub victory_height: f32,
  pub defeat_height: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LevelConfig {
  /// TOML level file. When absent, the seeded generator builds the tower.
  pub path: Option<String>,
  pub seed: u64,
  pub generator: GeneratorConfig,
}

#[derive(Resource)]
pub struct ConfigHandle(pub Handle<GameConfig>);

#[derive(Resource, Debug, Clone)]
pub struct ConfigLoaded {
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub physics: PhysicsConfig,
  pub player: PlayerConfig,
  pub grapple: GrappleConfig,
  pub streaming: StreamingConfig,
  pub session: SessionConfig,
  pub level: LevelConfig,
}

impl From<GameConfig> for ConfigLoaded {
  fn from(config: GameConfig) -> Self {
    Self {
      window: config.window,
      camera: config.camera,
      physics: config.physics,
      player: config.player,
      grapple: config.grapple,
      streaming: config.streaming,
      session: config.session,
      level: config.level,
    }
  }
}
