//! Streaming load/evict of platforms around the player's height.
//!
//! The registry owns the full catalog of definitions and the append-only
//! loaded set; entities themselves live in the ECS and are the separate
//! "active" collection.

use std::collections::HashSet;

use bevy::prelude::*;

use super::platforms::{self, Platform};
use crate::config::ConfigLoaded;
use crate::level::{LevelData, PlatformDefinition};
use crate::player::components::Player;

/// Catalog of every platform definition for the session, plus which identity
/// keys have already been materialized. A key stays in the loaded set for
/// the rest of the session even after its entity is evicted, so a definition
/// is instantiated at most once while the player oscillates. Only a restart
/// clears it.
#[derive(Resource)]
pub struct PlatformRegistry {
  definitions: Vec<PlatformDefinition>,
  loaded: HashSet<u32>,
  load_distance: f32,
}

impl PlatformRegistry {
  pub fn new(definitions: Vec<PlatformDefinition>, load_distance: f32) -> Self {
    Self {
      definitions,
      loaded: HashSet::new(),
      load_distance,
    }
  }

  pub fn load_distance(&self) -> f32 {
    self.load_distance
  }

  pub fn is_loaded(&self, key: u32) -> bool {
    self.loaded.contains(&key)
  }

  /// Definitions strictly inside `(y - load_distance, y + load_distance)`
  /// that have not been materialized yet, in level-data order. Marks their
  /// keys loaded.
  pub fn take_pending(&mut self, y: f32) -> Vec<PlatformDefinition> {
    let mut pending = Vec::new();
    for def in &self.definitions {
      if (def.y - y).abs() < self.load_distance && self.loaded.insert(def.key()) {
        pending.push(*def);
      }
    }
    pending
  }

  /// Forgets every loaded key; the catalog itself is immutable.
  pub fn reset(&mut self) {
    self.loaded.clear();
  }
}

/// Builds the registry from the configured level file, or from the seeded
/// generator when no file is configured. Malformed level data is fatal here,
/// before any world state exists.
pub fn setup_registry(mut commands: Commands, config: Res<ConfigLoaded>) {
  let level = match &config.level.path {
    Some(path) => {
      let raw = std::fs::read_to_string(path).expect("Failed to read level file");
      LevelData::from_toml_str(&raw)
        .unwrap_or_else(|err| panic!("invalid level data in {path}: {err}"))
    }
    None => LevelData::generate(config.level.seed, &config.level.generator),
  };

  info!("level catalog holds {} platform definitions", level.platforms.len());
  commands.insert_resource(PlatformRegistry::new(
    level.platforms,
    config.streaming.load_distance,
  ));
}

/// Materializes every not-yet-loaded definition near the player's height.
/// Runs every tick; a tick with nothing in range is a no-op.
pub fn load_platforms_around_player(
  mut commands: Commands,
  mut registry: ResMut<PlatformRegistry>,
  players: Query<&Transform, With<Player>>,
) {
  let Ok(player) = players.single() else {
    return;
  };
  for def in registry.take_pending(player.translation.y) {
    debug!("materializing platform at y={}", def.y);
    platforms::spawn_platform(&mut commands, &def);
  }
}

/// Performs the initial load around the spawn height, before the first tick
/// has a player position to stream from.
pub fn load_initial_platforms(
  mut commands: Commands,
  mut registry: ResMut<PlatformRegistry>,
  config: Res<ConfigLoaded>,
) {
  for def in registry.take_pending(config.player.spawn_y) {
    platforms::spawn_platform(&mut commands, &def);
  }
}

/// Removes platforms that have fallen out of the retention window behind the
/// player. Their identity keys stay loaded.
pub fn evict_platforms(
  mut commands: Commands,
  registry: Res<PlatformRegistry>,
  players: Query<&Transform, With<Player>>,
  platforms: Query<(Entity, &Transform), (With<Platform>, Without<Player>)>,
) {
  let Ok(player) = players.single() else {
    return;
  };
  let floor = player.translation.y - registry.load_distance();
  for (entity, transform) in &platforms {
    if transform.translation.y < floor {
      debug!("evicting platform at y={}", transform.translation.y);
      commands.entity(entity).despawn();
    }
  }
}
