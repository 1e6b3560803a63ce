use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::ConfigLoaded;

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().with_length_unit(50.0))
      .add_systems(Update, apply_gravity_config);
  }
}

/// Pushes the configured gravity into the rapier context, both on the first
/// frame and after a config hot-reload.
fn apply_gravity_config(
  config: Res<ConfigLoaded>,
  mut contexts: Query<&mut RapierConfiguration>,
) {
  if config.is_changed() {
    for mut context in &mut contexts {
      context.gravity = Vec2::new(0.0, -config.physics.gravity);
    }
  }
}
