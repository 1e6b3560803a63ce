use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{GrappleConfig, GrappleState, MaxAltitude, Player};
use crate::config::ConfigLoaded;
use crate::input::{PlayerInput, player_input_actions};

/// Spawns the player body at the configured spawn position. Runs on every
/// entry into Playing, so a restart rebuilds the player from scratch.
pub fn spawn_player(
  mut commands: Commands,
  config: Res<ConfigLoaded>,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<ColorMaterial>>,
) {
  let player = &config.player;
  let grapple = &config.grapple;
  let spawn = Vec2::new(player.spawn_x, player.spawn_y);

  commands.spawn((
    Player,
    Mesh2d(meshes.add(Circle::new(player.radius))),
    MeshMaterial2d(materials.add(Color::WHITE)),
    Transform::from_xyz(spawn.x, spawn.y, 1.0),
    RigidBody::Dynamic,
    Collider::ball(player.radius),
    Restitution::coefficient(player.restitution),
    Ccd::enabled(),
    GrappleConfig {
      arm_speed: grapple.arm_speed,
      arm_length: grapple.arm_length,
      stiffness: grapple.stiffness,
      damping: grapple.damping,
      rest_length: grapple.rest_length,
    },
    GrappleState::default(),
    MaxAltitude::default(),
    PlayerInput,
    player_input_actions(),
  ));

  info!("player spawned at {spawn:?}");
}
