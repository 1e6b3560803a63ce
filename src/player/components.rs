use bevy::prelude::*;

#[derive(Component)]
pub struct Player;

/// Highest y the player's body has ever reached; doubles as the score.
/// Non-decreasing across ticks, including across a fall.
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct MaxAltitude(pub f32);

/// Grapple tuning copied from config at spawn. Arm speed is distance per
/// simulation tick.
#[derive(Component, Debug, Clone)]
pub struct GrappleConfig {
  pub arm_speed: f32,
  pub arm_length: f32,
  pub stiffness: f32,
  pub damping: f32,
  pub rest_length: f32,
}

/// The aim/attach state machine driving the spring constraint.
#[derive(Component, Default, Debug, Clone, Copy, PartialEq)]
pub enum GrappleState {
  #[default]
  Idle,
  /// The arm point is flying toward its goal.
  Aiming { arm: Vec2, goal: Vec2 },
  /// A spring joint links the player to `platform`. `offset` is the raw
  /// position difference captured at the moment of attachment; `anchor` is
  /// that offset rotated by the platform's current angle, refreshed every
  /// tick and never trusted across ticks.
  Attached {
    platform: Entity,
    offset: Vec2,
    anchor: Vec2,
  },
}
