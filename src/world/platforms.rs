use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::level::{PlatformDefinition, PlatformKind};

const PLATFORM_COLOR: Color = Color::srgb(0.39, 0.39, 0.39);

/// A materialized platform: one physics body plus the data the grapple and
/// streamer read each tick.
#[derive(Component, Debug)]
pub struct Platform {
  pub width: f32,
  pub height: f32,
  /// Current absolute orientation. Spinning platforms compound their delta
  /// into this once per tick; static platforms keep their spawn rotation.
  pub angle: f32,
  pub kind: PlatformKind,
}

pub fn spawn_platform(commands: &mut Commands, def: &PlatformDefinition) -> Entity {
  let body = match def.kind {
    PlatformKind::Static => RigidBody::Fixed,
    PlatformKind::Spinning { .. } => RigidBody::KinematicPositionBased,
  };

  commands
    .spawn((
      Platform {
        width: def.width,
        height: def.height,
        angle: def.angle,
        kind: def.kind,
      },
      Sprite {
        color: PLATFORM_COLOR,
        custom_size: Some(Vec2::new(def.width, def.height)),
        ..default()
      },
      Transform::from_xyz(def.x, def.y, 0.0).with_rotation(Quat::from_rotation_z(def.angle)),
      body,
      // Rapier cuboid uses half-extents
      Collider::cuboid(def.width / 2.0, def.height / 2.0),
    ))
    .id()
}

/// Advances every spinning platform by its fixed angle delta. The delta
/// compounds once per simulation tick, so the tick rate sets the spin rate.
/// The body rotation is written from the same angle, keeping the rendered
/// orientation identical to the physics orientation.
pub fn spin_platforms(mut platforms: Query<(&mut Platform, &mut Transform)>) {
  for (mut platform, mut transform) in &mut platforms {
    if let PlatformKind::Spinning { angular_speed } = platform.kind {
      platform.angle += angular_speed;
      transform.rotation = Quat::from_rotation_z(platform.angle);
    }
  }
}
