//! The grapple state machine: aim, attach, and per-tick anchor upkeep.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{GrappleConfig, GrappleState, MaxAltitude, Player};
use crate::input::LaunchCommand;
use crate::world::platforms::Platform;

/// Moves `arm` toward `goal` by at most `speed`, snapping exactly onto the
/// goal on the tick it would otherwise overshoot. Returns the new point and
/// whether it snapped.
pub fn step_arm(arm: Vec2, goal: Vec2, speed: f32) -> (Vec2, bool) {
  let delta = goal - arm;
  if delta.length() > speed {
    (arm + delta.normalize() * speed, false)
  } else {
    (goal, true)
  }
}

/// World-relative platform-side anchor: the stored offset rotated by the
/// platform's current absolute angle.
pub fn rotated_anchor(offset: Vec2, angle: f32) -> Vec2 {
  Vec2::from_angle(angle).rotate(offset)
}

/// Intake for launch commands delivered at the tick boundary. Launching
/// always detaches first, then restarts aiming from the body's position.
pub fn process_launch_commands(
  mut launches: MessageReader<LaunchCommand>,
  mut commands: Commands,
  mut players: Query<(Entity, &Transform, &mut GrappleState), With<Player>>,
) {
  let Some(launch) = launches.read().last().copied() else {
    return;
  };
  for (entity, transform, mut state) in &mut players {
    if matches!(*state, GrappleState::Attached { .. }) {
      commands.entity(entity).remove::<ImpulseJoint>();
    }
    *state = GrappleState::Aiming {
      arm: transform.translation.truncate(),
      goal: launch.target,
    };
  }
}

/// Advances the aiming arm one tick: move toward the goal, test the arm
/// point against the active platforms, and either attach a spring joint,
/// keep flying, or give up.
pub fn advance_aim(
  mut commands: Commands,
  rapier: ReadRapierContext,
  mut players: Query<(Entity, &Transform, &GrappleConfig, &mut GrappleState), With<Player>>,
  platforms: Query<(&Transform, &Platform), Without<Player>>,
) {
  for (entity, transform, config, mut state) in &mut players {
    let GrappleState::Aiming { arm, goal } = *state else {
      continue;
    };

    let (arm, snapped) = step_arm(arm, goal, config.arm_speed);
    if snapped {
      // Reached the goal without finding anything to hold on to.
      *state = GrappleState::Idle;
      continue;
    }

    let hit = rapier.single().ok().and_then(|context| {
      let predicate = |entity: Entity| platforms.contains(entity);
      let mut found = None;
      context.intersect_point(
        arm,
        QueryFilter::default().predicate(&predicate),
        |platform_entity| {
          found = Some(platform_entity);
          false
        },
      );
      found
    });

    if let Some(platform_entity) = hit {
      let Ok((platform_transform, platform)) = platforms.get(platform_entity) else {
        continue;
      };
      // Raw position difference at the moment of attachment; from here on
      // it is the platform-side local anchor.
      let offset = arm - platform_transform.translation.truncate();
      let joint = SpringJointBuilder::new(config.rest_length, config.stiffness, config.damping)
        .local_anchor1(Vec2::ZERO)
        .local_anchor2(offset)
        .build();
      commands
        .entity(entity)
        .insert(ImpulseJoint::new(platform_entity, joint));
      info!("grapple attached to platform at offset {offset:?}");
      *state = GrappleState::Attached {
        platform: platform_entity,
        offset,
        anchor: rotated_anchor(offset, platform.angle),
      };
      continue;
    }

    if arm.distance(transform.translation.truncate()) > config.arm_length {
      // Overextended without a hit.
      *state = GrappleState::Idle;
      continue;
    }

    *state = GrappleState::Aiming { arm, goal };
  }
}

/// Re-derives the platform-side anchor from the platform's current rotation,
/// once per tick. Mandatory while hanging from a spinning platform; a
/// constant rotation for static ones. Also detaches if the platform entity
/// has disappeared underneath the constraint.
pub fn reproject_anchor(
  mut commands: Commands,
  mut players: Query<(Entity, &mut GrappleState), With<Player>>,
  platforms: Query<&Platform>,
) {
  for (entity, mut state) in &mut players {
    let GrappleState::Attached {
      platform, offset, ..
    } = *state
    else {
      continue;
    };
    match platforms.get(platform) {
      Ok(p) => {
        *state = GrappleState::Attached {
          platform,
          offset,
          anchor: rotated_anchor(offset, p.angle),
        };
      }
      Err(_) => {
        commands.entity(entity).remove::<ImpulseJoint>();
        *state = GrappleState::Idle;
      }
    }
  }
}

/// Score tracking, independent of grapple state.
pub fn track_max_altitude(mut players: Query<(&Transform, &mut MaxAltitude), With<Player>>) {
  for (transform, mut max) in &mut players {
    if transform.translation.y > max.0 {
      max.0 = transform.translation.y;
    }
  }
}

/// Draws the arm while aiming and the taut line while attached.
pub fn draw_grapple(
  players: Query<(&Transform, &GrappleState), With<Player>>,
  platforms: Query<&Transform, (With<Platform>, Without<Player>)>,
  mut gizmos: Gizmos,
) {
  for (transform, state) in &players {
    let from = transform.translation.truncate();
    match *state {
      GrappleState::Aiming { arm, .. } => {
        gizmos.line_2d(from, arm, Color::WHITE);
      }
      GrappleState::Attached {
        platform, anchor, ..
      } => {
        if let Ok(platform_transform) = platforms.get(platform) {
          gizmos.line_2d(
            from,
            platform_transform.translation.truncate() + anchor,
            Color::WHITE,
          );
        }
      }
      GrappleState::Idle => {}
    }
  }
}
