//! Session lifecycle: the playing/won/lost state machine and the restart
//! teardown/rebuild.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::ConfigLoaded;
use crate::input::RestartCommand;
use crate::player::components::Player;
use crate::world::platforms::Platform;
use crate::world::streaming::PlatformRegistry;

/// Top-level session state. Won and Lost are terminal until an explicit
/// restart tears the world down and rebuilds it.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
  #[default]
  Playing,
  Won,
  Lost,
}

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
  fn build(&self, app: &mut App) {
    app
      .init_state::<SessionState>()
      .add_message::<RestartCommand>()
      .add_systems(
        FixedUpdate,
        check_session_outcome
          .run_if(in_state(SessionState::Playing))
          .after(PhysicsSet::Writeback),
      )
      .add_systems(
        Update,
        handle_restart.run_if(not(in_state(SessionState::Playing))),
      )
      .add_systems(OnExit(SessionState::Playing), suspend_physics)
      .add_systems(OnEnter(SessionState::Playing), resume_physics);
  }
}

/// Threshold checks, once per tick, victory before defeat.
fn check_session_outcome(
  config: Res<ConfigLoaded>,
  players: Query<&Transform, With<Player>>,
  mut next: ResMut<NextState<SessionState>>,
) {
  let Ok(player) = players.single() else {
    return;
  };
  let y = player.translation.y;
  if y >= config.session.victory_height {
    info!("session won at y={y}");
    next.set(SessionState::Won);
  } else if y <= config.session.defeat_height {
    info!("session lost at y={y}");
    next.set(SessionState::Lost);
  }
}

/// Freezes the simulation while an end screen is up.
fn suspend_physics(mut contexts: Query<&mut RapierConfiguration>) {
  for mut context in &mut contexts {
    context.physics_pipeline_active = false;
  }
}

fn resume_physics(mut contexts: Query<&mut RapierConfiguration>) {
  for mut context in &mut contexts {
    context.physics_pipeline_active = true;
  }
}

/// Synchronous full teardown: despawn the player and every platform and
/// forget what was loaded, then re-enter Playing, which respawns the player
/// and reloads the platforms around the spawn height.
fn handle_restart(
  mut restarts: MessageReader<RestartCommand>,
  mut commands: Commands,
  mut registry: ResMut<PlatformRegistry>,
  players: Query<Entity, With<Player>>,
  platforms: Query<Entity, With<Platform>>,
  mut next: ResMut<NextState<SessionState>>,
) {
  if restarts.read().next().is_none() {
    return;
  }

  info!("restarting session");
  for entity in &players {
    commands.entity(entity).despawn();
  }
  for entity in &platforms {
    commands.entity(entity).despawn();
  }
  registry.reset();
  next.set(SessionState::Playing);
}
