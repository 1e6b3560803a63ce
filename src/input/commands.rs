use bevy::ecs::message::{Message, MessageWriter};
use bevy::{prelude::*, window::PrimaryWindow};
use bevy_enhanced_input::prelude::*;

use super::actions::{Confirm, FireGrapple, PlayerInput};
use crate::core::camera::GameCamera;
use crate::session::SessionState;

/// Fire the grapple arm toward a world-space target.
#[derive(Message, Debug, Clone, Copy)]
pub struct LaunchCommand {
  pub target: Vec2,
}

/// Tear the session down and rebuild it.
#[derive(Message, Debug, Clone, Copy)]
pub struct RestartCommand;

fn pressed<A: InputAction>(
  players: &Query<&Actions<PlayerInput>>,
  actions: &Query<(&Action<A>, &ActionState)>,
) -> bool {
  for player_actions in players {
    for action_entity in player_actions.iter() {
      if let Ok((_, state)) = actions.get(action_entity) {
        if matches!(state, ActionState::Fired | ActionState::Ongoing) {
          return true;
        }
      }
    }
  }
  false
}

/// Translates a fire press into an explicit launch command carrying the
/// cursor's world position, consumed at the next fixed tick.
pub fn emit_launch_commands(
  mut pressed_last_frame: Local<bool>,
  players: Query<&Actions<PlayerInput>>,
  fire_actions: Query<(&Action<FireGrapple>, &ActionState)>,
  windows: Query<&Window, With<PrimaryWindow>>,
  cameras: Query<(&Camera, &GlobalTransform), With<GameCamera>>,
  session: Res<State<SessionState>>,
  mut launches: MessageWriter<LaunchCommand>,
) {
  let down = pressed(&players, &fire_actions);
  let just_pressed = down && !*pressed_last_frame;
  *pressed_last_frame = down;

  if !just_pressed || *session.get() != SessionState::Playing {
    return;
  }
  let Ok(window) = windows.single() else {
    return;
  };
  let Some(cursor) = window.cursor_position() else {
    return;
  };
  let Ok((camera, camera_transform)) = cameras.single() else {
    return;
  };
  let Ok(target) = camera.viewport_to_world_2d(camera_transform, cursor) else {
    return;
  };

  debug!("launch command toward {target:?}");
  launches.write(LaunchCommand { target });
}

/// Translates a confirm press on an end screen into a restart command.
pub fn emit_restart_commands(
  mut pressed_last_frame: Local<bool>,
  players: Query<&Actions<PlayerInput>>,
  confirm_actions: Query<(&Action<Confirm>, &ActionState)>,
  session: Res<State<SessionState>>,
  mut restarts: MessageWriter<RestartCommand>,
) {
  let down = pressed(&players, &confirm_actions);
  let just_pressed = down && !*pressed_last_frame;
  *pressed_last_frame = down;

  if just_pressed && *session.get() != SessionState::Playing {
    info!("restart requested");
    restarts.write(RestartCommand);
  }
}
