use bevy::{camera::ScalingMode, prelude::*};

use crate::config::ConfigLoaded;
use crate::player::components::Player;

/// Marker component for the game camera
#[derive(Component)]
pub struct GameCamera;

/// Simple orthographic 2D camera setup
pub fn setup_camera(mut commands: Commands, config: Res<ConfigLoaded>) {
  commands.spawn((
    GameCamera,
    Camera2d,
    Camera {
      order: 0,
      clear_color: ClearColorConfig::Custom(Color::srgb(0.86, 0.86, 0.86)),
      ..default()
    },
    Projection::Orthographic(OrthographicProjection {
      near: -1000.0,
      far: 1000.0,
      scale: 1.0,
      viewport_origin: Vec2::new(0.5, 0.5),
      scaling_mode: ScalingMode::AutoMin {
        min_width: config.camera.viewport_width,
        min_height: config.camera.viewport_height,
      },
      area: Rect::default(),
    }),
  ));
}

/// Keeps the camera centered on the player with a smoothed follow.
pub fn camera_follow(
  time: Res<Time>,
  config: Res<ConfigLoaded>,
  players: Query<&Transform, (With<Player>, Without<GameCamera>)>,
  mut cameras: Query<&mut Transform, With<GameCamera>>,
) {
  let Ok(player) = players.single() else {
    return;
  };
  let Ok(mut camera) = cameras.single_mut() else {
    return;
  };

  let target = player.translation.truncate();
  let t = (config.camera.smoothness * time.delta_secs()).min(1.0);
  let next = camera.translation.truncate().lerp(target, t);
  camera.translation.x = next.x;
  camera.translation.y = next.y;
}
