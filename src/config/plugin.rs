use bevy::{
  asset::AssetEvent, ecs::message::MessageReader, prelude::*, window::PrimaryWindow,
};
use bevy_common_assets::toml::TomlAssetPlugin;

use super::{ConfigHandle, ConfigLoaded, GameConfig};

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(TomlAssetPlugin::<GameConfig>::new(&["config.toml"]))
      .add_systems(PreStartup, load_config_sync)
      .add_systems(
        Update,
        (watch_config_changes, update_window_on_config_change),
      );
  }
}

fn load_config_sync(mut commands: Commands, asset_server: Res<AssetServer>) {
  // Asset handle keeps the file watched for hot-reload.
  let handle: Handle<GameConfig> = asset_server.load("config/game.config.toml");
  commands.insert_resource(ConfigHandle(handle));

  let config_str = std::fs::read_to_string("assets/config/game.config.toml")
    .expect("Failed to read config file");
  let config: GameConfig = toml::from_str(&config_str).expect("Failed to parse config file");

  commands.insert_resource(ConfigLoaded::from(config));
}

fn watch_config_changes(
  mut commands: Commands,
  config_handle: Res<ConfigHandle>,
  mut messages: MessageReader<AssetEvent<GameConfig>>,
  configs: Res<Assets<GameConfig>>,
) {
  for event in messages.read() {
    if let AssetEvent::Modified { id } = event {
      if config_handle.0.id() == *id {
        if let Some(config) = configs.get(&config_handle.0) {
          info!("Config reloaded!");
          commands.insert_resource(ConfigLoaded::from(config.clone()));
        }
      }
    }
  }
}

fn update_window_on_config_change(
  config: Res<ConfigLoaded>,
  mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
  if config.is_changed() {
    if let Ok(mut window) = windows.single_mut() {
      window
        .resolution
        .set(config.window.width as f32, config.window.height as f32);
      window.title.clone_from(&config.window.title);
    }
  }
}

#[cfg(test)]
mod tests {
  use bevy::asset::AssetPlugin;

  use super::*;
  use crate::config::{
    CameraConfig, LevelConfig, PhysicsConfig, PlayerConfig, SessionConfig, StreamingConfig,
    WindowConfig,
  };
  use crate::level::GeneratorConfig;

  fn config_with_gravity(gravity: f32) -> GameConfig {
    GameConfig {
      window: WindowConfig {
        width: 1200,
        height: 800,
        title: "test".into(),
      },
      camera: CameraConfig {
        viewport_width: 1200.0,
        viewport_height: 800.0,
        smoothness: 8.0,
      },
      physics: PhysicsConfig { gravity },
      player: PlayerConfig {
        spawn_x: 0.0,
        spawn_y: 100.0,
        radius: 50.0,
        restitution: 0.8,
      },
      grapple: crate::config::GrappleConfig {
        arm_speed: 25.0,
        arm_length: 500.0,
        stiffness: 120.0,
        damping: 8.0,
        rest_length: 100.0,
      },
      streaming: StreamingConfig {
        load_distance: 800.0,
      },
      session: SessionConfig {
        victory_height: 15000.0,
        defeat_height: -100.0,
      },
      level: LevelConfig {
        path: None,
        seed: 7,
        generator: GeneratorConfig {
          base_y: 150.0,
          top_y: 2000.0,
          spacing_min: 250.0,
          spacing_max: 450.0,
          x_span: 500.0,
          width_min: 200.0,
          width_max: 420.0,
          height: 30.0,
          spinning_chance: 0.35,
          spin_min: 0.005,
          spin_max: 0.02,
        },
      },
    }
  }

  #[test]
  fn modified_asset_replaces_the_loaded_config() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()));
    app.init_asset::<GameConfig>();
    app.add_systems(Update, watch_config_changes);

    let handle = app
      .world_mut()
      .resource_mut::<Assets<GameConfig>>()
      .add(config_with_gravity(300.0));
    app
      .world_mut()
      .insert_resource(ConfigHandle(handle.clone()));
    app
      .world_mut()
      .insert_resource(ConfigLoaded::from(config_with_gravity(300.0)));
    app.update();

    // Mutating through get_mut is what the file watcher does on reload; it
    // raises AssetEvent::Modified for the handle.
    *app
      .world_mut()
      .resource_mut::<Assets<GameConfig>>()
      .get_mut(&handle)
      .unwrap() = config_with_gravity(700.0);

    // One update to flush the asset event, one for the watcher to consume it.
    app.update();
    app.update();
    assert_eq!(
      app.world().resource::<ConfigLoaded>().physics.gravity,
      700.0
    );
  }

  #[test]
  fn unrelated_asset_changes_leave_the_config_alone() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()));
    app.init_asset::<GameConfig>();
    app.add_systems(Update, watch_config_changes);

    let watched = app
      .world_mut()
      .resource_mut::<Assets<GameConfig>>()
      .add(config_with_gravity(300.0));
    let other = app
      .world_mut()
      .resource_mut::<Assets<GameConfig>>()
      .add(config_with_gravity(900.0));
    app.world_mut().insert_resource(ConfigHandle(watched));
    app
      .world_mut()
      .insert_resource(ConfigLoaded::from(config_with_gravity(300.0)));
    app.update();

    *app
      .world_mut()
      .resource_mut::<Assets<GameConfig>>()
      .get_mut(&other)
      .unwrap() = config_with_gravity(900.0);

    app.update();
    app.update();
    assert_eq!(
      app.world().resource::<ConfigLoaded>().physics.gravity,
      300.0
    );
  }
}
