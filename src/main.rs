use bevy::{
  prelude::*,
  window::{PresentMode, WindowResolution},
};
use skyhook::{config, core, input, player, session, ui, world};

fn main() {
  let config_str = std::fs::read_to_string("assets/config/game.config.toml")
    .expect("Failed to read config file");
  let config: config::GameConfig = toml::from_str(&config_str).expect("Failed to parse config");

  let mut app = App::new();

  app.insert_resource(Time::<Fixed>::from_hz(60.0));

  app
    .add_plugins(DefaultPlugins.set(WindowPlugin {
      primary_window: Some(Window {
        resolution: WindowResolution::new(config.window.width, config.window.height),
        title: config.window.title.clone(),
        present_mode: PresentMode::AutoVsync,
        ..default()
      }),
      ..default()
    }))
    .add_plugins(config::ConfigPlugin)
    .add_plugins(core::CorePlugin)
    .add_plugins(input::InputPlugin)
    .add_plugins(session::SessionPlugin)
    .add_plugins(world::WorldPlugin)
    .add_plugins(player::PlayerPlugin)
    .add_plugins(ui::UiPlugin);

  app.run();
}
