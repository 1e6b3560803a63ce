pub mod actions;
mod bindings;
mod commands;

pub use actions::{Confirm, FireGrapple, PlayerInput};
use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;
pub use bindings::player_input_actions;
pub use commands::{LaunchCommand, RestartCommand};

pub struct InputPlugin;

impl Plugin for InputPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(EnhancedInputPlugin)
      .add_input_context::<PlayerInput>()
      .add_systems(
        Update,
        (commands::emit_launch_commands, commands::emit_restart_commands),
      );
  }
}
