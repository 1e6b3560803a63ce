pub mod components;
pub mod grapple;
mod spawn;


use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::schedule::SimulationSet;
use crate::input::LaunchCommand;
use crate::session::SessionState;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
  fn build(&self, app: &mut App) {
    app
      .configure_sets(
        FixedUpdate,
        (SimulationSet::Intake, SimulationSet::Spin, SimulationSet::Aim)
          .chain()
          .before(PhysicsSet::SyncBackend),
      )
      .add_message::<LaunchCommand>()
      .add_systems(OnEnter(SessionState::Playing), spawn::spawn_player)
      // Command intake and aiming feed the physics step, with the platform
      // spin phase between them.
      .add_systems(
        FixedUpdate,
        grapple::process_launch_commands
          .run_if(in_state(SessionState::Playing))
          .in_set(SimulationSet::Intake),
      )
      .add_systems(
        FixedUpdate,
        grapple::advance_aim
          .run_if(in_state(SessionState::Playing))
          .in_set(SimulationSet::Aim),
      )
      // Score and anchor upkeep read the stepped positions.
      .add_systems(
        FixedUpdate,
        (grapple::track_max_altitude, grapple::reproject_anchor)
          .chain()
          .run_if(in_state(SessionState::Playing))
          .after(PhysicsSet::Writeback),
      )
      .add_systems(Update, grapple::draw_grapple);
  }
}
