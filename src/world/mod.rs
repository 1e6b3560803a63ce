pub mod platforms;
pub mod streaming;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::schedule::SimulationSet;
use crate::session::SessionState;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
  fn build(&self, app: &mut App) {
    app
      .configure_sets(
        FixedUpdate,
        (SimulationSet::Intake, SimulationSet::Spin, SimulationSet::Aim)
          .chain()
          .before(PhysicsSet::SyncBackend),
      )
      .add_systems(Startup, streaming::setup_registry)
      .add_systems(OnEnter(SessionState::Playing), streaming::load_initial_platforms)
      .add_systems(
        FixedUpdate,
        platforms::spin_platforms
          .run_if(in_state(SessionState::Playing))
          .in_set(SimulationSet::Spin),
      )
      .add_systems(
        FixedUpdate,
        (
          streaming::load_platforms_around_player,
          streaming::evict_platforms,
        )
          .chain()
          .run_if(in_state(SessionState::Playing))
          .after(PhysicsSet::Writeback),
      );
  }
}
