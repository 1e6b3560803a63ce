use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::actions::{Confirm, FireGrapple, PlayerInput};

pub fn player_input_actions() -> impl Bundle {
  actions!(PlayerInput[
      (
          Action::<FireGrapple>::new(),
          bindings![MouseButton::Left],
      ),
      (
          Action::<Confirm>::new(),
          bindings![KeyCode::Space, KeyCode::Enter],
      ),
  ])
}
