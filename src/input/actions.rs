use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

#[derive(Component)]
pub struct PlayerInput;

/// Fires the grapple arm toward the cursor.
#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct FireGrapple;

/// Confirm action; restarts the session from an end screen.
#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct Confirm;
