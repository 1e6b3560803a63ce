//! Shared schedule labels for the fixed simulation tick.

use bevy::prelude::*;

/// Phases of the pre-physics half of the fixed tick, chained in order ahead
/// of the rapier sync:
///
/// ```text
/// Intake → Spin → Aim
/// ```
///
/// Commands are consumed first, platforms advance their rotation, and the
/// grapple aims against the current tick's platform orientation.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
  /// Launch/restart command intake at the tick boundary.
  Intake,
  /// Spinning platforms compound their angle delta.
  Spin,
  /// Grapple arm advance, hit test, joint creation.
  Aim,
}
