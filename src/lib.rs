//! A vertically scrolling grapple-hook climber: the player body is flung
//! upward by spring constraints fired at procedurally streamed platforms,
//! racing to the victory height before dropping below the floor.

pub mod config;
pub mod core;
pub mod input;
pub mod level;
pub mod player;
pub mod session;
pub mod ui;
pub mod world;
