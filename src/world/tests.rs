use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::platforms::Platform;
use super::streaming::{self, PlatformRegistry};
use crate::level::{PlatformDefinition, PlatformKind};
use crate::player::components::Player;

const LOAD_DISTANCE: f32 = 800.0;

fn definition(y: f32) -> PlatformDefinition {
  PlatformDefinition {
    x: 0.0,
    y,
    width: 300.0,
    height: 30.0,
    angle: 0.0,
    kind: PlatformKind::Static,
  }
}

fn world_with_registry(definitions: Vec<PlatformDefinition>, player_y: f32) -> World {
  let mut world = World::new();
  world.insert_resource(PlatformRegistry::new(definitions, LOAD_DISTANCE));
  world.spawn((Player, Transform::from_xyz(0.0, player_y, 0.0)));
  world
}

fn move_player(world: &mut World, y: f32) {
  let mut players = world.query_filtered::<&mut Transform, With<Player>>();
  players.single_mut(world).unwrap().translation.y = y;
}

fn platform_count(world: &mut World) -> usize {
  world
    .query_filtered::<(), With<Platform>>()
    .iter(world)
    .count()
}

#[test]
fn loading_is_idempotent() {
  let mut world = world_with_registry(
    vec![definition(200.0), definition(600.0), definition(2000.0)],
    100.0,
  );

  world
    .run_system_once(streaming::load_platforms_around_player)
    .unwrap();
  // 2000 is outside the load window around 100.
  assert_eq!(platform_count(&mut world), 2);

  world
    .run_system_once(streaming::load_platforms_around_player)
    .unwrap();
  assert_eq!(platform_count(&mut world), 2);
}

#[test]
fn eviction_clears_everything_behind_the_retention_window() {
  let mut world = world_with_registry(vec![definition(100.0), definition(1300.0)], 100.0);
  world
    .run_system_once(streaming::load_platforms_around_player)
    .unwrap();
  move_player(&mut world, 1300.0);
  world
    .run_system_once(streaming::load_platforms_around_player)
    .unwrap();
  assert_eq!(platform_count(&mut world), 2);

  // Floor is 2000 - 800 = 1200: the platform at 100 goes, 1300 stays.
  move_player(&mut world, 2000.0);
  world.run_system_once(streaming::evict_platforms).unwrap();

  let mut remaining = world.query_filtered::<&Transform, With<Platform>>();
  let positions: Vec<f32> = remaining
    .iter(&world)
    .map(|t| t.translation.y)
    .collect();
  assert_eq!(positions, vec![1300.0]);
}

#[test]
fn evicted_definitions_are_not_reloaded_within_a_session() {
  let mut world = world_with_registry(vec![definition(200.0)], 100.0);

  world
    .run_system_once(streaming::load_platforms_around_player)
    .unwrap();
  assert_eq!(platform_count(&mut world), 1);

  // Player climbs far away; the platform leaves the retention window.
  move_player(&mut world, 2000.0);
  world.run_system_once(streaming::evict_platforms).unwrap();
  assert_eq!(platform_count(&mut world), 0);

  // Coming back down does not reinstantiate it: its key stays loaded.
  for y in [1900.0, 100.0] {
    move_player(&mut world, y);
    world
      .run_system_once(streaming::load_platforms_around_player)
      .unwrap();
    assert_eq!(platform_count(&mut world), 0);
  }
  let registry = world.resource::<PlatformRegistry>();
  assert!(registry.is_loaded(200.0_f32.to_bits()));
}

#[test]
fn reset_allows_reloading_after_restart() {
  let mut world = world_with_registry(vec![definition(200.0)], 100.0);
  world
    .run_system_once(streaming::load_platforms_around_player)
    .unwrap();

  move_player(&mut world, 2000.0);
  world.run_system_once(streaming::evict_platforms).unwrap();
  world.resource_mut::<PlatformRegistry>().reset();

  move_player(&mut world, 100.0);
  world
    .run_system_once(streaming::load_platforms_around_player)
    .unwrap();
  assert_eq!(platform_count(&mut world), 1);
}

#[test]
fn load_window_bounds_are_strict() {
  // Definitions exactly at y ± load_distance stay out of the window.
  let mut world = world_with_registry(
    vec![definition(100.0 - LOAD_DISTANCE), definition(100.0 + LOAD_DISTANCE)],
    100.0,
  );
  world
    .run_system_once(streaming::load_platforms_around_player)
    .unwrap();
  assert_eq!(platform_count(&mut world), 0);
}
