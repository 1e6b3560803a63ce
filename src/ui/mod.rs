//! End-screen overlay.

use bevy::prelude::*;
use bevy_egui::{EguiContext, egui};

use crate::player::components::{MaxAltitude, Player};
use crate::session::SessionState;

pub struct UiPlugin;

/// Marker resource indicating egui is ready for UI drawing
#[derive(Resource, Default)]
struct EguiReady(u32);

impl Plugin for UiPlugin {
  fn build(&self, app: &mut App) {
    if !app.is_plugin_added::<bevy_egui::EguiPlugin>() {
      app.add_plugins(bevy_egui::EguiPlugin::default());
    }
    app.init_resource::<EguiReady>();
    app.add_systems(
      Update,
      draw_end_screen.run_if(not(in_state(SessionState::Playing))),
    );
  }
}

fn draw_end_screen(
  mut egui_ctx: Query<&mut EguiContext>,
  session: Res<State<SessionState>>,
  players: Query<&MaxAltitude, With<Player>>,
  mut ready: ResMut<EguiReady>,
) {
  // Skip early frames to allow egui to fully initialize
  if ready.0 < 5 {
    ready.0 += 1;
    return;
  }
  let Ok(ctx) = egui_ctx.single_mut() else {
    return;
  };
  let ctx: &egui::Context = ctx.into_inner().get_mut();

  egui::Area::new(egui::Id::new("end_screen"))
    .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
    .interactable(false)
    .show(ctx, |ui| {
      ui.vertical_centered(|ui| {
        match session.get() {
          SessionState::Won => {
            ui.label(
              egui::RichText::new("Well done!\nThanks for playing!")
                .size(64.0)
                .color(egui::Color32::WHITE),
            );
          }
          SessionState::Lost => {
            ui.label(
              egui::RichText::new("Game Over")
                .size(64.0)
                .color(egui::Color32::WHITE),
            );
            if let Ok(max) = players.single() {
              ui.label(
                egui::RichText::new(format!("Score: {}", max.0.round()))
                  .size(32.0)
                  .color(egui::Color32::WHITE),
              );
            }
          }
          SessionState::Playing => {}
        }
        ui.add_space(24.0);
        ui.label(
          egui::RichText::new("Press SPACE to play again")
            .size(32.0)
            .color(egui::Color32::WHITE),
        );
      });
    });
}
