/*
 * UI Module
 *
 * Control panel built with nannou_egui. It exposes the flocking parameters,
 * pause and reset controls and a few frame statistics. Parameter change
 * detection is handled by SimulationParams.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{ParamChanges, SimulationParams};
use crate::simulator::UpdateOrder;

// Update the UI and return whether a reset was requested plus what changed
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> (bool, ParamChanges) {
    let mut should_reset_boids = false;

    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range()).text("Number of Boids"));
                if ui.button("Reset Boids").clicked() {
                    should_reset_boids = true;
                }
                ui.add(egui::Slider::new(&mut params.max_speed, SimulationParams::get_max_speed_range()).text("Max Speed"));
                ui.add(egui::Slider::new(&mut params.max_force, SimulationParams::get_max_force_range()).text("Max Force"));
            });

            ui.collapsing("Flocking Behavior", |ui| {
                ui.add(egui::Slider::new(&mut params.alignment_radius, SimulationParams::get_radius_range()).text("Alignment Radius"));
                ui.add(egui::Slider::new(&mut params.cohesion_radius, SimulationParams::get_radius_range()).text("Cohesion Radius"));
                ui.add(egui::Slider::new(&mut params.separation_radius, SimulationParams::get_radius_range()).text("Separation Radius"));
                ui.add(egui::Slider::new(&mut params.cohesion_amplification, SimulationParams::get_amplification_range()).text("Cohesion Amplification"));

                ui.label("Update order");
                ui.radio_value(&mut params.update_order, UpdateOrder::Sequential, "Sequential (in place)");
                ui.radio_value(&mut params.update_order, UpdateOrder::Snapshot, "Snapshot");
            });

            ui.separator();
            for line in debug_info.lines() {
                ui.label(line);
            }

            ui.checkbox(&mut params.show_debug, "Show Debug Overlay");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    (should_reset_boids, params.detect_changes())
}

// Draw debug information in the top-left corner of the window
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let lines = debug_info.lines();

    let panel_width = 220.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    draw.rect()
        .x_y(window_rect.left() + panel_width / 2.0, window_rect.top() - panel_height / 2.0)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;
    for (i, text) in lines.iter().enumerate() {
        draw.text(text)
            .x_y(text_x + 80.0, text_y - i as f32 * line_height)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
