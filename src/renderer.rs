/*
 * Renderer Module
 *
 * This module handles the rendering of the boid simulation.
 * Each boid is drawn as a triangle pointing along its velocity. World
 * coordinates (origin top-left, y down) are stretched over the whole window,
 * the same mapping an orthographic projection of (0, width, height, 0) gives.
 */

use std::f32::consts::PI;

use log::error;
use nannou::prelude::*;

use crate::app::Model;
use crate::boid::Boid;
use crate::ui;
use crate::vector::Vector2;
use crate::world::WorldBounds;
use crate::BOID_SIZE;

// Map a world position onto nannou's centred, y-up window space
pub fn world_to_screen(position: Vector2, bounds: &WorldBounds, window_rect: Rect) -> Vector2 {
    let x = window_rect.left() + position.x / bounds.width * window_rect.w();
    let y = window_rect.top() - position.y / bounds.height * window_rect.h();
    vec2(x, y)
}

/// Triangle corners in world space: one at the nose along the heading and
/// two more a third of a turn apart.
pub fn marker_vertices(boid: &Boid, size: f32) -> [Vector2; 3] {
    let angle = boid.heading();
    let corner = |offset: f32| {
        let a = angle + offset;
        boid.position + vec2(size * a.cos(), size * a.sin())
    };
    [corner(0.0), corner(2.0 * PI / 3.0), corner(4.0 * PI / 3.0)]
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let bounds = model.simulator.bounds();

    for boid in model.simulator.boids() {
        let [a, b, c] = marker_vertices(boid, BOID_SIZE).map(|v| world_to_screen(v, bounds, window_rect));
        draw.tri().points(a, b, c).color(WHITE);
    }

    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        error!("Failed to draw frame: {:?}", e);
    }

    if let Err(e) = model.egui.draw_to_frame(&frame) {
        error!("Failed to draw control panel: {:?}", e);
    }
}
