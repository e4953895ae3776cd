/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains every
 * tunable value of the simulation. Parameters start from the built-in
 * defaults, can be loaded from a JSON file and can be adjusted through the
 * control panel. It also provides parameter change detection so the app
 * knows when the flock has to be rebuilt.
 */

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::boid::{FlockRules, DEFAULT_MAX_FORCE, DEFAULT_MAX_SPEED};
use crate::simulator::UpdateOrder;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub num_boids: usize,
    pub max_speed: f32,
    pub max_force: f32,
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub separation_radius: f32,
    pub cohesion_amplification: f32,
    pub initial_speed_spread: f32,
    pub update_order: UpdateOrder,
    // Fixed seed for the initial population, fresh entropy when absent
    pub seed: Option<u64>,
    pub window_width: u32,
    pub window_height: u32,
    pub show_debug: bool,
    pub pause_simulation: bool,

    #[serde(skip)]
    pub previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSnapshot {
    num_boids: usize,
    max_speed: f32,
    max_force: f32,
    alignment_radius: f32,
    cohesion_radius: f32,
    separation_radius: f32,
    cohesion_amplification: f32,
    update_order: UpdateOrder,
    show_debug: bool,
    pause_simulation: bool,
}

/// Outcome of comparing the current parameters with the last snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParamChanges {
    pub num_boids_changed: bool,
    pub rules_changed: bool,
    pub any_changed: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: 100,
            max_speed: DEFAULT_MAX_SPEED,
            max_force: DEFAULT_MAX_FORCE,
            alignment_radius: 50.0,
            cohesion_radius: 25.0,
            separation_radius: 25.0,
            cohesion_amplification: 4.0,
            initial_speed_spread: 0.5,
            update_order: UpdateOrder::Sequential,
            seed: None,
            window_width: 1280,
            window_height: 720,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json).context("invalid simulation parameters")?;
        params.validate()?;
        Ok(params)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("failed to load config file {}", path.display()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize simulation parameters")
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.num_boids > 0, "num_boids must be at least 1");
        ensure!(positive(self.max_speed), "max_speed must be positive, got {}", self.max_speed);
        ensure!(positive(self.max_force), "max_force must be positive, got {}", self.max_force);
        ensure!(
            positive(self.alignment_radius),
            "alignment_radius must be positive, got {}",
            self.alignment_radius
        );
        ensure!(
            positive(self.cohesion_radius),
            "cohesion_radius must be positive, got {}",
            self.cohesion_radius
        );
        ensure!(
            positive(self.separation_radius),
            "separation_radius must be positive, got {}",
            self.separation_radius
        );
        ensure!(
            self.cohesion_amplification.is_finite(),
            "cohesion_amplification must be finite"
        );
        ensure!(
            self.initial_speed_spread.is_finite() && self.initial_speed_spread >= 0.0,
            "initial_speed_spread must be zero or positive, got {}",
            self.initial_speed_spread
        );
        ensure!(
            self.window_width > 0 && self.window_height > 0,
            "window size must be non-zero, got {}x{}",
            self.window_width,
            self.window_height
        );
        Ok(())
    }

    pub fn rules(&self) -> FlockRules {
        FlockRules {
            alignment_radius: self.alignment_radius,
            cohesion_radius: self.cohesion_radius,
            separation_radius: self.separation_radius,
            cohesion_amplification: self.cohesion_amplification,
        }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    // Check which parameters have changed since the last snapshot
    pub fn detect_changes(&self) -> ParamChanges {
        let prev = match &self.previous_values {
            Some(prev) => prev,
            None => return ParamChanges::default(),
        };
        let now = self.snapshot();

        let num_boids_changed = now.num_boids != prev.num_boids;
        let rules_changed = now.max_speed != prev.max_speed
            || now.max_force != prev.max_force
            || now.alignment_radius != prev.alignment_radius
            || now.cohesion_radius != prev.cohesion_radius
            || now.separation_radius != prev.separation_radius
            || now.cohesion_amplification != prev.cohesion_amplification
            || now.update_order != prev.update_order;

        ParamChanges {
            num_boids_changed,
            rules_changed,
            any_changed: now != *prev,
        }
    }

    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            num_boids: self.num_boids,
            max_speed: self.max_speed,
            max_force: self.max_force,
            alignment_radius: self.alignment_radius,
            cohesion_radius: self.cohesion_radius,
            separation_radius: self.separation_radius,
            cohesion_amplification: self.cohesion_amplification,
            update_order: self.update_order,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> RangeInclusive<usize> {
        1..=1000
    }

    pub fn get_max_speed_range() -> RangeInclusive<f32> {
        0.5..=10.0
    }

    pub fn get_max_force_range() -> RangeInclusive<f32> {
        0.001..=0.5
    }

    pub fn get_radius_range() -> RangeInclusive<f32> {
        5.0..=150.0
    }

    pub fn get_amplification_range() -> RangeInclusive<f32> {
        0.0..=8.0
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_and_match_rules() {
        let params = SimulationParams::default();
        params.validate().unwrap();
        assert_eq!(params.rules(), FlockRules::default());
        assert_eq!(params.num_boids, 100);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let params = SimulationParams::from_json_str(
            r#"{ "num_boids": 42, "update_order": "snapshot", "seed": 5 }"#,
        )
        .unwrap();
        assert_eq!(params.num_boids, 42);
        assert_eq!(params.update_order, UpdateOrder::Snapshot);
        assert_eq!(params.seed, Some(5));
        assert_eq!(params.max_speed, 2.0);
        assert_eq!(params.cohesion_radius, 25.0);
    }

    #[test]
    fn json_round_trip_preserves_values() {
        let mut params = SimulationParams::default();
        params.separation_radius = 30.0;
        params.seed = Some(11);
        let back = SimulationParams::from_json_str(&params.to_json().unwrap()).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(SimulationParams::from_json_str(r#"{ "num_boids": 0 }"#).is_err());
        assert!(SimulationParams::from_json_str(r#"{ "max_speed": -1.0 }"#).is_err());
        assert!(SimulationParams::from_json_str(r#"{ "separation_radius": 0.0 }"#).is_err());
        assert!(SimulationParams::from_json_str(r#"{ "update_order": "random" }"#).is_err());
        assert!(SimulationParams::from_json_str("not json").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SimulationParams::load("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }

    #[test]
    fn no_snapshot_means_no_changes() {
        let params = SimulationParams::default();
        assert_eq!(params.detect_changes(), ParamChanges::default());
    }

    #[test]
    fn detects_population_and_rule_changes() {
        let mut params = SimulationParams::default();
        params.take_snapshot();
        assert!(!params.detect_changes().any_changed);

        params.num_boids = 50;
        let changes = params.detect_changes();
        assert!(changes.num_boids_changed);
        assert!(!changes.rules_changed);
        assert!(changes.any_changed);

        params.take_snapshot();
        params.alignment_radius = 60.0;
        let changes = params.detect_changes();
        assert!(!changes.num_boids_changed);
        assert!(changes.rules_changed);

        params.take_snapshot();
        params.pause_simulation = true;
        let changes = params.detect_changes();
        assert!(!changes.rules_changed);
        assert!(changes.any_changed);
    }
}
