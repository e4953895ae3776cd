/*
 * Debug Information Module
 *
 * Frame statistics shown in the control panel and the on-screen overlay.
 */

use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub step_time: Duration,
    pub steps: u64,
    // Live population, not the requested one
    pub boids: usize,
    pub average_speed: f32,
}

impl DebugInfo {
    // Population size and mean speed, zero speed for an empty flock
    pub fn record_flock<I: IntoIterator<Item = f32>>(&mut self, speeds: I) {
        let (sum, count) = speeds.into_iter().fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));

        self.boids = count;
        self.average_speed = if count == 0 { 0.0 } else { sum / count as f32 };
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Step time: {:.3} ms", self.step_time.as_secs_f64() * 1000.0),
            format!("Steps: {}", self.steps),
            format!("Boids: {}", self.boids),
            format!("Average speed: {:.2}", self.average_speed),
        ]
    }
}
