use legion::*;
use log::debug;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationData {
    pub frame: u64,
    pub last_simulated: i64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Frames advanced per step; velocities are in units per frame.
    pub time_delta: f64,
    /// Minimum wall-clock milliseconds between two frames.
    pub frame_time_cap: i64,
    /// Length multiplier for the velocity overlay.
    pub velocity_scale: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            time_delta: 1.0,
            frame_time_cap: 16,
            velocity_scale: 5.0,
        }
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

pub fn init_simulation(resources: &mut Resources, simulation_config: SimulationConfig) {
    resources.insert(SimulationData {
        frame: 0,
        last_simulated: now_millis(),
    });
    resources.insert(simulation_config);
}

/// One frame: resolve contacts on last frame's positions, move every body,
/// draw, then wait out the rest of the frame.
pub fn build_schedule() -> Schedule {
    Schedule::builder()
        .add_system(crate::collision::collision_system())
        .add_system(crate::advance::advance_bodies_system())
        .add_thread_local(crate::render::render_bodies_system())
        .add_system(advance_time_system())
        .build()
}

#[system]
pub fn advance_time(
    #[resource] simulation_data: &mut SimulationData,
    #[resource] simulation_config: &SimulationConfig,
) {
    simulation_data.frame += 1;
    let current_time = now_millis();
    let frame_time = current_time - simulation_data.last_simulated;
    debug!("Frame {} time: {}", simulation_data.frame, frame_time);
    let ms_to_sleep = std::cmp::max(0, simulation_config.frame_time_cap - frame_time) as u64;
    if ms_to_sleep > 0 {
        std::thread::sleep(Duration::from_millis(ms_to_sleep));
    }
    simulation_data.last_simulated = current_time + (ms_to_sleep as i64);
}
