use crate::{
    body::{Bodies, Body},
    bounds::Bounds,
};
use anyhow::bail;
use legion::Resources;
use log::info;
use nalgebra::Vector2;
use rand::Rng;
use rand_pcg::Pcg64;
use std::ops::RangeInclusive;

pub struct GenerationConfig {
    pub n_bodies: usize,
    pub radius_range: RangeInclusive<u32>,
    /// Speed given to both axes of a new body.
    pub speed_range: RangeInclusive<u32>,
    /// Candidate draws allowed before placement gives up.
    pub max_attempts: usize,
    pub seed: (u128, u128),
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            n_bodies: 10,
            radius_range: 20..=40,
            speed_range: 3..=7,
            max_attempts: 100_000,
            seed: (0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96),
        }
    }
}

pub fn init_world(
    resources: &mut Resources,
    bounds: &Bounds,
    config: &GenerationConfig,
) -> anyhow::Result<()> {
    let mut rng = Pcg64::new(config.seed.0, config.seed.1);
    let bodies = init_bodies(&mut rng, bounds, config)?;
    info!(
        "Placed {} bodies on a {}x{} canvas",
        bodies.len(),
        bounds.width,
        bounds.height
    );
    resources.insert(Bodies(bodies));
    Ok(())
}

/// Rejection-samples `n_bodies` discs that do not touch each other.
pub fn init_bodies<R: Rng>(
    rng: &mut R,
    bounds: &Bounds,
    config: &GenerationConfig,
) -> anyhow::Result<Vec<Body>> {
    let width = bounds.width.max(0.) as u32;
    let height = bounds.height.max(0.) as u32;
    let mut bodies = Vec::with_capacity(config.n_bodies);
    let mut attempts = 0;

    while bodies.len() < config.n_bodies {
        if attempts >= config.max_attempts {
            bail!(
                "cannot place {} non-overlapping bodies on a {}x{} canvas: \
                 only {} fit after {} attempts",
                config.n_bodies,
                width,
                height,
                bodies.len(),
                attempts
            );
        }
        attempts += 1;

        let body = Body::new(
            Vector2::new(
                rng.gen_range(0..=width) as f64,
                rng.gen_range(0..=height) as f64,
            ),
            rng.gen_range(config.radius_range.clone()) as f64,
        );

        // Check it doesn't overlap with an existing body.
        if bodies.iter().any(|other: &Body| other.overlaps(&body)) {
            continue;
        }
        let speed = rng.gen_range(config.speed_range.clone()) as f64;
        bodies.push(body.with_velocity(Vector2::new(speed, speed)));
    }
    Ok(bodies)
}
