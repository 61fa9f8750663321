use legion::*;

use crate::{
    body::{Bodies, Body},
    bounds::Bounds,
    simulation::SimulationConfig,
};

#[system]
pub fn advance_bodies(
    #[resource] bodies: &mut Bodies,
    #[resource] bounds: &Bounds,
    #[resource] simulation_config: &SimulationConfig,
) {
    for body in bodies.iter_mut() {
        advance_single_body(body, bounds, simulation_config.time_delta);
    }
}

/// Integrate, flip velocity on wall contact, then clamp back inside.
pub fn advance_single_body(body: &mut Body, bounds: &Bounds, time_delta: f64) {
    integrate(body, time_delta);
    rebound(body, bounds);
    body.clamp_to_bounds(bounds);
}

pub fn integrate(body: &mut Body, time_delta: f64) {
    body.position += body.velocity * time_delta;
}

/// Tested against the integrated position, before any clamp.
pub fn rebound(body: &mut Body, bounds: &Bounds) {
    let (x, y, r) = (body.position.x, body.position.y, body.radius);
    if x < r || x > bounds.width - r {
        body.velocity.x = -body.velocity.x;
    }
    if y < r || y > bounds.height - r {
        body.velocity.y = -body.velocity.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn bounds() -> Bounds {
        Bounds::from_size(400, 300)
    }

    fn moving(x: f64, y: f64, vx: f64, vy: f64) -> Body {
        Body::new(Vector2::new(x, y), 20.).with_velocity(Vector2::new(vx, vy))
    }

    #[test]
    fn rebound_flips_velocity_past_left_edge() {
        let mut body = moving(19., 150., -3., 2.);
        rebound(&mut body, &bounds());
        assert_eq!(body.velocity, Vector2::new(3., 2.));
        assert_eq!(body.position.x, 19.);

        body.clamp_to_bounds(&bounds());
        assert_eq!(body.position.x, 20.);
    }

    #[test]
    fn advance_moves_flips_and_clamps_in_one_frame() {
        let mut body = moving(22., 150., -3., 2.);
        advance_single_body(&mut body, &bounds(), 1.);
        assert_eq!(body.position, Vector2::new(20., 152.));
        assert_eq!(body.velocity, Vector2::new(3., 2.));
    }

    #[test]
    fn corner_hit_flips_both_axes() {
        let mut body = moving(385., 285., 6., 7.);
        advance_single_body(&mut body, &bounds(), 1.);
        assert_eq!(body.velocity, Vector2::new(-6., -7.));
        assert_eq!(body.position, Vector2::new(380., 280.));
    }

    #[test]
    fn free_flight_is_plain_euler() {
        let mut body = moving(100., 100., 4., -5.);
        advance_single_body(&mut body, &bounds(), 2.);
        assert_eq!(body.position, Vector2::new(108., 90.));
        assert_eq!(body.velocity, Vector2::new(4., -5.));
    }

    #[test]
    fn resting_on_edge_does_not_flip() {
        let mut body = Body::new(Vector2::new(20., 150.), 20.);
        rebound(&mut body, &bounds());
        assert_eq!(body.velocity, Vector2::zeros());
    }
}
