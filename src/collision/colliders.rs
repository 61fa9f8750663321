use crate::body::{Body, BodyColor};
use nalgebra::Vector2;

use super::contact::Contact;

/// Marks both bodies as colliding and exchanges the normal component of
/// their relative velocity. Tangential components are untouched and
/// positions are not corrected.
pub fn collide_body_body(body0: &mut Body, body1: &mut Body, contact: &Contact) {
    body0.color = BodyColor::Colliding;
    body1.color = BodyColor::Colliding;

    // Coincident centers give no direction to push along.
    if let Some(normal) = contact.normal {
        apply_impulse(body0, body1, normal);
    }
}

fn apply_impulse(body0: &mut Body, body1: &mut Body, normal: Vector2<f64>) {
    let dv = body0.velocity - body1.velocity;
    let proj = normal.dot(&dv);
    body0.velocity -= proj * normal;
    body1.velocity += proj * normal;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::solvers::solve_contact;

    fn moving(x: f64, y: f64, vx: f64, vy: f64) -> Body {
        Body::new(Vector2::new(x, y), 6.).with_velocity(Vector2::new(vx, vy))
    }

    fn collide(mut body0: Body, mut body1: Body) -> (Body, Body) {
        let contact = solve_contact(&body0, &body1).unwrap();
        collide_body_body(&mut body0, &mut body1, &contact);
        (body0, body1)
    }

    #[test]
    fn head_on_equal_bodies_swap_velocities() {
        let (a, b) = collide(moving(0., 0., 5., 0.), moving(10., 0., -5., 0.));
        assert_eq!(a.velocity, Vector2::new(-5., 0.));
        assert_eq!(b.velocity, Vector2::new(5., 0.));
        assert_eq!(a.color, BodyColor::Colliding);
        assert_eq!(b.color, BodyColor::Colliding);
    }

    #[test]
    fn oblique_hit_conserves_momentum() {
        let before = (moving(0., 0., 3., -1.), moving(6., 8., -2., 4.));
        let (a, b) = collide(before.0, before.1);
        let total_before = before.0.velocity + before.1.velocity;
        let total_after = a.velocity + b.velocity;
        assert!((total_before - total_after).norm() < 1e-12);
    }

    #[test]
    fn tangential_velocity_is_preserved() {
        // Normal is along x, so the y components must survive.
        let (a, b) = collide(moving(0., 0., 2., 7.), moving(10., 0., -1., -3.));
        assert_eq!(a.velocity, Vector2::new(-1., 7.));
        assert_eq!(b.velocity, Vector2::new(2., -3.));
    }

    #[test]
    fn coincident_centers_keep_finite_velocities() {
        let (a, b) = collide(moving(4., 4., 1., 2.), moving(4., 4., -3., 0.5));
        assert!(a.velocity.iter().all(|v| v.is_finite()));
        assert!(b.velocity.iter().all(|v| v.is_finite()));
        assert_eq!(a.velocity, Vector2::new(1., 2.));
        assert_eq!(b.color, BodyColor::Colliding);
    }
}
