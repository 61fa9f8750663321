use super::{colliders::collide_body_body, solvers::solve_contact};
use crate::body::{Bodies, Body, BodyColor};
use legion::system;
use log::debug;

pub fn reset_colors(bodies: &mut [Body]) {
    for body in bodies.iter_mut() {
        body.color = BodyColor::Normal;
    }
}

/// Tests every pair in ascending index order and resolves the overlapping
/// ones in place. Returns the number of contacts.
pub fn resolve_collisions(bodies: &mut [Body]) -> usize {
    let mut contacts = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let body0 = &mut head[i];
        for (offset, body1) in tail.iter_mut().enumerate() {
            if let Some(contact) = solve_contact(body0, body1) {
                debug!(
                    "Contact {} {} at distance {:.3}",
                    i,
                    i + 1 + offset,
                    contact.distance
                );
                collide_body_body(body0, body1, &contact);
                contacts += 1;
            }
        }
    }
    contacts
}

/// Colors are reset before any pair is tested so that every body in a
/// multi-way contact ends the frame highlighted.
#[system]
pub fn collision(#[resource] bodies: &mut Bodies) {
    reset_colors(bodies);
    let contacts = resolve_collisions(bodies);
    if contacts > 0 {
        debug!("Resolved {} contacts", contacts);
    }
}
