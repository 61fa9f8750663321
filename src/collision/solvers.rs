use crate::body::Body;

use super::contact::Contact;

/// Returns the contact if the two discs overlap or touch.
pub fn solve_contact(body: &Body, other_body: &Body) -> Option<Contact> {
    let contact = Contact::between(body.position - other_body.position);
    if contact.distance <= body.radius + other_body.radius {
        Some(contact)
    } else {
        None
    }
}
