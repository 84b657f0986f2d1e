//! Pairwise collision scan over every body pair.

use super::contact::{Contact, ContactInfo};
use super::narrowphase::detect_collision;
use super::rigid_body::{Body, BodyId};

/// Deepest positive-depth contact over every shape combination of two bodies.
///
/// Ties keep the first combination found (`a`'s shapes outer, `b`'s inner).
pub fn deepest_contact(body_a: &Body, body_b: &Body) -> Option<ContactInfo> {
    let mut best: Option<ContactInfo> = None;

    for shape_a in &body_a.shapes {
        for shape_b in &body_b.shapes {
            if let Some(info) = detect_collision(shape_a, shape_b) {
                let deepest = best.map_or(0.0, |b| b.penetration);
                if info.penetration > deepest {
                    best = Some(info);
                }
            }
        }
    }

    best
}

/// Find one contact per touching body pair, in `(i, i + 1..n)` order.
pub fn find_contacts(bodies: &[Body]) -> Vec<Contact> {
    let mut contacts = Vec::new();

    // O(n^2) over pairs, then O(k*l) over shapes within a pair
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if let Some(info) = deepest_contact(&bodies[i], &bodies[j]) {
                tracing::trace!(
                    a = i,
                    b = j,
                    penetration = info.penetration,
                    "contact"
                );
                contacts.push(Contact::new(BodyId(i), BodyId(j), info));
            }
        }
    }

    contacts
}
