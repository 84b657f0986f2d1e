//! Single-pass contact resolver: positional correction then one restitution
//! impulse per contact.

use glam::Vec2;

use crate::error::{PhysicsError, Result};
use crate::math::cross;

use super::contact::Contact;
use super::rigid_body::{Body, BodyId};

/// Resolve every contact in order. Later contacts see the positions and
/// velocities written by earlier ones.
///
/// Contacts without effective mass (two immovable bodies) are skipped.
pub fn solve_contacts(contacts: &[Contact], bodies: &mut [Body]) {
    for contact in contacts {
        if let Err(err) = solve_contact(contact, bodies) {
            tracing::debug!(%err, "skipping contact");
        }
    }
}

fn solve_contact(contact: &Contact, bodies: &mut [Body]) -> Result<()> {
    let (body_a, body_b) = pair_mut(bodies, contact.body_a, contact.body_b)?;
    correct_penetration(contact, body_a, body_b)?;
    resolve_velocity(contact, body_a, body_b)
}

/// Push the two bodies apart along the normal so the penetration vanishes,
/// sharing the distance in proportion to inverse mass.
pub fn correct_penetration(contact: &Contact, body_a: &mut Body, body_b: &mut Body) -> Result<()> {
    let inv_mass_sum = body_a.inv_mass + body_b.inv_mass;
    if inv_mass_sum <= 0.0 {
        return Err(immovable(contact));
    }

    let correction = contact.normal * (contact.penetration / inv_mass_sum);
    body_a.translate(-correction * body_a.inv_mass);
    body_b.translate(correction * body_b.inv_mass);
    Ok(())
}

/// Apply one restitution impulse along the contact normal.
///
/// Uses the smaller elasticity of the pair and lever arms measured from each
/// body's current position.
pub fn resolve_velocity(contact: &Contact, body_a: &mut Body, body_b: &mut Body) -> Result<()> {
    let normal = contact.normal;
    let r_a = contact.point - body_a.position();
    let r_b = contact.point - body_b.position();

    let relative_velocity = body_b.velocity_at(contact.point) - body_a.velocity_at(contact.point);
    let contact_velocity = relative_velocity.dot(normal);

    let r_a_cross_n = cross(r_a, normal);
    let r_b_cross_n = cross(r_b, normal);

    let inv_mass_sum = body_a.inv_mass
        + body_b.inv_mass
        + body_a.inv_inertia * r_a_cross_n * r_a_cross_n
        + body_b.inv_inertia * r_b_cross_n * r_b_cross_n;

    if inv_mass_sum <= 0.0 {
        return Err(immovable(contact));
    }

    let restitution = body_a.elasticity.min(body_b.elasticity);
    let j_normal = -(1.0 + restitution) * contact_velocity / inv_mass_sum;

    apply_impulse(body_a, body_b, normal * j_normal, r_a, r_b);
    Ok(())
}

/// Apply an impulse to both bodies at the contact point.
fn apply_impulse(body_a: &mut Body, body_b: &mut Body, impulse: Vec2, r_a: Vec2, r_b: Vec2) {
    // A (negative direction)
    body_a.linear_velocity -= impulse * body_a.inv_mass;
    body_a.angular_velocity -= body_a.inv_inertia * cross(r_a, impulse);

    // B (positive direction)
    body_b.linear_velocity += impulse * body_b.inv_mass;
    body_b.angular_velocity += body_b.inv_inertia * cross(r_b, impulse);
}

fn immovable(contact: &Contact) -> PhysicsError {
    PhysicsError::ImmovablePair {
        a: contact.body_a,
        b: contact.body_b,
    }
}

/// Borrow two distinct bodies mutably at once.
fn pair_mut(bodies: &mut [Body], a: BodyId, b: BodyId) -> Result<(&mut Body, &mut Body)> {
    let len = bodies.len();
    if a.0 >= len {
        return Err(PhysicsError::UnknownBody(a));
    }
    if b.0 >= len || a == b {
        return Err(PhysicsError::UnknownBody(b));
    }

    if a.0 < b.0 {
        let (lo, hi) = bodies.split_at_mut(b.0);
        Ok((&mut lo[a.0], &mut hi[0]))
    } else {
        let (lo, hi) = bodies.split_at_mut(a.0);
        Ok((&mut hi[0], &mut lo[b.0]))
    }
}
