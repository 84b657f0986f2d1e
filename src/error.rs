use thiserror::Error;

use crate::physics::rigid_body::BodyId;

/// Errors reported by the physics world and contact resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhysicsError {
    #[error("{0} does not exist in this world")]
    UnknownBody(BodyId),

    /// Both bodies are immovable, so the contact has no effective mass to
    /// distribute a correction or impulse over.
    #[error("contact between {a} and {b} has zero effective mass")]
    ImmovablePair { a: BodyId, b: BodyId },
}

pub type Result<T, E = PhysicsError> = std::result::Result<T, E>;
