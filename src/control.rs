//! Control input snapshot for player-controlled bodies.
//!
//! The engine never reads input devices. A driver fills a [`ControlInput`]
//! once per frame and hands it to [`PhysicsWorld::step`](crate::PhysicsWorld::step).

/// Directional keys held during the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl ControlInput {
    /// No keys held.
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    pub fn up() -> Self {
        Self {
            up: true,
            ..Self::NONE
        }
    }

    pub fn down() -> Self {
        Self {
            down: true,
            ..Self::NONE
        }
    }

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::NONE
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::NONE
        }
    }

    /// Combine two snapshots, holding every key held in either.
    pub fn with(self, other: Self) -> Self {
        Self {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        *self == Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert!(ControlInput::default().is_idle());
        assert!(!ControlInput::up().is_idle());
    }

    #[test]
    fn test_with_combines_keys() {
        let input = ControlInput::up().with(ControlInput::right());
        assert!(input.up && input.right);
        assert!(!input.down && !input.left);
    }
}
