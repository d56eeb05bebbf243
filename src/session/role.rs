use crate::A_ROLE;
use crate::B_ROLE;
use crate::Position;
use serde::Deserialize;
use serde::Serialize;

/// Positional identity within a group, kept for the whole session.
///
/// - `A`: `id_in_group = 1`, holds the endowment and sends
/// - `B`: `id_in_group = 2`, receives the multiplied amount and sends back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    A,
    B,
}

impl Role {
    /// Role of a participant seated at `position`.
    /// Consecutive seats form the initial pairs, first of each pair is A.
    pub fn seat(position: Position) -> Self {
        match position % 2 {
            0 => Self::A,
            _ => Self::B,
        }
    }
    pub fn id_in_group(&self) -> usize {
        match self {
            Self::A => 1,
            Self::B => 2,
        }
    }
    /// Index into a group's member array.
    pub fn index(&self) -> usize {
        self.id_in_group() - 1
    }
    /// Label shown to participants.
    pub fn label(&self) -> &'static str {
        match self {
            Self::A => A_ROLE,
            Self::B => B_ROLE,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
