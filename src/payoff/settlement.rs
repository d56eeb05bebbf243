use crate::ENDOWMENT;
use crate::Factor;
use crate::Points;
use crate::session::Role;
use serde::Serialize;

/// Most role B may return: everything received plus B's own endowment.
pub fn sent_back_max(sent: Points, factor: Factor) -> Points {
    sent * factor + ENDOWMENT
}

/// Both payoffs of one completed exchange.
///
/// - role A keeps what it did not send and receives what B returned
/// - role B keeps the multiplied amount and its endowment, minus what it returned
///
/// Within the form bounds both payoffs are non-negative, and B's is zero
/// exactly when B returns the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Settlement {
    a: Points,
    b: Points,
}

impl From<(Points, Points, Factor)> for Settlement {
    fn from((sent, back, factor): (Points, Points, Factor)) -> Self {
        debug_assert!(sent <= ENDOWMENT);
        debug_assert!(back <= sent_back_max(sent, factor));
        Self {
            a: ENDOWMENT - sent + back,
            b: sent_back_max(sent, factor).saturating_sub(back),
        }
    }
}

impl Settlement {
    pub fn a(&self) -> Points {
        self.a
    }
    pub fn b(&self) -> Points {
        self.b
    }
    pub fn get(&self, role: Role) -> Points {
        match role {
            Role::A => self.a,
            Role::B => self.b,
        }
    }
    /// Points paid out to the pair.
    pub fn total(&self) -> Points {
        self.a + self.b
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "A +{} B +{}", self.a, self.b)
    }
}
