use crate::Position;
use std::collections::BTreeSet;

/// Wait-page state for one group on one barrier page in one round.
///
/// Releases exactly once: the arrival that completes the group is the only
/// one for which `arrive` returns true. Repeated arrivals are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Barrier {
    arrived: BTreeSet<Position>,
    released: bool,
}

impl Barrier {
    /// Record an arrival. True iff this arrival released the barrier.
    pub fn arrive(&mut self, position: Position, required: &[Position]) -> bool {
        self.arrived.insert(position);
        if self.released {
            return false;
        }
        self.released = required.iter().all(|p| self.arrived.contains(p));
        self.released
    }
    pub fn is_released(&self) -> bool {
        self.released
    }
    pub fn arrived(&self) -> usize {
        self.arrived.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_on_last_arrival() {
        let mut barrier = Barrier::default();
        assert!(!barrier.arrive(3, &[3, 8]));
        assert!(!barrier.is_released());
        assert!(barrier.arrive(8, &[3, 8]));
        assert!(barrier.is_released());
    }
    #[test]
    fn replays_do_not_release_twice() {
        let mut barrier = Barrier::default();
        assert!(!barrier.arrive(3, &[3, 8]));
        assert!(!barrier.arrive(3, &[3, 8]));
        assert!(barrier.arrive(8, &[3, 8]));
        assert!(!barrier.arrive(8, &[3, 8]));
        assert!(!barrier.arrive(3, &[3, 8]));
        assert_eq!(barrier.arrived(), 2);
    }
}
