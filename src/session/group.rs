use super::*;
use crate::Factor;
use crate::Points;
use crate::Position;
use serde::Serialize;

/// Two players sharing one exchange in one round.
///
/// Members are stored by participant position, ordered by `id_in_group`,
/// so the partner of any member is a plain index lookup. The feedback
/// flag is fixed at construction and has no setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    index: usize,
    members: [Position; 2],
    sent_amount: Option<Points>,
    sent_back_amount: Option<Points>,
    feedback_treatment: bool,
}

impl From<(usize, [Position; 2], bool)> for Group {
    fn from((index, members, feedback_treatment): (usize, [Position; 2], bool)) -> Self {
        Self {
            index,
            members,
            feedback_treatment,
            sent_amount: None,
            sent_back_amount: None,
        }
    }
}

impl Group {
    /// Index of this group within its subsession.
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn members(&self) -> [Position; 2] {
        self.members
    }
    /// Participant holding `role` in this group.
    pub fn member(&self, role: Role) -> Position {
        self.members[role.index()]
    }
    /// The other member, if `position` belongs to this group.
    pub fn partner(&self, position: Position) -> Option<Position> {
        match self.members {
            [a, b] if a == position => Some(b),
            [a, b] if b == position => Some(a),
            _ => None,
        }
    }
    pub fn sent_amount(&self) -> Option<Points> {
        self.sent_amount
    }
    pub fn sent_back_amount(&self) -> Option<Points> {
        self.sent_back_amount
    }
    pub fn feedback_treatment(&self) -> bool {
        self.feedback_treatment
    }
    /// Upper bound role B may send back, once role A has sent.
    pub fn sent_back_max(&self, factor: Factor) -> Option<Points> {
        self.sent_amount
            .map(|sent| crate::payoff::sent_back_max(sent, factor))
    }
    /// Amount role B received, once role A has sent.
    pub fn tripled_amount(&self, factor: Factor) -> Option<Points> {
        self.sent_amount.map(|sent| sent * factor)
    }

    pub(crate) fn send(&mut self, amount: Points) {
        self.sent_amount = Some(amount);
    }
    pub(crate) fn send_back(&mut self, amount: Points) {
        self.sent_back_amount = Some(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partner_lookup() {
        let group = Group::from((0, [4, 7], true));
        assert_eq!(group.partner(4), Some(7));
        assert_eq!(group.partner(7), Some(4));
        assert_eq!(group.partner(5), None);
        assert_eq!(group.member(Role::A), 4);
        assert_eq!(group.member(Role::B), 7);
    }
    #[test]
    fn bounds_need_sent_amount() {
        let mut group = Group::from((0, [0, 1], false));
        assert_eq!(group.sent_back_max(3), None);
        group.send(20);
        assert_eq!(group.sent_back_max(3), Some(100));
        assert_eq!(group.tripled_amount(3), Some(60));
    }
}
