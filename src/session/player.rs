use super::*;
use crate::Points;
use crate::Position;
use crate::Round;
use serde::Serialize;

/// One participant's record for one round.
///
/// Rating and payoff fields stay `None` until the corresponding page or
/// barrier writes them; pages that were skipped leave them unset, and
/// readers get `None` instead of an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    participant: Position,
    round: Round,
    role: Role,
    group: usize,
    multiplied_endowment: Option<Points>,
    prev_sent: Option<Points>,
    prev_sent_back: Option<Points>,
    prev_sent_back_available: Option<Points>,
    prev_role: Option<Role>,
    partner_fairness: Option<Fairness>,
    amount_appropriate: Option<Appropriateness>,
    payoff: Option<Points>,
}

impl From<(Position, Round, Role, usize)> for Player {
    fn from((participant, round, role, group): (Position, Round, Role, usize)) -> Self {
        Self {
            participant,
            round,
            role,
            group,
            multiplied_endowment: None,
            prev_sent: None,
            prev_sent_back: None,
            prev_sent_back_available: None,
            prev_role: None,
            partner_fairness: None,
            amount_appropriate: None,
            payoff: None,
        }
    }
}

impl Player {
    pub fn participant(&self) -> Position {
        self.participant
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn role(&self) -> Role {
        self.role
    }
    /// Index of this player's group within the round.
    pub fn group(&self) -> usize {
        self.group
    }
    pub fn id_in_group(&self) -> usize {
        self.role.id_in_group()
    }
    pub fn multiplied_endowment(&self) -> Option<Points> {
        self.multiplied_endowment
    }
    pub fn prev_sent(&self) -> Option<Points> {
        self.prev_sent
    }
    pub fn prev_sent_back(&self) -> Option<Points> {
        self.prev_sent_back
    }
    pub fn prev_sent_back_available(&self) -> Option<Points> {
        self.prev_sent_back_available
    }
    pub fn prev_role(&self) -> Option<Role> {
        self.prev_role
    }
    pub fn partner_fairness(&self) -> Option<Fairness> {
        self.partner_fairness
    }
    pub fn amount_appropriate(&self) -> Option<Appropriateness> {
        self.amount_appropriate
    }
    pub fn payoff(&self) -> Option<Points> {
        self.payoff
    }

    pub(crate) fn rate(&mut self, fairness: Fairness, appropriate: Appropriateness) {
        self.partner_fairness = Some(fairness);
        self.amount_appropriate = Some(appropriate);
    }
    pub(crate) fn pay(&mut self, payoff: Points, multiplied: Points) {
        self.payoff = Some(payoff);
        self.multiplied_endowment = Some(multiplied);
    }
    /// Copy what this participant saw last round, for display.
    pub(crate) fn carry(&mut self, last: &Player, group: &Group, available: Option<Points>) {
        self.prev_role = Some(last.role());
        self.prev_sent = group.sent_amount();
        self.prev_sent_back = group.sent_back_amount();
        self.prev_sent_back_available = available;
    }
}
