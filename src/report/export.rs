use crate::Points;
use crate::Position;
use crate::Round;
use crate::session::Appropriateness;
use crate::session::Fairness;
use crate::session::Role;
use crate::session::Session;
use crate::session::Subsession;
use serde::Serialize;

/// One participant in one round, flattened for data export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub participant: Position,
    pub round: Round,
    pub group: usize,
    pub id_in_group: usize,
    pub role: Role,
    pub feedback_treatment: bool,
    pub sent_amount: Option<Points>,
    pub sent_back_amount: Option<Points>,
    pub multiplied_endowment: Option<Points>,
    pub partner_fairness: Option<Fairness>,
    pub amount_appropriate: Option<Appropriateness>,
    pub payoff: Option<Points>,
}

impl Row {
    /// All rows of a round, in participant order.
    pub fn round(subsession: &Subsession) -> Vec<Self> {
        subsession
            .players()
            .iter()
            .filter_map(|p| {
                subsession.group(p.group()).map(|g| Self {
                    participant: p.participant(),
                    round: p.round(),
                    group: g.index() + 1,
                    id_in_group: p.id_in_group(),
                    role: p.role(),
                    feedback_treatment: g.feedback_treatment(),
                    sent_amount: g.sent_amount(),
                    sent_back_amount: g.sent_back_amount(),
                    multiplied_endowment: p.multiplied_endowment(),
                    partner_fairness: p.partner_fairness(),
                    amount_appropriate: p.amount_appropriate(),
                    payoff: p.payoff(),
                })
            })
            .collect()
    }
    /// Every row of the session, round by round.
    pub fn session(session: &Session) -> Vec<Self> {
        session
            .subsessions()
            .iter()
            .flat_map(Self::round)
            .collect()
    }
}
