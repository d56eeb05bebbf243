use crate::Money;
use crate::Points;
use crate::Position;
use crate::session::Session;
use serde::Serialize;

/// What a participant is paid at the end of the session.
///
/// Points from every round are summed, converted at the session's rate,
/// and the participation fee is added on top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    pub participant: Position,
    pub points: Points,
    pub payoff: Money,
    pub participation_fee: Money,
    pub total: Money,
    pub currency: String,
}

impl From<(&Session, Position)> for Payment {
    fn from((session, participant): (&Session, Position)) -> Self {
        let config = session.config();
        let points = session
            .in_all_rounds(participant)
            .iter()
            .filter_map(|p| p.payoff())
            .sum::<Points>();
        let payoff = config.to_money(points);
        Self {
            participant,
            points,
            payoff,
            participation_fee: config.participation_fee,
            total: payoff + config.participation_fee,
            currency: config.currency.clone(),
        }
    }
}

impl Payment {
    /// Payments for everyone in the session, in participant order.
    pub fn all(session: &Session) -> Vec<Self> {
        (0..session.size())
            .map(|p| Self::from((session, p)))
            .collect()
    }
}

impl std::fmt::Display for Payment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "P{:<3} {:>5} points  {:>8.2} {}",
            self.participant, self.points, self.total, self.currency
        )
    }
}
