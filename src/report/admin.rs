use crate::Points;
use crate::Round;
use crate::session::Subsession;
use serde::Serialize;

/// Per-round payoff list shown on the experimenter's admin page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminReport {
    pub round: Round,
    pub payoffs: Vec<Option<Points>>,
}

impl From<&Subsession> for AdminReport {
    fn from(subsession: &Subsession) -> Self {
        Self {
            round: subsession.round(),
            payoffs: subsession.payoffs(),
        }
    }
}

impl std::fmt::Display for AdminReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "round {:>2} ", self.round)?;
        for payoff in &self.payoffs {
            match payoff {
                Some(points) => write!(f, "{:>5}", points)?,
                None => write!(f, "{:>5}", "-")?,
            }
        }
        Ok(())
    }
}
