use super::*;
use crate::config::Config;
use crate::session::Session;
use serde::Serialize;

/// Everything the experimenter takes away from a finished session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub config: Config,
    pub rounds: Vec<AdminReport>,
    pub rows: Vec<Row>,
    pub payments: Vec<Payment>,
}

impl From<&Session> for Report {
    fn from(session: &Session) -> Self {
        Self {
            config: session.config().clone(),
            rounds: session.subsessions().iter().map(AdminReport::from).collect(),
            rows: Row::session(session),
            payments: Payment::all(session),
        }
    }
}

impl Report {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
