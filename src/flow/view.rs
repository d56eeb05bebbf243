use super::*;
use crate::Round;
use serde::Serialize;

/// Where a participant stands in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cursor {
    At(Round, Page),
    Finished,
}

impl Cursor {
    /// The position after leaving the current page.
    pub fn next(&self, rounds: usize) -> Self {
        match self {
            Self::Finished => Self::Finished,
            Self::At(round, page) => match page.next() {
                Some(next) => Self::At(*round, next),
                None if *round < rounds => Self::At(round + 1, Page::first()),
                None => Self::Finished,
            },
        }
    }
}

/// What the host should show a participant right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum View {
    Page { round: Round, vars: Vars },
    Wait { round: Round, page: Page },
    Finished,
}

impl View {
    pub fn is_page(&self) -> bool {
        matches!(self, Self::Page { .. })
    }
}
