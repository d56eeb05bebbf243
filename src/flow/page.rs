use crate::config::Config;
use crate::session::Group;
use crate::session::Role;
use serde::Deserialize;
use serde::Serialize;

/// The pages of one round, in the order every participant visits them.
///
/// Content pages collect input or show results. Wait pages are barriers
/// that hold a participant until the whole group has arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Page {
    Send,
    WaitForP1,
    SendBack,
    ResultsWaitPage,
    Feedback,
    ResultsWaitPageFeedback,
    Results,
}

/// What the page table says about one player standing on one page.
///
/// - `Render`: show the page and wait for its submission
/// - `Skip`: predicate failed, move on without touching its fields
/// - `Block`: barrier not yet complete
/// - `Release`: barrier complete, move on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Render,
    Skip,
    Block,
    Release,
}

impl Page {
    pub const SEQUENCE: [Page; 7] = [
        Page::Send,
        Page::WaitForP1,
        Page::SendBack,
        Page::ResultsWaitPage,
        Page::Feedback,
        Page::ResultsWaitPageFeedback,
        Page::Results,
    ];
    pub fn first() -> Self {
        Self::SEQUENCE[0]
    }
    pub fn index(&self) -> usize {
        Self::SEQUENCE
            .iter()
            .position(|p| p == self)
            .unwrap_or_default()
    }
    /// Following page in the same round, `None` after Results.
    pub fn next(&self) -> Option<Self> {
        Self::SEQUENCE.get(self.index() + 1).copied()
    }
    pub fn is_barrier(&self) -> bool {
        matches!(
            self,
            Self::WaitForP1 | Self::ResultsWaitPage | Self::ResultsWaitPageFeedback
        )
    }
    /// Whether the page exists for this player in this round.
    ///
    /// A barrier's predicate must match the content page before it, or one
    /// member would wait for a partner who skipped past.
    pub fn is_displayed(&self, config: &Config, role: Role, group: &Group) -> bool {
        let playable = config.is_playable();
        match self {
            Self::Send => role == Role::A && playable,
            Self::SendBack => role == Role::B && playable,
            Self::Feedback => group.feedback_treatment() && playable,
            Self::ResultsWaitPageFeedback => group.feedback_treatment() && playable,
            Self::Results => playable,
            Self::WaitForP1 => true,
            Self::ResultsWaitPage => true,
        }
    }
    /// Decision table: (page, role, group, barrier state) to visibility.
    pub fn visibility(
        &self,
        config: &Config,
        role: Role,
        group: &Group,
        released: bool,
    ) -> Visibility {
        match (self.is_displayed(config, role, group), self.is_barrier(), released) {
            (false, _, _) => Visibility::Skip,
            (true, false, _) => Visibility::Render,
            (true, true, false) => Visibility::Block,
            (true, true, true) => Visibility::Release,
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
