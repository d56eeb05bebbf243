use crate::flow::Page;
use crate::flow::Submission;
use crate::flow::Vars;
use crate::report::Payment;

/// Notifications a participant receives besides its own pages.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Held at a wait page until the group catches up.
    Waiting(usize, Page),
    /// The last submission was refused; the page will be served again.
    Rejected(String),
    /// The session is over.
    Finished(Payment),
}

/// Trait for anything that fills in pages on a participant's behalf.
/// Implementations can be bots, scripted test players, or a person at a
/// terminal.
///
/// Participants are transport-agnostic: the room does not care whether
/// answers come from local computation, stdin, or a browser.
#[async_trait::async_trait]
pub trait Participant: Send {
    /// Answer the page currently shown. Vars hold everything the page
    /// displays, including its bounds.
    async fn decide(&mut self, round: usize, vars: &Vars) -> Submission;
    /// Receive notification of anything else that happens to this seat.
    async fn notify(&mut self, event: &Event);
}
