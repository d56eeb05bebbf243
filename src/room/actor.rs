use crate::Position;
use crate::flow::Submission;
use crate::flow::Vars;
use crate::participants::Event;
use crate::participants::Participant;
use tokio::sync::mpsc::*;
use tokio::task::JoinHandle;

/// Messages the room sends to a seat.
#[derive(Debug, Clone)]
pub enum Message {
    /// Serve a page; the seat answers with a submission.
    Page(usize, Vars),
    Notify(Event),
}

/// Wrapper that runs a Participant in its own async task.
/// Handles message passing between Room and Participant implementation.
///
/// - Room unicasts Page when this seat stands on a content page
/// - Actor calls Participant::decide and sends the submission back
/// - Everything else is forwarded to Participant::notify
pub struct Actor {
    position: Position,
    participant: Box<dyn Participant>,
    getter: UnboundedReceiver<Message>,
    sender: UnboundedSender<(Position, Submission)>,
}

impl Actor {
    pub fn spawn(
        position: Position,
        participant: Box<dyn Participant>,
        sender: UnboundedSender<(Position, Submission)>,
    ) -> (UnboundedSender<Message>, JoinHandle<()>) {
        let (tx, rx) = unbounded_channel();
        let actor = Self {
            position,
            participant,
            sender,
            getter: rx,
        };
        (tx, tokio::spawn(actor.run()))
    }
    async fn run(mut self) {
        while let Some(message) = self.getter.recv().await {
            match message {
                Message::Page(round, ref vars) => self.act(round, vars).await,
                Message::Notify(ref event) => self.participant.notify(event).await,
            }
        }
        log::debug!("P{} left the room", self.position);
    }
    async fn act(&mut self, round: usize, vars: &Vars) {
        let submission = self.participant.decide(round, vars).await;
        let _ = self.sender.send((self.position, submission));
    }
}
