use super::*;
use crate::Position;
use crate::flow::Flow;
use crate::flow::Submission;
use crate::flow::View;
use crate::participants::Event;
use crate::participants::Participant;
use crate::report::Payment;
use crate::session::Session;
use tokio::sync::mpsc::*;
use tokio::task::JoinHandle;

/// Central coordinator for a live session.
/// Holds the single source of truth (the page flow and the session it
/// owns), serves each seat its current page, and applies submissions as
/// they come back.
///
/// Room runs in a loop:
/// - serve every seat whose view changed (page, wait notice)
/// - stop once every cursor is finished
/// - otherwise await the next submission from any seat
///
/// Barriers need no extra coordination here: the flow releases them on
/// the last arrival, and the next serve hands the released seats their
/// following page. Once everyone is paid the room closes every seat and
/// waits for its task to drain.
pub struct Room {
    flow: Flow,
    tx: Option<UnboundedSender<(Position, Submission)>>,
    rx: UnboundedReceiver<(Position, Submission)>,
    seats: Vec<UnboundedSender<Message>>,
    tasks: Vec<JoinHandle<()>>,
    shown: Vec<Option<View>>,
}

impl From<Session> for Room {
    fn from(session: Session) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            shown: vec![None; session.size()],
            flow: Flow::from(session),
            seats: Vec::new(),
            tasks: Vec::new(),
            tx: Some(tx),
            rx,
        }
    }
}

impl Room {
    /// Seat the next participant, in position order.
    pub fn sit<P>(&mut self, participant: P)
    where
        P: Participant + 'static,
    {
        if let Some(ref tx) = self.tx {
            let (seat, task) = Actor::spawn(self.seats.len(), Box::new(participant), tx.clone());
            self.seats.push(seat);
            self.tasks.push(task);
        }
    }
    pub fn seated(&self) -> usize {
        self.seats.len()
    }
    /// Play the whole session and hand it back for reporting.
    pub async fn run(mut self) -> anyhow::Result<Session> {
        let size = self.flow.session().size();
        if self.seats.len() != size {
            return Err(anyhow::anyhow!(
                "session needs {} participants, {} seated",
                size,
                self.seats.len()
            ));
        }
        self.tx.take();
        log::info!("room opened with {} participants", size);
        loop {
            self.serve();
            if self.flow.is_finished() {
                break;
            }
            if !self.shown.iter().flatten().any(|v| v.is_page()) {
                return Err(anyhow::anyhow!("no participant can move"));
            }
            let (position, submission) = self
                .rx
                .recv()
                .await
                .ok_or_else(|| anyhow::anyhow!("every participant left the room"))?;
            if let Err(e) = self.flow.submit(position, submission) {
                self.unicast(position, Message::Notify(Event::Rejected(e.to_string())));
            }
            if let Some(shown) = self.shown.get_mut(position) {
                *shown = None;
            }
        }
        (0..size).for_each(|p| {
            let payment = Payment::from((self.flow.session(), p));
            self.unicast(p, Message::Notify(Event::Finished(payment)));
        });
        self.seats.clear();
        for task in self.tasks.drain(..) {
            task.await
                .inspect_err(|e| log::warn!("seat task failed: {}", e))
                .ok();
        }
        log::info!("room closed");
        Ok(Session::from(self.flow))
    }
}

impl Room {
    fn serve(&mut self) {
        for position in 0..self.seats.len() {
            let view = match self.flow.view(position) {
                Ok(view) => view,
                Err(e) => {
                    log::warn!("P{} has no view: {}", position, e);
                    continue;
                }
            };
            if self.shown.get(position).and_then(|v| v.as_ref()) == Some(&view) {
                continue;
            }
            match view {
                View::Page { round, ref vars } => {
                    self.unicast(position, Message::Page(round, vars.clone()))
                }
                View::Wait { round, page } => {
                    self.unicast(position, Message::Notify(Event::Waiting(round, page)))
                }
                View::Finished => {}
            }
            if let Some(shown) = self.shown.get_mut(position) {
                *shown = Some(view);
            }
        }
    }
    fn unicast(&self, i: Position, message: Message) {
        if let Some(Err(e)) = self.seats.get(i).map(|inbox| inbox.send(message)) {
            log::warn!("failed unicast to P{}: {:?}", i, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NUM_ROUNDS;
    use crate::config::Config;
    use crate::config::Treatment;
    use crate::flow::Page;
    use crate::participants::Bot;
    use crate::participants::Scripted;
    use crate::session::Appropriateness;
    use crate::session::Fairness;
    use crate::session::Role;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn session(config: Config, participants: usize) -> Session {
        let ref mut rng = SmallRng::seed_from_u64(21);
        Session::create(config, participants, rng).unwrap()
    }

    #[tokio::test]
    async fn scripted_session_settles_every_group() {
        let config = Config {
            multiplication_factor: 3,
            feedback_treatment: Treatment::Half,
            ..Config::default()
        };
        let mut room = Room::from(session(config, 4));
        for _ in 0..4 {
            room.sit(Scripted::from((20, 40)));
        }
        let session = room.run().await.unwrap();
        for subsession in session.subsessions() {
            for player in subsession.players() {
                assert_eq!(player.payoff(), Some(60));
            }
            for group in subsession.groups().iter().filter(|g| g.feedback_treatment()) {
                let a = subsession.player(group.member(Role::A)).unwrap();
                assert!(a.partner_fairness().is_some());
            }
            for group in subsession.groups().iter().filter(|g| !g.feedback_treatment()) {
                let b = subsession.player(group.member(Role::B)).unwrap();
                assert!(b.partner_fairness().is_none());
            }
        }
    }
    #[tokio::test]
    async fn seats_hear_waits_ratings_and_payment() {
        let config = Config {
            multiplication_factor: 3,
            feedback_treatment: Treatment::All,
            ..Config::default()
        };
        let mut room = Room::from(session(config, 4));
        let mut logs = Vec::new();
        for _ in 0..4 {
            let script =
                Scripted::from((20, 40)).rating(Fairness::Fair, Appropriateness::TooSmall);
            logs.push(script.events());
            room.sit(script);
        }
        let session = room.run().await.unwrap();
        for (position, log) in logs.iter().enumerate() {
            let events = log.lock().unwrap();
            let paid = events
                .iter()
                .filter_map(|e| match e {
                    Event::Finished(payment) => Some(payment),
                    _ => None,
                })
                .collect::<Vec<_>>();
            assert_eq!(paid.len(), 1);
            assert_eq!(paid[0].participant, position);
            assert_eq!(paid[0].points, 60 * NUM_ROUNDS as u32);
            assert!(!events.iter().any(|e| matches!(e, Event::Rejected(_))));
            if Role::seat(position) == Role::B {
                assert!(events.contains(&Event::Waiting(1, Page::WaitForP1)));
            }
        }
        for player in session.subsessions().iter().flat_map(|s| s.players()) {
            assert_eq!(player.partner_fairness(), Some(Fairness::Fair));
            assert_eq!(player.amount_appropriate(), Some(Appropriateness::TooSmall));
        }
    }
    #[tokio::test]
    async fn bots_finish_and_respect_bounds() {
        let mut room = Room::from(session(Config::default(), 6));
        for seed in 0..6 {
            room.sit(Bot::from(seed));
        }
        let session = room.run().await.unwrap();
        assert_eq!(session.rounds(), NUM_ROUNDS);
        for subsession in session.subsessions() {
            for group in subsession.groups() {
                let sent = group.sent_amount().unwrap();
                let back = group.sent_back_amount().unwrap();
                assert!(back <= group.sent_back_max(5).unwrap());
                let a = subsession.player(group.member(Role::A)).unwrap().payoff().unwrap();
                let b = subsession.player(group.member(Role::B)).unwrap().payoff().unwrap();
                assert_eq!(a + b + sent, crate::ENDOWMENT * 2 + sent * 5);
            }
        }
    }
    #[tokio::test]
    async fn refuses_to_start_half_empty() {
        let mut room = Room::from(session(Config::default(), 4));
        room.sit(Bot::from(1));
        assert_eq!(room.seated(), 1);
        assert!(room.run().await.is_err());
    }
}
