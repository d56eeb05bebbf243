use super::*;
use crate::Points;
use crate::flow::Submission;
use crate::flow::Vars;
use crate::session::Appropriateness;
use crate::session::Fairness;
use std::sync::Arc;
use std::sync::Mutex;

/// Deterministic participant that gives the same answers every round.
/// Amounts outside a page's bounds are clamped to the page maximum.
/// Notifications are appended to a log that outlives the seat.
#[derive(Debug, Clone)]
pub struct Scripted {
    send: Points,
    send_back: Points,
    fairness: Fairness,
    appropriate: Appropriateness,
    events: Arc<Mutex<Vec<Event>>>,
}

impl From<(Points, Points)> for Scripted {
    fn from((send, send_back): (Points, Points)) -> Self {
        Self {
            send,
            send_back,
            fairness: Fairness::Neutral,
            appropriate: Appropriateness::Appropriate,
            events: Arc::default(),
        }
    }
}

impl Scripted {
    pub fn rating(mut self, fairness: Fairness, appropriate: Appropriateness) -> Self {
        self.fairness = fairness;
        self.appropriate = appropriate;
        self
    }
    /// Handle on the notifications received so far.
    pub fn events(&self) -> Arc<Mutex<Vec<Event>>> {
        self.events.clone()
    }
    fn answer(&self, vars: &Vars) -> Submission {
        match vars {
            Vars::Send(v) => Submission::Send(
                v.choices
                    .iter()
                    .copied()
                    .filter(|c| *c <= self.send)
                    .max()
                    .unwrap_or_default(),
            ),
            Vars::SendBack(v) => Submission::SendBack(self.send_back.min(v.sent_back_max)),
            Vars::Feedback(_) => Submission::Feedback(self.fairness, self.appropriate),
            Vars::Results(_) => Submission::Next,
        }
    }
}

#[async_trait::async_trait]
impl Participant for Scripted {
    async fn decide(&mut self, _: usize, vars: &Vars) -> Submission {
        self.answer(vars)
    }
    async fn notify(&mut self, event: &Event) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(e) => log::warn!("event log poisoned: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::SendBackVars;
    use crate::flow::SendVars;

    #[test]
    fn clamps_into_bounds() {
        let script = Scripted::from((25, 500));
        let ref send = Vars::Send(SendVars::default());
        let ref back = Vars::SendBack(SendBackVars::from((20, 3)));
        assert_eq!(script.answer(send), Submission::Send(20));
        assert_eq!(script.answer(back), Submission::SendBack(100));
        assert!(script.answer(send).validate(send).is_ok());
        assert!(script.answer(back).validate(back).is_ok());
    }
    #[cfg(feature = "server")]
    #[tokio::test]
    async fn events_survive_the_seat() {
        let mut script = Scripted::from((0, 0));
        let events = script.events();
        script.notify(&Event::Rejected(String::from("late"))).await;
        drop(script);
        let events = events.lock().unwrap();
        assert!(matches!(events.as_slice(), [Event::Rejected(r)] if r == "late"));
    }
}
