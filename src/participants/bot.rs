use super::*;
use crate::flow::Submission;
use crate::flow::Vars;
use crate::session::Appropriateness;
use crate::session::Fairness;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// CPU participant that answers every page uniformly at random within
/// the page's bounds.
pub struct Bot {
    rng: SmallRng,
}

impl From<u64> for Bot {
    fn from(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Bot {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Bot {
    fn choose(&mut self, vars: &Vars) -> Submission {
        match vars {
            Vars::Send(v) => v
                .choices
                .choose(&mut self.rng)
                .copied()
                .map(Submission::Send)
                .unwrap_or_else(|| Submission::passive(vars)),
            Vars::SendBack(v) => Submission::SendBack(self.rng.random_range(0..=v.sent_back_max)),
            Vars::Feedback(_) => Submission::Feedback(
                Fairness::ALL[self.rng.random_range(0..Fairness::ALL.len())],
                Appropriateness::ALL[self.rng.random_range(0..Appropriateness::ALL.len())],
            ),
            Vars::Results(_) => Submission::Next,
        }
    }
}

#[async_trait::async_trait]
impl Participant for Bot {
    async fn decide(&mut self, _: usize, vars: &Vars) -> Submission {
        self.choose(vars)
    }
    async fn notify(&mut self, _: &Event) {}
}
