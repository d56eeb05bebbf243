use super::*;
use crate::ENDOWMENT;
use crate::Factor;
use crate::LIKERT_CHOICES;
use crate::Points;
use crate::Round;
use crate::session::Appropriateness;
use crate::session::Fairness;
use crate::session::Player;
use crate::session::Role;
use serde::Serialize;

/// Everything a rendered page needs, computed when the page is served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Vars {
    Send(SendVars),
    SendBack(SendBackVars),
    Feedback(FeedbackVars),
    Results(ResultsVars),
}

impl Vars {
    pub fn page(&self) -> Page {
        match self {
            Self::Send(_) => Page::Send,
            Self::SendBack(_) => Page::SendBack,
            Self::Feedback(_) => Page::Feedback,
            Self::Results(_) => Page::Results,
        }
    }
}

/// What the participant saw in the round before this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recap {
    pub prev_role: Role,
    pub prev_sent: Option<Points>,
    pub prev_sent_back: Option<Points>,
    pub prev_sent_back_available: Option<Points>,
}

impl Recap {
    pub fn of(player: &Player) -> Option<Self> {
        player.prev_role().map(|prev_role| Self {
            prev_role,
            prev_sent: player.prev_sent(),
            prev_sent_back: player.prev_sent_back(),
            prev_sent_back_available: player.prev_sent_back_available(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendVars {
    pub round: Round,
    pub endowment: Points,
    pub choices: Vec<Points>,
    pub previous: Option<Recap>,
}

impl Default for SendVars {
    fn default() -> Self {
        Self {
            round: 1,
            endowment: ENDOWMENT,
            choices: LIKERT_CHOICES.to_vec(),
            previous: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendBackVars {
    pub multiplication_factor: Factor,
    pub tripled_amount: Points,
    pub tripled_amount_int: Points,
    pub endowment_int: Points,
    pub a_remainder_int: Points,
    pub sent_back_max: Points,
}

impl From<(Points, Factor)> for SendBackVars {
    fn from((sent, factor): (Points, Factor)) -> Self {
        Self {
            multiplication_factor: factor,
            tripled_amount: sent * factor,
            tripled_amount_int: sent * factor,
            endowment_int: ENDOWMENT,
            a_remainder_int: ENDOWMENT.saturating_sub(sent),
            sent_back_max: crate::payoff::sent_back_max(sent, factor),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedbackVars {
    pub multiplication_factor: Factor,
}

/// Final page of a round. The partner's ratings are optional: they are
/// only collected under the feedback treatment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsVars {
    pub role: Role,
    pub multiplication_factor: Factor,
    pub sent_amount: Option<Points>,
    pub sent_back_amount: Option<Points>,
    pub tripled_amount: Option<Points>,
    pub feedback_treatment: bool,
    pub fairness_feedback: Option<Fairness>,
    pub amount_appropriate_feedback: Option<Appropriateness>,
    pub payoff: Option<Points>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_back_vars_for_worked_example() {
        let vars = SendBackVars::from((20, 3));
        assert_eq!(vars.tripled_amount, 60);
        assert_eq!(vars.a_remainder_int, 20);
        assert_eq!(vars.sent_back_max, 100);
    }
    #[test]
    fn recap_needs_a_previous_round() {
        let player = Player::from((0, 1, Role::A, 0));
        assert!(Recap::of(&player).is_none());
    }
    #[test]
    fn absent_ratings_serialize_as_null() {
        let vars = ResultsVars {
            role: Role::A,
            multiplication_factor: 3,
            sent_amount: Some(20),
            sent_back_amount: Some(40),
            tripled_amount: Some(60),
            feedback_treatment: false,
            fairness_feedback: None,
            amount_appropriate_feedback: None,
            payoff: Some(60),
        };
        let json = serde_json::to_value(Vars::Results(vars)).unwrap();
        assert_eq!(json["page"], "results");
        assert!(json["fairness_feedback"].is_null());
        assert!(json["amount_appropriate_feedback"].is_null());
    }
}
