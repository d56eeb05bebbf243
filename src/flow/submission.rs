use super::*;
use crate::LIKERT_CHOICES;
use crate::Points;
use crate::session::Appropriateness;
use crate::session::Fairness;
use serde::Deserialize;
use serde::Serialize;

/// A participant's answer to the page they are standing on.
///
/// `Next` confirms a page without form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "page", content = "value", rename_all = "snake_case")]
pub enum Submission {
    Send(Points),
    SendBack(Points),
    Feedback(Fairness, Appropriateness),
    Next,
}

impl Submission {
    /// Form validation against what the page offered.
    pub fn validate(&self, vars: &Vars) -> anyhow::Result<()> {
        match (self, vars) {
            (Self::Send(amount), Vars::Send(_)) if LIKERT_CHOICES.contains(amount) => Ok(()),
            (Self::Send(amount), Vars::Send(_)) => Err(anyhow::anyhow!(
                "sent_amount {} is not one of {:?}",
                amount,
                LIKERT_CHOICES
            )),
            (Self::SendBack(amount), Vars::SendBack(v)) if *amount <= v.sent_back_max => Ok(()),
            (Self::SendBack(amount), Vars::SendBack(v)) => Err(anyhow::anyhow!(
                "sent_back_amount {} exceeds maximum {}",
                amount,
                v.sent_back_max
            )),
            (Self::Feedback(..), Vars::Feedback(_)) => Ok(()),
            (Self::Next, Vars::Results(_)) => Ok(()),
            (submission, vars) => Err(anyhow::anyhow!(
                "{} cannot answer page {}",
                submission,
                vars.page()
            )),
        }
    }
    /// Least committal valid answer for a page.
    pub fn passive(vars: &Vars) -> Self {
        match vars {
            Vars::Send(_) => Self::Send(0),
            Vars::SendBack(_) => Self::SendBack(0),
            Vars::Feedback(_) => Self::Feedback(Fairness::Neutral, Appropriateness::Appropriate),
            Vars::Results(_) => Self::Next,
        }
    }
}

impl std::fmt::Display for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Send(amount) => write!(f, "send {}", amount),
            Self::SendBack(amount) => write!(f, "send back {}", amount),
            Self::Feedback(fairness, appropriate) => {
                write!(f, "rate {} / {}", fairness, appropriate)
            }
            Self::Next => write!(f, "next"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send_back(sent: Points) -> Vars {
        Vars::SendBack(SendBackVars::from((sent, 3)))
    }

    #[test]
    fn send_must_be_a_likert_choice() {
        let ref vars = Vars::Send(SendVars::default());
        assert!(Submission::Send(20).validate(vars).is_ok());
        assert!(Submission::Send(15).validate(vars).is_err());
        assert!(Submission::Send(50).validate(vars).is_err());
    }
    #[test]
    fn send_back_is_bounded() {
        let ref vars = send_back(20);
        assert!(Submission::SendBack(0).validate(vars).is_ok());
        assert!(Submission::SendBack(100).validate(vars).is_ok());
        assert!(Submission::SendBack(101).validate(vars).is_err());
    }
    #[test]
    fn wrong_page_is_rejected() {
        let ref vars = Vars::Send(SendVars::default());
        assert!(Submission::Next.validate(vars).is_err());
        assert!(Submission::SendBack(0).validate(vars).is_err());
    }
    #[test]
    fn passive_answers_validate() {
        let all = [
            Vars::Send(SendVars::default()),
            send_back(0),
            Vars::Feedback(FeedbackVars {
                multiplication_factor: 3,
            }),
        ];
        for ref vars in all {
            assert!(Submission::passive(vars).validate(vars).is_ok());
        }
    }
    #[test]
    fn json_shape() {
        let json = serde_json::to_string(&Submission::Send(10)).unwrap();
        assert_eq!(json, r#"{"page":"send","value":10}"#);
        let back = serde_json::from_str::<Submission>(r#"{"page":"next"}"#).unwrap();
        assert_eq!(back, Submission::Next);
    }
}
