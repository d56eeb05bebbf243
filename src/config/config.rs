use super::Treatment;
use crate::Factor;
use crate::MAX_FACTOR;
use crate::Money;
use crate::NUM_ROUNDS;
use crate::Points;
use crate::Round;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Session configuration, fixed once the session is created.
///
/// Passed by reference into every component that needs it. Keys missing
/// from a loaded file take the demo session's values, except
/// `feedback_treatment`, which falls back to no feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub name: String,
    pub display_name: String,
    pub num_demo_participants: usize,
    pub num_rounds: Round,
    pub multiplication_factor: Factor,
    #[serde(default)]
    pub feedback_treatment: Treatment,
    pub real_world_currency_per_point: Money,
    pub participation_fee: Money,
    pub currency: String,
    pub use_points: bool,
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: String::from("trust_worthiness"),
            display_name: String::from("Trust Worthiness"),
            num_demo_participants: 4,
            num_rounds: 5,
            multiplication_factor: 5,
            feedback_treatment: Treatment::Half,
            real_world_currency_per_point: 1.00,
            participation_fee: 0.00,
            currency: String::from("EUR"),
            use_points: true,
            language: String::from("en"),
        }
    }
}

impl Config {
    /// Read a JSON session config from disk.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
        Self::parse(&json)
    }
    /// Parse a JSON session config.
    pub fn parse(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str::<Self>(json)
            .map_err(|e| anyhow::anyhow!("invalid session config: {}", e))
            .and_then(|c| c.check().map(|_| c))
            .inspect(|c| log::debug!("loaded session config {}", c.name))
    }
    /// Reject values the payoff arithmetic cannot hold.
    pub fn check(&self) -> anyhow::Result<()> {
        match self.multiplication_factor <= MAX_FACTOR {
            true => Ok(()),
            false => Err(anyhow::anyhow!(
                "multiplication_factor {} exceeds {}",
                self.multiplication_factor,
                MAX_FACTOR
            )),
        }
    }
    /// Round-count gate shared by every content page.
    ///
    /// Compares the app's fixed round count against the configured one, so
    /// the answer is the same in every round of a session.
    pub fn is_playable(&self) -> bool {
        NUM_ROUNDS <= self.num_rounds
    }
    /// Convert points into real-world currency.
    pub fn to_money(&self, points: Points) -> Money {
        points as Money * self.real_world_currency_per_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_session() {
        let config = Config::default();
        assert_eq!(config.num_rounds, 5);
        assert_eq!(config.multiplication_factor, 5);
        assert_eq!(config.feedback_treatment, Treatment::Half);
        assert!(config.is_playable());
    }
    #[test]
    fn parse_fills_missing_keys() {
        let config = Config::parse(r#"{ "num_rounds": 2, "feedback_treatment": "ALL" }"#).unwrap();
        assert_eq!(config.num_rounds, 2);
        assert_eq!(config.feedback_treatment, Treatment::All);
        assert_eq!(config.multiplication_factor, 5);
        assert_eq!(config.currency, "EUR");
    }
    #[test]
    fn missing_policy_means_no_feedback() {
        let config = Config::parse(r#"{ "num_rounds": 3 }"#).unwrap();
        assert_eq!(config.feedback_treatment, Treatment::None);
    }
    #[test]
    fn unsupported_policy_type_fails() {
        assert!(Config::parse(r#"{ "feedback_treatment": 1 }"#).is_err());
        assert!(Config::parse(r#"{ "feedback_treatment": true }"#).is_err());
    }
    #[test]
    fn oversized_factor_is_rejected() {
        assert!(Config::parse(r#"{ "multiplication_factor": 200000000 }"#).is_err());
        let json = format!(r#"{{ "multiplication_factor": {} }}"#, MAX_FACTOR + 1);
        assert!(Config::parse(&json).is_err());
        let json = format!(r#"{{ "multiplication_factor": {} }}"#, MAX_FACTOR);
        assert_eq!(Config::parse(&json).unwrap().multiplication_factor, MAX_FACTOR);
    }
    #[test]
    fn gate_compares_app_rounds_to_session_rounds() {
        let mut config = Config::default();
        config.num_rounds = NUM_ROUNDS;
        assert!(config.is_playable());
        config.num_rounds = NUM_ROUNDS - 1;
        assert!(!config.is_playable());
    }
    #[test]
    fn money_conversion() {
        let mut config = Config::default();
        config.real_world_currency_per_point = 0.5;
        assert_eq!(config.to_money(60), 30.0);
    }
    #[test]
    fn load_missing_file_fails() {
        assert!(Config::load(Path::new("/nonexistent/session.json")).is_err());
    }
}
