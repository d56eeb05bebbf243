//! Repeated two-player trust game with optional partner feedback ratings.
//!
//! Role A receives an endowment and sends part of it to role B. The amount
//! is multiplied on the way, and role B decides how much to send back.
//! Groups are reshuffled every round while each participant keeps their
//! role, and a session-level policy decides which groups additionally rate
//! each other after the exchange.
pub mod config;
pub mod flow;
pub mod participants;
pub mod payoff;
pub mod report;
#[cfg(feature = "server")]
pub mod room;
pub mod session;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Whole experimental points (the session uses points, not currency).
pub type Points = u32;
/// Multiplier applied to the amount role A sends.
pub type Factor = u32;
/// Real-world currency amounts (payment info only).
pub type Money = f64;
/// Participant index within the session, fixed for its lifetime.
pub type Position = usize;
/// One-based round number.
pub type Round = usize;

// ============================================================================
// GAME CONSTANTS
// ============================================================================
/// URL segment the hosting framework serves the app under.
pub const NAME_IN_URL: &str = "trust_worthiness";
/// Group size; every group is one A and one B.
pub const PLAYERS_PER_GROUP: usize = 2;
/// Rounds the app creates, independent of the session's `num_rounds`.
pub const NUM_ROUNDS: Round = 3;
/// Points role A starts each round with.
pub const ENDOWMENT: Points = 40;
/// The only amounts role A may send: quarters of the endowment.
pub const LIKERT_CHOICES: [Points; 5] = [
    0,
    ENDOWMENT / 4,
    ENDOWMENT / 2,
    ENDOWMENT * 3 / 4,
    ENDOWMENT,
];
/// Amounts role B can receive at the default tripling, for rendering.
pub const TRIPLED_CHOICES: [Points; 5] = [
    LIKERT_CHOICES[0] * 3,
    LIKERT_CHOICES[1] * 3,
    LIKERT_CHOICES[2] * 3,
    LIKERT_CHOICES[3] * 3,
    LIKERT_CHOICES[4] * 3,
];
/// Answer labels for confidence questions.
pub const CONFIDENCE_CHOICES: [&str; 5] = ["0%", "25%", "50%", "75%", "100%"];
/// Largest `multiplication_factor` whose payoffs, summed over every round,
/// still fit in `Points`.
pub const MAX_FACTOR: Factor = (Points::MAX / NUM_ROUNDS as Points - 2 * ENDOWMENT) / ENDOWMENT;
pub const A_ROLE: &str = "Teilnehmer A";
pub const B_ROLE: &str = "Teilnehmer B";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_sets_follow_endowment() {
        assert_eq!(LIKERT_CHOICES, [0, 10, 20, 30, 40]);
        assert_eq!(TRIPLED_CHOICES, [0, 30, 60, 90, 120]);
        assert!(LIKERT_CHOICES.iter().all(|c| *c <= ENDOWMENT));
    }
    #[test]
    fn max_factor_payoffs_fit_in_points() {
        let round = (ENDOWMENT as u64) * (MAX_FACTOR as u64) + 2 * ENDOWMENT as u64;
        assert!(round * NUM_ROUNDS as u64 <= Points::MAX as u64);
        let next = (ENDOWMENT as u64) * (MAX_FACTOR as u64 + 1) + 2 * ENDOWMENT as u64;
        assert!(next * NUM_ROUNDS as u64 > Points::MAX as u64);
    }
}
