use super::*;
use crate::NUM_ROUNDS;
use crate::Position;
use crate::Round;
use crate::config::Config;
use crate::payoff::Settlement;
use rand::Rng;
use serde::Serialize;

/// A configured session and every round it will play.
///
/// All rounds are created up front, as the hosting framework does when a
/// session is opened. The app always creates `NUM_ROUNDS` rounds; the
/// configured `num_rounds` only feeds the round-count gate.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    config: Config,
    size: usize,
    subsessions: Vec<Subsession>,
}

impl Session {
    /// Seat `participants` people and initialize every round.
    pub fn create<R>(config: Config, participants: usize, rng: &mut R) -> anyhow::Result<Self>
    where
        R: Rng + ?Sized,
    {
        config.check()?;
        let grouping = Grouping::try_from(participants)?;
        let subsessions = (1..=NUM_ROUNDS)
            .map(|round| grouping.subsession(round, config.feedback_treatment, rng))
            .collect::<Vec<Subsession>>();
        log::info!(
            "created session {} with {} participants, {} rounds, feedback {}",
            config.name,
            participants,
            subsessions.len(),
            config.feedback_treatment
        );
        Ok(Self {
            size: grouping.size(),
            config,
            subsessions,
        })
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    /// Number of participants.
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn rounds(&self) -> usize {
        self.subsessions.len()
    }
    pub fn subsessions(&self) -> &[Subsession] {
        &self.subsessions
    }
    pub fn subsession(&self, round: Round) -> Option<&Subsession> {
        round
            .checked_sub(1)
            .and_then(|i| self.subsessions.get(i))
    }
    pub fn player(&self, round: Round, position: Position) -> Option<&Player> {
        self.subsession(round).and_then(|s| s.player(position))
    }
    pub fn group_of(&self, round: Round, position: Position) -> Option<&Group> {
        self.subsession(round).and_then(|s| s.group_of(position))
    }
    /// Every round's record for one participant.
    pub fn in_all_rounds(&self, position: Position) -> Vec<&Player> {
        self.subsessions
            .iter()
            .filter_map(|s| s.player(position))
            .collect()
    }

    /// Compute and store both payoffs of a group.
    ///
    /// Recomputes identically when called again. Returns `None` without
    /// touching anything if either amount has not been submitted.
    pub(crate) fn settle(&mut self, round: Round, group: usize) -> Option<Settlement> {
        let factor = self.config.multiplication_factor;
        let subsession = self.subsession_mut(round)?;
        let g = subsession.group(group)?;
        let members = g.members();
        let (sent, back) = match (g.sent_amount(), g.sent_back_amount()) {
            (Some(sent), Some(back)) => (sent, back),
            _ => {
                log::warn!(
                    "round {} group {} reached settlement without both amounts",
                    round,
                    group
                );
                return None;
            }
        };
        let settlement = Settlement::from((sent, back, factor));
        for (role, position) in [Role::A, Role::B].into_iter().zip(members) {
            if let Some(player) = subsession.player_mut(position) {
                player.pay(settlement.get(role), sent * factor);
            }
        }
        log::info!("round {} group {} settled {}", round, group, settlement);
        Some(settlement)
    }
    /// Fill a participant's previous-round fields from the round before.
    pub(crate) fn carry(&mut self, round: Round, position: Position) {
        let factor = self.config.multiplication_factor;
        let previous = round
            .checked_sub(1)
            .and_then(|r| self.subsession(r))
            .and_then(|s| s.player(position).zip(s.group_of(position)))
            .map(|(p, g)| (p.clone(), g.clone()));
        if let Some((last, group)) = previous {
            if let Some(player) = self
                .subsession_mut(round)
                .and_then(|s| s.player_mut(position))
            {
                player.carry(&last, &group, group.sent_back_max(factor));
            }
        }
    }
    pub(crate) fn subsession_mut(&mut self, round: Round) -> Option<&mut Subsession> {
        round
            .checked_sub(1)
            .and_then(|i| self.subsessions.get_mut(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn session(participants: usize) -> Session {
        let ref mut rng = SmallRng::seed_from_u64(11);
        Session::create(Config::default(), participants, rng).unwrap()
    }

    #[test]
    fn creates_fixed_number_of_rounds() {
        let session = session(4);
        assert_eq!(session.rounds(), NUM_ROUNDS);
        assert_eq!(session.size(), 4);
        assert!(session.subsession(0).is_none());
        assert!(session.subsession(NUM_ROUNDS + 1).is_none());
    }
    #[test]
    fn refuses_oversized_factor() {
        let config = Config {
            multiplication_factor: crate::MAX_FACTOR + 1,
            ..Config::default()
        };
        let ref mut rng = SmallRng::seed_from_u64(1);
        assert!(Session::create(config, 2, rng).is_err());
    }
    #[test]
    fn roles_are_stable_across_rounds() {
        let session = session(12);
        for position in 0..12 {
            let roles = session
                .in_all_rounds(position)
                .iter()
                .map(|p| p.role())
                .collect::<Vec<_>>();
            assert_eq!(roles.len(), NUM_ROUNDS);
            assert!(roles.iter().all(|r| *r == Role::seat(position)));
        }
    }
    #[test]
    fn settle_requires_both_amounts() {
        let mut session = session(2);
        assert!(session.settle(1, 0).is_none());
        assert_eq!(session.player(1, 0).unwrap().payoff(), None);
    }
    #[test]
    fn settle_is_repeatable() {
        let mut session = session(2);
        let group = session.subsession_mut(1).unwrap().group_mut(0).unwrap();
        group.send(20);
        group.send_back(40);
        let first = session.settle(1, 0);
        let again = session.settle(1, 0);
        assert_eq!(first, again);
        let a = session.group_of(1, 0).unwrap().member(Role::A);
        let b = session.group_of(1, 0).unwrap().member(Role::B);
        assert_eq!(session.player(1, a).unwrap().payoff(), Some(40 - 20 + 40));
        assert_eq!(session.player(1, b).unwrap().payoff(), Some(20 * 5 - 40 + 40));
        assert_eq!(session.player(1, b).unwrap().multiplied_endowment(), Some(100));
    }
    #[test]
    fn carry_copies_previous_round() {
        let mut session = session(2);
        let group = session.subsession_mut(1).unwrap().group_mut(0).unwrap();
        group.send(10);
        group.send_back(5);
        session.carry(2, 1);
        let player = session.player(2, 1).unwrap();
        assert_eq!(player.prev_role(), Some(Role::B));
        assert_eq!(player.prev_sent(), Some(10));
        assert_eq!(player.prev_sent_back(), Some(5));
        assert_eq!(player.prev_sent_back_available(), Some(10 * 5 + 40));
        session.carry(1, 1);
        assert_eq!(session.player(1, 1).unwrap().prev_role(), None);
    }
}
