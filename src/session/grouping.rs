use super::*;
use crate::Position;
use crate::Round;
use crate::config::Treatment;
use rand::Rng;
use rand::seq::SliceRandom;

/// Random regrouping that keeps every participant's `id_in_group`.
///
/// Participants are seated in order and consecutive seats form the
/// template pairs. Each round shuffles the A column and the B column
/// independently and zips them back together, so partners change while
/// roles never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    a: Vec<Position>,
    b: Vec<Position>,
}

impl TryFrom<usize> for Grouping {
    type Error = anyhow::Error;
    fn try_from(participants: usize) -> Result<Self, Self::Error> {
        if participants == 0 || participants % crate::PLAYERS_PER_GROUP != 0 {
            return Err(anyhow::anyhow!(
                "need a positive even number of participants, got {}",
                participants
            ));
        }
        let (a, b): (Vec<Position>, Vec<Position>) =
            (0..participants).partition(|p| Role::seat(*p) == Role::A);
        Ok(Self { a, b })
    }
}

impl Grouping {
    pub fn size(&self) -> usize {
        self.a.len() + self.b.len()
    }
    /// Random pairs for one round, each ordered `[A, B]`.
    pub fn shuffle<R>(&self, rng: &mut R) -> Vec<[Position; 2]>
    where
        R: Rng + ?Sized,
    {
        let mut a = self.a.clone();
        let mut b = self.b.clone();
        a.shuffle(rng);
        b.shuffle(rng);
        a.into_iter().zip(b).map(|(a, b)| [a, b]).collect()
    }
    /// Create one round: regroup, then hand out feedback flags by policy.
    pub fn subsession<R>(&self, round: Round, treatment: Treatment, rng: &mut R) -> Subsession
    where
        R: Rng + ?Sized,
    {
        let pairs = self.shuffle(rng);
        let flags = treatment.assign(pairs.len());
        let groups = pairs
            .into_iter()
            .zip(flags)
            .enumerate()
            .map(|(i, (members, feedback))| Group::from((i, members, feedback)))
            .collect::<Vec<Group>>();
        log::debug!(
            "round {} grouped into {} pairs, feedback {}",
            round,
            groups.len(),
            groups.iter().filter(|g| g.feedback_treatment()).count()
        );
        Subsession::from((round, groups))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn rejects_odd_or_empty_sessions() {
        assert!(Grouping::try_from(0).is_err());
        assert!(Grouping::try_from(5).is_err());
        assert!(Grouping::try_from(6).is_ok());
    }
    #[test]
    fn every_participant_is_grouped_once() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let grouping = Grouping::try_from(10).unwrap();
        let mut seen = grouping.shuffle(rng).concat();
        seen.sort();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
    }
    #[test]
    fn roles_survive_regrouping() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        let grouping = Grouping::try_from(8).unwrap();
        for _ in 0..16 {
            for [a, b] in grouping.shuffle(rng) {
                assert_eq!(Role::seat(a), Role::A);
                assert_eq!(Role::seat(b), Role::B);
            }
        }
    }
    #[test]
    fn half_policy_follows_group_order() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let grouping = Grouping::try_from(8).unwrap();
        let subsession = grouping.subsession(1, Treatment::Half, rng);
        let flags = subsession
            .groups()
            .iter()
            .map(|g| g.feedback_treatment())
            .collect::<Vec<_>>();
        assert_eq!(flags, vec![true, false, true, false]);
    }
    #[test]
    fn all_and_none_policies() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let grouping = Grouping::try_from(6).unwrap();
        let all = grouping.subsession(1, Treatment::All, rng);
        let none = grouping.subsession(2, Treatment::from("whatever"), rng);
        assert!(all.groups().iter().all(|g| g.feedback_treatment()));
        assert!(none.groups().iter().all(|g| !g.feedback_treatment()));
    }
}
