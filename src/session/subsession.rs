use super::*;
use crate::Points;
use crate::Position;
use crate::Round;
use serde::Serialize;

/// All groups and players of one round.
///
/// Players form an arena indexed by participant position; groups refer to
/// players by position, never the other way around through references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subsession {
    round: Round,
    groups: Vec<Group>,
    players: Vec<Player>,
}

impl From<(Round, Vec<Group>)> for Subsession {
    fn from((round, groups): (Round, Vec<Group>)) -> Self {
        let mut players = groups
            .iter()
            .flat_map(|g| {
                [Role::A, Role::B]
                    .into_iter()
                    .map(move |r| Player::from((g.member(r), round, r, g.index())))
            })
            .collect::<Vec<Player>>();
        players.sort_by_key(|p| p.participant());
        Self {
            round,
            groups,
            players,
        }
    }
}

impl Subsession {
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, position: Position) -> Option<&Player> {
        self.players.get(position)
    }
    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }
    /// Group the participant at `position` plays in this round.
    pub fn group_of(&self, position: Position) -> Option<&Group> {
        self.player(position).and_then(|p| self.group(p.group()))
    }
    /// The other player in the participant's group.
    pub fn partner(&self, position: Position) -> Option<&Player> {
        self.group_of(position)
            .and_then(|g| g.partner(position))
            .and_then(|p| self.player(p))
    }
    /// Payoffs of every player, in participant order.
    pub fn payoffs(&self) -> Vec<Option<Points>> {
        self.players.iter().map(|p| p.payoff()).collect()
    }

    pub(crate) fn player_mut(&mut self, position: Position) -> Option<&mut Player> {
        self.players.get_mut(position)
    }
    pub(crate) fn group_mut(&mut self, index: usize) -> Option<&mut Group> {
        self.groups.get_mut(index)
    }
}
