use super::*;
use crate::ENDOWMENT;
use crate::LIKERT_CHOICES;
use crate::Position;
use crate::Round;
use crate::session::Session;
use std::collections::HashMap;
use std::collections::VecDeque;

/// Page-sequencing state machine for a whole session.
///
/// Owns the session and one cursor per participant. Every transition runs
/// through the page table: skipped pages are passed over without touching
/// their fields, content pages stop the cursor until a valid submission
/// arrives, and wait pages stop it until the whole group has arrived.
/// After `advance`, a cursor only ever rests on a rendered content page,
/// an unreleased barrier, or `Finished`.
#[derive(Debug)]
pub struct Flow {
    session: Session,
    cursors: Vec<Cursor>,
    barriers: HashMap<(Round, usize, Page), Barrier>,
}

impl From<Session> for Flow {
    fn from(session: Session) -> Self {
        let mut flow = Self {
            cursors: vec![Cursor::At(1, Page::first()); session.size()],
            barriers: HashMap::new(),
            session,
        };
        (0..flow.cursors.len()).for_each(|p| flow.advance(p));
        flow
    }
}

impl From<Flow> for Session {
    fn from(flow: Flow) -> Self {
        flow.session
    }
}

impl Flow {
    pub fn session(&self) -> &Session {
        &self.session
    }
    pub fn cursor(&self, position: Position) -> Option<Cursor> {
        self.cursors.get(position).copied()
    }
    pub fn is_finished(&self) -> bool {
        self.cursors.iter().all(|c| *c == Cursor::Finished)
    }
    /// Participants currently looking at a content page.
    pub fn ready(&self) -> Vec<Position> {
        (0..self.cursors.len())
            .filter(|p| self.view(*p).map_or(false, |v| v.is_page()))
            .collect()
    }
    /// What the participant at `position` should see.
    pub fn view(&self, position: Position) -> anyhow::Result<View> {
        match self.cursor(position) {
            None => Err(anyhow::anyhow!("no participant at position {}", position)),
            Some(Cursor::Finished) => Ok(View::Finished),
            Some(Cursor::At(round, page)) if page.is_barrier() => Ok(View::Wait { round, page }),
            Some(Cursor::At(round, page)) => self
                .vars(round, page, position)
                .map(|vars| View::Page { round, vars }),
        }
    }
    /// Apply a participant's answer to their current page and move on.
    pub fn submit(&mut self, position: Position, submission: Submission) -> anyhow::Result<()> {
        let (round, vars) = match self.view(position)? {
            View::Page { round, vars } => (round, vars),
            View::Wait { page, .. } => {
                return Err(anyhow::anyhow!("P{} is waiting on {}", position, page));
            }
            View::Finished => return Err(anyhow::anyhow!("P{} has finished", position)),
        };
        submission
            .validate(&vars)
            .inspect_err(|e| log::warn!("P{} round {} rejected: {}", position, round, e))?;
        self.apply(round, position, submission)?;
        log::debug!("P{} round {} {}", position, round, submission);
        self.step(position);
        self.advance(position);
        Ok(())
    }
}

impl Flow {
    /// Push a cursor forward until it has to stop, releasing any barrier
    /// it completes and carrying the other group members along with it.
    fn advance(&mut self, position: Position) {
        let mut queue = VecDeque::from([position]);
        while let Some(position) = queue.pop_front() {
            while let Some(Cursor::At(round, page)) = self.cursor(position) {
                match self.visibility(round, page, position) {
                    None => {
                        log::warn!("P{} has no record in round {}", position, round);
                        break;
                    }
                    Some(Visibility::Render) => break,
                    Some(Visibility::Skip) => {
                        log::debug!("P{} round {} skips {}", position, round, page);
                        self.step(position);
                    }
                    Some(Visibility::Release) => self.step(position),
                    Some(Visibility::Block) => match self.arrive(round, page, position) {
                        Some(others) => {
                            queue.extend(others);
                            self.step(position);
                        }
                        None => break,
                    },
                }
            }
        }
    }
    fn visibility(&self, round: Round, page: Page, position: Position) -> Option<Visibility> {
        let player = self.session.player(round, position)?;
        let group = self.session.group_of(round, position)?;
        let released = self
            .barriers
            .get(&(round, group.index(), page))
            .map_or(false, |b| b.is_released());
        Some(page.visibility(self.session.config(), player.role(), group, released))
    }
    /// Record arrival at a barrier. On release, returns the members that
    /// were left waiting there.
    fn arrive(&mut self, round: Round, page: Page, position: Position) -> Option<Vec<Position>> {
        let group = self.session.group_of(round, position)?;
        let index = group.index();
        let members = group.members();
        let barrier = self.barriers.entry((round, index, page)).or_default();
        if !barrier.arrive(position, &members) {
            log::debug!("P{} round {} waits on {}", position, round, page);
            return None;
        }
        self.after_all_players_arrive(round, index, page);
        Some(members.into_iter().filter(|m| *m != position).collect())
    }
    fn after_all_players_arrive(&mut self, round: Round, group: usize, page: Page) {
        log::debug!("round {} group {} released {}", round, group, page);
        match page {
            Page::ResultsWaitPage => {
                self.session.settle(round, group);
            }
            _ => {}
        }
    }
    fn step(&mut self, position: Position) {
        let rounds = self.session.rounds();
        if let Some(cursor) = self.cursors.get_mut(position) {
            let next = cursor.next(rounds);
            *cursor = next;
            match next {
                Cursor::At(round, page) if page == Page::first() => {
                    self.session.carry(round, position);
                    log::debug!("P{} enters round {}", position, round);
                }
                Cursor::Finished => log::info!("P{} finished the session", position),
                _ => {}
            }
        }
    }
    fn apply(
        &mut self,
        round: Round,
        position: Position,
        submission: Submission,
    ) -> anyhow::Result<()> {
        let subsession = self
            .session
            .subsession_mut(round)
            .ok_or_else(|| anyhow::anyhow!("round {} does not exist", round))?;
        let index = subsession
            .player(position)
            .map(|p| p.group())
            .ok_or_else(|| anyhow::anyhow!("P{} is not in round {}", position, round))?;
        let applied = match submission {
            Submission::Send(amount) => subsession.group_mut(index).map(|g| g.send(amount)),
            Submission::SendBack(amount) => subsession.group_mut(index).map(|g| g.send_back(amount)),
            Submission::Feedback(fairness, appropriate) => subsession
                .player_mut(position)
                .map(|p| p.rate(fairness, appropriate)),
            Submission::Next => Some(()),
        };
        applied.ok_or_else(|| anyhow::anyhow!("round {} group {} does not exist", round, index))
    }
    fn vars(&self, round: Round, page: Page, position: Position) -> anyhow::Result<Vars> {
        let factor = self.session.config().multiplication_factor;
        let subsession = self
            .session
            .subsession(round)
            .ok_or_else(|| anyhow::anyhow!("round {} does not exist", round))?;
        let player = subsession
            .player(position)
            .ok_or_else(|| anyhow::anyhow!("P{} is not in round {}", position, round))?;
        let group = subsession
            .group(player.group())
            .ok_or_else(|| anyhow::anyhow!("P{} has no group in round {}", position, round))?;
        match page {
            Page::Send => Ok(Vars::Send(SendVars {
                round,
                endowment: ENDOWMENT,
                choices: LIKERT_CHOICES.to_vec(),
                previous: Recap::of(player),
            })),
            Page::SendBack => group
                .sent_amount()
                .map(|sent| Vars::SendBack(SendBackVars::from((sent, factor))))
                .ok_or_else(|| {
                    anyhow::anyhow!("round {} group {} has not sent", round, group.index())
                }),
            Page::Feedback => Ok(Vars::Feedback(FeedbackVars {
                multiplication_factor: factor,
            })),
            Page::Results => {
                let partner = subsession.partner(position);
                Ok(Vars::Results(ResultsVars {
                    role: player.role(),
                    multiplication_factor: factor,
                    sent_amount: group.sent_amount(),
                    sent_back_amount: group.sent_back_amount(),
                    tripled_amount: group.tripled_amount(factor),
                    feedback_treatment: group.feedback_treatment(),
                    fairness_feedback: partner.and_then(|p| p.partner_fairness()),
                    amount_appropriate_feedback: partner.and_then(|p| p.amount_appropriate()),
                    payoff: player.payoff(),
                }))
            }
            barrier => Err(anyhow::anyhow!("{} has no template", barrier)),
        }
    }
}
