use super::roster;
use crate::Error;
use crate::cards::Deck;
use crate::cards::Hole;
use crate::decision::Action;
use crate::decision::Choice;
use crate::decision::Opponent;
use crate::decision::Table;
use crate::decision::Verdict;
use crate::evaluation::Strength;
use rand::Rng;
use rand::seq::IndexedRandom;

/// One quiz question: a dealt hand, the hero's seat and the opponent.
#[derive(Debug, Clone)]
pub struct Round {
    hole: Hole,
    seat: String,
    opponent: Opponent,
}

impl Round {
    pub fn new(hole: Hole, seat: impl Into<String>, opponent: Opponent) -> Self {
        Self {
            hole,
            seat: seat.into(),
            opponent,
        }
    }
    /// Deals a fresh deck and draws seat and opponent from the roster.
    pub fn deal<R>(rng: &mut R) -> Result<Self, Error>
    where
        R: Rng + ?Sized,
    {
        let mut deck = Deck::new();
        deck.shuffle_with(rng);
        let hole = deck.hole()?;
        let seat = roster::SEATS.choose(rng).copied().unwrap_or("SB");
        let opponent = roster::archetypes()
            .choose(rng)
            .cloned()
            .unwrap_or_default();
        Ok(Self::new(hole, seat, opponent))
    }
    pub fn hole(&self) -> Hole {
        self.hole
    }
    pub fn seat(&self) -> &str {
        &self.seat
    }
    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }
    /// Answer labels offered to the player, in tie-break order.
    pub fn options(&self) -> Vec<String> {
        Action::all().iter().map(Action::label).collect()
    }
    pub fn strength(&self) -> Strength {
        Strength::from(self.hole)
    }
    pub fn table(&self) -> Table {
        Table::new(self.strength(), &self.opponent)
    }
    pub fn judge(&self, answer: &str) -> Verdict {
        Verdict::judge(&self.table(), Choice::from(answer))
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} in {} vs {}", self.hole, self.seat, self.opponent)
    }
}
