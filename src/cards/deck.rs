use super::card::Card;
use super::hole::Hole;
use super::rank::Rank;
use super::suit::Suit;
use crate::Error;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// An ordered sequence of the 52 cards, each exactly once.
///
/// A deck is created fresh for every round and consumed immediately.
/// Shuffling is a uniform Fisher–Yates permutation; [`Deck::seeded`]
/// makes the permutation reproducible for tests and replays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh deck in canonical order (2c, 2d, 2h, 2s, 3c, ... As).
    pub fn new() -> Self {
        Self(
            Rank::all()
                .into_iter()
                .rev()
                .flat_map(|r| Suit::all().into_iter().map(move |s| Card::from((r, s))))
                .collect(),
        )
    }
    /// A fresh deck shuffled with the thread-local generator.
    pub fn shuffled() -> Self {
        let mut deck = Self::new();
        deck.shuffle_with(&mut rand::rng());
        deck
    }
    /// A fresh deck shuffled deterministically from `seed`.
    pub fn seeded(seed: u64) -> Self {
        let mut deck = Self::new();
        deck.shuffle_with(&mut SmallRng::seed_from_u64(seed));
        deck
    }
    /// Permutes the remaining cards in place.
    pub fn shuffle_with<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.0.shuffle(rng);
    }
    /// The first two cards of the sequence, as a hand.
    pub fn hole(&self) -> Result<Hole, Error> {
        match self.0.as_slice() {
            [a, b, ..] => Hole::try_from((*a, *b)),
            _ => Err(Error::InvalidHand(format!(
                "deck holds {} cards, need 2",
                self.0.len()
            ))),
        }
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
