use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// A player's two private cards.
///
/// The pair is unordered as far as evaluation goes; the dealt order is
/// kept only so the cards display the way they came off the deck.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Hole([Card; 2]);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }
    pub fn is_pair(&self) -> bool {
        self.0[0].rank() == self.0[1].rank()
    }
    pub fn is_suited(&self) -> bool {
        self.0[0].suit() == self.0[1].suit()
    }
    /// The higher of the two ranks.
    pub fn high(&self) -> Rank {
        self.0[0].rank().max(self.0[1].rank())
    }
    /// The lower of the two ranks.
    pub fn low(&self) -> Rank {
        self.0[0].rank().min(self.0[1].rank())
    }
    /// Shorthand class like "AKs", "T9o" or "QQ".
    pub fn class(&self) -> String {
        match (self.is_pair(), self.is_suited()) {
            (true, _) => format!("{}{}", self.high(), self.low()),
            (false, true) => format!("{}{}s", self.high(), self.low()),
            (false, false) => format!("{}{}o", self.high(), self.low()),
        }
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = Error;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        if a == b {
            Err(Error::InvalidHand(format!("duplicate card {}", a)))
        } else {
            Ok(Self([a, b]))
        }
    }
}

impl TryFrom<&[Card]> for Hole {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards {
            [a, b] => Self::try_from((*a, *b)),
            _ => Err(Error::InvalidHand(format!(
                "expected 2 cards, got {}",
                cards.len()
            ))),
        }
    }
}

/// str isomorphism, e.g. "As Kd", "AsKd" or "10sKd"
impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = match s.split_whitespace().count() {
            1 => compact(s.trim())?,
            _ => s
                .split_whitespace()
                .map(Card::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        };
        Self::try_from(cards.as_slice())
    }
}

/// Splits run-together notation after each suit character, so ranks of
/// any width ("10") stay attached to their suit.
fn compact(s: &str) -> Result<Vec<Card>, Error> {
    let mut cards = Vec::new();
    let mut start = 0;
    for (i, c) in s.char_indices() {
        let end = i + c.len_utf8();
        if Suit::try_from(&s[i..end]).is_ok() {
            cards.push(Card::try_from(&s[start..end])?);
            start = end;
        }
    }
    match &s[start..] {
        "" => Ok(cards),
        rest => Err(Error::InvalidHand(format!("dangling card text: {}", rest))),
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0[0], self.0[1])
    }
}
