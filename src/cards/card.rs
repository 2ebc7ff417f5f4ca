use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// A playing card.
///
/// Cards are bijectively mapped to `0..52` by `rank * 4 + suit`, which
/// yields the canonical deck order: sorted by rank, then by suit.
///
/// Parsing accepts two-character notation like `"As"`, `"Td"` or `"7♥"`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        self.rank
    }
    /// Suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.rank) * 4 + u8::from(c.suit)
    }
}
impl TryFrom<u8> for Card {
    type Error = Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Ok(Self {
            rank: Rank::try_from(n / 4)?,
            suit: Suit::from(n % 4),
        })
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.char_indices().last() {
            Some((i, _)) if i > 0 => Ok(Card::from((
                Rank::try_from(&s[..i])?,
                Suit::try_from(&s[i..])?,
            ))),
            _ => Err(Error::InvalidHand(format!("invalid card str: {}", s))),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;

    #[test]
    fn bijective_rank_suit() {
        let card = Deck::seeded(7).hole().unwrap().cards()[0];
        assert_eq!(card, Card::from((card.rank(), card.suit())));
    }

    #[test]
    fn bijective_u8() {
        for n in 0..52u8 {
            assert_eq!(n, u8::from(Card::try_from(n).unwrap()));
        }
        assert!(Card::try_from(52u8).is_err());
    }

    #[test]
    fn parses_notation() {
        let card = Card::try_from("As").unwrap();
        assert_eq!(card.rank(), Rank::Ace);
        assert_eq!(card.suit(), Suit::S);
        let card = Card::try_from("10♥").unwrap();
        assert_eq!(card.rank(), Rank::Ten);
        assert_eq!(card.suit(), Suit::H);
        assert!(Card::try_from("A").is_err());
        assert!(Card::try_from("Xs").is_err());
    }

    #[test]
    fn displays_with_symbol() {
        assert_eq!(Card::try_from("Kd").unwrap().to_string(), "K♦");
    }
}
