use crate::Error;

/// Card rank, deuce low and ace high.
///
/// The discriminant is the index `0..13` used by the byte encoding of
/// [`Card`](super::card::Card). The heuristic scoring works on
/// [`Rank::value`] instead, which is the familiar face value `2..=14`.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    /// Face value with A = 14 ... 2 = 2.
    pub fn value(&self) -> u8 {
        u8::from(*self) + 2
    }
    /// All thirteen ranks, ace first.
    pub const fn all() -> [Rank; 13] {
        [
            Rank::Ace,
            Rank::King,
            Rank::Queen,
            Rank::Jack,
            Rank::Ten,
            Rank::Nine,
            Rank::Eight,
            Rank::Seven,
            Rank::Six,
            Rank::Five,
            Rank::Four,
            Rank::Three,
            Rank::Two,
        ]
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Rank {
    type Error = Error;
    fn try_from(n: u8) -> Result<Rank, Self::Error> {
        match n {
            0 => Ok(Rank::Two),
            1 => Ok(Rank::Three),
            2 => Ok(Rank::Four),
            3 => Ok(Rank::Five),
            4 => Ok(Rank::Six),
            5 => Ok(Rank::Seven),
            6 => Ok(Rank::Eight),
            7 => Ok(Rank::Nine),
            8 => Ok(Rank::Ten),
            9 => Ok(Rank::Jack),
            10 => Ok(Rank::Queen),
            11 => Ok(Rank::King),
            12 => Ok(Rank::Ace),
            _ => Err(Error::InvalidHand(format!("rank index out of range: {}", n))),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// str isomorphism
///
/// Accepts the single-letter notation plus "10" for ten.
impl TryFrom<&str> for Rank {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "T" | "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(Error::InvalidHand(format!("invalid rank str: {}", s))),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let rank = Rank::Five;
        assert_eq!(rank, Rank::try_from(u8::from(rank)).unwrap());
    }

    #[test]
    fn face_values() {
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Two.value(), 2);
    }

    #[test]
    fn out_of_range_index() {
        assert!(matches!(Rank::try_from(13u8), Err(Error::InvalidHand(_))));
    }

    #[test]
    fn parses_ten_both_ways() {
        assert_eq!(Rank::try_from("T").unwrap(), Rank::Ten);
        assert_eq!(Rank::try_from("10").unwrap(), Rank::Ten);
        assert_eq!(Rank::try_from("t").unwrap(), Rank::Ten);
        assert!(Rank::try_from("1").is_err());
    }
}
