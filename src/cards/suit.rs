use crate::Error;

/// Card suit: clubs, diamonds, hearts, spades.
///
/// Only suit *equality* matters to the strength heuristic; the ordering
/// is arbitrary but fixes the canonical deck order.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
    /// Unicode suit symbol for display.
    pub fn symbol(&self) -> char {
        match self {
            Suit::C => '♣',
            Suit::D => '♦',
            Suit::H => '♥',
            Suit::S => '♠',
        }
    }
    /// Plural English name, the form the web client sends.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::C => "clubs",
            Suit::D => "diamonds",
            Suit::H => "hearts",
            Suit::S => "spades",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n % 4 {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            _ => Suit::S,
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "c" | "♣" | "club" | "clubs" => Ok(Suit::C),
            "d" | "♦" | "diamond" | "diamonds" => Ok(Suit::D),
            "h" | "♥" | "heart" | "hearts" => Ok(Suit::H),
            "s" | "♠" | "spade" | "spades" => Ok(Suit::S),
            _ => Err(Error::InvalidHand(format!("invalid suit str: {}", s))),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
