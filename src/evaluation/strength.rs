use crate::Error;
use crate::Probability;
use crate::cards::Card;
use crate::cards::Hole;

/// Structural class of a two-card hand. Classification order is
/// paired, then suited, then offsuit.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Shape {
    Offsuit,
    Suited,
    Pair,
}

impl From<&Hole> for Shape {
    fn from(hole: &Hole) -> Self {
        if hole.is_pair() {
            Shape::Pair
        } else if hole.is_suited() {
            Shape::Suited
        } else {
            Shape::Offsuit
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Shape::Pair => write!(f, "pocket pair"),
            Shape::Suited => write!(f, "suited"),
            Shape::Offsuit => write!(f, "offsuit"),
        }
    }
}

/// Heuristic preflop strength of a two-card hand, in `[0, 1]`.
///
/// This is a closed-form proxy for equity built from pairing,
/// suitedness and rank height, not a solved equity. Quiz verdicts are
/// defined relative to exactly these constants:
///
/// - pair:    `0.5 + (r/14)*0.5`
/// - suited:  `0.3 + (hi/14)*0.4 + (lo/14)*0.3`
/// - offsuit: `0.2 + (hi/14)*0.4 + (lo/14)*0.2`
///
/// with face values A = 14 ... 2 = 2, clamped above at 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Strength {
    shape: Shape,
    value: Probability,
}

impl Strength {
    pub fn shape(&self) -> Shape {
        self.shape
    }
    pub fn value(&self) -> Probability {
        self.value
    }
}

impl From<Hole> for Strength {
    fn from(hole: Hole) -> Self {
        let hi = hole.high().value() as Probability / 14.;
        let lo = hole.low().value() as Probability / 14.;
        let shape = Shape::from(&hole);
        let value = match shape {
            Shape::Pair => 0.5 + hi * 0.5,
            Shape::Suited => 0.3 + hi * 0.4 + lo * 0.3,
            Shape::Offsuit => 0.2 + hi * 0.4 + lo * 0.2,
        };
        Self {
            shape,
            value: value.min(1.),
        }
    }
}

impl TryFrom<&[Card]> for Strength {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Hole::try_from(cards).map(Self::from)
    }
}

impl From<Strength> for Probability {
    fn from(strength: Strength) -> Self {
        strength.value
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.3} ({})", self.value, self.shape)
    }
}
