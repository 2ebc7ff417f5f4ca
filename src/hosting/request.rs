use crate::Error;
use crate::cards::Card;
use crate::cards::Hole;
use crate::cards::Rank;
use crate::cards::Suit;
use crate::decision::Opponent;
use serde::Deserialize;
use serde::Serialize;

/// A card as the browser sends it: `{"rank": "A", "suit": "hearts"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CardBody {
    pub rank: String,
    pub suit: String,
}

impl TryFrom<&CardBody> for Card {
    type Error = Error;
    fn try_from(body: &CardBody) -> Result<Self, Self::Error> {
        let rank = Rank::try_from(body.rank.as_str())?;
        let suit = Suit::try_from(body.suit.as_str())?;
        Ok(Card::from((rank, suit)))
    }
}

impl From<Card> for CardBody {
    fn from(card: Card) -> Self {
        Self {
            rank: card.rank().to_string(),
            suit: card.suit().name().to_string(),
        }
    }
}

/// Opponent profile in the big blind. Every field is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StyleBody {
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "type")]
    pub label: String,
    #[serde(default)]
    pub characteristics: String,
}

impl From<&StyleBody> for Opponent {
    fn from(body: &StyleBody) -> Self {
        Opponent::resolve(&body.category, &body.label, &body.characteristics)
    }
}

impl From<&Opponent> for StyleBody {
    fn from(opponent: &Opponent) -> Self {
        Self {
            category: opponent.style().to_string(),
            label: opponent.label().to_string(),
            characteristics: opponent.notes().to_string(),
        }
    }
}

fn hole(hand: &[CardBody]) -> Result<Hole, Error> {
    let cards = hand
        .iter()
        .map(Card::try_from)
        .collect::<Result<Vec<Card>, Error>>()?;
    Hole::try_from(cards.as_slice())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub hand: Vec<CardBody>,
    pub action: String,
    pub position: String,
    #[serde(default)]
    pub bb_style: Option<StyleBody>,
}

impl EvaluateRequest {
    /// Blank answer or seat text counts as absent.
    pub fn validate(&self) -> Result<(), Error> {
        match (self.action.trim().is_empty(), self.position.trim().is_empty()) {
            (true, _) => Err(Error::MissingField("action")),
            (_, true) => Err(Error::MissingField("position")),
            _ => Ok(()),
        }
    }
    pub fn hole(&self) -> Result<Hole, Error> {
        hole(&self.hand)
    }
    /// Missing profiles play as a neutral regular.
    pub fn opponent(&self) -> Opponent {
        self.bb_style
            .as_ref()
            .map(Opponent::from)
            .unwrap_or_default()
    }
}

/// Every field is optional: the explanation endpoint answers regardless.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    #[serde(default)]
    pub hand: Option<Vec<CardBody>>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub is_correct: Option<bool>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub bb_style: Option<StyleBody>,
}

impl ExplainRequest {
    pub fn hole(&self) -> Result<Hole, Error> {
        match &self.hand {
            Some(hand) => hole(hand),
            None => Err(Error::InvalidHand("missing hand".to_string())),
        }
    }
    pub fn opponent(&self) -> Opponent {
        self.bb_style
            .as_ref()
            .map(Opponent::from)
            .unwrap_or_default()
    }
    pub fn action(&self) -> &str {
        self.action.as_deref().unwrap_or_default()
    }
    pub fn position(&self) -> &str {
        self.position.as_deref().unwrap_or_default()
    }
    pub fn is_correct(&self) -> bool {
        self.is_correct.unwrap_or(false)
    }
}
