use crate::Error;
use crate::RAISE_SIZE;

/// One of the three legal preflop responses.
///
/// The declaration order is also the tie-break order of the judge:
/// Fold < Call < Raise.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Fold,
    Call,
    Raise,
}

impl Action {
    /// Every legal action in tie-break order.
    pub const fn all() -> [Action; 3] {
        [Action::Fold, Action::Call, Action::Raise]
    }
    /// Position in [`Action::all`], for indexing per-action tables.
    pub fn index(&self) -> usize {
        *self as usize
    }
    /// Label offered to the player as an answer option.
    pub fn label(&self) -> String {
        match self {
            Action::Fold => "Fold".to_string(),
            Action::Call => "Call".to_string(),
            Action::Raise => format!("Raise {}BB", RAISE_SIZE),
        }
    }
    /// True if the action puts chips in the pot.
    pub fn is_aggro(&self) -> bool {
        matches!(self, Action::Raise)
    }
}

/// Normalizes free-form answer text to its base verb.
///
/// Matching is case-insensitive, only the first word counts, and a
/// glued size annotation ("raise3bb", "call1.5") is stripped, so
/// "Raise 3BB", "RAISE" and "raise3bb" all read as [`Action::Raise`].
impl TryFrom<&str> for Action {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let word = s
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase();
        let verb = word
            .trim_end_matches("bb")
            .trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
        match verb {
            "fold" => Ok(Action::Fold),
            "call" => Ok(Action::Call),
            "raise" => Ok(Action::Raise),
            _ => Err(Error::UnknownAction(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "fold"),
            Action::Call => write!(f, "call"),
            Action::Raise => write!(f, "raise"),
        }
    }
}

/// A player's answer: a recognized action, or the raw text of one that
/// isn't. Unknown answers are scored at zero EV and flagged, never
/// silently read as a fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Known(Action),
    Unknown(String),
}

impl Choice {
    pub fn action(&self) -> Option<Action> {
        match self {
            Choice::Known(action) => Some(*action),
            Choice::Unknown(_) => None,
        }
    }
    pub fn is_unknown(&self) -> bool {
        matches!(self, Choice::Unknown(_))
    }
}

impl From<&str> for Choice {
    fn from(s: &str) -> Self {
        match Action::try_from(s) {
            Ok(action) => Choice::Known(action),
            Err(e) => {
                log::warn!("{}", e);
                Choice::Unknown(s.trim().to_string())
            }
        }
    }
}

impl From<Action> for Choice {
    fn from(action: Action) -> Self {
        Choice::Known(action)
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Choice::Known(action) => write!(f, "{}", action),
            Choice::Unknown(text) => write!(f, "{}", text),
        }
    }
}
