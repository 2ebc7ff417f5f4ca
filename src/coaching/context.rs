use crate::cards::Hole;
use crate::decision::Action;
use crate::decision::Opponent;
use crate::decision::Table;
use crate::decision::Verdict;

/// Everything a coach is told about one answered question.
#[derive(Debug, Clone)]
pub struct Context {
    pub hole: Hole,
    pub action: String,
    pub position: String,
    pub opponent: Opponent,
    pub correct: bool,
    pub best: Option<Action>,
    pub table: Option<Table>,
}

impl Context {
    /// Context for an answer the local judge has ruled on.
    pub fn judged(
        hole: Hole,
        action: &str,
        position: &str,
        opponent: Opponent,
        table: Table,
        verdict: &Verdict,
    ) -> Self {
        Self {
            hole,
            action: action.trim().to_string(),
            position: position.trim().to_string(),
            opponent,
            correct: verdict.is_correct(),
            best: Some(verdict.best()),
            table: Some(table),
        }
    }
    /// Context where the caller supplies the correctness flag.
    pub fn claimed(hole: Hole, action: &str, position: &str, opponent: Opponent, correct: bool) -> Self {
        Self {
            hole,
            action: action.trim().to_string(),
            position: position.trim().to_string(),
            opponent,
            correct,
            best: None,
            table: None,
        }
    }
}
