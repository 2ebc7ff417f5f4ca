use super::action::Action;
use super::action::Choice;
use super::table::Table;
use crate::Utility;
use crate::VERDICT_TOLERANCE;

/// The judge's ruling on one answer.
///
/// An answer is correct iff its EV is within [`VERDICT_TOLERANCE`] of the
/// table maximum. Deterministic in `(table, choice)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    choice: Choice,
    best: Action,
    ev: Utility,
    gap: Utility,
}

impl Verdict {
    pub fn judge(table: &Table, choice: Choice) -> Self {
        let ev = table.ev_of(&choice);
        let gap = table.max() - ev;
        Self {
            best: table.best(),
            choice,
            ev,
            gap,
        }
    }
    pub fn is_correct(&self) -> bool {
        self.gap.abs() < VERDICT_TOLERANCE
    }
    pub fn best(&self) -> Action {
        self.best
    }
    pub fn choice(&self) -> &Choice {
        &self.choice
    }
    /// EV of the chosen action.
    pub fn ev(&self) -> Utility {
        self.ev
    }
    /// How far the chosen action falls short of the best one.
    pub fn gap(&self) -> Utility {
        self.gap
    }
    /// Warning to surface when the answer did not name a legal action.
    pub fn warning(&self) -> Option<String> {
        match &self.choice {
            Choice::Unknown(text) => Some(format!(
                "unknown action {:?}; scored as 0 EV (expected fold, call or raise)",
                text
            )),
            Choice::Known(_) => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.is_correct() {
            true => write!(f, "correct: {} ({:+.3} BB)", self.choice, self.ev),
            false => write!(
                f,
                "incorrect: {} ({:+.3} BB), best is {} (gap {:.3} BB)",
                self.choice, self.ev, self.best, self.gap
            ),
        }
    }
}
