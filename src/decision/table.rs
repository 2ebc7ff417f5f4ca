use super::action::Action;
use super::action::Choice;
use super::opponent::Opponent;
use crate::BASE_FOLD_EQUITY;
use crate::CALL_SIZE;
use crate::POT_SIZE;
use crate::Probability;
use crate::RAISE_SIZE;
use crate::Utility;
use crate::evaluation::Strength;

/// Expected value of every legal action for one hand against one
/// opponent, in big blinds.
///
/// The win rate is the strength heuristic taken directly as a
/// probability. With `w` the win rate and `fe` the fold equity:
///
/// - fold:  `0`
/// - call:  `w*(pot + call) - (1 - w)*call`
/// - raise: `fe*pot + (1 - fe)*(w*(pot + 2*raise) - raise)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Table {
    evs: [Utility; 3],
    fold_equity: Probability,
}

impl Table {
    pub fn new(strength: Strength, opponent: &Opponent) -> Self {
        let w = strength.value();
        let fe = Self::fold_equity(strength, opponent);
        let fold = 0.;
        let call = w * (POT_SIZE + CALL_SIZE) - (1. - w) * CALL_SIZE;
        let raise = fe * POT_SIZE + (1. - fe) * (w * (POT_SIZE + 2. * RAISE_SIZE) - RAISE_SIZE);
        Self {
            evs: [fold, call, raise],
            fold_equity: fe,
        }
    }

    /// Probability the opponent folds to a raise: a base rate, shifted by
    /// the opponent's style and by how weak the hero's hand is, clamped
    /// into `[0, 1]`.
    pub fn fold_equity(strength: Strength, opponent: &Opponent) -> Probability {
        (BASE_FOLD_EQUITY + opponent.style().fold_offset() + (1. - strength.value()) / 2.)
            .clamp(0., 1.)
    }

    pub fn ev(&self, action: Action) -> Utility {
        self.evs[action.index()]
    }
    /// EV of an answer; unrecognized answers are worth nothing.
    pub fn ev_of(&self, choice: &Choice) -> Utility {
        choice.action().map(|a| self.ev(a)).unwrap_or(0.)
    }
    pub fn max(&self) -> Utility {
        self.evs.iter().copied().fold(Utility::NEG_INFINITY, Utility::max)
    }
    /// Highest-EV action; the first in fold < call < raise order wins ties.
    pub fn best(&self) -> Action {
        Action::all()
            .into_iter()
            .fold(Action::Fold, |best, a| if self.ev(a) > self.ev(best) { a } else { best })
    }
    pub fn fold_equity_used(&self) -> Probability {
        self.fold_equity
    }
    pub fn iter(&self) -> impl Iterator<Item = (Action, Utility)> + '_ {
        Action::all().into_iter().map(|a| (a, self.ev(a)))
    }
}

impl From<[Utility; 3]> for Table {
    fn from(evs: [Utility; 3]) -> Self {
        Self {
            evs,
            fold_equity: 0.,
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.iter()
            .map(|(a, ev)| write!(f, "{:<6}{:>+8.3}\n", a, ev))
            .collect()
    }
}
