use super::context::Context;
use crate::decision::Action;

/// Deterministic explanation used whenever the coach cannot answer.
///
/// Built only from the seat, the answer and the verdict, so the player
/// always learns whether they were right.
pub fn fallback(position: &str, action: &str, correct: bool, best: Option<Action>) -> String {
    let action = match action.trim() {
        "" => "That action",
        action => action,
    };
    let seat = match position.trim() {
        "" => String::new(),
        position => format!(" from {}", position),
    };
    match (correct, best) {
        (true, _) => format!(
            "{}{} is the correct choice. Keep playing this spot the same way.",
            action, seat
        ),
        (false, Some(best)) => format!(
            "{}{} is not optimal; {} has the higher expected value here. Consider a different line next time.",
            action,
            seat,
            best.label()
        ),
        (false, None) => format!(
            "{}{} is not optimal. Consider a more careful approach.",
            action, seat
        ),
    }
}

impl Context {
    /// The fallback sentence for this context.
    pub fn fallback(&self) -> String {
        fallback(&self.position, &self.action, self.correct, self.best)
    }
}
