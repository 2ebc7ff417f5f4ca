use crate::decision::Verdict;

/// Running tally for a quiz session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    correct: usize,
    answered: usize,
}

impl Score {
    pub fn record(&mut self, verdict: &Verdict) {
        self.answered += 1;
        if verdict.is_correct() {
            self.correct += 1;
        }
    }
    pub fn correct(&self) -> usize {
        self.correct
    }
    pub fn answered(&self) -> usize {
        self.answered
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} / {}", self.correct, self.answered)
    }
}
