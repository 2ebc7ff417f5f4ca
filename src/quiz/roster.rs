use crate::decision::Opponent;
use crate::decision::Style;

/// Seats the hero may be dealt into.
pub const SEATS: [&str; 6] = ["SB", "BTN", "CO", "MP", "UTG", "HJ"];

/// Big-blind archetypes a round can be played against.
pub fn archetypes() -> Vec<Opponent> {
    vec![
        Opponent::new(
            Style::Tight,
            "Turtle",
            "Defends only premium hands and folds to most opens.",
        ),
        Opponent::new(
            Style::Loose,
            "Caller",
            "Calls far too wide preflop and rarely 3-bets.",
        ),
        Opponent::new(
            Style::Aggressive,
            "Viking",
            "Bluffs often and 3-bets light to take the initiative.",
        ),
        Opponent::new(
            Style::Aggressive,
            "Hunter",
            "Attacks wide ranges and adjusts quickly to passivity.",
        ),
        Opponent::new(
            Style::Loose,
            "Gambler",
            "Plays any two cards and chases draws regardless of price.",
        ),
        Opponent::new(
            Style::Passive,
            "Limper",
            "Prefers flatting to raising and seldom puts pressure on.",
        ),
    ]
}
