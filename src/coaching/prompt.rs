use super::context::Context;

/// Fixes tone and length of the completion.
pub fn system(budget: usize) -> String {
    format!(
        "You are a professional poker coach. Explain heads-up preflop decisions \
         in at most {} characters of plain prose. Write card names with suit \
         symbols (♠♥♦♣). Always include one concrete piece of advice and finish \
         every sentence.",
        budget
    )
}

/// The situation as the coach sees it.
pub fn user(context: &Context, budget: usize) -> String {
    let mut lines = vec![
        format!(
            "Explain this heads-up preflop situation in {}-{} characters.",
            budget * 3 / 5,
            budget
        ),
        String::new(),
        "Situation:".to_string(),
        format!("- Hero position: {}", context.position),
        format!("- Hero hand: {} ({})", context.hole, context.hole.class()),
        format!("- Chosen action: {}", context.action),
        format!(
            "- Opponent in the big blind: {} ({})",
            context.opponent.label(),
            context.opponent.style()
        ),
        format!("- Opponent tendencies: {}", context.opponent.notes()),
    ];
    if let Some(table) = &context.table {
        lines.push(format!(
            "- Estimated EV in big blinds: {}",
            table
                .iter()
                .map(|(a, ev)| format!("{} {:+.2}", a, ev))
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
    lines.push(String::new());
    lines.push(match (context.correct, context.best) {
        (true, _) => "This is the correct choice.".to_string(),
        (false, Some(best)) => format!("This is the wrong choice; the better play is to {}.", best),
        (false, None) => "This is the wrong choice.".to_string(),
    });
    lines.push(String::new());
    lines.push("Use standard poker terms, account for the opponent's tendencies, and state the conclusion clearly.".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hole;
    use crate::decision::*;
    use crate::evaluation::Strength;

    fn context() -> Context {
        let hole = Hole::try_from("As Ah").unwrap();
        let opponent = Opponent::new(Style::Tight, "Turtle", "folds too much");
        let table = Table::new(Strength::from(hole), &opponent);
        let verdict = Verdict::judge(&table, Choice::from("Call"));
        Context::judged(hole, "Call", "SB", opponent, table, &verdict)
    }

    #[test]
    fn embeds_the_situation() {
        let prompt = user(&context(), 250);
        assert!(prompt.contains("A♠ A♥"));
        assert!(prompt.contains("Chosen action: Call"));
        assert!(prompt.contains("Hero position: SB"));
        assert!(prompt.contains("Turtle (tight)"));
        assert!(prompt.contains("folds too much"));
        assert!(prompt.contains("better play is to raise"));
        assert!(prompt.contains("150-250"));
    }

    #[test]
    fn system_states_budget() {
        assert!(system(200).contains("200 characters"));
    }
}
