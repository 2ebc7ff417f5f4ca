const TERMINATORS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// Cuts `text` to at most `budget` characters at a sentence boundary.
///
/// The cut lands just after the last terminator within the budget. With
/// no terminator in range the text is cut at the budget and closed with
/// a period. Counts characters, not bytes.
pub fn truncate(text: &str, budget: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let head = text.chars().take(budget).collect::<String>();
    match head.rfind(TERMINATORS) {
        Some(i) if i > 0 => {
            let end = i + head[i..].chars().next().map_or(1, char::len_utf8);
            head[..end].to_string()
        }
        _ => format!("{}.", head.trim_end()),
    }
}

/// Splits off complete sentences, dropping a trailing fragment that
/// never reached a terminator.
pub fn complete_sentences(text: &str) -> &str {
    let text = text.trim();
    match text.rfind(TERMINATORS) {
        Some(i) => {
            let end = i + text[i..].chars().next().map_or(1, char::len_utf8);
            &text[..end]
        }
        None => text,
    }
}
