use crate::config::DISCORD_MESSAGE_LIMIT;

/// Cuts `input` to Discord's message limit on a character boundary, marking
/// the cut with an ellipsis.
pub fn truncate_for_discord(input: &str) -> String {
    truncate_chars(input, DISCORD_MESSAGE_LIMIT)
}

pub fn truncate_chars(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }
    let mut output: String = input.chars().take(max_chars.saturating_sub(1)).collect();
    output.push('…');
    output
}
