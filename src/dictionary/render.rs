use super::models::{Definition, WordOfTheDay};
use super::{DEFINITION_NOT_FOUND, WOTD_NOT_FOUND, WOTD_NO_DEFINITION, WOTD_NO_EXAMPLE};

/// Three lines: the bolded word, its first definition, its first example.
pub fn render_word_of_the_day(wotd: &WordOfTheDay) -> String {
    if wotd.word.is_empty() {
        return WOTD_NOT_FOUND.to_string();
    }

    let definition = match wotd.definitions.first() {
        Some(def) => format!("_Definition_: {} ({})", def.text, def.part_of_speech),
        None => WOTD_NO_DEFINITION.to_string(),
    };

    let example = match wotd.examples.first() {
        Some(ex) => format!("_Example_: \"{}\" - {}", ex.text, ex.title),
        None => WOTD_NO_EXAMPLE.to_string(),
    };

    format!(
        "📖 **Word of the Day**: **{}**\n{}\n{}",
        wotd.word, definition, example
    )
}

/// Header line followed by at most `limit` numbered entries.
pub fn render_definitions(word: &str, definitions: &[Definition], limit: usize) -> String {
    if definitions.is_empty() {
        return DEFINITION_NOT_FOUND.to_string();
    }

    let mut result = format!("📖 **{}**\n", word);
    for (i, def) in definitions.iter().take(limit).enumerate() {
        result.push_str(&format!(
            "**{}.** *({})* {}\n",
            i + 1,
            def.part_of_speech,
            def.text
        ));
        if let Some(example) = def.example_uses.first() {
            result.push_str(&format!("_Example:_ \"{}\"\n", example.text));
        }
    }
    result
}
