//! Topic and business-type extraction
//!
//! Both extractors are cheap, total string functions used to fill template
//! slots. They never fail; unmatched input falls back to a fixed label.

/// Returned when no substantial topic word is found
pub const DEFAULT_TOPIC: &str = "your business";

/// Returned when no business keyword is found
pub const DEFAULT_BUSINESS_TYPE: &str = "business";

const STOP_WORDS: &[&str] = &[
    "write",
    "create",
    "make",
    "generate",
    "meta",
    "description",
    "blog",
    "for",
    "a",
    "an",
    "the",
    "keyword",
    "post",
    "seo",
];

/// Maximum number of words kept from a "for ..." clause
const MAX_FOR_CLAUSE_WORDS: usize = 2;

/// Ordered substring -> label table; first match wins.
const BUSINESS_TYPES: &[(&str, &str)] = &[
    ("coffee", "coffee shop"),
    ("cafe", "coffee shop"),
    ("restaurant", "restaurant"),
    ("shop", "retail store"),
    ("store", "retail store"),
    ("service", "service provider"),
    ("consult", "consulting firm"),
    ("agency", "marketing agency"),
];

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

fn tokens(prompt: &str) -> Vec<String> {
    prompt
        .to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Extract the main topic of a prompt.
///
/// Words following "for" are preferred (stop words removed, at most two);
/// otherwise the first non-stop word longer than three characters is used.
pub fn extract_topic(prompt: &str) -> String {
    let words = tokens(prompt);

    if let Some(index) = words.iter().position(|word| word == "for") {
        let clause: Vec<&str> = words[index + 1..]
            .iter()
            .map(String::as_str)
            .filter(|word| !is_stop_word(word))
            .take(MAX_FOR_CLAUSE_WORDS)
            .collect();
        if !clause.is_empty() {
            return clause.join(" ");
        }
    }

    words
        .iter()
        .find(|word| word.chars().count() > 3 && !is_stop_word(word))
        .cloned()
        .unwrap_or_else(|| DEFAULT_TOPIC.to_string())
}

/// Map a prompt to a coarse business-type label.
pub fn extract_business_type(prompt: &str) -> &'static str {
    let lowercase = prompt.to_lowercase();
    BUSINESS_TYPES
        .iter()
        .find(|(key, _)| lowercase.contains(key))
        .map(|(_, label)| *label)
        .unwrap_or(DEFAULT_BUSINESS_TYPE)
}

/// Capitalize the first letter of every whitespace-separated word.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
