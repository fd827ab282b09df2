use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::layout::FlowToken;

/// `{name}` emoji placeholder
fn placeholder() -> Option<&'static Regex> {
    static PLACEHOLDER: OnceLock<Option<Regex>> = OnceLock::new();
    PLACEHOLDER
        .get_or_init(|| Regex::new(r"\{(\w+)\}").ok())
        .as_ref()
}

/// Split a dialogue line into flow tokens
///
/// Words keep their trailing space so wrapped lines read naturally.
/// `{name}` becomes an inline image when `name` is a known emoji; unknown
/// placeholders stay in the text verbatim.
pub fn tokenize(text: &str, emoji_names: &HashSet<String>) -> Vec<FlowToken> {
    let mut tokens = Vec::new();
    let mut rest_start = 0;

    if let Some(re) = placeholder() {
        for caps in re.captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if !emoji_names.contains(name.as_str()) {
                continue;
            }
            push_words(&mut tokens, &text[rest_start..whole.start()]);
            tokens.push(FlowToken::Image(name.as_str().to_string()));
            rest_start = whole.end();
        }
    }
    push_words(&mut tokens, &text[rest_start..]);

    tokens
}

fn push_words(tokens: &mut Vec<FlowToken>, segment: &str) {
    tokens.extend(
        segment
            .split_inclusive(' ')
            .filter(|word| !word.is_empty())
            .map(|word| FlowToken::Text(word.to_string())),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emojis(names: &[&str]) -> HashSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_words_keep_trailing_space() {
        let tokens = tokenize("It’s called fun", &HashSet::new());
        assert_eq!(
            tokens,
            vec![
                FlowToken::text("It’s "),
                FlowToken::text("called "),
                FlowToken::text("fun"),
            ]
        );
    }

    #[test]
    fn test_known_emoji_becomes_image() {
        let tokens = tokenize("I admit {satisfied} the design", &emojis(&["satisfied"]));
        assert_eq!(
            tokens,
            vec![
                FlowToken::text("I "),
                FlowToken::text("admit "),
                FlowToken::image("satisfied"),
                FlowToken::text(" "),
                FlowToken::text("the "),
                FlowToken::text("design"),
            ]
        );
    }

    #[test]
    fn test_unknown_emoji_stays_literal() {
        let tokens = tokenize("a win for everyone. {win}", &emojis(&["neutral"]));
        assert_eq!(tokens.last(), Some(&FlowToken::text("{win}")));
        assert!(tokens.iter().all(|t| matches!(t, FlowToken::Text(_))));
    }

    #[test]
    fn test_adjacent_emojis() {
        let tokens = tokenize("{sad}{neutral}", &emojis(&["sad", "neutral"]));
        assert_eq!(
            tokens,
            vec![FlowToken::image("sad"), FlowToken::image("neutral")]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("", &HashSet::new()).is_empty());
    }
}
