use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::layout::Side;

/// Full dialogue payload as served by the data endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatData {
    #[serde(default)]
    pub dialogue: Vec<DialogueLine>,
    /// Wire name kept as published by the endpoint
    #[serde(default)]
    pub emojies: Vec<Emoji>,
    #[serde(default)]
    pub avatars: Vec<Avatar>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub position: Side,
}

impl ChatData {
    /// Names usable as `{name}` placeholders
    pub fn emoji_names(&self) -> HashSet<String> {
        self.emojies.iter().map(|emoji| emoji.name.clone()).collect()
    }

    pub fn avatar(&self, speaker: &str) -> Option<&Avatar> {
        self.avatars.iter().find(|avatar| avatar.name == speaker)
    }

    pub fn emoji_url(&self, name: &str) -> Option<&str> {
        self.emojies
            .iter()
            .find(|emoji| emoji.name == name)
            .map(|emoji| emoji.url.as_str())
    }

    /// Built-in dataset used when the endpoint cannot be reached
    pub fn fallback() -> Self {
        let line = |name: &str, text: &str| DialogueLine {
            name: name.to_string(),
            text: text.to_string(),
        };
        let emoji = |name: &str, seed: &str| Emoji {
            name: name.to_string(),
            url: format!("https://api.dicebear.com/9.x/fun-emoji/png?seed={seed}"),
        };
        let avatar = |name: &str, query: &str, position: Side| Avatar {
            name: name.to_string(),
            url: format!("https://api.dicebear.com/9.x/personas/png?{query}"),
            position,
        };

        Self {
            dialogue: vec![
                line("Sheldon", "I admit {satisfied} the design of Cookie Crush is quite elegant in its simplicity."),
                line("Leonard", "That’s practically a compliment, Sheldon. {intrigued} Are you feeling okay?"),
                line("Penny", "Don’t worry, Leonard. He’s probably just trying to justify playing it himself."),
                line("Sheldon", "Incorrect. {neutral} I’m studying its mechanics. The progression system is oddly satisfying."),
                line("Penny", "It’s called fun, Sheldon. You should try it more often."),
                line("Leonard", "She’s got a point. Sometimes, a simple game can be relaxing."),
                line("Neighbour", "I fully agree {affirmative}"),
                line("Sheldon", "Relaxing? I suppose there’s merit in low-stakes gameplay to reduce cortisol levels."),
                line("Penny", "Translation: Sheldon likes crushing cookies but won’t admit it. {laughing}"),
                line("Sheldon", "Fine. I find the color-matching oddly soothing. Happy?"),
                line("Leonard", "Very. Now we can finally play as a team in Wordscapes."),
                line("Penny", "Wait, Sheldon’s doing team games now? What’s next, co-op decorating?"),
                line("Sheldon", "Unlikely. But if the design involves symmetry and efficiency, I may consider it."),
                line("Penny", "See? Casual gaming brings people together!"),
                line("Leonard", "Even Sheldon. That’s a win for everyone. {win}"),
                line("Sheldon", "Agreed. {neutral} Though I still maintain chess simulators are superior."),
                line("Penny", "Sure, Sheldon. {intrigued} You can play chess *after* we beat this next level."),
            ],
            emojies: vec![
                Emoji {
                    name: "sad".to_string(),
                    url: "https://api.dicebear.com:81/9.x/fun-emoji/png?seed=Sad".to_string(),
                },
                emoji("intrigued", "Sawyer"),
                emoji("neutral", "Destiny"),
                emoji("satisfied", "Jocelyn"),
                emoji("laughing", "Sophia"),
            ],
            avatars: vec![
                avatar(
                    "Sheldon",
                    "body=squared&clothingColor=6dbb58&eyes=open&hair=buzzcut&hairColor=6c4545&mouth=smirk&nose=smallRound&skinColor=e5a07e",
                    Side::Left,
                ),
                avatar(
                    "Penny",
                    "body=squared&clothingColor=f55d81&eyes=happy&hair=extraLong&hairColor=f29c65&mouth=smile&nose=smallRound&skinColor=e5a07e",
                    Side::Right,
                ),
                avatar(
                    "Leonard",
                    "body=checkered&clothingColor=f3b63a&eyes=glasses&hair=shortCombover&hairColor=362c47&mouth=surprise&nose=mediumRound&skinColor=d78774",
                    Side::Right,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_dataset() {
        let data = ChatData::fallback();
        assert_eq!(data.dialogue.len(), 17);
        assert_eq!(data.emojies.len(), 5);
        assert_eq!(data.avatars.len(), 3);
        assert_eq!(data.avatar("Sheldon").map(|a| a.position), Some(Side::Left));
        assert!(data.avatar("Neighbour").is_none());
        assert!(data.emoji_names().contains("neutral"));
        assert!(!data.emoji_names().contains("win"));
    }

    #[test]
    fn test_parse_wire_format() {
        let json = r#"{
            "dialogue": [{"name": "Penny", "text": "Hi {sad}"}],
            "emojies": [{"name": "sad", "url": "https://example.com/sad.png"}],
            "avatars": [{"name": "Penny", "url": "https://example.com/p.png", "position": "right"}]
        }"#;
        let data: ChatData = serde_json::from_str(json).unwrap();
        assert_eq!(data.dialogue[0].text, "Hi {sad}");
        assert_eq!(data.emoji_url("sad"), Some("https://example.com/sad.png"));
        assert_eq!(data.avatars[0].position, Side::Right);
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let data: ChatData = serde_json::from_str(r#"{"dialogue": []}"#).unwrap();
        assert!(data.emojies.is_empty());
        assert!(data.avatars.is_empty());
    }
}
