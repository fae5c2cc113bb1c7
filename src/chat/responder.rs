//! Keyword-matched canned replies for the wellness chat

use super::models::ChatMessage;

/// Classification bucket determining which canned reply is returned.
/// Categories are checked in a fixed priority order; the first whose keyword
/// set matches a substring of the lower-cased utterance wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyCategory {
    Stress,
    Sadness,
    Happiness,
    TipRequest,
    Gratitude,
    Default,
}

/// Priority order is total, so selection is never ambiguous
const PRIORITY: [ReplyCategory; 5] = [
    ReplyCategory::Stress,
    ReplyCategory::Sadness,
    ReplyCategory::Happiness,
    ReplyCategory::TipRequest,
    ReplyCategory::Gratitude,
];

impl ReplyCategory {
    fn keywords(self) -> &'static [&'static str] {
        match self {
            ReplyCategory::Stress => &["stress", "anxious", "overwhelmed"],
            ReplyCategory::Sadness => &["sad", "down", "depressed"],
            ReplyCategory::Happiness => &["happy", "good", "great"],
            ReplyCategory::TipRequest => &["tip", "yes"],
            ReplyCategory::Gratitude => &["thank"],
            ReplyCategory::Default => &[],
        }
    }

    /// The canned supportive reply bound to this category
    pub fn canned_reply(self) -> &'static str {
        match self {
            ReplyCategory::Stress => {
                "I'm sorry you're feeling stressed. Try taking a few deep breaths. \
                 Would you like a tip for stress relief?"
            }
            ReplyCategory::Sadness => {
                "It's okay to feel sad sometimes. Remember, you're not alone. \
                 Would you like a mood-boosting activity suggestion?"
            }
            ReplyCategory::Happiness => {
                "That's wonderful to hear! Keep up the positive energy. \
                 Would you like a wellness tip to maintain your mood?"
            }
            ReplyCategory::TipRequest => {
                "Here's a tip: Take a 5-minute mindful break. Close your eyes, \
                 breathe deeply, and focus on the present moment."
            }
            ReplyCategory::Gratitude => {
                "You're welcome! I'm always here if you need to talk or need more tips."
            }
            ReplyCategory::Default => "I'm here to support you. Can you tell me more?",
        }
    }

    /// Classify an utterance by substring containment, case-insensitive
    pub fn classify(utterance: &str) -> ReplyCategory {
        let lower = utterance.to_lowercase();
        PRIORITY
            .iter()
            .copied()
            .find(|category| category.keywords().iter().any(|kw| lower.contains(kw)))
            .unwrap_or(ReplyCategory::Default)
    }
}

/// Map a free-text utterance to a canned supportive reply.
///
/// `history` is accepted so a richer responder could condition on prior
/// turns; the current behavior ignores it. Pure and synchronous; any delivery
/// delay belongs to the caller.
pub fn reply(utterance: &str, _history: &[ChatMessage]) -> String {
    ReplyCategory::classify(utterance).canned_reply().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_keywords_match_anywhere() {
        for utterance in [
            "so much stress at work",
            "I've been ANXIOUS lately",
            "everything feels overwhelmed-ish",
        ] {
            assert_eq!(ReplyCategory::classify(utterance), ReplyCategory::Stress);
        }
    }

    #[test]
    fn test_stress_wins_over_lower_priority_keywords() {
        // "good" is a Happiness keyword, but Stress has higher priority
        assert_eq!(
            ReplyCategory::classify("I am stressed but happy"),
            ReplyCategory::Stress
        );
        assert_eq!(
            ReplyCategory::classify("good but overwhelmed"),
            ReplyCategory::Stress
        );
    }

    #[test]
    fn test_sadness_before_happiness() {
        assert_eq!(
            ReplyCategory::classify("feeling down but it's a good day"),
            ReplyCategory::Sadness
        );
    }

    #[test]
    fn test_each_category_maps_to_its_reply() {
        assert!(reply("anxious", &[]).starts_with("I'm sorry you're feeling stressed"));
        assert!(reply("a bit sad today", &[]).starts_with("It's okay to feel sad"));
        assert!(reply("life is great", &[]).starts_with("That's wonderful to hear!"));
        assert!(reply("yes please", &[]).starts_with("Here's a tip"));
        assert!(reply("thank you", &[]).starts_with("You're welcome!"));
    }

    #[test]
    fn test_no_match_returns_default() {
        assert_eq!(
            reply("the weather is mild", &[]),
            ReplyCategory::Default.canned_reply()
        );
    }

    #[test]
    fn test_empty_and_whitespace_return_default() {
        // Callers suppress blank input, but the responder stays total
        assert_eq!(ReplyCategory::classify(""), ReplyCategory::Default);
        assert_eq!(ReplyCategory::classify("   "), ReplyCategory::Default);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(ReplyCategory::classify("THANK YOU"), ReplyCategory::Gratitude);
        assert_eq!(ReplyCategory::classify("Tip?"), ReplyCategory::TipRequest);
    }
}
