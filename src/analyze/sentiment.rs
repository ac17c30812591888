//! Keyword sentiment classifier for free-text feedback.
//!
//! Deliberately simple: exact token membership against two fixed word
//! lists, each hit worth 0.1. Good enough to bucket short feedback
//! messages without any model artifacts.

use std::fmt;

use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: &[&str] = &[
    "amazing",
    "excellent",
    "fantastic",
    "great",
    "good",
    "wonderful",
    "awesome",
    "brilliant",
    "outstanding",
    "superb",
    "perfect",
    "love",
    "like",
    "best",
    "helpful",
    "useful",
    "easy",
    "smooth",
    "clean",
    "intuitive",
    "recommend",
    "impressed",
    "satisfied",
    "pleased",
    "happy",
    "delighted",
    "thank",
];

const NEGATIVE_WORDS: &[&str] = &[
    "terrible",
    "awful",
    "bad",
    "horrible",
    "worst",
    "hate",
    "dislike",
    "problem",
    "issue",
    "bug",
    "error",
    "broken",
    "slow",
    "difficult",
    "confusing",
    "annoying",
    "disappointing",
    "frustrated",
    "concerned",
    "complaint",
    "fail",
    "crash",
    "wrong",
    "poor",
    "lacking",
    "missing",
];

/// Sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified feedback text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    pub text: String,
    pub label: Sentiment,
    /// Net keyword score in [-1.0, 1.0].
    pub score: f64,
}

impl SentimentResult {
    /// Distance from neutral, in [0.0, 1.0].
    #[inline]
    pub fn confidence(&self) -> f64 {
        self.score.abs()
    }
}

/// Classify a piece of text.
///
/// Tokens are whitespace-split lowercased words and must match a list
/// entry exactly, so "amazing!" earns nothing. Each positive hit adds
/// 0.1, each negative hit subtracts 0.1, and the total is clamped to
/// [-1.0, 1.0]. Scores strictly above 0.2 label positive, strictly
/// below -0.2 negative, everything else neutral.
pub fn classify(text: &str) -> SentimentResult {
    let lowered = text.to_lowercase();
    let mut positive = 0i32;
    let mut negative = 0i32;
    for word in lowered.split_whitespace() {
        if POSITIVE_WORDS.contains(&word) {
            positive += 1;
        }
        if NEGATIVE_WORDS.contains(&word) {
            negative += 1;
        }
    }
    let score = ((positive - negative) as f64 * 0.1).clamp(-1.0, 1.0);
    let label = if score > 0.2 {
        Sentiment::Positive
    } else if score < -0.2 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };
    SentimentResult {
        text: text.to_string(),
        label,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_neutral() {
        let result = classify("");
        assert_eq!(result.label, Sentiment::Neutral);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence(), 0.0);
    }

    #[test]
    fn three_positive_hits_cross_the_threshold() {
        let result = classify("amazing wonderful great event");
        assert_eq!(result.label, Sentiment::Positive);
        assert!((result.score - 0.3).abs() < 1e-12);
    }

    #[test]
    fn two_hits_stay_neutral() {
        // 0.2 does not strictly exceed the threshold.
        let result = classify("good event, really helpful");
        assert_eq!(result.label, Sentiment::Neutral);
        assert!((result.score - 0.2).abs() < 1e-12);
    }

    #[test]
    fn negative_words_pull_the_score_down() {
        let result = classify("terrible broken slow registration");
        assert_eq!(result.label, Sentiment::Negative);
        assert!((result.score + 0.3).abs() < 1e-12);
    }

    #[test]
    fn score_clamps_at_one() {
        let text = "amazing excellent fantastic great good wonderful awesome \
                    brilliant outstanding superb perfect love";
        let result = classify(text);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.label, Sentiment::Positive);
    }

    #[test]
    fn matching_is_exact_token_only() {
        // Punctuation-glued and embedded occurrences do not count.
        let result = classify("amazing! greatness problematic");
        assert_eq!(result.label, Sentiment::Neutral);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn mixed_feedback_cancels_out() {
        let result = classify("great talk but terrible wifi");
        assert_eq!(result.label, Sentiment::Neutral);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn casing_is_ignored() {
        let result = classify("AMAZING Wonderful GREAT");
        assert_eq!(result.label, Sentiment::Positive);
    }
}
