//! Aggregation helpers for dashboard-style reporting: category
//! distributions, top-N selection, means, and score trends.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::sentiment::{Sentiment, SentimentResult};

/// Label counts with independently rounded integer percentages.
///
/// Each percentage is rounded on its own, so they can sum to 99 or 101.
/// Keys keep first-seen order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Distribution {
    pub counts: IndexMap<String, usize>,
    pub percentages: IndexMap<String, u32>,
}

/// Count label occurrences and derive per-label percentages.
pub fn category_distribution<I, S>(labels: I) -> Distribution
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for label in labels {
        *counts.entry(label.as_ref().to_string()).or_insert(0) += 1;
    }
    let total: usize = counts.values().sum();
    let percentages = counts
        .iter()
        .map(|(label, &count)| {
            let pct = if total > 0 {
                (count as f64 / total as f64 * 100.0).round() as u32
            } else {
                0
            };
            (label.clone(), pct)
        })
        .collect();
    Distribution {
        counts,
        percentages,
    }
}

/// Arithmetic mean, 0.0 for an empty slice.
pub fn mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// The `n` items with the highest keys, best first. Equal keys keep
/// their input order.
pub fn top_n_by<'a, T, F>(items: &'a [T], n: usize, key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> f64,
{
    let mut keyed: Vec<(&'a T, f64)> = items.iter().map(|item| (item, key(item))).collect();
    keyed.sort_by(|a, b| b.1.total_cmp(&a.1));
    keyed.truncate(n);
    keyed.into_iter().map(|(item, _)| item).collect()
}

/// Direction of a time-ordered score series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
            Trend::InsufficientData => "insufficient_data",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trend of a score series ordered most recent first.
///
/// The first half is the recent window; a recent-minus-older mean
/// difference strictly above 0.2 is improving, strictly below -0.2
/// declining, anything in between stable. Fewer than 5 scores cannot
/// support a verdict.
pub fn trend(scores: &[f64]) -> Trend {
    if scores.len() < 5 {
        return Trend::InsufficientData;
    }
    let mid = scores.len() / 2;
    let diff = mean(&scores[..mid]) - mean(&scores[mid..]);
    if diff > 0.2 {
        Trend::Improving
    } else if diff < -0.2 {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// Sentiment percentages with the three labels always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentShares {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

/// Feedback roll-up: volume, overall mood, score average, label shares,
/// and trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub total: usize,
    pub overall: Sentiment,
    /// Mean score rounded to two decimals.
    pub average_score: f64,
    pub distribution: SentimentShares,
    pub trend: Trend,
}

/// Summarize classified feedback ordered most recent first.
///
/// The overall label uses looser thresholds than per-item
/// classification: a mean strictly above 0.1 reads positive, strictly
/// below -0.1 negative.
pub fn sentiment_summary(results: &[SentimentResult]) -> SentimentSummary {
    let total = results.len();
    let scores: Vec<f64> = results.iter().map(|r| r.score).collect();
    let average = mean(&scores);
    let overall = if average > 0.1 {
        Sentiment::Positive
    } else if average < -0.1 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    let share = |label: Sentiment| {
        if total == 0 {
            return 0;
        }
        let count = results.iter().filter(|r| r.label == label).count();
        (count as f64 / total as f64 * 100.0).round() as u32
    };

    SentimentSummary {
        total,
        overall,
        average_score: (average * 100.0).round() / 100.0,
        distribution: SentimentShares {
            positive: share(Sentiment::Positive),
            neutral: share(Sentiment::Neutral),
            negative: share(Sentiment::Negative),
        },
        trend: trend(&scores),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(label: Sentiment, score: f64) -> SentimentResult {
        SentimentResult {
            text: String::new(),
            label,
            score,
        }
    }

    #[test]
    fn distribution_counts_and_rounds_per_label() {
        let dist = category_distribution(["tech", "finance", "tech", "health"]);
        assert_eq!(dist.counts.get("tech"), Some(&2));
        assert_eq!(dist.percentages.get("tech"), Some(&50));
        assert_eq!(dist.percentages.get("finance"), Some(&25));
        assert_eq!(dist.percentages.get("health"), Some(&25));
        // First-seen order.
        let labels: Vec<&String> = dist.counts.keys().collect();
        assert_eq!(labels, ["tech", "finance", "health"]);
    }

    #[test]
    fn distribution_percentages_round_independently() {
        let dist = category_distribution(["a", "b", "c"]);
        // Three labels at 33% each; the sum is 99, not 100.
        let sum: u32 = dist.percentages.values().sum();
        assert_eq!(sum, 99);
    }

    #[test]
    fn distribution_of_nothing_is_empty() {
        let dist = category_distribution(Vec::<String>::new());
        assert!(dist.counts.is_empty());
        assert!(dist.percentages.is_empty());
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[2.0, 4.0]), 3.0);
    }

    #[test]
    fn top_n_is_stable_on_ties() {
        let items = [("a", 1.0), ("b", 3.0), ("c", 3.0), ("d", 2.0)];
        let top = top_n_by(&items, 3, |item| item.1);
        let names: Vec<&str> = top.iter().map(|item| item.0).collect();
        assert_eq!(names, ["b", "c", "d"]);
    }

    #[test]
    fn trend_needs_five_scores() {
        assert_eq!(trend(&[1.0, 1.0, 1.0, 1.0]), Trend::InsufficientData);
    }

    #[test]
    fn trend_reads_first_half_as_recent() {
        // Recent half averages 0.5, older half 0.0.
        assert_eq!(trend(&[0.5, 0.5, 0.0, 0.0, 0.0]), Trend::Improving);
        assert_eq!(trend(&[0.0, 0.0, 0.5, 0.5, 0.5]), Trend::Declining);
        assert_eq!(trend(&[0.1, 0.1, 0.1, 0.1, 0.1]), Trend::Stable);
    }

    #[test]
    fn summary_rolls_up_labels_and_average() {
        let results = [
            result(Sentiment::Positive, 0.5),
            result(Sentiment::Positive, 0.25),
            result(Sentiment::Negative, -0.25),
            result(Sentiment::Negative, -0.5),
        ];
        let summary = sentiment_summary(&results);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.overall, Sentiment::Neutral);
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(
            summary.distribution,
            SentimentShares {
                positive: 50,
                neutral: 0,
                negative: 50,
            }
        );
        assert_eq!(summary.trend, Trend::InsufficientData);
    }

    #[test]
    fn summary_of_no_feedback_is_neutral() {
        let summary = sentiment_summary(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.overall, Sentiment::Neutral);
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(summary.distribution, SentimentShares::default());
        assert_eq!(summary.trend, Trend::InsufficientData);
    }

    #[test]
    fn summary_overall_uses_loose_thresholds() {
        let results = [
            result(Sentiment::Positive, 0.3),
            result(Sentiment::Neutral, 0.1),
        ];
        // Mean 0.2 > 0.1, positive overall even though half is neutral.
        let summary = sentiment_summary(&results);
        assert_eq!(summary.overall, Sentiment::Positive);
    }
}
