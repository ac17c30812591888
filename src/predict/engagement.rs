use std::fmt;

use serde::{Deserialize, Serialize};

use super::{clamp_probability, tier_above, BASE_SCORE};
use crate::record::{ActivityLevel, AlumniRecord, EventRecord};

/// Attendance likelihood band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Likelihood {
    VeryLikely,
    Likely,
    Maybe,
    Unlikely,
}

impl Likelihood {
    /// Band for a probability: >=0.8, >=0.6, >=0.4, else unlikely.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.8 {
            Likelihood::VeryLikely
        } else if probability >= 0.6 {
            Likelihood::Likely
        } else if probability >= 0.4 {
            Likelihood::Maybe
        } else {
            Likelihood::Unlikely
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Likelihood::VeryLikely => "Very Likely",
            Likelihood::Likely => "Likely",
            Likelihood::Maybe => "Maybe",
            Likelihood::Unlikely => "Unlikely",
        }
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type EngagementRule = (&'static str, fn(&AlumniRecord, &EventRecord) -> f64);

/// Ordered contribution table. Each rule is independent; the total is base
/// plus the sum, clamped to 1.0.
const ENGAGEMENT_RULES: &[EngagementRule] = &[
    ("activity", activity_factor),
    ("profile_completion", completion_factor),
    ("past_events", past_events_factor),
    ("recency", recency_factor),
    ("interest_overlap", interest_factor),
    ("location", location_factor),
];

fn activity_factor(record: &AlumniRecord, _event: &EventRecord) -> f64 {
    match record.activity_level {
        ActivityLevel::High => 0.4,
        ActivityLevel::Medium => 0.2,
        ActivityLevel::Low => 0.0,
    }
}

fn completion_factor(record: &AlumniRecord, _event: &EventRecord) -> f64 {
    tier_above(record.profile_completion, &[(80, 0.3), (60, 0.1)])
}

fn past_events_factor(record: &AlumniRecord, _event: &EventRecord) -> f64 {
    tier_above(record.past_event_count, &[(10, 0.3), (5, 0.2), (0, 0.1)])
}

fn recency_factor(record: &AlumniRecord, _event: &EventRecord) -> f64 {
    if record.last_active_days < 7.0 {
        0.2
    } else if record.last_active_days < 30.0 {
        0.1
    } else {
        0.0
    }
}

/// Any case-insensitive substring overlap, in either direction, between an
/// interest and an event tag.
fn interest_factor(record: &AlumniRecord, event: &EventRecord) -> f64 {
    let overlap = record.interests.iter().any(|interest| {
        let interest_lc = interest.to_lowercase();
        event.tags.iter().any(|tag| {
            let tag_lc = tag.to_lowercase();
            tag_lc.contains(&interest_lc) || interest_lc.contains(&tag_lc)
        })
    });
    if overlap {
        0.2
    } else {
        0.0
    }
}

fn location_factor(record: &AlumniRecord, event: &EventRecord) -> f64 {
    if record.location == event.location || event.location == "Virtual" {
        0.1
    } else {
        0.0
    }
}

/// Probability that a record engages with an event, in [0.1, 1.0].
pub fn engagement_probability(record: &AlumniRecord, event: &EventRecord) -> f64 {
    let total = BASE_SCORE
        + ENGAGEMENT_RULES
            .iter()
            .map(|(_, rule)| rule(record, event))
            .sum::<f64>();
    clamp_probability(total)
}

/// Per-rule contributions, in rule order. For explanation surfaces.
pub fn engagement_breakdown(
    record: &AlumniRecord,
    event: &EventRecord,
) -> Vec<(&'static str, f64)> {
    ENGAGEMENT_RULES
        .iter()
        .map(|(name, rule)| (*name, rule(record, event)))
        .collect()
}

/// One record's predicted engagement with an event.
#[derive(Debug, Clone)]
pub struct EngagementPrediction<'a> {
    pub record: &'a AlumniRecord,
    pub probability: f64,
    pub likelihood: Likelihood,
}

/// Records likely (probability > 0.5) to engage with the event, best first,
/// capped at 10.
pub fn predictions_for_event<'a>(
    alumni: &'a [AlumniRecord],
    event: &EventRecord,
) -> Vec<EngagementPrediction<'a>> {
    let mut predictions: Vec<EngagementPrediction<'a>> = alumni
        .iter()
        .map(|record| {
            let probability = engagement_probability(record, event);
            EngagementPrediction {
                record,
                probability,
                likelihood: Likelihood::from_probability(probability),
            }
        })
        .filter(|p| p.probability > 0.5)
        .collect();
    predictions.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    predictions.truncate(10);
    predictions
}

/// Expected attendee in an event forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendeeForecast {
    pub name: String,
    pub company: String,
    /// Probability as a rounded percentage.
    pub probability_pct: u32,
    pub likelihood: Likelihood,
}

/// Aggregate engagement forecast for one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventForecast {
    pub event_id: u64,
    /// Mean probability of the likely attendees, as a rounded percentage.
    pub predicted_attendance: u32,
    /// Top five likely attendees.
    pub likely_attendees: Vec<AttendeeForecast>,
}

/// Summarize the likely audience of an event.
pub fn event_forecast(alumni: &[AlumniRecord], event: &EventRecord) -> EventForecast {
    let predictions = predictions_for_event(alumni, event);
    let average = if predictions.is_empty() {
        0.0
    } else {
        predictions.iter().map(|p| p.probability).sum::<f64>() / predictions.len() as f64
    };
    EventForecast {
        event_id: event.id,
        predicted_attendance: (average * 100.0).round() as u32,
        likely_attendees: predictions
            .iter()
            .take(5)
            .map(|p| AttendeeForecast {
                name: p.record.name.clone(),
                company: p.record.company.clone(),
                probability_pct: (p.probability * 100.0).round() as u32,
                likelihood: p.likelihood,
            })
            .collect(),
    }
}
