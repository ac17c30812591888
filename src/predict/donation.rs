use std::fmt;

use serde::{Deserialize, Serialize};

use super::{clamp_probability, tier_above, tier_at_least, BASE_SCORE};
use crate::record::{ActivityLevel, AlumniRecord};

/// Employers whose alumni get the donation-probability bonus.
pub const HIGH_VALUE_EMPLOYERS: &[&str] = &[
    "Google",
    "Microsoft",
    "Amazon",
    "Apple",
    "Meta",
    "OpenAI",
    "Netflix",
];

/// Smaller set that doubles the predicted donation amount.
const AMOUNT_MULTIPLIER_EMPLOYERS: &[&str] = &["Google", "Microsoft", "Amazon", "Apple", "Meta"];

/// Donation-probability band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationBand {
    High,
    Medium,
    Low,
}

impl DonationBand {
    /// Band for a probability: >=0.8 high, >=0.5 medium, else low.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.8 {
            DonationBand::High
        } else if probability >= 0.5 {
            DonationBand::Medium
        } else {
            DonationBand::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DonationBand::High => "high",
            DonationBand::Medium => "medium",
            DonationBand::Low => "low",
        }
    }
}

impl fmt::Display for DonationBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rules take the record and its years since graduation.
type DonationRule = (&'static str, fn(&AlumniRecord, i32) -> f64);

const DONATION_RULES: &[DonationRule] = &[
    ("graduation_age", graduation_factor),
    ("employer", employer_factor),
    ("donation_history", history_factor),
    ("activity", activity_factor),
    ("event_participation", events_factor),
];

fn graduation_factor(_record: &AlumniRecord, years: i32) -> f64 {
    tier_at_least(years, &[(10, 0.3), (5, 0.2), (2, 0.1)])
}

fn employer_factor(record: &AlumniRecord, _years: i32) -> f64 {
    if HIGH_VALUE_EMPLOYERS.contains(&record.company.as_str()) {
        0.3
    } else {
        0.0
    }
}

fn history_factor(record: &AlumniRecord, _years: i32) -> f64 {
    tier_above(
        record.past_donations,
        &[(50_000.0, 0.4), (20_000.0, 0.3), (5_000.0, 0.2), (0.0, 0.1)],
    )
}

fn activity_factor(record: &AlumniRecord, _years: i32) -> f64 {
    match record.activity_level {
        ActivityLevel::High => 0.2,
        ActivityLevel::Medium => 0.1,
        ActivityLevel::Low => 0.0,
    }
}

fn events_factor(record: &AlumniRecord, _years: i32) -> f64 {
    tier_above(record.past_event_count, &[(10, 0.2), (5, 0.1)])
}

/// One record's donation outlook.
#[derive(Debug, Clone)]
pub struct DonationProspect<'a> {
    pub record: &'a AlumniRecord,
    pub probability: f64,
    pub band: DonationBand,
    pub predicted_amount: u64,
}

/// Entry in a forecast summary; owns its data so the summary can outlive
/// the record collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorSummary {
    pub name: String,
    pub company: String,
    pub probability: f64,
    pub predicted_amount: u64,
}

/// Aggregate donation forecast over a record collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub total_predicted: u64,
    pub total_prospects: usize,
    /// Prospects with probability >= 0.7.
    pub high_probability_donors: usize,
    /// Rounded mean predicted amount, 0 when there are no prospects.
    pub average_donation: u64,
    pub top_donors: Vec<DonorSummary>,
}

/// Donation predictor. Carries the reference year so graduation age is a
/// pure function of the record.
#[derive(Debug, Clone, Copy)]
pub struct DonationModel {
    current_year: i32,
}

impl DonationModel {
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    fn years_since_graduation(&self, record: &AlumniRecord) -> i32 {
        self.current_year - record.graduation_year
    }

    /// Probability that a record donates, in [0.1, 1.0].
    pub fn probability(&self, record: &AlumniRecord) -> f64 {
        let years = self.years_since_graduation(record);
        let total = BASE_SCORE
            + DONATION_RULES
                .iter()
                .map(|(_, rule)| rule(record, years))
                .sum::<f64>();
        clamp_probability(total)
    }

    /// Per-rule contributions, in rule order.
    pub fn breakdown(&self, record: &AlumniRecord) -> Vec<(&'static str, f64)> {
        let years = self.years_since_graduation(record);
        DONATION_RULES
            .iter()
            .map(|(name, rule)| (*name, rule(record, years)))
            .collect()
    }

    /// Predicted donation amount in whole currency units:
    /// probability x employer multiplier x max(1, years * 0.1) x 10000.
    pub fn predicted_amount(&self, record: &AlumniRecord) -> u64 {
        let probability = self.probability(record);
        let employer = if AMOUNT_MULTIPLIER_EMPLOYERS.contains(&record.company.as_str()) {
            2.0
        } else {
            1.0
        };
        let experience = (self.years_since_graduation(record) as f64 * 0.1).max(1.0);
        (probability * employer * experience * 10_000.0).round() as u64
    }

    /// Top donation prospects, best first, ties in collection order.
    pub fn prospects<'a>(
        &self,
        alumni: &'a [AlumniRecord],
        limit: usize,
    ) -> Vec<DonationProspect<'a>> {
        let mut prospects: Vec<DonationProspect<'a>> = alumni
            .iter()
            .map(|record| {
                let probability = self.probability(record);
                DonationProspect {
                    record,
                    probability,
                    band: DonationBand::from_probability(probability),
                    predicted_amount: self.predicted_amount(record),
                }
            })
            .collect();
        prospects.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        prospects.truncate(limit);
        prospects
    }

    /// Summarize the ten best prospects.
    pub fn forecast_summary(&self, alumni: &[AlumniRecord]) -> ForecastSummary {
        let prospects = self.prospects(alumni, 10);
        let total_predicted: u64 = prospects.iter().map(|p| p.predicted_amount).sum();
        let average_donation = if prospects.is_empty() {
            0
        } else {
            (total_predicted as f64 / prospects.len() as f64).round() as u64
        };
        ForecastSummary {
            total_predicted,
            total_prospects: prospects.len(),
            high_probability_donors: prospects.iter().filter(|p| p.probability >= 0.7).count(),
            average_donation,
            top_donors: prospects
                .iter()
                .take(5)
                .map(|p| DonorSummary {
                    name: p.record.name.clone(),
                    company: p.record.company.clone(),
                    probability: p.probability,
                    predicted_amount: p.predicted_amount,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2026;

    fn record(name: &str, graduation_year: i32, company: &str) -> AlumniRecord {
        AlumniRecord {
            id: 0,
            name: name.to_string(),
            job_title: String::new(),
            company: company.to_string(),
            location: String::new(),
            department: String::new(),
            graduation_year,
            skills: Vec::new(),
            interests: Vec::new(),
            activity_level: ActivityLevel::Low,
            profile_completion: 0,
            last_active_days: f64::INFINITY,
            past_event_count: 0,
            past_donations: 0.0,
        }
    }

    fn strong_prospect() -> AlumniRecord {
        let mut rec = record("Grace Liu", YEAR - 10, "Google");
        rec.past_donations = 60_000.0;
        rec.activity_level = ActivityLevel::High;
        rec.past_event_count = 12;
        rec
    }

    #[test]
    fn maxed_record_clamps_to_one() {
        let model = DonationModel::new(YEAR);
        // 0.1 + 0.3 + 0.3 + 0.4 + 0.2 + 0.2 > 1.0
        assert_eq!(model.probability(&strong_prospect()), 1.0);
    }

    #[test]
    fn fresh_graduate_scores_the_base() {
        let model = DonationModel::new(YEAR);
        let rec = record("New Grad", YEAR, "Acme");
        assert!((model.probability(&rec) - BASE_SCORE).abs() < 1e-12);
    }

    #[test]
    fn graduation_age_tiers_are_inclusive() {
        let model = DonationModel::new(YEAR);
        let contribution = |grad_year: i32| {
            let rec = record("X", grad_year, "Acme");
            model
                .breakdown(&rec)
                .into_iter()
                .find(|(name, _)| *name == "graduation_age")
                .unwrap()
                .1
        };
        assert_eq!(contribution(YEAR - 10), 0.3);
        assert_eq!(contribution(YEAR - 9), 0.2);
        assert_eq!(contribution(YEAR - 5), 0.2);
        assert_eq!(contribution(YEAR - 2), 0.1);
        assert_eq!(contribution(YEAR - 1), 0.0);
    }

    #[test]
    fn donation_history_tiers_are_strict() {
        let model = DonationModel::new(YEAR);
        let contribution = |donations: f64| {
            let mut rec = record("X", YEAR, "Acme");
            rec.past_donations = donations;
            model
                .breakdown(&rec)
                .into_iter()
                .find(|(name, _)| *name == "donation_history")
                .unwrap()
                .1
        };
        assert_eq!(contribution(60_000.0), 0.4);
        assert_eq!(contribution(50_000.0), 0.3);
        assert_eq!(contribution(20_000.0), 0.2);
        assert_eq!(contribution(5_000.0), 0.1);
        assert_eq!(contribution(1.0), 0.1);
        assert_eq!(contribution(0.0), 0.0);
    }

    #[test]
    fn employer_bonus_requires_membership() {
        let model = DonationModel::new(YEAR);
        let employer = |company: &str| {
            model
                .breakdown(&record("X", YEAR, company))
                .into_iter()
                .find(|(name, _)| *name == "employer")
                .unwrap()
                .1
        };
        assert_eq!(employer("Netflix"), 0.3);
        assert_eq!(employer("Acme"), 0.0);
        // Exact match only; no substring credit.
        assert_eq!(employer("Google Cloud"), 0.0);
    }

    #[test]
    fn bands_use_exact_thresholds() {
        assert_eq!(DonationBand::from_probability(0.8), DonationBand::High);
        assert_eq!(DonationBand::from_probability(0.79), DonationBand::Medium);
        assert_eq!(DonationBand::from_probability(0.5), DonationBand::Medium);
        assert_eq!(DonationBand::from_probability(0.49), DonationBand::Low);
        assert_eq!(DonationBand::High.to_string(), "high");
    }

    #[test]
    fn amount_doubles_for_multiplier_employers() {
        let model = DonationModel::new(YEAR);
        // Probability clamps to 1.0 and years = 10, so experience is
        // max(1, 1.0) = 1 and the amount isolates the employer multiplier.
        assert_eq!(model.predicted_amount(&strong_prospect()), 20_000);
        let mut outside = strong_prospect();
        outside.company = "OpenAI".to_string();
        // Still a high-value employer, but outside the multiplier set.
        assert_eq!(model.probability(&outside), 1.0);
        assert_eq!(model.predicted_amount(&outside), 10_000);
    }

    #[test]
    fn amount_scales_with_years_since_graduation() {
        let model = DonationModel::new(YEAR);
        let mut veteran = strong_prospect();
        veteran.graduation_year = YEAR - 20;
        // 1.0 * 2 * max(1, 2.0) * 10000
        assert_eq!(model.predicted_amount(&veteran), 40_000);
    }

    #[test]
    fn prospects_sort_descending() {
        let model = DonationModel::new(YEAR);
        let weak = record("Weak", YEAR - 1, "Acme");
        let strong = strong_prospect();
        let group = [weak, strong];
        let prospects = model.prospects(&group, 10);
        assert_eq!(prospects.len(), 2);
        assert_eq!(prospects[0].record.name, "Grace Liu");
        assert_eq!(prospects[0].band, DonationBand::High);
        assert_eq!(prospects[1].band, DonationBand::Low);
    }

    #[test]
    fn forecast_summary_totals_and_averages() {
        let model = DonationModel::new(YEAR);
        let weak = record("Weak", YEAR - 1, "Acme");
        let summary = model.forecast_summary(&[strong_prospect(), weak]);
        // strong: 20000, weak: 0.1 * 1 * 1 * 10000 = 1000.
        assert_eq!(summary.total_predicted, 21_000);
        assert_eq!(summary.total_prospects, 2);
        assert_eq!(summary.high_probability_donors, 1);
        assert_eq!(summary.average_donation, 10_500);
        assert_eq!(summary.top_donors.len(), 2);
        assert_eq!(summary.top_donors[0].name, "Grace Liu");
    }

    #[test]
    fn forecast_summary_of_nobody_is_zeroed() {
        let model = DonationModel::new(YEAR);
        let summary = model.forecast_summary(&[]);
        assert_eq!(summary.total_predicted, 0);
        assert_eq!(summary.total_prospects, 0);
        assert_eq!(summary.average_donation, 0);
        assert!(summary.top_donors.is_empty());
    }
}
