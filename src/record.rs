use serde::{Deserialize, Serialize};

/// Self-reported activity tier of an alumni profile.
/// Serialized lowercase ("high"/"medium"/"low") to match the record feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    High,
    Medium,
    #[default]
    Low,
}

/// One alumni profile as supplied by the caller.
///
/// The scoring core never reads clocks: recency is carried as
/// `last_active_days` (days since last login, computed by the caller) and
/// graduation age is derived from `graduation_year` against a caller-supplied
/// current year.
///
/// String and list fields default to empty when absent so that partially
/// filled profiles score instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlumniRecord {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub graduation_year: i32,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Profile completion percentage, 0..=100.
    #[serde(default)]
    pub profile_completion: u32,
    /// Days since the profile was last active.
    #[serde(default = "default_last_active")]
    pub last_active_days: f64,
    #[serde(default)]
    pub past_event_count: u32,
    /// Lifetime donation total in whole currency units.
    #[serde(default)]
    pub past_donations: f64,
}

fn default_last_active() -> f64 {
    f64::INFINITY
}

/// An event that engagement predictions are made against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    /// Physical location, or the literal "Virtual" for online events.
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A job posting matched against alumni skill sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
