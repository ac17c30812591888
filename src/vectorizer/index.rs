use rayon::prelude::*;

use super::{compare, SparseVector, TfIdfVectorizer};
use crate::record::{AlumniRecord, JobRecord};

/// Hits scoring at or below this are dropped from `search` results.
pub const MIN_RELEVANCE: f64 = 0.01;
/// Default result cap for `search`.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;
/// Default result cap for `recommend`.
pub const DEFAULT_RECOMMEND_LIMIT: usize = 4;
/// Default result cap for `JobMatcher::matches`.
pub const DEFAULT_JOB_LIMIT: usize = 8;

/// One search result: the matched record plus its computed fields.
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub record: &'a AlumniRecord,
    /// Cosine relevance, greater than `MIN_RELEVANCE`.
    pub score: f64,
    /// Query terms found verbatim in the record's profile text or fields.
    pub matched_terms: Vec<String>,
}

impl SearchHit<'_> {
    /// Human-readable explanation, capped at the first three matched terms.
    pub fn match_reason(&self) -> String {
        if self.matched_terms.is_empty() {
            "General profile match".to_string()
        } else {
            let shown: Vec<&str> = self
                .matched_terms
                .iter()
                .take(3)
                .map(String::as_str)
                .collect();
            format!("Matched on: {}", shown.join(", "))
        }
    }
}

/// One recommendation: like a hit, but with no relevance floor and no
/// explanation.
#[derive(Debug, Clone)]
pub struct Recommendation<'a> {
    pub record: &'a AlumniRecord,
    pub score: f64,
}

/// Read-only TF-IDF index over a fixed alumni collection.
///
/// Vectors are computed once at construction; nothing mutates afterwards, so
/// a shared reference can serve queries from any number of threads. A changed
/// record collection means building a new index.
#[derive(Debug, Clone)]
pub struct RankedSearchIndex {
    records: Vec<AlumniRecord>,
    vectors: Vec<SparseVector>,
    /// Lowercased profile text (minus the name) used for match explanations.
    match_texts: Vec<String>,
}

impl RankedSearchIndex {
    /// Build the index, vectorizing every record's derived profile text.
    pub fn new(records: Vec<AlumniRecord>) -> Self {
        let documents: Vec<String> = records.iter().map(profile_text).collect();
        let vectors = TfIdfVectorizer::vectorize(&documents);
        let match_texts = records
            .iter()
            .map(|record| reason_text(record).to_lowercase())
            .collect();
        Self {
            records,
            vectors,
            match_texts,
        }
    }

    pub fn records(&self) -> &[AlumniRecord] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rank records against a free-text query.
    ///
    /// Scores at or below `MIN_RELEVANCE` are dropped, the rest are sorted
    /// descending (ties keep collection order) and truncated to `limit`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit<'_>> {
        let mut scored = self.score_query(query);
        scored.retain(|(_, score)| *score > MIN_RELEVANCE);
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(limit);
        scored
            .into_iter()
            .map(|(idx, score)| SearchHit {
                record: &self.records[idx],
                score,
                matched_terms: self.matched_terms(query, idx),
            })
            .collect()
    }

    /// Rank records against a profile's term list (joined into one query).
    /// No relevance floor and no match explanation.
    pub fn recommend<S: AsRef<str>>(
        &self,
        profile_terms: &[S],
        limit: usize,
    ) -> Vec<Recommendation<'_>> {
        let joined: Vec<&str> = profile_terms.iter().map(AsRef::as_ref).collect();
        let mut scored = self.score_query(&joined.join(" "));
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(limit);
        scored
            .into_iter()
            .map(|(idx, score)| Recommendation {
                record: &self.records[idx],
                score,
            })
            .collect()
    }

    /// Relevance of every record against the query, in collection order.
    ///
    /// The query is vectorized on its own, as a one-document corpus: every
    /// query term then carries the same IDF, ln(1/2). A uniform negative
    /// constant like that flips the cosine's sign without moving its
    /// magnitude, so relevance is the cosine's absolute value.
    fn score_query(&self, query: &str) -> Vec<(usize, f64)> {
        let query_vec = TfIdfVectorizer::vectorize(&[query])
            .pop()
            .unwrap_or_default();
        self.vectors
            .par_iter()
            .enumerate()
            .map(|(idx, vec)| (idx, compare::cosine(&query_vec, vec).abs()))
            .collect()
    }

    /// Query tokens (length > 2) that literally appear in the record's
    /// profile text or in any one skill or interest, in query order.
    fn matched_terms(&self, query: &str, idx: usize) -> Vec<String> {
        let record = &self.records[idx];
        let text = &self.match_texts[idx];
        query
            .to_lowercase()
            .split_whitespace()
            .filter(|word| word.chars().count() > 2)
            .filter(|word| {
                text.contains(word)
                    || contains_ci(&record.skills, word)
                    || contains_ci(&record.interests, word)
            })
            .map(str::to_string)
            .collect()
    }
}

/// Text a record is indexed under.
fn profile_text(record: &AlumniRecord) -> String {
    format!(
        "{} {} {} {} {} {}",
        record.name,
        record.job_title,
        record.company,
        record.location,
        record.interests.join(" "),
        record.skills.join(" ")
    )
}

/// Text match explanations are checked against. Same fields minus the name.
fn reason_text(record: &AlumniRecord) -> String {
    format!(
        "{} {} {} {} {}",
        record.job_title,
        record.company,
        record.location,
        record.interests.join(" "),
        record.skills.join(" ")
    )
}

fn contains_ci(fields: &[String], word: &str) -> bool {
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(word))
}

/// Skill-overlap matcher over a fixed job collection.
///
/// Jaccard between the user's skills and each job's tags, both lowercased.
#[derive(Debug, Clone)]
pub struct JobMatcher {
    jobs: Vec<JobRecord>,
}

/// One job match with its overlap score and the skills that produced it.
#[derive(Debug, Clone)]
pub struct JobMatch<'a> {
    pub job: &'a JobRecord,
    /// Jaccard overlap in (0, 1].
    pub score: f64,
    /// User skills with a case-insensitive substring overlap on some tag.
    pub matched_skills: Vec<String>,
}

impl JobMatcher {
    pub fn new(jobs: Vec<JobRecord>) -> Self {
        Self { jobs }
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    /// Rank jobs by skill overlap, dropping zero-overlap jobs.
    ///
    /// Skills and tags are compared as sets: duplicate entries in the
    /// caller's skill list collapse before scoring and do not inflate the
    /// overlap.
    pub fn matches<S: AsRef<str>>(&self, skills: &[S], limit: usize) -> Vec<JobMatch<'_>> {
        let lowered: Vec<String> = skills
            .iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();
        let mut out: Vec<JobMatch<'_>> = self
            .jobs
            .iter()
            .map(|job| {
                let tags: Vec<String> = job.tags.iter().map(|t| t.to_lowercase()).collect();
                JobMatch {
                    job,
                    score: compare::jaccard(&lowered, &tags),
                    matched_skills: matched_skills(skills, &tags),
                }
            })
            .filter(|m| m.score > 0.0)
            .collect();
        out.sort_by(|a, b| b.score.total_cmp(&a.score));
        out.truncate(limit);
        out
    }
}

/// Skills overlapping any tag as a substring, in either direction.
fn matched_skills<S: AsRef<str>>(skills: &[S], lowered_tags: &[String]) -> Vec<String> {
    skills
        .iter()
        .map(AsRef::as_ref)
        .filter(|skill| {
            let skill_lc = skill.to_lowercase();
            lowered_tags
                .iter()
                .any(|tag| tag.contains(&skill_lc) || skill_lc.contains(tag.as_str()))
        })
        .map(str::to_string)
        .collect()
}
