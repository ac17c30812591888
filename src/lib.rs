/// This crate is a ranking and heuristic scoring engine for alumni
/// community data: TF-IDF profile search, rule-based engagement and
/// donation scoring, keyword sentiment, and aggregation reports.
pub mod analyze;
pub mod predict;
pub mod record;
pub mod vectorizer;

/// TF-IDF Vectorizer
/// Converts a document collection into sparse TF-IDF vectors.
///
/// TF is the term's share of its document's tokens; IDF is
/// ln(total_docs / (1 + docs_containing_term)) with no lower bound, so
/// terms appearing in every document carry a small negative weight.
/// Vectors only store terms present in their document.
pub use vectorizer::TfIdfVectorizer;

/// Sparse term-weight vector
/// Insertion-ordered map from term to weight. Absent terms read as 0.0
/// and zero weights are never stored, so iteration touches only the
/// terms that matter.
pub use vectorizer::SparseVector;

/// Ranked Search Index
/// Builds one TF-IDF vector per alumni profile up front, then answers
/// queries by cosine scoring against every profile in parallel.
/// Results come back best-first with human-readable match reasons.
///
/// The index is immutable after construction and can be shared across
/// threads.
pub use vectorizer::index::{JobMatch, JobMatcher, RankedSearchIndex, Recommendation, SearchHit};

/// Input records
/// Plain serde-friendly data carriers. Optional fields default to empty
/// so partial records deserialize without errors.
pub use record::{ActivityLevel, AlumniRecord, EventRecord, JobRecord};

/// Engagement predictor
/// Rule-table scoring of how likely an alumni record is to attend a
/// given event, with per-rule breakdowns and per-event forecasts.
pub use predict::engagement::{
    engagement_probability, event_forecast, predictions_for_event, EngagementPrediction,
    EventForecast, Likelihood,
};

/// Donation predictor
/// Rule-table scoring of donation probability plus a predicted amount,
/// prospect ranking, and an aggregate forecast summary. Carries the
/// reference year so scoring stays a pure function of its inputs.
pub use predict::donation::{DonationBand, DonationModel, DonationProspect, ForecastSummary};

/// Sentiment classifier
/// Keyword-list scoring of free-text feedback into
/// positive/neutral/negative with a score in [-1, 1].
pub use analyze::sentiment::{classify, Sentiment, SentimentResult};

/// Aggregation reporting
/// Category distributions, stable top-N selection, means, score trends,
/// and the feedback sentiment roll-up.
pub use analyze::report::{sentiment_summary, SentimentSummary, Trend};
