use std::collections::HashSet;

use super::SparseVector;

/// Cosine similarity between two sparse vectors.
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
///
/// Terms missing from either side count as 0. Returns 0.0 (not NaN) when
/// either norm is 0.
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    for (term, wa) in a.iter() {
        norm_a += wa * wa;
        dot += wa * b.get(term);
    }
    let mut norm_b = 0.0;
    for (_, wb) in b.iter() {
        norm_b += wb * wb;
    }
    let denominator = norm_a.sqrt() * norm_b.sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        dot / denominator
    }
}

/// Jaccard similarity between two term sets.
/// j(A, B) = |A ∩ B| / |A ∪ B|
///
/// Inputs are treated as sets (duplicates collapse). Returns 0.0 when the
/// union is empty.
pub fn jaccard<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let set_b: HashSet<&str> = b.iter().map(AsRef::as_ref).collect();
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}
