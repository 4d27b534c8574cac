use std::collections::HashSet;

/// Fraction of the job's distinct requirements covered by the user's distinct skills.
///
/// Order and duplicates in either list do not matter. A job with no requirements
/// scores 0, not 1. Matching is exact string equality.
pub fn compute_match_score(skills: &[String], requirements: &[String]) -> f64 {
    let requirements: HashSet<&str> = requirements.iter().map(String::as_str).collect();
    if requirements.is_empty() {
        return 0.0;
    }

    let skills: HashSet<&str> = skills.iter().map(String::as_str).collect();
    let covered = requirements.intersection(&skills).count();

    covered as f64 / requirements.len() as f64
}
