//! Deterministic ordering and truncation of scored results

use crate::model::MatchResult;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// A scored result paired with the ranking tiebreak data that does not
/// belong on the wire-facing result itself.
#[derive(Debug)]
pub struct RankedEntry {
    pub result: MatchResult,
    pub posted_at: Option<NaiveDate>,
}

/// Order results best-first and keep at most `limit`.
///
/// Ties on the overall score break on posting date (newer first, undated
/// last), then on job id, so two runs over the same inputs always return
/// the same list. Truncation happens after the sort: a limit smaller than
/// the input keeps the top of the ranking, never an arbitrary subset.
pub fn rank(mut entries: Vec<RankedEntry>, limit: usize) -> Vec<MatchResult> {
    entries.sort_by(compare);
    entries.truncate(limit);
    entries.into_iter().map(|e| e.result).collect()
}

fn compare(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.result
        .match_score
        .cmp(&a.result.match_score)
        .then_with(|| match (a.posted_at, b.posted_at) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.result.job_id.cmp(&b.result.job_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(job_id: &str, score: u8, posted_at: Option<&str>) -> RankedEntry {
        RankedEntry {
            result: MatchResult {
                job_id: job_id.to_string(),
                job_title: "Engineer".to_string(),
                match_score: score,
                breakdown: None,
                details: None,
                suggestions: Vec::new(),
            },
            posted_at: posted_at.map(|d| d.parse().unwrap()),
        }
    }

    fn ids(results: &[MatchResult]) -> Vec<&str> {
        results.iter().map(|r| r.job_id.as_str()).collect()
    }

    #[test]
    fn test_rank_sorts_by_score_descending() {
        let ranked = rank(
            vec![entry("a", 40, None), entry("b", 90, None), entry("c", 70, None)],
            10,
        );
        assert_eq!(ids(&ranked), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_tied_scores_prefer_newer_postings_then_job_id() {
        let ranked = rank(
            vec![
                entry("old", 80, Some("2026-01-01")),
                entry("undated-b", 80, None),
                entry("new", 80, Some("2026-06-01")),
                entry("undated-a", 80, None),
            ],
            10,
        );
        assert_eq!(ids(&ranked), vec!["new", "old", "undated-a", "undated-b"]);
    }

    #[test]
    fn test_truncation_keeps_the_top_of_the_ranking() {
        let ranked = rank(
            vec![entry("a", 10, None), entry("b", 99, None), entry("c", 50, None)],
            2,
        );
        assert_eq!(ids(&ranked), vec!["b", "c"]);
    }

    #[test]
    fn test_limit_larger_than_input_returns_everything() {
        let ranked = rank(vec![entry("a", 10, None)], 100);
        assert_eq!(ranked.len(), 1);
    }
}
