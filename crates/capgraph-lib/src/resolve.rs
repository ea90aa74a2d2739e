//! Best-effort site resolution by approximate string matching

use crate::error::{Error, Result};
use crate::models::Site;

/// A resolved site plus its similarity to the query.
#[derive(Debug, Clone)]
pub struct SiteMatch {
    pub site: Site,
    /// Normalized edit-distance similarity, 0-100.
    pub score: u8,
}

/// Normalized edit-distance similarity between two strings, 0-100.
///
/// Both sides are case-folded first, so "YORK" and "york" score alike.
pub fn similarity(a: &str, b: &str) -> u8 {
    let ratio = strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase());
    (ratio * 100.0).round() as u8
}

/// Pick the site whose name scores highest against `query`.
///
/// Candidates are scanned in inventory order and ties keep the first one
/// seen, so identical inputs always resolve identically. No threshold is
/// applied: even a very low score is returned as the best guess.
pub fn best_match(query: &str, candidates: &[Site]) -> Result<SiteMatch> {
    let mut best: Option<SiteMatch> = None;
    for site in candidates {
        let score = similarity(query, &site.name);
        match best {
            Some(ref current) if score <= current.score => {}
            _ => {
                best = Some(SiteMatch {
                    site: site.clone(),
                    score,
                })
            }
        }
    }
    best.ok_or_else(|| Error::NotFound(format!("no sites in the tenant inventory to match {query:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(id: &str, name: &str) -> Site {
        Site {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    #[test]
    fn picks_the_closest_site_name() {
        let sites = vec![site("1", "New York - Branch 1"), site("2", "Boston HQ")];
        let matched = best_match("york", &sites).unwrap();
        assert_eq!(matched.site.id, "1");
    }

    #[test]
    fn score_is_the_maximum_over_all_candidates() {
        let sites = vec![
            site("1", "Chicago Branch"),
            site("2", "Seattle DC"),
            site("3", "Chihuahua Office"),
        ];
        let matched = best_match("chicago", &sites).unwrap();
        for candidate in &sites {
            assert!(matched.score >= similarity("chicago", &candidate.name));
        }
        assert_eq!(matched.site.id, "1");
    }

    #[test]
    fn ties_keep_the_first_candidate() {
        let sites = vec![site("first", "Denver"), site("second", "Denver")];
        let matched = best_match("denver", &sites).unwrap();
        assert_eq!(matched.site.id, "first");
        assert_eq!(matched.score, 100);
    }

    #[test]
    fn folds_case_before_comparing() {
        assert_eq!(similarity("YORK", "york"), 100);
    }

    #[test]
    fn low_scores_are_still_returned_as_the_best_guess() {
        let sites = vec![site("1", "zzzzzz")];
        let matched = best_match("york", &sites).unwrap();
        assert_eq!(matched.site.id, "1");
        assert!(matched.score < 50);
    }

    #[test]
    fn empty_inventory_is_not_found() {
        assert!(matches!(best_match("york", &[]), Err(Error::NotFound(_))));
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let sites = vec![site("1", "New York - Branch 1"), site("2", "Boston HQ")];
        let first = best_match("york", &sites).unwrap();
        let second = best_match("york", &sites).unwrap();
        assert_eq!(first.site.id, second.site.id);
        assert_eq!(first.score, second.score);
    }
}
