//! Target selection for rated rounds.
//!
//! One deterministic rule for every creation path: the target is the item
//! with the minimum rating, ties broken by lexicographically smallest title.
//! Unrated items sort last, but a validated rated round never contains any.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetCandidate<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub rating: Option<Decimal>,
}

/// Pick the target item id among the candidates.
///
/// Failing on an empty slate is an invariant violation: callers only reach
/// this after inserting a validated, non-empty item set.
pub fn select_target(candidates: &[TargetCandidate<'_>]) -> Result<Uuid, DomainError> {
    candidates
        .iter()
        .min_by(|a, b| {
            sort_key(a).cmp(&sort_key(b))
        })
        .map(|c| c.id)
        .ok_or_else(|| DomainError::invariant("cannot select a target from an empty item set"))
}

fn sort_key<'a>(c: &TargetCandidate<'a>) -> (bool, Option<Decimal>, &'a str) {
    // bool sorts false < true, pushing None ratings last
    (c.rating.is_none(), c.rating, c.title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(title: &str, rating_tenths: i64) -> (Uuid, String, Option<Decimal>) {
        (
            Uuid::new_v4(),
            title.to_string(),
            Some(Decimal::new(rating_tenths, 1)),
        )
    }

    fn select(owned: &[(Uuid, String, Option<Decimal>)]) -> Uuid {
        let candidates: Vec<TargetCandidate<'_>> = owned
            .iter()
            .map(|(id, title, rating)| TargetCandidate {
                id: *id,
                title,
                rating: *rating,
            })
            .collect();
        select_target(&candidates).unwrap()
    }

    #[test]
    fn picks_the_minimum_rating() {
        let items = vec![cand("alpha", 31), cand("bravo", 25), cand("charlie", 40)];
        assert_eq!(select(&items), items[1].0);
    }

    #[test]
    fn ties_break_on_lexicographically_smallest_title() {
        let items = vec![cand("delta", 25), cand("bravo", 25), cand("charlie", 25)];
        assert_eq!(select(&items), items[1].0);
    }

    #[test]
    fn unrated_items_never_win_over_rated_ones() {
        let mut items = vec![cand("alpha", 99)];
        items.push((Uuid::new_v4(), "aaa".to_string(), None));
        assert_eq!(select(&items), items[0].0);
    }

    #[test]
    fn empty_slate_is_an_invariant_error() {
        assert!(select_target(&[]).is_err());
    }
}
