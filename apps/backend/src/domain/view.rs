//! Round view projection: the externally visible representation of a round.
//!
//! This is the single place where the information-hiding policy lives.
//! Hidden fields (rating, secret text, target flag, and non-carousel images)
//! stay null until the item is eliminated or the round finishes. The
//! projection is a pure read-side transform: same inputs, same bytes.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::kind::{RoundKind, RoundStatus};
use crate::domain::team::Team;
use crate::repos::items::Item;
use crate::repos::rounds::Round;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub id: Uuid,
    pub title: String,
    pub eliminated: bool,
    pub eliminated_by_team: Option<Team>,
    pub rating: Option<Decimal>,
    pub secret_text: Option<String>,
    pub is_target: Option<bool>,
    pub image_data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundView {
    pub id: Uuid,
    pub category: String,
    pub prompt: String,
    pub kind: RoundKind,
    pub current_team: Team,
    pub status: RoundStatus,
    pub winner_team: Option<Team>,
    pub loser_team: Option<Team>,
    pub items: Vec<ItemView>,
    pub image_data: Option<String>,
}

/// Project a round and its items into the client-facing representation.
pub fn project(round: &Round, items: &[Item]) -> RoundView {
    let reveal_all = round.status == RoundStatus::Finished;

    let mut ordered: Vec<&Item> = items.iter().collect();
    // stable output ordering independent of storage; id disambiguates
    // duplicate titles
    ordered.sort_by(|a, b| (&a.title, a.id).cmp(&(&b.title, b.id)));

    let items = ordered
        .into_iter()
        .map(|item| {
            let show_hidden = reveal_all || item.eliminated;
            let show_image = round.kind == RoundKind::Carousel || show_hidden;
            ItemView {
                id: item.id,
                title: item.title.clone(),
                eliminated: item.eliminated,
                eliminated_by_team: item.eliminated_by_team,
                rating: if show_hidden { item.rating } else { None },
                secret_text: if show_hidden {
                    item.secret_text.clone()
                } else {
                    None
                },
                is_target: if reveal_all {
                    Some(item.id == round.target_item_id)
                } else {
                    None
                },
                image_data: if show_image {
                    item.image_data.clone()
                } else {
                    None
                },
            }
        })
        .collect();

    RoundView {
        id: round.id,
        category: round.category.clone(),
        prompt: round.prompt.clone(),
        kind: round.kind,
        current_team: round.current_team,
        status: round.status,
        winner_team: round.winner_team,
        loser_team: round.loser_team,
        items,
        image_data: round.image_data.clone(),
    }
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use super::*;

    fn round(kind: RoundKind, status: RoundStatus, target: Uuid) -> Round {
        Round {
            id: Uuid::new_v4(),
            game_set: "ABC123".to_string(),
            category: "movies".to_string(),
            prompt: "Find the lowest-rated movie.".to_string(),
            kind,
            current_team: Team::One,
            status,
            target_item_id: target,
            winner_team: None,
            loser_team: None,
            image_data: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    fn item(round_id: Uuid, title: &str) -> Item {
        Item {
            id: Uuid::new_v4(),
            round_id,
            title: title.to_string(),
            rating: Some(Decimal::new(37, 1)),
            secret_text: Some("classified".to_string()),
            image_data: Some("data:image/png;base64,abc".to_string()),
            eliminated: false,
            eliminated_by_team: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn hidden_fields_stay_null_while_the_round_is_active() {
        let target = Uuid::new_v4();
        let round = round(RoundKind::Rated, RoundStatus::Active, target);
        let items = vec![item(round.id, "a"), item(round.id, "b")];

        let view = project(&round, &items);
        for iv in &view.items {
            assert_eq!(iv.rating, None);
            assert_eq!(iv.secret_text, None);
            assert_eq!(iv.is_target, None);
            assert_eq!(iv.image_data, None);
        }
    }

    #[test]
    fn eliminated_items_reveal_rating_and_secret_but_never_the_target_flag() {
        let round = round(RoundKind::Rated, RoundStatus::Active, Uuid::new_v4());
        let mut gone = item(round.id, "a");
        gone.eliminated = true;
        gone.eliminated_by_team = Some(Team::One);
        let items = vec![gone, item(round.id, "b")];

        let view = project(&round, &items);
        let revealed = &view.items[0];
        assert!(revealed.eliminated);
        assert_eq!(revealed.eliminated_by_team, Some(Team::One));
        assert!(revealed.rating.is_some());
        assert!(revealed.secret_text.is_some());
        assert!(revealed.image_data.is_some());
        // target identity must not leak before the round ends
        assert_eq!(revealed.is_target, None);
        assert_eq!(view.items[1].rating, None);
    }

    #[test]
    fn carousel_images_are_visible_during_live_play() {
        let round = round(RoundKind::Carousel, RoundStatus::Active, Uuid::new_v4());
        let items = vec![item(round.id, "a"), item(round.id, "b")];

        let view = project(&round, &items);
        assert!(view.items.iter().all(|iv| iv.image_data.is_some()));
        // but hidden text stays hidden
        assert!(view.items.iter().all(|iv| iv.secret_text.is_none()));
    }

    #[test]
    fn finishing_reveals_everything_including_the_target_flag() {
        let mut base = round(RoundKind::Manual, RoundStatus::Finished, Uuid::nil());
        let a = item(base.id, "a");
        let b = item(base.id, "b");
        base.target_item_id = b.id;
        base.winner_team = Some(Team::Two);
        base.loser_team = Some(Team::One);

        let view = project(&base, &[a, b]);
        assert_eq!(view.items[0].is_target, Some(false));
        assert_eq!(view.items[1].is_target, Some(true));
        assert!(view.items.iter().all(|iv| iv.secret_text.is_some()));
    }

    #[test]
    fn projection_is_deterministic_and_ordered_by_title() {
        let round = round(RoundKind::Rated, RoundStatus::Active, Uuid::new_v4());
        let items = vec![
            item(round.id, "zebra"),
            item(round.id, "apple"),
            item(round.id, "mango"),
        ];

        let first = project(&round, &items);
        let second = project(&round, &items);
        assert_eq!(first, second);
        let titles: Vec<_> = first.items.iter().map(|iv| iv.title.as_str()).collect();
        assert_eq!(titles, vec!["apple", "mango", "zebra"]);
    }
}
