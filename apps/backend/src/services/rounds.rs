//! Round operations: factory, elimination flow, and view loading.
//!
//! All functions run within the caller's transaction. The factory entry
//! points create a round with a placeholder target, insert its items, and
//! fix the real target before returning, so a round is never observable
//! with an unresolved target.

use rand::seq::index::sample;
use sea_orm::ConnectionTrait;
use tracing::debug;
use uuid::Uuid;

use crate::domain::catalog::{self, ROUND_SIZE};
use crate::domain::engine::{resolve_elimination, EliminationOutcome};
use crate::domain::kind::{RoundKind, RoundStatus};
use crate::domain::target::{select_target, TargetCandidate};
use crate::domain::template_rules::{self, TemplateItemDraft};
use crate::domain::view::{self, RoundView};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::items::{self, Item};
use crate::repos::rounds;
use crate::repos::templates;

/// Create a rated round from a built-in dataset: a uniform sample of
/// exactly `ROUND_SIZE` items, target = minimum rating (title tie-break).
pub async fn create_from_dataset<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_set: &str,
    category: &str,
) -> Result<Uuid, DomainError> {
    let dataset = catalog::dataset_for(category)?;
    if dataset.items.len() < ROUND_SIZE {
        return Err(DomainError::invariant(format!(
            "dataset must have at least {ROUND_SIZE} items"
        )));
    }

    let picked: Vec<&catalog::DatasetItem> = {
        let mut rng = rand::rng();
        sample(&mut rng, dataset.items.len(), ROUND_SIZE)
            .into_iter()
            .map(|i| &dataset.items[i])
            .collect()
    };

    let round = rounds::create(
        conn,
        game_set,
        catalog::normalize_category(category),
        dataset.prompt.to_string(),
        RoundKind::Rated,
        None,
    )
    .await?;

    let mut inserted: Vec<Item> = Vec::with_capacity(ROUND_SIZE);
    for source in picked {
        let item = items::insert(
            conn,
            round.id,
            source.title.to_string(),
            Some(source.rating),
            None,
            None,
        )
        .await?;
        inserted.push(item);
    }

    let target_id = select_round_target(&inserted)?;
    rounds::set_target(conn, round.id, game_set, target_id).await?;

    debug!(round_id = %round.id, category = %round.category, "created rated round from dataset");
    Ok(round.id)
}

/// Create a round from an authored template. The template is re-validated
/// so a stale or edited template can never produce an unplayable round.
pub async fn create_from_template<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_set: &str,
    template_id: Uuid,
) -> Result<Uuid, DomainError> {
    let (template, template_items) = templates::find_full(conn, template_id, game_set)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Template,
                format!("Template {template_id} not found"),
            )
        })?;

    let drafts: Vec<TemplateItemDraft> = template_items.iter().map(draft_of).collect();
    template_rules::validate(template.kind, &drafts)?;

    // category doubles as the display name of the source template
    let round = rounds::create(
        conn,
        game_set,
        template.name.clone(),
        template.prompt.clone(),
        template.kind,
        template.image_data.clone(),
    )
    .await?;

    // Copy items with per-kind field filtering; the is_target flag is
    // template metadata, resolved here into target_item_id and never copied.
    let target_id = match template.kind {
        RoundKind::Rated => {
            let mut inserted: Vec<Item> = Vec::with_capacity(template_items.len());
            for it in &template_items {
                let item =
                    items::insert(conn, round.id, it.title.clone(), it.rating, None, None).await?;
                inserted.push(item);
            }
            Some(select_round_target(&inserted)?)
        }
        RoundKind::Manual | RoundKind::Carousel => {
            let mut target = None;
            for it in &template_items {
                let item = items::insert(
                    conn,
                    round.id,
                    it.title.clone(),
                    None,
                    it.secret_text.clone(),
                    it.image_data.clone(),
                )
                .await?;
                if it.is_target {
                    target = Some(item.id);
                }
            }
            target
        }
    };

    let target_id =
        target_id.ok_or_else(|| DomainError::invariant("failed to resolve target item id"))?;
    rounds::set_target(conn, round.id, game_set, target_id).await?;

    debug!(round_id = %round.id, template_id = %template_id, kind = template.kind.as_str(), "created round from template");
    Ok(round.id)
}

/// Eliminate one item: the whole read-check-write sequence must run inside
/// a single transaction (the caller's `with_txn` unit).
pub async fn eliminate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_set: &str,
    round_id: Uuid,
    item_id: Uuid,
) -> Result<(), DomainError> {
    let round = rounds::find_scoped(conn, round_id, game_set)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Round, format!("Round {round_id} not found"))
        })?;

    if round.status != RoundStatus::Active {
        return Err(DomainError::conflict(
            ConflictKind::RoundFinished,
            "Round already finished",
        ));
    }

    let item = items::find_in_round(conn, item_id, round_id)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Item, format!("Item {item_id} not found"))
        })?;

    if item.eliminated {
        return Err(DomainError::conflict(
            ConflictKind::ItemEliminated,
            "Item already eliminated",
        ));
    }

    items::eliminate(conn, item_id, round_id, round.current_team).await?;

    let remaining = items::remaining_ids(conn, round_id).await?;
    let outcome = resolve_elimination(round.current_team, round.target_item_id, item_id, &remaining);
    match outcome {
        EliminationOutcome::TargetHit { winner, loser }
        | EliminationOutcome::ForcedWin { winner, loser } => {
            rounds::finish(conn, round_id, game_set, Some(winner), Some(loser)).await?;
        }
        EliminationOutcome::Draw => {
            rounds::finish(conn, round_id, game_set, None, None).await?;
        }
        EliminationOutcome::TurnPassed { next_team } => {
            rounds::set_current_team(conn, round_id, game_set, next_team).await?;
        }
    }

    debug!(round_id = %round_id, item_id = %item_id, ?outcome, "eliminated item");
    Ok(())
}

/// Load the externally visible representation of a round.
pub async fn load_view<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_set: &str,
    round_id: Uuid,
) -> Result<RoundView, DomainError> {
    let round = rounds::find_scoped(conn, round_id, game_set)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Round, format!("Round {round_id} not found"))
        })?;
    let round_items = items::list_by_round(conn, round.id).await?;
    Ok(view::project(&round, &round_items))
}

fn select_round_target(inserted: &[Item]) -> Result<Uuid, DomainError> {
    let candidates: Vec<TargetCandidate<'_>> = inserted
        .iter()
        .map(|item| TargetCandidate {
            id: item.id,
            title: &item.title,
            rating: item.rating,
        })
        .collect();
    select_target(&candidates)
}

fn draft_of(item: &templates::TemplateItem) -> TemplateItemDraft {
    TemplateItemDraft {
        title: item.title.clone(),
        rating: item.rating,
        secret_text: item.secret_text.clone(),
        is_target: item.is_target,
        image_data: item.image_data.clone(),
    }
}
