//! The elimination engine: outcome resolution for a single eliminate action.
//!
//! This is a pure decision function over already-loaded state. The service
//! layer performs the scoped loads and conflict checks, marks the item
//! eliminated, and then applies the outcome returned from here — all inside
//! one transaction.

use uuid::Uuid;

use crate::domain::team::Team;

/// What a single elimination does to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliminationOutcome {
    /// The acting team eliminated the hidden target and loses immediately.
    TargetHit { winner: Team, loser: Team },
    /// Every non-target item is gone and nobody picked the target: no team
    /// is penalized.
    Draw,
    /// The acting team survived to force the opponent into the final pick.
    ForcedWin { winner: Team, loser: Team },
    /// Round continues; play passes to the other team.
    TurnPassed { next_team: Team },
}

/// Resolve the outcome of eliminating `eliminated_item` while `acting_team`
/// holds the turn.
///
/// `remaining` is the set of non-eliminated item ids *after* the elimination
/// has been applied.
pub fn resolve_elimination(
    acting_team: Team,
    target_item_id: Uuid,
    eliminated_item: Uuid,
    remaining: &[Uuid],
) -> EliminationOutcome {
    if eliminated_item == target_item_id {
        return EliminationOutcome::TargetHit {
            winner: acting_team.other(),
            loser: acting_team,
        };
    }

    if let [last] = remaining {
        if *last == target_item_id {
            return EliminationOutcome::Draw;
        }
        return EliminationOutcome::ForcedWin {
            winner: acting_team,
            loser: acting_team.other(),
        };
    }

    EliminationOutcome::TurnPassed {
        next_team: acting_team.other(),
    }
}
