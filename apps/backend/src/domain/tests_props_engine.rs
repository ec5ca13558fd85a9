//! Property tests for the elimination engine: simulate whole rounds and
//! check the invariants that must hold at every observable state.

use proptest::prelude::*;
use uuid::Uuid;

use crate::domain::engine::{resolve_elimination, EliminationOutcome};
use crate::domain::team::Team;

#[derive(Debug, Clone)]
struct SimRound {
    current_team: Team,
    finished: bool,
    winner: Option<Team>,
    loser: Option<Team>,
    target: Uuid,
    remaining: Vec<Uuid>,
}

impl SimRound {
    fn new(item_count: usize, target_index: usize) -> Self {
        let items: Vec<Uuid> = (0..item_count).map(|_| Uuid::new_v4()).collect();
        let target = items[target_index % item_count];
        SimRound {
            current_team: Team::One,
            finished: false,
            winner: None,
            loser: None,
            target,
            remaining: items,
        }
    }

    fn eliminate(&mut self, pick_index: usize) {
        assert!(!self.finished, "no transition leaves a finished round");
        let idx = pick_index % self.remaining.len();
        let item = self.remaining.remove(idx);
        match resolve_elimination(self.current_team, self.target, item, &self.remaining) {
            EliminationOutcome::TargetHit { winner, loser } => {
                self.finished = true;
                self.winner = Some(winner);
                self.loser = Some(loser);
            }
            EliminationOutcome::Draw => {
                self.finished = true;
            }
            EliminationOutcome::ForcedWin { winner, loser } => {
                self.finished = true;
                self.winner = Some(winner);
                self.loser = Some(loser);
            }
            EliminationOutcome::TurnPassed { next_team } => {
                self.current_team = next_team;
            }
        }
    }
}

proptest! {
    // winner/loser are both absent or both present, mutually exclusive, at
    // every step of any playthrough
    #[test]
    fn winner_and_loser_are_set_together(
        item_count in 2usize..12,
        target_index in 0usize..12,
        picks in proptest::collection::vec(0usize..64, 1..12),
    ) {
        let mut round = SimRound::new(item_count, target_index);
        for pick in picks {
            if round.finished {
                break;
            }
            round.eliminate(pick);
            match (round.winner, round.loser) {
                (None, None) => {}
                (Some(w), Some(l)) => {
                    prop_assert!(round.finished);
                    prop_assert_ne!(w, l);
                }
                _ => prop_assert!(false, "winner/loser set independently"),
            }
        }
    }

    // the turn flips on every non-terminal elimination
    #[test]
    fn turns_alternate_until_the_round_finishes(
        item_count in 3usize..12,
        target_index in 0usize..12,
        picks in proptest::collection::vec(0usize..64, 1..12),
    ) {
        let mut round = SimRound::new(item_count, target_index);
        for pick in picks {
            if round.finished {
                break;
            }
            let before = round.current_team;
            round.eliminate(pick);
            if !round.finished {
                prop_assert_eq!(round.current_team, before.other());
            }
        }
    }

    // exhaustive playthrough: eliminating everything but the target always
    // ends in a draw, regardless of order
    #[test]
    fn avoiding_the_target_to_the_end_is_always_a_draw(
        item_count in 2usize..12,
        target_index in 0usize..12,
        seed in 0usize..1000,
    ) {
        let mut round = SimRound::new(item_count, target_index);
        let mut step = seed;
        while !round.finished {
            // pick any non-target among the remaining
            let non_target: Vec<usize> = round
                .remaining
                .iter()
                .enumerate()
                .filter(|(_, id)| **id != round.target)
                .map(|(i, _)| i)
                .collect();
            let idx = non_target[step % non_target.len()];
            round.eliminate(idx);
            step = step.wrapping_mul(31).wrapping_add(7);
        }
        prop_assert!(round.winner.is_none());
        prop_assert!(round.loser.is_none());
        prop_assert_eq!(round.remaining.clone(), vec![round.target]);
    }

    // hitting the target at any point finishes the round with the acting
    // team losing
    #[test]
    fn hitting_the_target_always_loses_for_the_actor(
        item_count in 2usize..12,
        target_index in 0usize..12,
        warmup in proptest::collection::vec(0usize..64, 0..6),
    ) {
        let mut round = SimRound::new(item_count, target_index);
        // eliminate some non-targets first, stopping early if that would
        // finish the round
        for pick in warmup {
            let non_target: Vec<usize> = round
                .remaining
                .iter()
                .enumerate()
                .filter(|(_, id)| **id != round.target)
                .map(|(i, _)| i)
                .collect();
            if non_target.len() <= 1 {
                break;
            }
            round.eliminate(non_target[pick % non_target.len()]);
        }
        prop_assume!(!round.finished);

        let actor = round.current_team;
        let target_idx = round
            .remaining
            .iter()
            .position(|id| *id == round.target)
            .expect("target still standing");
        round.eliminate(target_idx);

        prop_assert!(round.finished);
        prop_assert_eq!(round.loser, Some(actor));
        prop_assert_eq!(round.winner, Some(actor.other()));
    }
}
