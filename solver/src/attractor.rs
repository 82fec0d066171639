use log::trace;

use crate::game::{Game, NodeId, Player};
use crate::predecessors::Predecessors;
use crate::{Map, Set};

/// Computes the attractor of `target` for `player` in the subgame induced by
/// `universe`.
///
/// The result is the smallest superset of `target` inside `universe` that
/// contains every node of `player` with a successor in it and every node of
/// the opponent whose successors in `universe` are all in it. Opponent nodes
/// without successors in `universe` are thus always included.
///
/// Runs in time linear in the size of the subgame.
pub fn attractor(
    game: &Game,
    preds: &Predecessors,
    universe: &Set<NodeId>,
    target: Set<NodeId>,
    player: Player,
) -> Set<NodeId> {
    debug_assert!(target.iter().all(|n| universe.contains(n)), "target is not inside the universe");

    let mut attracted = target;
    let mut queue = attracted.iter().copied().collect::<Vec<_>>();

    // Number of successors of each opponent node that are still outside the attractor.
    let mut escapes = Map::default();
    for &n in universe {
        if game.player_of(n) == player || attracted.contains(&n) {
            continue;
        }

        let count = game.successors_of(n).filter(|m| universe.contains(m)).count();
        if count == 0 {
            attracted.insert(n);
            queue.push(n);
        } else {
            escapes.insert(n, count);
        }
    }

    while let Some(n) = queue.pop() {
        for pred in preds.predecessors_of(n) {
            if !universe.contains(&pred) || attracted.contains(&pred) {
                continue;
            }

            let forced = match escapes.get_mut(&pred) {
                // Opponent node: attracted once it has no escape left.
                Some(count) => {
                    *count -= 1;
                    *count == 0
                }
                None => true,
            };

            if forced {
                attracted.insert(pred);
                queue.push(pred);
            }
        }
    }

    trace!("attractor for player {player}: {} of {} nodes", attracted.len(), universe.len());

    attracted
}
