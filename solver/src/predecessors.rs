use crate::game::{Game, GameError, NodeId};
use crate::index::IndexedVec;

/// Reverse edges of a [`Game`].
///
/// Building it also checks that the game is total and closed: every node must
/// have at least one successor and every successor must be a node of the game.
pub struct Predecessors {
    preds: IndexedVec<NodeId, Vec<NodeId>>,
}

impl Predecessors {
    pub fn new(game: &Game) -> Result<Self, GameError> {
        let mut preds = game.nodes().map(|_| Vec::new()).collect::<IndexedVec<NodeId, _>>();

        for node in game.nodes() {
            let mut successors = game.successors_of(node).peekable();
            if successors.peek().is_none() {
                return Err(GameError::NoSuccessors { node });
            }

            for successor in successors {
                if !game.contains(successor) {
                    return Err(GameError::UnknownSuccessor { node, successor });
                }
                preds[successor].push(node);
            }
        }

        Ok(Self { preds })
    }

    pub fn predecessors_of(&self, n: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.preds[n].iter().copied()
    }
}
