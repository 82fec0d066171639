use std::collections::HashMap;

use anyhow::{bail, Context};
use solver::index::IndexedVec;
use solver::{Color, Game, NodeId, Solution};

use crate::ParityGame;

/// Maps the ids used in a PGSolver file to the nodes of the converted [`Game`].
#[derive(Debug)]
pub struct NodeMapping {
    to_node: HashMap<usize, NodeId>,
    to_id: IndexedVec<NodeId, usize>,
}

impl NodeMapping {
    pub fn node(&self, id: usize) -> Option<NodeId> {
        self.to_node.get(&id).copied()
    }

    pub fn id(&self, node: NodeId) -> usize {
        self.to_id[node]
    }
}

/// Converts a parsed PGSolver game into a [`Game`]. Nodes are numbered in file order.
pub fn parity_game_to_game(pg: &ParityGame) -> anyhow::Result<(Game, NodeMapping)> {
    let mut game = Game::new();
    let mut to_node = HashMap::with_capacity(pg.nodes.len());
    let mut to_id = IndexedVec::new();

    for n in &pg.nodes {
        let node = game.add_node(n.player, Color(n.priority));
        to_id.push(n.id);
        if to_node.insert(n.id, node).is_some() {
            bail!("node {} is declared more than once", n.id);
        }
    }

    for n in &pg.nodes {
        let node = to_node[&n.id];
        for &succ in &n.successors {
            let succ_node = to_node
                .get(&succ)
                .copied()
                .with_context(|| format!("node {} has undeclared successor {succ}", n.id))?;
            game.add_edge(node, succ_node);
        }
    }

    Ok((game, NodeMapping { to_node, to_id }))
}

/// Formats `solution` in the PGSolver `paritysol` format, one line per node.
pub fn format_solution(mapping: &NodeMapping, solution: &Solution) -> String {
    let max_id = mapping.to_id.iter().copied().max().unwrap_or(0);

    let mut out = format!("paritysol {max_id};\n");
    for (node, winner) in solution.iter() {
        out += &format!("{} {winner};\n", mapping.id(node));
    }
    out
}
