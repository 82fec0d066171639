use std::fmt;

use thiserror::Error;

use crate::index::{new_index, AsIndex, IndexedVec};

new_index!(pub index NodeId);

/// One of the two players of a parity game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    P0,
    P1,
}

impl Player {
    /// The other player.
    pub fn flip(self) -> Player {
        match self {
            Player::P0 => Player::P1,
            Player::P1 => Player::P0,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::P0 => f.write_str("0"),
            Player::P1 => f.write_str("1"),
        }
    }
}

/// Priority of a node. The parity of the highest color seen infinitely often
/// decides the winner of a play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(pub usize);

impl Color {
    /// The player that wins a play whose most relevant color is `self`.
    pub fn player(self) -> Player {
        match self.0 % 2 {
            0 => Player::P0,
            _ => Player::P1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Reasons why a [`Game`] cannot be solved.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("node {node} has no successors")]
    NoSuccessors { node: NodeId },

    #[error("node {node} has successor {successor}, which is not a node of the game")]
    UnknownSuccessor { node: NodeId, successor: NodeId },
}

/// A parity game. Nodes are identified by dense [`NodeId`]s in insertion order.
///
/// Edges may point to nodes that are added later; whether the game is well
/// formed is only checked when it gets solved.
#[derive(Clone, Debug, Default)]
pub struct Game {
    players: IndexedVec<NodeId, Player>,
    colors: IndexedVec<NodeId, Color>,
    successors: IndexedVec<NodeId, Vec<NodeId>>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node without successors and returns its id.
    pub fn add_node(&mut self, player: Player, color: Color) -> NodeId {
        self.players.push(player);
        self.successors.push(Vec::new());
        self.colors.push(color)
    }

    /// Adds the edge `u -> v`. Panics if `u` is not a node of the game.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        self.successors[u].push(v);
    }

    pub fn node_count(&self) -> usize {
        self.players.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + DoubleEndedIterator + ExactSizeIterator {
        self.players.indexes()
    }

    pub fn contains(&self, n: NodeId) -> bool {
        n.to_usize() < self.node_count()
    }

    pub fn player_of(&self, n: NodeId) -> Player {
        self.players[n]
    }

    pub fn color_of(&self, n: NodeId) -> Color {
        self.colors[n]
    }

    pub fn successors_of(&self, n: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.successors[n].iter().copied()
    }
}
