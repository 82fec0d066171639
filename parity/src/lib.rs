//! Reading and writing parity games in the PGSolver format.

mod conv;
mod parser;

#[cfg(test)]
mod test;

pub use conv::{format_solution, parity_game_to_game, NodeMapping};
pub use parser::parse_parity_game;
use solver::Player;

#[derive(Debug)]
pub struct Node {
    pub id: usize,
    pub priority: usize,
    pub player: Player,
    pub successors: Vec<usize>,
}

#[derive(Debug)]
pub struct ParityGame {
    pub nodes: Vec<Node>,
}
