//! Solver for parity games based on Zielonka's recursive algorithm.
//!
//! ```
//! use solver::{solve, Color, Game, Player};
//!
//! let mut game = Game::new();
//! let a = game.add_node(Player::P0, Color(0));
//! let b = game.add_node(Player::P1, Color(1));
//! game.add_edge(a, b);
//! game.add_edge(b, a);
//!
//! let solution = solve(&game).unwrap();
//! assert_eq!(solution.winner(a), Player::P1);
//! assert_eq!(solution.winner(b), Player::P1);
//! ```

pub mod attractor;
pub mod game;
pub mod index;
pub mod predecessors;
pub mod zielonka;


pub use attractor::attractor;
pub use game::{Color, Game, GameError, NodeId, Player};
pub use predecessors::Predecessors;
pub use zielonka::{solve, Solution, Zielonka};

pub type Set<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
pub type Map<K, V> = rustc_hash::FxHashMap<K, V>;
