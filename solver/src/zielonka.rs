use std::ops::{Index, IndexMut};

use log::{debug, trace};

use crate::attractor::attractor;
use crate::game::{Color, Game, GameError, NodeId, Player};
use crate::index::IndexedVec;
use crate::predecessors::Predecessors;
use crate::{Map, Set};

/// Solves `game`, returning the winner of every node.
pub fn solve(game: &Game) -> Result<Solution, GameError> {
    Ok(Zielonka::new(game)?.solve())
}

/// The winning regions of the two players in some subgame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Regions {
    w0: Set<NodeId>,
    w1: Set<NodeId>,
}

impl Regions {
    /// Regions where `player` wins all of `area`.
    fn won_by(player: Player, area: Set<NodeId>) -> Self {
        let mut regions = Self::default();
        regions[player] = area;
        regions
    }

    fn len(&self) -> usize {
        self.w0.len() + self.w1.len()
    }
}

impl Index<Player> for Regions {
    type Output = Set<NodeId>;

    fn index(&self, player: Player) -> &Self::Output {
        match player {
            Player::P0 => &self.w0,
            Player::P1 => &self.w1,
        }
    }
}

impl IndexMut<Player> for Regions {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        match player {
            Player::P0 => &mut self.w0,
            Player::P1 => &mut self.w1,
        }
    }
}

/// The winner of every node of a solved game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    winners: IndexedVec<NodeId, Player>,
}

impl Solution {
    /// Panics unless every node of `game` is in exactly one of the regions.
    fn from_regions(game: &Game, regions: Regions) -> Self {
        let mut winners = game.nodes().map(|_| None).collect::<IndexedVec<NodeId, _>>();

        for player in [Player::P0, Player::P1] {
            for &n in &regions[player] {
                match winners.get(n) {
                    Some(None) => winners[n] = Some(player),
                    Some(Some(_)) => panic!("node {n} is in the winning region of both players"),
                    None => panic!("node {n} is in a winning region but not in the game"),
                }
            }
        }

        let winners = winners
            .enumerate()
            .map(|(n, winner)| match winner {
                Some(winner) => *winner,
                None => panic!("node {n} is not in any winning region"),
            })
            .collect();

        Self { winners }
    }

    pub fn winner(&self, n: NodeId) -> Player {
        self.winners[n]
    }

    pub fn winning_region(&self, player: Player) -> impl Iterator<Item = NodeId> + '_ {
        self.iter().filter(move |&(_, winner)| winner == player).map(|(n, _)| n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Player)> + '_ {
        self.winners.enumerate().map(|(n, &winner)| (n, winner))
    }

    pub fn len(&self) -> usize {
        self.winners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }
}

/// Zielonka's recursive algorithm.
pub struct Zielonka<'a> {
    game: &'a Game,
    preds: Predecessors,

    /// Nodes of the game grouped by color.
    nodes_by_color: Map<Color, Vec<NodeId>>,

    recursive_calls: usize,
}

impl<'a> Zielonka<'a> {
    /// Prepares to solve `game`, failing if it is not a valid parity game.
    pub fn new(game: &'a Game) -> Result<Self, GameError> {
        let preds = Predecessors::new(game)?;

        let mut nodes_by_color = Map::<Color, Vec<NodeId>>::default();
        for n in game.nodes() {
            nodes_by_color.entry(game.color_of(n)).or_default().push(n);
        }

        Ok(Self { game, preds, nodes_by_color, recursive_calls: 0 })
    }

    pub fn solve(&mut self) -> Solution {
        debug!("Solving parity game with {} nodes", self.game.node_count());

        let area = self.game.nodes().collect::<Set<_>>();
        let regions = self.solve_region(area, 0);

        debug!(
            "Performed {} recursive calls, |W0| = {}, |W1| = {}",
            self.recursive_calls,
            regions[Player::P0].len(),
            regions[Player::P1].len()
        );

        Solution::from_regions(self.game, regions)
    }

    /// Number of recursive calls performed by [`Zielonka::solve`] so far.
    pub fn recursive_calls(&self) -> usize {
        self.recursive_calls
    }

    fn solve_region(&mut self, area: Set<NodeId>, depth: usize) -> Regions {
        self.recursive_calls += 1;

        if area.is_empty() {
            return Regions::default();
        }

        let max_color = area.iter().map(|&n| self.game.color_of(n)).max().unwrap_or_default();
        if max_color == Color(0) {
            return Regions::won_by(Player::P0, area);
        }

        let player = max_color.player();
        let opponent = player.flip();

        let most_relevant = self
            .nodes_by_color
            .get(&max_color)
            .into_iter()
            .flatten()
            .copied()
            .filter(|n| area.contains(n))
            .collect::<Set<_>>();

        trace!(
            "depth {depth}: |area| = {}, max color {max_color} for player {player}, {} nodes with it",
            area.len(),
            most_relevant.len()
        );

        let atc = attractor(self.game, &self.preds, &area, most_relevant, player);
        let subarea = difference(&area, &atc);
        let mut w = self.solve_region(subarea, depth + 1);

        if w[opponent].is_empty() {
            return Regions::won_by(player, area);
        }

        let opponent_region = std::mem::take(&mut w[opponent]);
        let atc2 = attractor(self.game, &self.preds, &area, opponent_region, opponent);
        trace!("depth {depth}: player {opponent} attracts {} nodes", atc2.len());

        let subarea2 = difference(&area, &atc2);
        let mut w2 = self.solve_region(subarea2, depth + 1);
        w2[opponent].extend(atc2);

        debug_assert_eq!(w2.len(), area.len(), "regions do not partition the area");
        debug_assert!(w2[player].iter().all(|n| !w2[opponent].contains(n)));

        w2
    }
}

fn difference(area: &Set<NodeId>, removed: &Set<NodeId>) -> Set<NodeId> {
    area.iter().copied().filter(|n| !removed.contains(n)).collect()
}
