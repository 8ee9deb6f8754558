#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::TileId;

/// A node in the search arena.
///
/// `prev` is an arena index, never an owning reference; the arena lives on
/// the search call stack and chains are materialized into [`TilePath`] before
/// they escape it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathNode {
    pub tile: TileId,
    /// Whole turns consumed to arrive here.
    pub turns: u32,
    /// Tiles stepped over to arrive here.
    pub tiles: u32,
    /// Movement points remaining on arrival.
    pub moves_left: u32,
    pub prev: Option<usize>,
}

/// One step of a materialized path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathStep {
    pub tile: TileId,
    pub turns: u32,
    pub tiles: u32,
    pub moves_left: u32,
}

/// A start-to-goal path produced by the search engine.
///
/// `turns` and `tiles` are monotonically non-decreasing along the step
/// sequence, and the sequence is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TilePath {
    steps: Vec<PathStep>,
}

impl TilePath {
    /// Materializes the chain ending at `last` by walking predecessor links.
    pub(crate) fn from_arena(nodes: &[PathNode], last: usize) -> Self {
        let mut order = vec![last];
        let mut current = last;
        while let Some(prev) = nodes[current].prev {
            current = prev;
            order.push(current);
        }
        order.reverse();

        let steps = order
            .into_iter()
            .map(|idx| {
                let node = &nodes[idx];
                PathStep {
                    tile: node.tile,
                    turns: node.turns,
                    tiles: node.tiles,
                    moves_left: node.moves_left,
                }
            })
            .collect();
        Self { steps }
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// The goal step.
    pub fn last(&self) -> &PathStep {
        self.steps.last().expect("paths hold at least the start step")
    }

    /// Whole turns the full path takes.
    pub fn total_turns(&self) -> u32 {
        self.last().turns
    }

    /// The tile the path ends on.
    pub fn terminal_tile(&self) -> TileId {
        self.last().tile
    }
}
