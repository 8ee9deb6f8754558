use core::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use crate::{CostDecider, GoalDecider, PathNode, PathWorld, TileId, TilePath};

/// Comparable cost of a settled node: `(turns, spent movement, tiles)`.
///
/// Remaining movement is stored inverted so that fuller reserves order
/// earlier at equal turn cost.
type CostKey = (u32, u32, u32);

fn cost_key(node: &PathNode) -> CostKey {
    (node.turns, u32::MAX - node.moves_left, node.tiles)
}

#[derive(Debug)]
struct OpenNode {
    cost: CostKey,
    node: usize,
}

impl OpenNode {
    fn key(&self) -> (CostKey, usize) {
        // Arena indices grow in push order, so `node` doubles as the
        // insertion tie-breaker.
        (self.cost, self.node)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

/// Turn-budgeted best-first search over world adjacency.
///
/// Nodes settle in order of `(turns, spent movement, tiles)`; steps the cost
/// decider forbids are pruned, as is any node whose turn cost would exceed
/// the bound. Every settled node is offered to the goal decider, which owns
/// goal acceptance and ranking. Identical inputs settle in identical order:
/// ties fall back to the world's fixed neighbor order and insertion order,
/// never to randomness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSearch {
    max_turns: u32,
}

impl PathSearch {
    /// A search bounded to `max_turns` simulated turns.
    pub fn bounded(max_turns: u32) -> Self {
        Self { max_turns }
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    /// Runs the search and materializes the path to the best accepted goal.
    ///
    /// `None` means the goal decider accepted nothing within the bound;
    /// exhausting the bound is a normal outcome, not an error. The first
    /// search turn starts from the actor's remaining movement points.
    pub fn run<W, G, C>(
        &self,
        world: &W,
        actor: W::Actor,
        start: TileId,
        carrier: Option<W::Actor>,
        goal: &mut G,
        cost: &C,
    ) -> Option<TilePath>
    where
        W: PathWorld,
        G: GoalDecider<W>,
        C: CostDecider<W>,
    {
        let mut nodes: Vec<PathNode> = Vec::new();
        let mut open = BinaryHeap::<OpenNode>::new();
        let mut best_known: BTreeMap<TileId, CostKey> = BTreeMap::new();

        let start_node = PathNode {
            tile: start,
            turns: 0,
            tiles: 0,
            moves_left: world.moves_left(actor),
            prev: None,
        };
        nodes.push(start_node);
        best_known.insert(start, cost_key(&start_node));
        open.push(OpenNode {
            cost: cost_key(&start_node),
            node: 0,
        });

        while let Some(entry) = open.pop() {
            let node = nodes[entry.node];
            if best_known.get(&node.tile) != Some(&entry.cost) {
                // Stale heap entry.
                continue;
            }

            goal.check(world, actor, entry.node, &node);
            if !goal.keep_searching() {
                break;
            }

            for next in world.neighbors(node.tile) {
                let Some(step) = cost.cost(world, actor, carrier, node.tile, next) else {
                    continue;
                };

                let candidate = advance(world, actor, carrier, &node, entry.node, next, step);
                if candidate.turns > self.max_turns {
                    continue;
                }

                let key = cost_key(&candidate);
                if best_known.get(&next).map_or(false, |known| *known <= key) {
                    continue;
                }

                best_known.insert(next, key);
                let idx = nodes.len();
                nodes.push(candidate);
                open.push(OpenNode { cost: key, node: idx });
            }
        }

        goal.best().map(|idx| TilePath::from_arena(&nodes, idx))
    }
}

/// Applies one step of turn arithmetic: spend from the current reserve, or
/// roll into a fresh turn funded by the world's budget for the tile being
/// left.
fn advance<W: PathWorld>(
    world: &W,
    actor: W::Actor,
    carrier: Option<W::Actor>,
    from: &PathNode,
    from_idx: usize,
    to: TileId,
    step: u32,
) -> PathNode {
    let (turns, moves_left) = if step <= from.moves_left {
        (from.turns, from.moves_left - step)
    } else {
        let budget = world.move_budget(actor, carrier, from.tile);
        (from.turns + 1, budget.saturating_sub(step))
    };

    PathNode {
        tile: to,
        turns,
        tiles: from.tiles + 1,
        moves_left,
        prev: Some(from_idx),
    }
}
