use crate::{PathNode, PathWorld, TileId};

/// Per-step traversal cost strategy.
///
/// `None` marks a step forbidden. Implementations must be pure functions of
/// their inputs plus static game rules; the engine may evaluate them in any
/// order and caches nothing across calls.
pub trait CostDecider<W: PathWorld> {
    fn cost(
        &self,
        world: &W,
        actor: W::Actor,
        carrier: Option<W::Actor>,
        from: TileId,
        to: TileId,
    ) -> Option<u32>;
}

/// Charges the actor's real movement-point expenditure and forbids steps the
/// movement rules disallow.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvoidIllegal;

impl<W: PathWorld> CostDecider<W> for AvoidIllegal {
    fn cost(
        &self,
        world: &W,
        actor: W::Actor,
        carrier: Option<W::Actor>,
        from: TileId,
        to: TileId,
    ) -> Option<u32> {
        world.step_cost(actor, carrier, from, to)
    }
}

/// Charges exactly one movement point per tile and ignores legality.
///
/// Fallback for targets cut off under strict movement rules, e.g. across
/// water when the actor has no carrier.
#[derive(Debug, Clone, Copy, Default)]
pub struct TileCount;

impl<W: PathWorld> CostDecider<W> for TileCount {
    fn cost(
        &self,
        _world: &W,
        _actor: W::Actor,
        _carrier: Option<W::Actor>,
        _from: TileId,
        _to: TileId,
    ) -> Option<u32> {
        Some(1)
    }
}

/// Goal acceptance and ranking strategy.
///
/// A decider keeps the best goal it has accepted so far. Construct a fresh
/// value for every search invocation; decider state never outlives one
/// search.
pub trait GoalDecider<W: PathWorld> {
    /// Inspects a settled node. Returns true when the node was accepted as
    /// the new best goal.
    fn check(&mut self, world: &W, actor: W::Actor, id: usize, node: &PathNode) -> bool;

    /// False stops the search once the current best is good enough.
    fn keep_searching(&self) -> bool {
        true
    }

    /// Arena index of the best goal accepted so far.
    fn best(&self) -> Option<usize>;
}
