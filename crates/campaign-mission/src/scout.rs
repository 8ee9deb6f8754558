//! Reconnaissance target policy.
//!
//! The policy decides which locations are worth a scout's time, ranks paths
//! toward them, and drives the two-phase search that acquires a target.

use campaign_search::{AvoidIllegal, GoalDecider, PathNode, PathSearch, TileCount, TileId, TilePath};

use crate::world::{Location, MissionWorld, SettlementKind, TensionLevel};

/// Turn bound for target searches.
const MAX_TURNS: u32 = 20;

/// Decides whether a location is worth acting on and ranks candidate paths
/// toward it. One policy per mission kind.
pub trait TargetPolicy<W: MissionWorld> {
    /// True when `location` is a legal target for `actor` right now.
    fn is_target(&self, world: &W, actor: W::Actor, location: Location) -> bool;

    /// Relative worth of a path ending on `tile` after `turns` whole turns.
    /// `i32::MIN` rejects the candidate outright.
    fn score(&self, world: &W, actor: W::Actor, tile: TileId, turns: u32) -> i32;

    /// The target a tile stands for: the tile itself when it qualifies,
    /// else the settlement standing on it, else nothing.
    fn target_at(&self, world: &W, actor: W::Actor, tile: TileId) -> Option<Location> {
        let here = Location::Tile(tile);
        if self.is_target(world, actor, here) {
            return Some(here);
        }
        let settlement = Location::Settlement(world.settlement_at(tile)?);
        if self.is_target(world, actor, settlement) {
            Some(settlement)
        } else {
            None
        }
    }
}

/// Scouting targets: unexplored ruins, native settlements whose leader has
/// not been met and whose faction is not hateful, and the actor's own
/// connected settlements as an administrative fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoutPolicy;

impl ScoutPolicy {
    fn is_ruin_target<W: MissionWorld>(world: &W, location: Location) -> bool {
        match location {
            Location::Tile(tile) => world.tile_has_ruin(tile),
            Location::Settlement(_) => false,
        }
    }

    fn is_native_target<W: MissionWorld>(world: &W, actor: W::Actor, location: Location) -> bool {
        let Some(settlement) = location.settlement() else {
            return false;
        };
        if world.settlement_kind(settlement) != SettlementKind::Native {
            return false;
        }
        let owner = world.actor_owner(actor);
        !world.met_leader(owner, settlement)
            && world
                .tension(settlement, owner)
                .map_or(true, |level| level < TensionLevel::Hateful)
    }

    pub(crate) fn is_own_colony_target<W: MissionWorld>(
        world: &W,
        actor: W::Actor,
        location: Location,
    ) -> bool {
        let Some(settlement) = location.settlement() else {
            return false;
        };
        world.settlement_kind(settlement) == SettlementKind::Colony
            && world.settlement_owner(settlement) == world.actor_owner(actor)
            && world.is_connected(settlement)
    }

    /// Scores a whole candidate path. Own settlements make the worst
    /// possible fallback, so they never win while anything else scores.
    pub fn score_path<W: MissionWorld>(
        &self,
        world: &W,
        actor: W::Actor,
        path: Option<&TilePath>,
    ) -> i32 {
        match path {
            None => i32::MIN,
            Some(path) => self.score(world, actor, path.terminal_tile(), path.total_turns()),
        }
    }

    /// The target a candidate path leads to, read off its terminal tile.
    /// With no path the actor's own tile is probed instead.
    pub fn extract_target<W: MissionWorld>(
        &self,
        world: &W,
        actor: W::Actor,
        path: Option<&TilePath>,
    ) -> Option<Location> {
        let tile = match path {
            Some(path) => path.terminal_tile(),
            None => world.actor_tile(actor)?,
        };
        self.target_at(world, actor, tile)
    }

    /// Two-phase target search. The strict pass charges real movement costs;
    /// when it finds nothing and the actor walks on its own, a tile-count
    /// pass retries so water cannot hide every target. Carried actors skip
    /// the retry: the carrier already made every sea lane legal, so an empty
    /// strict pass means there is nothing left to find.
    pub fn find_target_path<W: MissionWorld>(world: &W, actor: W::Actor) -> Option<TilePath> {
        if world.is_disposed(actor) {
            return None;
        }
        let start = world.search_start(actor)?;
        let carrier = world.carrier_of(actor);
        let search = PathSearch::bounded(MAX_TURNS);

        let mut goal = PolicyGoalDecider::new(ScoutPolicy);
        if let Some(path) = search.run(world, actor, start, carrier, &mut goal, &AvoidIllegal) {
            return Some(path);
        }
        if carrier.is_some() {
            return None;
        }
        let mut goal = PolicyGoalDecider::new(ScoutPolicy);
        search.run(world, actor, start, carrier, &mut goal, &TileCount)
    }

    /// Target acquisition: the best reachable scouting target, else the
    /// host's pick of the owner's settlements.
    pub fn find_target<W: MissionWorld>(world: &W, actor: W::Actor) -> Option<Location> {
        match Self::find_target_path(world, actor) {
            Some(path) => ScoutPolicy.extract_target(world, actor, Some(&path)),
            None => world
                .best_settlement(world.actor_owner(actor))
                .map(Location::Settlement),
        }
    }
}

impl<W: MissionWorld> TargetPolicy<W> for ScoutPolicy {
    fn is_target(&self, world: &W, actor: W::Actor, location: Location) -> bool {
        world.location_exists(location)
            && (Self::is_ruin_target(world, location)
                || Self::is_native_target(world, actor, location)
                || Self::is_own_colony_target(world, actor, location))
    }

    fn score(&self, world: &W, actor: W::Actor, tile: TileId, turns: u32) -> i32 {
        match self.target_at(world, actor, tile) {
            None => i32::MIN,
            Some(target) if Self::is_own_colony_target(world, actor, target) => i32::MIN,
            Some(_) => 1000 / (turns as i32 + 1),
        }
    }
}

/// Adapts a [`TargetPolicy`] into a search goal. Every settled node is
/// scored as if the path ended there; only a strictly better score displaces
/// the incumbent, so among equals the first settled node wins.
pub struct PolicyGoalDecider<P> {
    policy: P,
    best: Option<usize>,
    best_score: i32,
}

impl<P> PolicyGoalDecider<P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            best: None,
            best_score: i32::MIN,
        }
    }
}

impl<W, P> GoalDecider<W> for PolicyGoalDecider<P>
where
    W: MissionWorld,
    P: TargetPolicy<W>,
{
    fn check(&mut self, world: &W, actor: W::Actor, id: usize, node: &PathNode) -> bool {
        let score = self.policy.score(world, actor, node.tile, node.turns);
        if score > self.best_score {
            self.best_score = score;
            self.best = Some(id);
            return true;
        }
        false
    }

    fn best(&self) -> Option<usize> {
        self.best
    }
}
