//! Mission-level world vocabulary and access traits.
//!
//! Missions never own world objects. They see the host's game model through
//! [`MissionWorld`] (queries) and act on it through [`MissionWorldMut`]
//! (commands), always addressing objects by copyable ids.

use campaign_core::WorldMut;
use campaign_search::{PathWorld, TileId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a settlement in the host's world-object registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SettlementId(pub u32);

/// Identifier of a playing faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerId(pub u32);

/// Identifier of an equipment commodity an actor can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquipmentKind(pub u32);

/// A place a mission can aim at: a bare tile or the settlement standing on
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Location {
    Tile(TileId),
    Settlement(SettlementId),
}

impl Location {
    /// Stable nonzero payload for trace events. Tiles and settlements map
    /// into disjoint ranges so zero stays free as a "no location" sentinel.
    pub fn stable_id(self) -> u64 {
        match self {
            Location::Tile(tile) => (1 << 32) | u64::from(tile.0),
            Location::Settlement(settlement) => (2 << 32) | u64::from(settlement.0),
        }
    }

    /// The settlement this location names, if it names one.
    pub fn settlement(self) -> Option<SettlementId> {
        match self {
            Location::Settlement(settlement) => Some(settlement),
            Location::Tile(_) => None,
        }
    }
}

/// Compass direction from a tile to one of its eight neighbors, as used by
/// adjacency-bound interaction commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Who built a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementKind {
    /// Founded and owned by a playing faction.
    Colony,
    /// Belongs to a native faction.
    Native,
}

/// Measured hostility of a settlement's faction toward a player, ordered
/// from friendliest to most hostile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TensionLevel {
    Happy,
    Content,
    Displeased,
    Angry,
    Hateful,
}

/// Result of asking the movement executor to advance an actor toward a
/// location.
///
/// Non-exhaustive: executors may grow outcomes older missions do not know,
/// and those must degrade to a warned no-op turn rather than a compile
/// error in downstream crates.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelOutcome {
    /// The destination was reached this turn.
    Arrived,
    /// Progress was made; travel resumes next turn.
    InProgress,
    /// An attackable unit blocks the next step.
    BlockedByHostile,
    /// The actor has no movement left this turn.
    OutOfMoves,
    /// The actor must finish repairs before moving.
    NeedsRepair,
    /// The next step is not a legal move.
    IllegalMove,
    /// The actor stands beside a settlement that offers a special
    /// interaction instead of plain entry.
    SettlementContact,
}

/// Outcome of moving equipment into a settlement's stores. Nothing is ever
/// dropped: `accepted + overflow` equals the quantity offered, and the
/// overflow stays with the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransferReceipt {
    /// Quantity the settlement absorbed.
    pub accepted: u32,
    /// Quantity that did not fit.
    pub overflow: u32,
}

/// Read access to the slice of the game model missions reason about, on top
/// of plain path-search access.
pub trait MissionWorld: PathWorld {
    /// True while `location` still resolves in the world-object registry.
    /// Destroyed settlements stop resolving; tiles never do.
    fn location_exists(&self, location: Location) -> bool;

    /// The tile a location occupies, if it still occupies one.
    fn location_tile(&self, location: Location) -> Option<TileId>;

    /// True when the tile carries an unexplored ruin marker.
    fn tile_has_ruin(&self, tile: TileId) -> bool;

    /// The settlement standing on a tile, if any.
    fn settlement_at(&self, tile: TileId) -> Option<SettlementId>;

    fn settlement_kind(&self, settlement: SettlementId) -> SettlementKind;

    fn settlement_owner(&self, settlement: SettlementId) -> PlayerId;

    /// True when the settlement is wired into the owner's transport network
    /// and can serve as a fallback stop.
    fn is_connected(&self, settlement: SettlementId) -> bool;

    /// True once `player` has formally met the settlement's leader.
    fn met_leader(&self, player: PlayerId, settlement: SettlementId) -> bool;

    /// Measured tension of the settlement's faction toward `player`, or
    /// `None` while unmeasured.
    fn tension(&self, settlement: SettlementId, toward: PlayerId) -> Option<TensionLevel>;

    /// The faction the actor serves.
    fn actor_owner(&self, actor: Self::Actor) -> PlayerId;

    /// True while the actor retains the scouting capability.
    fn is_scout(&self, actor: Self::Actor) -> bool;

    /// Equipment the actor carries, in a stable order.
    fn equipment(&self, actor: Self::Actor) -> Vec<(EquipmentKind, u32)>;

    /// The host's ranking of `player`'s settlements, used when target
    /// acquisition comes up empty.
    fn best_settlement(&self, player: PlayerId) -> Option<SettlementId>;

    /// Direction from one tile to an adjacent one, `None` when the tiles
    /// are not adjacent.
    fn direction_between(&self, from: TileId, to: TileId) -> Option<Direction>;

    /// True when reaching `tile` calls for a ferry rather than walking.
    fn should_take_transport(&self, actor: Self::Actor, tile: TileId) -> bool;
}

/// Movement, interaction and transfer commands missions issue against the
/// game model.
pub trait MissionWorldMut: WorldMut + MissionWorld {
    /// Advances the actor toward `target` along the host's chosen path and
    /// reports how far it got.
    fn travel_toward(&mut self, actor: Self::Actor, target: Location) -> TravelOutcome;

    /// Performs the scout interaction with the settlement adjacent in
    /// `direction`. The interaction may dispose the actor; callers check
    /// [`PathWorld::is_disposed`] afterwards.
    fn scout_settlement(&mut self, actor: Self::Actor, direction: Direction);

    /// Offers `quantity` of `kind` from the actor to the settlement's
    /// stores.
    fn transfer_equipment(
        &mut self,
        actor: Self::Actor,
        settlement: SettlementId,
        kind: EquipmentKind,
        quantity: u32,
    ) -> TransferReceipt;
}
