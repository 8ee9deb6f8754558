use campaign_core::WorldView;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a map tile.
///
/// Tiles are opaque handles into the host world model; the engine never
/// interprets them beyond identity and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileId(pub u32);

/// Read-only movement queries the path search runs against.
///
/// Implementations own every movement rule: adjacency, legality, step costs
/// and per-turn budgets, including how a carrier changes them. The engine
/// only does the turn arithmetic on top.
pub trait PathWorld: WorldView {
    /// Tiles adjacent to `tile`, in a fixed order.
    ///
    /// The order feeds search tie-breaking and must not vary between calls
    /// against identical world state.
    fn neighbors(&self, tile: TileId) -> Vec<TileId>;

    /// Movement-point cost of a legal step, or `None` if the step is illegal
    /// for this actor/carrier pair.
    fn step_cost(
        &self,
        actor: Self::Actor,
        carrier: Option<Self::Actor>,
        from: TileId,
        to: TileId,
    ) -> Option<u32>;

    /// Movement points available at the start of a fresh turn on `tile`.
    fn move_budget(&self, actor: Self::Actor, carrier: Option<Self::Actor>, tile: TileId) -> u32;

    /// Movement points the actor still has in the current turn.
    fn moves_left(&self, actor: Self::Actor) -> u32;

    /// The tile the actor currently occupies, if it is on the map.
    fn actor_tile(&self, actor: Self::Actor) -> Option<TileId>;

    /// The tile a path search for this actor starts from.
    ///
    /// Usually the actor's own tile; embarked actors start wherever the host
    /// expects the carrier to put them ashore.
    fn search_start(&self, actor: Self::Actor) -> Option<TileId> {
        self.actor_tile(actor)
    }

    /// The actor currently transporting `actor`, if any.
    fn carrier_of(&self, actor: Self::Actor) -> Option<Self::Actor>;

    /// True when the actor has been removed from play or never existed.
    fn is_disposed(&self, actor: Self::Actor) -> bool;
}
