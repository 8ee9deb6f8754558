//! Shared fixture: a small grid world with settlements, ruins and a greedy
//! movement executor, driving missions the way a host game loop would.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use campaign_core::{WorldMut, WorldView};
use campaign_mission::{
    Direction, EquipmentKind, Location, MissionWorld, MissionWorldMut, PlayerId, SettlementId,
    SettlementKind, TensionLevel, TransferReceipt, TravelOutcome,
};
use campaign_search::{PathWorld, TileId};

#[derive(Debug, Clone)]
struct Site {
    tile: TileId,
    kind: SettlementKind,
    owner: PlayerId,
    connected: bool,
    deadly: bool,
    capacity: u32,
    stock: u32,
}

#[derive(Debug, Clone)]
struct Actor {
    tile: TileId,
    owner: PlayerId,
    scout: bool,
    disposed: bool,
    moves_left: u32,
    budget: u32,
    carrier: Option<u32>,
    equipment: BTreeMap<EquipmentKind, u32>,
}

/// Rectangular board. Plain land costs 1 move, rough land 3, water is
/// illegal without a carrier. Neighbors in N, E, S, W order.
#[derive(Debug, Clone)]
pub struct Board {
    width: u32,
    height: u32,
    water: BTreeSet<TileId>,
    rough: BTreeSet<TileId>,
    ruins: BTreeSet<TileId>,
    ferry: BTreeSet<TileId>,
    settlements: BTreeMap<SettlementId, Site>,
    met: BTreeSet<(PlayerId, SettlementId)>,
    tension: BTreeMap<(SettlementId, PlayerId), TensionLevel>,
    actors: BTreeMap<u32, Actor>,
    forced: Option<TravelOutcome>,
}

impl Board {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            water: BTreeSet::new(),
            rough: BTreeSet::new(),
            ruins: BTreeSet::new(),
            ferry: BTreeSet::new(),
            settlements: BTreeMap::new(),
            met: BTreeSet::new(),
            tension: BTreeMap::new(),
            actors: BTreeMap::new(),
            forced: None,
        }
    }

    pub fn tile(&self, x: u32, y: u32) -> TileId {
        TileId(y * self.width + x)
    }

    fn coords(&self, tile: TileId) -> (u32, u32) {
        (tile.0 % self.width, tile.0 / self.width)
    }

    pub fn add_water(&mut self, tile: TileId) {
        self.water.insert(tile);
    }

    pub fn add_rough(&mut self, tile: TileId) {
        self.rough.insert(tile);
    }

    pub fn add_ruin(&mut self, tile: TileId) {
        self.ruins.insert(tile);
    }

    pub fn clear_ruin(&mut self, tile: TileId) {
        self.ruins.remove(&tile);
    }

    pub fn has_ruin(&self, tile: TileId) -> bool {
        self.ruins.contains(&tile)
    }

    pub fn needs_ferry(&mut self, tile: TileId) {
        self.ferry.insert(tile);
    }

    pub fn native_settlement(&mut self, id: SettlementId, tile: TileId, owner: PlayerId) {
        self.settlements.insert(
            id,
            Site {
                tile,
                kind: SettlementKind::Native,
                owner,
                connected: false,
                deadly: false,
                capacity: 0,
                stock: 0,
            },
        );
    }

    pub fn colony(&mut self, id: SettlementId, tile: TileId, owner: PlayerId, connected: bool) {
        self.settlements.insert(
            id,
            Site {
                tile,
                kind: SettlementKind::Colony,
                owner,
                connected,
                deadly: false,
                capacity: 0,
                stock: 0,
            },
        );
    }

    pub fn set_deadly(&mut self, id: SettlementId) {
        self.settlements.get_mut(&id).expect("settlement exists").deadly = true;
    }

    pub fn set_capacity(&mut self, id: SettlementId, capacity: u32) {
        self.settlements.get_mut(&id).expect("settlement exists").capacity = capacity;
    }

    pub fn set_met(&mut self, player: PlayerId, id: SettlementId) {
        self.met.insert((player, id));
    }

    pub fn set_tension(&mut self, id: SettlementId, toward: PlayerId, level: TensionLevel) {
        self.tension.insert((id, toward), level);
    }

    pub fn settlement_stock(&self, id: SettlementId) -> u32 {
        self.settlements[&id].stock
    }

    pub fn spawn_scout(&mut self, id: u32, tile: TileId, owner: PlayerId, budget: u32) -> u32 {
        self.actors.insert(
            id,
            Actor {
                tile,
                owner,
                scout: true,
                disposed: false,
                moves_left: budget,
                budget,
                carrier: None,
                equipment: BTreeMap::new(),
            },
        );
        id
    }

    pub fn spawn_carried_scout(
        &mut self,
        id: u32,
        tile: TileId,
        owner: PlayerId,
        budget: u32,
        carrier: u32,
    ) -> u32 {
        let spawned = self.spawn_scout(id, tile, owner, budget);
        self.actors.get_mut(&id).expect("actor exists").carrier = Some(carrier);
        spawned
    }

    pub fn give_equipment(&mut self, actor: u32, kind: EquipmentKind, quantity: u32) {
        *self
            .actors
            .get_mut(&actor)
            .expect("actor exists")
            .equipment
            .entry(kind)
            .or_insert(0) += quantity;
    }

    pub fn carried_total(&self, actor: u32) -> u32 {
        self.actors[&actor].equipment.values().sum()
    }

    pub fn dispose(&mut self, actor: u32) {
        self.actors.get_mut(&actor).expect("actor exists").disposed = true;
    }

    pub fn dismount(&mut self, actor: u32) {
        self.actors.get_mut(&actor).expect("actor exists").scout = false;
    }

    /// Refreshes every live actor's movement allowance.
    pub fn begin_turn(&mut self) {
        for actor in self.actors.values_mut() {
            if !actor.disposed {
                actor.moves_left = actor.budget;
            }
        }
    }

    /// Makes the next `travel_toward` call report `outcome` without moving.
    pub fn force_outcome(&mut self, outcome: TravelOutcome) {
        self.forced = Some(outcome);
    }

    fn adjacent(&self, a: TileId, b: TileId) -> bool {
        self.direction_between(a, b).is_some()
    }

    fn offset(&self, tile: TileId, direction: Direction) -> Option<TileId> {
        let (x, y) = self.coords(tile);
        let (dx, dy): (i64, i64) = match direction {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        };
        let nx = i64::from(x) + dx;
        let ny = i64::from(y) + dy;
        if nx < 0 || ny < 0 || nx >= i64::from(self.width) || ny >= i64::from(self.height) {
            return None;
        }
        Some(self.tile(nx as u32, ny as u32))
    }

    /// One greedy step toward the goal: close the east-west gap first, then
    /// the north-south gap.
    fn step_toward(&self, here: TileId, goal: TileId) -> TileId {
        let (hx, hy) = self.coords(here);
        let (gx, gy) = self.coords(goal);
        if gx > hx {
            self.tile(hx + 1, hy)
        } else if gx < hx {
            self.tile(hx - 1, hy)
        } else if gy > hy {
            self.tile(hx, hy + 1)
        } else {
            self.tile(hx, hy - 1)
        }
    }
}

impl WorldView for Board {
    type Actor = u32;
}

impl WorldMut for Board {}

impl PathWorld for Board {
    fn neighbors(&self, tile: TileId) -> Vec<TileId> {
        let (x, y) = self.coords(tile);
        let mut out = Vec::new();
        if y > 0 {
            out.push(self.tile(x, y - 1));
        }
        if x + 1 < self.width {
            out.push(self.tile(x + 1, y));
        }
        if y + 1 < self.height {
            out.push(self.tile(x, y + 1));
        }
        if x > 0 {
            out.push(self.tile(x - 1, y));
        }
        out
    }

    fn step_cost(
        &self,
        _actor: u32,
        carrier: Option<u32>,
        _from: TileId,
        to: TileId,
    ) -> Option<u32> {
        if self.water.contains(&to) {
            if carrier.is_some() {
                Some(1)
            } else {
                None
            }
        } else if self.rough.contains(&to) {
            Some(3)
        } else {
            Some(1)
        }
    }

    fn move_budget(&self, actor: u32, _carrier: Option<u32>, _tile: TileId) -> u32 {
        self.actors[&actor].budget
    }

    fn moves_left(&self, actor: u32) -> u32 {
        self.actors[&actor].moves_left
    }

    fn actor_tile(&self, actor: u32) -> Option<TileId> {
        let state = &self.actors[&actor];
        if state.disposed {
            None
        } else {
            Some(state.tile)
        }
    }

    fn carrier_of(&self, actor: u32) -> Option<u32> {
        self.actors[&actor].carrier
    }

    fn is_disposed(&self, actor: u32) -> bool {
        self.actors[&actor].disposed
    }
}

impl MissionWorld for Board {
    fn location_exists(&self, location: Location) -> bool {
        match location {
            Location::Tile(tile) => tile.0 < self.width * self.height,
            Location::Settlement(id) => self.settlements.contains_key(&id),
        }
    }

    fn location_tile(&self, location: Location) -> Option<TileId> {
        match location {
            Location::Tile(tile) => {
                if tile.0 < self.width * self.height {
                    Some(tile)
                } else {
                    None
                }
            }
            Location::Settlement(id) => self.settlements.get(&id).map(|site| site.tile),
        }
    }

    fn tile_has_ruin(&self, tile: TileId) -> bool {
        self.ruins.contains(&tile)
    }

    fn settlement_at(&self, tile: TileId) -> Option<SettlementId> {
        self.settlements
            .iter()
            .find(|(_, site)| site.tile == tile)
            .map(|(id, _)| *id)
    }

    fn settlement_kind(&self, settlement: SettlementId) -> SettlementKind {
        self.settlements[&settlement].kind
    }

    fn settlement_owner(&self, settlement: SettlementId) -> PlayerId {
        self.settlements[&settlement].owner
    }

    fn is_connected(&self, settlement: SettlementId) -> bool {
        self.settlements[&settlement].connected
    }

    fn met_leader(&self, player: PlayerId, settlement: SettlementId) -> bool {
        self.met.contains(&(player, settlement))
    }

    fn tension(&self, settlement: SettlementId, toward: PlayerId) -> Option<TensionLevel> {
        self.tension.get(&(settlement, toward)).copied()
    }

    fn actor_owner(&self, actor: u32) -> PlayerId {
        self.actors[&actor].owner
    }

    fn is_scout(&self, actor: u32) -> bool {
        self.actors[&actor].scout
    }

    fn equipment(&self, actor: u32) -> Vec<(EquipmentKind, u32)> {
        self.actors[&actor]
            .equipment
            .iter()
            .map(|(kind, quantity)| (*kind, *quantity))
            .collect()
    }

    fn best_settlement(&self, player: PlayerId) -> Option<SettlementId> {
        self.settlements
            .iter()
            .find(|(_, site)| site.kind == SettlementKind::Colony && site.owner == player)
            .map(|(id, _)| *id)
    }

    fn direction_between(&self, from: TileId, to: TileId) -> Option<Direction> {
        let (fx, fy) = self.coords(from);
        let (tx, ty) = self.coords(to);
        let dx = i64::from(tx) - i64::from(fx);
        let dy = i64::from(ty) - i64::from(fy);
        match (dx, dy) {
            (0, -1) => Some(Direction::North),
            (1, -1) => Some(Direction::NorthEast),
            (1, 0) => Some(Direction::East),
            (1, 1) => Some(Direction::SouthEast),
            (0, 1) => Some(Direction::South),
            (-1, 1) => Some(Direction::SouthWest),
            (-1, 0) => Some(Direction::West),
            (-1, -1) => Some(Direction::NorthWest),
            _ => None,
        }
    }

    fn should_take_transport(&self, _actor: u32, tile: TileId) -> bool {
        self.ferry.contains(&tile)
    }
}

impl MissionWorldMut for Board {
    fn travel_toward(&mut self, actor: u32, target: Location) -> TravelOutcome {
        if let Some(outcome) = self.forced.take() {
            return outcome;
        }
        let Some(goal) = self.location_tile(target) else {
            return TravelOutcome::IllegalMove;
        };
        // Native settlements are contacted from an adjacent tile, never
        // entered.
        let contact_goal = target
            .settlement()
            .map_or(false, |id| self.settlements[&id].kind == SettlementKind::Native);
        let mut moved = false;
        loop {
            let here = self.actors[&actor].tile;
            if here == goal {
                return TravelOutcome::Arrived;
            }
            if contact_goal && self.adjacent(here, goal) {
                return TravelOutcome::SettlementContact;
            }
            if self.actors[&actor].moves_left == 0 {
                return if moved {
                    TravelOutcome::InProgress
                } else {
                    TravelOutcome::OutOfMoves
                };
            }
            let next = self.step_toward(here, goal);
            if self.water.contains(&next) && self.actors[&actor].carrier.is_none() {
                return TravelOutcome::IllegalMove;
            }
            let cost = if self.rough.contains(&next) { 3 } else { 1 };
            let state = self.actors.get_mut(&actor).expect("actor exists");
            state.moves_left = state.moves_left.saturating_sub(cost);
            state.tile = next;
            self.ruins.remove(&next);
            moved = true;
        }
    }

    fn scout_settlement(&mut self, actor: u32, direction: Direction) {
        let here = self.actors[&actor].tile;
        let there = self
            .offset(here, direction)
            .expect("contact direction stays on the board");
        let settlement = self
            .settlement_at(there)
            .expect("contact direction leads to a settlement");
        let owner = self.actors[&actor].owner;
        self.met.insert((owner, settlement));
        if self.settlements[&settlement].deadly {
            self.actors.get_mut(&actor).expect("actor exists").disposed = true;
        }
    }

    fn transfer_equipment(
        &mut self,
        actor: u32,
        settlement: SettlementId,
        kind: EquipmentKind,
        quantity: u32,
    ) -> TransferReceipt {
        let site = self.settlements.get_mut(&settlement).expect("settlement exists");
        let accepted = quantity.min(site.capacity.saturating_sub(site.stock));
        site.stock += accepted;
        let held = self.actors.get_mut(&actor).expect("actor exists");
        if let Some(carried) = held.equipment.get_mut(&kind) {
            *carried -= accepted.min(*carried);
            if *carried == 0 {
                held.equipment.remove(&kind);
            }
        }
        TransferReceipt {
            accepted,
            overflow: quantity - accepted,
        }
    }
}
