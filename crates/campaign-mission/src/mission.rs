//! Mission state machines, stepped once per simulated turn.

use campaign_core::{ActorId, TraceEvent, TraceSink, TurnContext};

use crate::record::MissionRecord;
use crate::scout::{ScoutPolicy, TargetPolicy};
use crate::world::{Location, MissionWorld, MissionWorldMut, TravelOutcome};

/// Mission kinds known to the planner. Serialized records carry this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionKind {
    Scouting,
}

/// What a mission's turn step amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// The actor is gone or lost its required capability; the caller should
    /// discard the mission.
    Broken,
    /// No target could be acquired; idle until a later turn finds one.
    NoTarget,
    /// Travel progressed and resumes next turn.
    Underway,
    /// The turn ended with nothing to show: blocked, out of moves, under
    /// repair, an illegal step, or an outcome this mission does not know.
    Held,
    /// The target was reached and handled, and a retarget was attempted.
    Completed,
}

/// A per-actor behavior stepped once per turn.
pub trait Mission<W: MissionWorldMut> {
    fn kind(&self) -> MissionKind;

    fn actor(&self) -> W::Actor;

    /// The location the mission is currently working toward.
    fn target(&self) -> Option<Location>;

    /// Whether the mission is still worth keeping. Pure: broken state is
    /// reported, never repaired here.
    fn is_valid(&self, world: &W) -> bool;

    /// Advances the mission by one turn.
    fn do_turn(
        &mut self,
        ctx: &TurnContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
    ) -> TurnStatus;

    /// Where the transport subsystem should ferry the actor, if anywhere.
    fn transport_destination(&self, world: &W) -> Option<Location>;

    /// Snapshot for persistence.
    fn record(&self) -> MissionRecord;
}

/// Reconnaissance mission: visit unexplored ruins and approachable native
/// settlements, falling back to the owner's settlements once exploration is
/// exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoutingMission<A> {
    actor: A,
    target: Option<Location>,
}

impl<A: ActorId> ScoutingMission<A> {
    /// Binds the mission to `actor` and acquires an initial target. A
    /// mission that found nothing is still constructed; it reports invalid
    /// until a later turn's search succeeds.
    pub fn new<W>(world: &W, actor: A) -> Self
    where
        W: MissionWorld<Actor = A>,
    {
        let target = ScoutPolicy::find_target(world, actor);
        Self { actor, target }
    }

    /// Restores a mission from its persisted record. A target that no
    /// longer resolves degrades to none and the mission re-searches on its
    /// first turn.
    pub fn from_record<W>(world: &W, actor: A, record: &MissionRecord) -> Self
    where
        W: MissionWorld<Actor = A>,
    {
        let MissionRecord::Scouting { target } = *record;
        let target = target.filter(|&target| world.location_exists(target));
        Self { actor, target }
    }

    /// Probes whether a fresh scouting mission makes sense for `actor`
    /// right now, including whether a target could actually be acquired.
    pub fn is_assignable<W>(world: &W, actor: A) -> bool
    where
        W: MissionWorld<Actor = A>,
    {
        !world.is_disposed(actor)
            && world.is_scout(actor)
            && ScoutPolicy::find_target(world, actor).is_some()
    }

    pub fn actor(&self) -> A {
        self.actor
    }

    pub fn target(&self) -> Option<Location> {
        self.target
    }

    pub fn kind(&self) -> MissionKind {
        MissionKind::Scouting
    }

    pub fn record(&self) -> MissionRecord {
        MissionRecord::Scouting {
            target: self.target,
        }
    }

    /// Target reached: remember it, look for the next one, and when both
    /// ends are the owner's settlements, unload instead of shuttling
    /// equipment back and forth forever.
    fn retarget<W>(
        &mut self,
        ctx: &TurnContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
        completed: Location,
    ) -> TurnStatus
    where
        W: MissionWorldMut<Actor = A>,
    {
        self.target = ScoutPolicy::find_target(world, self.actor);
        if ScoutPolicy::is_own_colony_target(world, self.actor, completed)
            && self
                .target
                .map_or(false, |next| ScoutPolicy::is_own_colony_target(world, self.actor, next))
        {
            if let Some(colony) = completed.settlement() {
                for (kind, quantity) in world.equipment(self.actor) {
                    let receipt = world.transfer_equipment(self.actor, colony, kind, quantity);
                    if receipt.overflow > 0 {
                        trace.emit(
                            TraceEvent::warning(ctx.turn, "scout.equipment_overflow")
                                .with_a(self.actor.stable_id())
                                .with_b(u64::from(receipt.overflow)),
                        );
                    }
                }
            }
            self.target = None;
        }
        trace.emit(
            TraceEvent::new(ctx.turn, "scout.retarget")
                .with_a(completed.stable_id())
                .with_b(self.target.map_or(0, Location::stable_id)),
        );
        TurnStatus::Completed
    }
}

impl<W> Mission<W> for ScoutingMission<W::Actor>
where
    W: MissionWorldMut,
{
    fn kind(&self) -> MissionKind {
        MissionKind::Scouting
    }

    fn actor(&self) -> W::Actor {
        self.actor
    }

    fn target(&self) -> Option<Location> {
        self.target
    }

    fn is_valid(&self, world: &W) -> bool {
        !world.is_disposed(self.actor)
            && world.is_scout(self.actor)
            && self
                .target
                .map_or(false, |target| ScoutPolicy.is_target(world, self.actor, target))
    }

    fn do_turn(
        &mut self,
        ctx: &TurnContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
    ) -> TurnStatus {
        let actor = self.actor;
        if world.is_disposed(actor) {
            trace.emit(TraceEvent::warning(ctx.turn, "scout.broken").with_a(actor.stable_id()));
            return TurnStatus::Broken;
        }
        if !world.is_scout(actor) {
            trace.emit(TraceEvent::warning(ctx.turn, "scout.dismounted").with_a(actor.stable_id()));
            return TurnStatus::Broken;
        }

        // Re-acquire the target when the stored one no longer qualifies.
        let target = match self.target {
            Some(target) if ScoutPolicy.is_target(world, actor, target) => target,
            _ => match ScoutPolicy::find_target(world, actor) {
                Some(found) => {
                    self.target = Some(found);
                    found
                }
                None => {
                    self.target = None;
                    trace.emit(
                        TraceEvent::new(ctx.turn, "scout.no_target").with_a(actor.stable_id()),
                    );
                    return TurnStatus::NoTarget;
                }
            },
        };

        match world.travel_toward(actor, target) {
            TravelOutcome::Arrived => self.retarget(ctx, world, trace, target),
            TravelOutcome::InProgress => {
                trace.emit(TraceEvent::new(ctx.turn, "scout.underway").with_a(actor.stable_id()));
                TurnStatus::Underway
            }
            TravelOutcome::BlockedByHostile
            | TravelOutcome::OutOfMoves
            | TravelOutcome::NeedsRepair
            | TravelOutcome::IllegalMove => {
                trace.emit(TraceEvent::new(ctx.turn, "scout.held").with_a(actor.stable_id()));
                TurnStatus::Held
            }
            TravelOutcome::SettlementContact => {
                let direction = world
                    .actor_tile(actor)
                    .zip(world.location_tile(target))
                    .and_then(|(here, there)| world.direction_between(here, there));
                let Some(direction) = direction else {
                    panic!(
                        "settlement contact for actor {:?} while not adjacent to {:?}",
                        actor, target
                    );
                };
                world.scout_settlement(actor, direction);
                if world.is_disposed(actor) {
                    trace.emit(
                        TraceEvent::new(ctx.turn, "scout.died")
                            .with_a(actor.stable_id())
                            .with_b(target.stable_id()),
                    );
                    return TurnStatus::Broken;
                }
                self.retarget(ctx, world, trace, target)
            }
            // Unreachable until the executor grows new outcomes.
            #[allow(unreachable_patterns)]
            _ => {
                trace.emit(
                    TraceEvent::warning(ctx.turn, "scout.unexpected_move")
                        .with_a(actor.stable_id()),
                );
                TurnStatus::Held
            }
        }
    }

    fn transport_destination(&self, world: &W) -> Option<Location> {
        let target = self.target?;
        let tile = world.location_tile(target)?;
        if world.should_take_transport(self.actor, tile) {
            Some(target)
        } else {
            None
        }
    }

    fn record(&self) -> MissionRecord {
        MissionRecord::Scouting {
            target: self.target,
        }
    }
}
