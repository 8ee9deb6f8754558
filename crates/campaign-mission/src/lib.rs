//! Per-actor mission state machines and the target policies that drive
//! them.
//!
//! A [`Mission`] owns an actor's long-term intent (currently scouting),
//! steps it once per turn against a [`MissionWorldMut`], and persists as a
//! small [`MissionRecord`]. Target selection is factored into
//! [`TargetPolicy`] so the same turn-bounded search serves any mission
//! kind.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod mission;
pub mod record;
pub mod scout;
pub mod world;

pub use mission::{Mission, MissionKind, ScoutingMission, TurnStatus};
pub use record::MissionRecord;
pub use scout::{PolicyGoalDecider, ScoutPolicy, TargetPolicy};
pub use world::{
    Direction, EquipmentKind, Location, MissionWorld, MissionWorldMut, PlayerId, SettlementId,
    SettlementKind, TensionLevel, TransferReceipt, TravelOutcome,
};
