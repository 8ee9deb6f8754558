//! Persisted mission state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::world::Location;

/// Snapshot of a mission, deliberately small: the kind tag plus the target
/// reference. The actor association and everything else about the actor
/// lives with the host's own save data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "missionKind"))]
pub enum MissionRecord {
    #[cfg_attr(feature = "serde", serde(rename = "scoutingMission"))]
    Scouting {
        #[cfg_attr(
            feature = "serde",
            serde(rename = "targetRef", default, skip_serializing_if = "Option::is_none")
        )]
        target: Option<Location>,
    },
}
