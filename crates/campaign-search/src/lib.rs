//! Turn-budgeted best-first path search with pluggable goal and cost deciders.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod decider;
pub mod engine;
pub mod path;
pub mod world;

pub use decider::{AvoidIllegal, CostDecider, GoalDecider, TileCount};
pub use engine::PathSearch;
pub use path::{PathNode, PathStep, TilePath};
pub use world::{PathWorld, TileId};
