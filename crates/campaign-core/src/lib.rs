//! Deterministic, engine-agnostic kernel primitives for turn-based agents.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod actor;
pub mod trace;
pub mod turn;
pub mod world;

pub use actor::ActorId;
pub use trace::{NullTraceSink, TraceEvent, TraceLevel, TraceLog, TraceSink, VecTraceSink};
pub use turn::TurnContext;
pub use world::{WorldMut, WorldView};
