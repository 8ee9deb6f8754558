use core::fmt::Debug;

/// Stable identifier for an actor.
///
/// Deterministic turn processing requires:
/// - stable ordering (`Ord`)
/// - a stable numeric ID (`stable_id`) for trace payloads and logs
pub trait ActorId: Copy + Ord + Eq + Debug {
    fn stable_id(self) -> u64;
}

impl ActorId for u64 {
    fn stable_id(self) -> u64 {
        self
    }
}

impl ActorId for u32 {
    fn stable_id(self) -> u64 {
        self as u64
    }
}

impl ActorId for usize {
    fn stable_id(self) -> u64 {
        self as u64
    }
}
