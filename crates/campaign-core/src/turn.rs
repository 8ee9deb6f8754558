/// Context for one simulated turn.
///
/// The scheduler invokes each mission once per turn; the counter here is the
/// only ambient state a subsystem may read, and it feeds trace events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnContext {
    pub turn: u64,
}

impl TurnContext {
    pub fn new(turn: u64) -> Self {
        Self { turn }
    }
}
