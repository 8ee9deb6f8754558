use crate::ActorId;

/// Read-only world access.
///
/// The core crate intentionally does not prescribe which queries a world must
/// expose; specific subsystems (path search, missions, etc.) should define
/// extension traits.
pub trait WorldView {
    type Actor: ActorId;
}

/// Write access / effect sink.
pub trait WorldMut: WorldView {}
