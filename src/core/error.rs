use thiserror::Error;

use crate::core::{Occupant, Position};

/// Broken grid invariants. Any of these means the warehouse can no longer be trusted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cannot move {from} to {to}: destination is occupied")]
    Occupied { from: Position, to: Position },
    #[error("cannot move {from} to {to}: destination is a wall")]
    IntoWall { from: Position, to: Position },
    #[error("nothing to move at {0}")]
    Unoccupied(Position),
    #[error("push reached {occupant:?} at {at}")]
    UnexpectedOccupant { at: Position, occupant: Occupant },
    #[error("no wall or floor registered at {0}")]
    UnmappedCell(Position),
    #[error("wide box half at {0} has no partner")]
    UnpairedHalf(Position),
    #[error("more than one object claims {0}")]
    Overlap(Position),
    #[error("{0} is both wall and floor")]
    WallAndFloor(Position),
    #[error("object at {0} is not standing on floor")]
    OffFloor(Position),
    #[error("{0} lies outside the declared warehouse bounds")]
    OutOfBounds(Position),
}
