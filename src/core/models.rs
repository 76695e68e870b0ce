use std::fmt::{Display, Formatter};

use indexmap::IndexSet;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Whether crates occupy one cell or a left/right pair of cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxWidth {
    #[default]
    Single,
    Double,
}

/// What a single cell of the warehouse holds right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Occupant {
    Wall,
    FreeFloor,
    Robot,
    SingleBox,
    LeftHalf,
    RightHalf,
}

/// The object currently at `from` must end up at `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlannedMove {
    pub from: Position,
    pub to: Position,
}

/// Relocations in execution order: every `to` is vacant by the time its move runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plan {
    moves: IndexSet<PlannedMove>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameUpdate {
    Moved {
        change: GameChangeType,
        relocations: usize,
    },
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    RobotMove,
    RobotAndBoxMove,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    pub moves_applied: usize,
    pub moves_blocked: usize,
    pub relocations: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Display for PlannedMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl Plan {
    pub fn single(from: Position, to: Position) -> Plan {
        let mut plan = Plan::default();
        plan.push(from, to);
        plan
    }

    /// Appends a move after everything already planned. A repeated move is kept at its first slot.
    pub fn push(&mut self, from: Position, to: Position) {
        self.moves.insert(PlannedMove { from, to });
    }

    /// Concatenates two independently planned branches, dropping moves `other` shares with `self`.
    pub fn merge(mut self, other: Plan) -> Plan {
        self.moves.extend(other.moves);
        self
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlannedMove> {
        self.moves.iter()
    }

    pub fn contains(&self, from: Position, to: Position) -> bool {
        self.moves.contains(&PlannedMove { from, to })
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a PlannedMove;
    type IntoIter = indexmap::set::Iter<'a, PlannedMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl Display for Plan {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let moves: Vec<String> = self.moves.iter().map(|m| m.to_string()).collect();
        write!(f, "[{}]", moves.join(", "))
    }
}
