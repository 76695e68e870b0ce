use std::collections::HashSet;

use crate::core::{BoxWidth, EngineError, Occupant, Position};

/// Walls, floor, crates and the robot, each tracked as a set of positions.
///
/// `floor` describes terrain and covers every non-wall cell, occupied or not.
/// A wide crate is a `left_halves` entry at `p` paired with a `right_halves` entry at `p + (1, 0)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warehouse {
    walls: HashSet<Position>,
    floor: HashSet<Position>,
    single_boxes: HashSet<Position>,
    left_halves: HashSet<Position>,
    right_halves: HashSet<Position>,
    robot: Position,
    width: i32,
    height: i32,
    box_width: BoxWidth,
}

impl Warehouse {
    pub fn new(width: i32, height: i32, box_width: BoxWidth) -> Warehouse {
        Warehouse {
            walls: HashSet::new(),
            floor: HashSet::new(),
            single_boxes: HashSet::new(),
            left_halves: HashSet::new(),
            right_halves: HashSet::new(),
            robot: Position::new(0, 0),
            width,
            height,
            box_width,
        }
    }

    pub fn add_wall(&mut self, pos: Position) {
        self.walls.insert(pos);
    }

    pub fn add_floor(&mut self, pos: Position) {
        self.floor.insert(pos);
    }

    pub fn add_single_box(&mut self, pos: Position) {
        self.floor.insert(pos);
        self.single_boxes.insert(pos);
    }

    /// Registers both halves of a wide crate whose left half sits at `left`.
    pub fn add_wide_box(&mut self, left: Position) {
        let right = Position::new(left.x + 1, left.y);
        self.floor.insert(left);
        self.floor.insert(right);
        self.left_halves.insert(left);
        self.right_halves.insert(right);
    }

    pub fn set_robot(&mut self, pos: Position) {
        self.floor.insert(pos);
        self.robot = pos;
    }

    /// Checks every structural invariant. Meant to run once, before simulation starts.
    pub fn validate(&self) -> Result<(), EngineError> {
        for &p in self.walls.iter().chain(self.floor.iter()) {
            if !self.in_bounds(p) {
                return Err(EngineError::OutOfBounds(p));
            }
        }
        if let Some(&p) = self.walls.intersection(&self.floor).next() {
            return Err(EngineError::WallAndFloor(p));
        }

        for &left in &self.left_halves {
            if !self.right_halves.contains(&Position::new(left.x + 1, left.y)) {
                return Err(EngineError::UnpairedHalf(left));
            }
        }
        for &right in &self.right_halves {
            if !self.left_halves.contains(&Position::new(right.x - 1, right.y)) {
                return Err(EngineError::UnpairedHalf(right));
            }
        }

        let mut claimed = HashSet::new();
        let occupied = std::iter::once(&self.robot)
            .chain(&self.single_boxes)
            .chain(&self.left_halves)
            .chain(&self.right_halves);
        for &p in occupied {
            if !claimed.insert(p) {
                return Err(EngineError::Overlap(p));
            }
            if !self.floor.contains(&p) {
                return Err(EngineError::OffFloor(p));
            }
        }

        Ok(())
    }

    pub fn occupant(&self, pos: Position) -> Result<Occupant, EngineError> {
        let occupant = if self.walls.contains(&pos) {
            Occupant::Wall
        } else if self.robot == pos {
            Occupant::Robot
        } else if self.single_boxes.contains(&pos) {
            Occupant::SingleBox
        } else if self.left_halves.contains(&pos) {
            Occupant::LeftHalf
        } else if self.right_halves.contains(&pos) {
            Occupant::RightHalf
        } else if self.floor.contains(&pos) {
            Occupant::FreeFloor
        } else {
            return Err(EngineError::UnmappedCell(pos));
        };
        Ok(occupant)
    }

    /// Moves whatever is tracked at `from` to `to`, touching exactly one relation.
    pub(crate) fn relocate(&mut self, from: Position, to: Position) -> Result<(), EngineError> {
        match self.occupant(to)? {
            Occupant::FreeFloor => {}
            Occupant::Wall => return Err(EngineError::IntoWall { from, to }),
            _ => return Err(EngineError::Occupied { from, to }),
        }

        let relation = match self.occupant(from)? {
            Occupant::Robot => {
                self.robot = to;
                return Ok(());
            }
            Occupant::SingleBox => &mut self.single_boxes,
            Occupant::LeftHalf => &mut self.left_halves,
            Occupant::RightHalf => &mut self.right_halves,
            Occupant::Wall | Occupant::FreeFloor => return Err(EngineError::Unoccupied(from)),
        };
        relation.remove(&from);
        relation.insert(to);
        Ok(())
    }

    pub fn robot(&self) -> Position {
        self.robot
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn box_width(&self) -> BoxWidth {
        self.box_width
    }

    pub fn single_boxes(&self) -> impl Iterator<Item = Position> + '_ {
        self.single_boxes.iter().copied()
    }

    /// Left-half positions, one per wide crate.
    pub fn wide_boxes(&self) -> impl Iterator<Item = Position> + '_ {
        self.left_halves.iter().copied()
    }

    pub fn box_count(&self) -> usize {
        self.single_boxes.len() + self.left_halves.len()
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }
}
