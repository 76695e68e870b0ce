use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::core::{BoxWidth, Direction, EngineError, Occupant, Position, Warehouse};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("map is empty")]
    EmptyMap,
    #[error("row {row} has {found} column(s), expected {expected}")]
    InconsistentRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid map character {0:?} at {1}")]
    InvalidMapChar(char, Position),
    #[error("wide box half at {0} has no partner")]
    UnpairedHalf(Position),
    #[error("no robot found in map")]
    NoRobot,
    #[error("found robots at {0} and {1}, expected one")]
    MultipleRobots(Position, Position),
    #[error("invalid move character {0:?} on line {1}")]
    InvalidMoveChar(char, usize),
    #[error(transparent)]
    Invalid(#[from] EngineError),
}

/// Parses a map block followed by an optional blank line and move lines.
///
/// Map characters: `#` wall, `.` floor, `O` box, `@` robot. With [`BoxWidth::Double`] every map
/// character is doubled horizontally (`O` becomes `[]`, `@` becomes `@.`). With
/// [`BoxWidth::Single`] `[]` pairs may be written directly.
pub fn parse_puzzle(s: &str, box_width: BoxWidth) -> Result<(Warehouse, Vec<Direction>), ParseError> {
    let mut lines = s.lines().enumerate().skip_while(|(_, line)| line.trim().is_empty());

    let map_lines: Vec<&str> = lines
        .by_ref()
        .map(|(_, line)| line.trim_end())
        .take_while(|line| !line.is_empty())
        .collect();
    let warehouse = build_warehouse(&map_lines, box_width)?;

    let mut moves = Vec::new();
    for (line_index, line) in lines {
        for c in line.chars().filter(|c| !c.is_whitespace()) {
            let direction =
                Direction::from_char(c).ok_or(ParseError::InvalidMoveChar(c, line_index + 1))?;
            moves.push(direction);
        }
    }

    Ok((warehouse, moves))
}

/// Parses a map with no move list.
pub fn parse_layout(s: &str, box_width: BoxWidth) -> Result<Warehouse, ParseError> {
    parse_puzzle(s, box_width).map(|(warehouse, _)| warehouse)
}

pub fn read_puzzle<P: AsRef<Path>>(path: P, box_width: BoxWidth) -> Result<(Warehouse, Vec<Direction>)> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read puzzle file({}).", path.display()))?;
    let puzzle = parse_puzzle(&text, box_width)
        .with_context(|| format!("Failed to parse puzzle file({}).", path.display()))?;
    Ok(puzzle)
}

fn build_warehouse(map_lines: &[&str], box_width: BoxWidth) -> Result<Warehouse, ParseError> {
    let Some(first) = map_lines.first() else {
        return Err(ParseError::EmptyMap);
    };
    let columns = first.chars().count();
    let scale = match box_width {
        BoxWidth::Single => 1,
        BoxWidth::Double => 2,
    };

    let mut warehouse = Warehouse::new((columns * scale) as i32, map_lines.len() as i32, box_width);
    let mut robot: Option<Position> = None;

    for (y, line) in map_lines.iter().enumerate() {
        let found = line.chars().count();
        if found != columns {
            return Err(ParseError::InconsistentRow {
                row: y,
                expected: columns,
                found,
            });
        }

        let chars: Vec<char> = line.chars().collect();
        for (x, &c) in chars.iter().enumerate() {
            let pos = Position::new((x * scale) as i32, y as i32);
            let right = pos.moved(Direction::Right);
            match (c, box_width) {
                ('#', BoxWidth::Single) => warehouse.add_wall(pos),
                ('#', BoxWidth::Double) => {
                    warehouse.add_wall(pos);
                    warehouse.add_wall(right);
                }
                ('.', BoxWidth::Single) => warehouse.add_floor(pos),
                ('.', BoxWidth::Double) => {
                    warehouse.add_floor(pos);
                    warehouse.add_floor(right);
                }
                ('O', BoxWidth::Single) => warehouse.add_single_box(pos),
                ('O', BoxWidth::Double) => warehouse.add_wide_box(pos),
                ('@', _) => {
                    if let Some(previous) = robot {
                        return Err(ParseError::MultipleRobots(previous, pos));
                    }
                    robot = Some(pos);
                    warehouse.set_robot(pos);
                    if box_width == BoxWidth::Double {
                        warehouse.add_floor(right);
                    }
                }
                ('[', BoxWidth::Single) => {
                    if chars.get(x + 1) != Some(&']') {
                        return Err(ParseError::UnpairedHalf(pos));
                    }
                    warehouse.add_wide_box(pos);
                }
                (']', BoxWidth::Single) => {
                    if x == 0 || chars[x - 1] != '[' {
                        return Err(ParseError::UnpairedHalf(pos));
                    }
                }
                (other, _) => return Err(ParseError::InvalidMapChar(other, pos)),
            }
        }
    }

    if robot.is_none() {
        return Err(ParseError::NoRobot);
    }
    warehouse.validate()?;
    Ok(warehouse)
}

pub fn render_warehouse_to_string(warehouse: &Warehouse) -> String {
    let mut result = String::new();
    for y in 0..warehouse.height() {
        for x in 0..warehouse.width() {
            let ch = match warehouse.occupant(Position::new(x, y)) {
                Ok(Occupant::Wall) => '#',
                Ok(Occupant::FreeFloor) => '.',
                Ok(Occupant::Robot) => '@',
                Ok(Occupant::SingleBox) => 'O',
                Ok(Occupant::LeftHalf) => '[',
                Ok(Occupant::RightHalf) => ']',
                Err(_) => ' ',
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub fn render_moves_to_string(moves: &[Direction]) -> String {
    moves.iter().map(|d| d.to_char()).collect()
}
