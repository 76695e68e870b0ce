use crate::core::{GPS_ROW_FACTOR, Position, Warehouse};

impl Warehouse {
    /// Sum of `100 * y + x` over all crates, using the left edge of wide crates.
    pub fn gps_sum(&self) -> i64 {
        let singles: i64 = self.single_boxes().map(gps_coordinate).sum();
        let wides: i64 = self.wide_boxes().map(gps_coordinate).sum();
        singles + wides
    }
}

pub fn gps_coordinate(pos: Position) -> i64 {
    GPS_ROW_FACTOR * pos.y as i64 + pos.x as i64
}
