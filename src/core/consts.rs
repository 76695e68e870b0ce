/// Weight of the row coordinate in a box's GPS coordinate.
pub const GPS_ROW_FACTOR: i64 = 100;
