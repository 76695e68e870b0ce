use serde::Serialize;

use crate::core::{BoxWidth, Position, SimulationStats, Warehouse};

/// Final state of a run, as printed by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub box_width: BoxWidth,
    pub width: i32,
    pub height: i32,
    pub robot: Position,
    pub boxes: usize,
    pub moves_applied: usize,
    pub moves_blocked: usize,
    pub relocations: usize,
    pub gps_sum: i64,
}

impl SimulationReport {
    pub fn new(warehouse: &Warehouse, stats: SimulationStats) -> Self {
        SimulationReport {
            box_width: warehouse.box_width(),
            width: warehouse.width(),
            height: warehouse.height(),
            robot: warehouse.robot(),
            boxes: warehouse.box_count(),
            moves_applied: stats.moves_applied,
            moves_blocked: stats.moves_blocked,
            relocations: stats.relocations,
            gps_sum: warehouse.gps_sum(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
