mod apply;
mod consts;
mod error;
mod model_helpers;
mod models;
mod planner;
mod score;
mod update;
mod warehouse;

pub use consts::*;
pub use error::EngineError;
pub use models::{
    BoxWidth, Direction, GameChangeType, GameUpdate, Occupant, Plan, PlannedMove, Position,
    SimulationStats,
};
pub use score::gps_coordinate;
pub use update::{simulate, step};
pub use warehouse::Warehouse;
