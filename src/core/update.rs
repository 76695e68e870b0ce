use log::{debug, info};

use crate::core::{Direction, EngineError, GameChangeType, GameUpdate, SimulationStats, Warehouse};

/// Attempts one robot move. A blocked push leaves the warehouse untouched.
pub fn step(warehouse: &mut Warehouse, direction: Direction) -> Result<GameUpdate, EngineError> {
    let robot = warehouse.robot();
    let Some(plan) = warehouse.plan(direction, robot)? else {
        debug!("{:?} from {} is blocked", direction, robot);
        return Ok(GameUpdate::Blocked);
    };

    warehouse.apply(&plan)?;
    debug!("{:?} from {} moved {} object(s)", direction, robot, plan.len());

    let change = if plan.len() > 1 {
        GameChangeType::RobotAndBoxMove
    } else {
        GameChangeType::RobotMove
    };
    Ok(GameUpdate::Moved {
        change,
        relocations: plan.len(),
    })
}

/// Runs every move in order, stopping at the first broken invariant.
pub fn simulate(
    warehouse: &mut Warehouse,
    directions: &[Direction],
) -> Result<SimulationStats, EngineError> {
    let mut stats = SimulationStats::default();
    for &direction in directions {
        match step(warehouse, direction)? {
            GameUpdate::Moved { relocations, .. } => {
                stats.moves_applied += 1;
                stats.relocations += relocations;
            }
            GameUpdate::Blocked => stats.moves_blocked += 1,
        }
    }

    info!(
        "simulated {} move(s): {} applied, {} blocked, {} relocation(s)",
        directions.len(),
        stats.moves_applied,
        stats.moves_blocked,
        stats.relocations
    );
    Ok(stats)
}
