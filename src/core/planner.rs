use std::collections::HashMap;

use log::trace;

use crate::core::{Direction, EngineError, Occupant, Plan, Position, Warehouse};

/// Sub-plans already worked out during one call to [`Warehouse::plan`], keyed by mover.
type PlanMemo = HashMap<Position, Option<Plan>>;

impl Warehouse {
    /// Works out every relocation needed for the object at `origin` to step in `direction`.
    ///
    /// Returns `Ok(None)` when the push is blocked by a wall somewhere along the way. The returned
    /// plan lists the farthest object first and `origin` last, so applying it front to back never
    /// moves anything into a cell that is still taken.
    pub fn plan(&self, direction: Direction, origin: Position) -> Result<Option<Plan>, EngineError> {
        let mut memo = PlanMemo::new();
        let plan = self.plan_inner(direction, origin, &mut memo)?;
        if let Some(plan) = &plan {
            trace!("planned {:?} from {}: {}", direction, origin, plan);
        }
        Ok(plan)
    }

    fn plan_inner(
        &self,
        direction: Direction,
        origin: Position,
        memo: &mut PlanMemo,
    ) -> Result<Option<Plan>, EngineError> {
        if let Some(known) = memo.get(&origin) {
            return Ok(known.clone());
        }

        let target = origin.moved(direction);
        let occupant = self.occupant(target)?;

        let plan = match occupant {
            Occupant::Wall => None,
            Occupant::FreeFloor => Some(Plan::single(origin, target)),
            Occupant::SingleBox => self.plan_chain(direction, origin, target, memo)?,
            Occupant::LeftHalf | Occupant::RightHalf if direction.is_horizontal() => {
                self.plan_chain(direction, origin, target, memo)?
            }
            Occupant::LeftHalf => {
                let other = target.moved(Direction::Right);
                self.plan_split(direction, origin, target, other, memo)?
            }
            Occupant::RightHalf => {
                let other = target.moved(Direction::Left);
                self.plan_split(direction, origin, target, other, memo)?
            }
            Occupant::Robot => {
                return Err(EngineError::UnexpectedOccupant {
                    at: target,
                    occupant,
                });
            }
        };

        memo.insert(origin, plan.clone());
        Ok(plan)
    }

    /// `target` holds something that moves in line with `origin`.
    fn plan_chain(
        &self,
        direction: Direction,
        origin: Position,
        target: Position,
        memo: &mut PlanMemo,
    ) -> Result<Option<Plan>, EngineError> {
        let Some(mut plan) = self.plan_inner(direction, target, memo)? else {
            return Ok(None);
        };
        plan.push(origin, target);
        Ok(Some(plan))
    }

    /// `target` and `other` are the two halves of a wide crate pushed vertically; both must clear.
    fn plan_split(
        &self,
        direction: Direction,
        origin: Position,
        target: Position,
        other: Position,
        memo: &mut PlanMemo,
    ) -> Result<Option<Plan>, EngineError> {
        let Some(plan_target) = self.plan_inner(direction, target, memo)? else {
            return Ok(None);
        };
        let Some(plan_other) = self.plan_inner(direction, other, memo)? else {
            return Ok(None);
        };
        let mut plan = plan_target.merge(plan_other);
        plan.push(origin, target);
        Ok(Some(plan))
    }
}
