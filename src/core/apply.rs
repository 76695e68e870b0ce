use crate::core::{EngineError, Plan, Warehouse};

impl Warehouse {
    /// Commits a plan produced by [`Warehouse::plan`] against this same state, in listed order.
    pub fn apply(&mut self, plan: &Plan) -> Result<(), EngineError> {
        for planned in plan {
            self.relocate(planned.from, planned.to)?;
        }
        Ok(())
    }
}
