use stepwise_core::{CreatePlan, Planner, PlannerBuilder, StepDraft, StepId};

/// Helper function to create a planner holding a fresh "Refactor auth" plan
pub fn create_test_planner() -> Planner {
    let mut planner = PlannerBuilder::new().with_author("integration").build();
    planner
        .create_plan(&CreatePlan::new("Refactor auth", "Isolate session handling"))
        .expect("Failed to create plan");
    planner
}

/// Helper function to add a step depending on `deps`, returning its id
pub fn add_step(planner: &mut Planner, title: &str, deps: &[&StepId]) -> StepId {
    let draft = deps
        .iter()
        .fold(StepDraft::new(title), |draft, dep| draft.depends_on(dep));
    planner.add_step(draft).expect("Failed to add step").id
}
