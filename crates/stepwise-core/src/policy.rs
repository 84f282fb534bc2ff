//! Risk aggregation, rollback-point policy and full plan analysis.
//!
//! A rollback point is a step that nothing else depends on and whose risk is
//! not high. This is a heuristic for "a reasonable place to stop and
//! recover", not a proven safety property.

use std::collections::BTreeSet;

use crate::{
    graph::DependencyGraph,
    models::{PlanAnalysis, PlanStep, RiskLevel, StepId},
};

/// Highest risk level among `steps`; `RiskLevel::None` when empty.
pub fn aggregate_risk(steps: &[PlanStep]) -> RiskLevel {
    steps.iter().map(|step| step.risk).max().unwrap_or_default()
}

/// Ids of steps eligible as rollback anchors, in stored order.
pub fn rollback_points(steps: &[PlanStep], graph: &DependencyGraph<'_>) -> Vec<StepId> {
    steps
        .iter()
        .enumerate()
        .filter(|(position, step)| !graph.has_dependents(*position) && step.risk != RiskLevel::High)
        .map(|(_, step)| step.id.clone())
        .collect()
}

/// Derive a complete [`PlanAnalysis`] from the current steps.
pub fn analyze(steps: &[PlanStep]) -> PlanAnalysis {
    let graph = DependencyGraph::new(steps);

    let total_files = steps
        .iter()
        .flat_map(|step| step.affected_files.iter())
        .collect::<BTreeSet<_>>()
        .len();

    PlanAnalysis {
        total_steps: steps.len(),
        total_files,
        estimated_complexity: steps
            .iter()
            .map(|step| u32::from(step.estimated_complexity.get()))
            .sum(),
        risk_assessment: aggregate_risk(steps),
        critical_path: graph.critical_path(),
        parallelizable_groups: graph.parallel_groups(),
        rollback_points: rollback_points(steps, &graph),
    }
}
