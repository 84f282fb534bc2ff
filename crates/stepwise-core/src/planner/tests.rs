use super::*;
use crate::{
    models::{PlanPhase, RiskLevel, StepId, StepStatus, ValidationIssue},
    params::{CreatePlan, StepDraft, StepUpdate},
};

fn planner_with_plan() -> Planner {
    let mut planner = PlannerBuilder::new()
        .with_author("tester")
        .with_default_tags(["refactor"])
        .build();
    planner
        .create_plan(&CreatePlan::new("Refactor auth", "Isolate sessions"))
        .unwrap();
    planner
}

fn add(planner: &mut Planner, title: &str, deps: &[&StepId]) -> StepId {
    let draft = deps
        .iter()
        .fold(StepDraft::new(title), |draft, dep| draft.depends_on(dep));
    planner.add_step(draft).unwrap().id
}

#[test]
fn test_operations_without_plan_fail() {
    let mut planner = Planner::default();
    let id = StepId::from("step-1");

    assert!(matches!(
        planner.add_step(StepDraft::new("x")),
        Err(PlannerError::NoActivePlan)
    ));
    assert!(matches!(planner.remove_step(&id), Err(PlannerError::NoActivePlan)));
    assert!(matches!(
        planner.update_step_status(&id, StepStatus::Completed, None),
        Err(PlannerError::NoActivePlan)
    ));
    assert!(matches!(
        planner.transition_phase(PlanPhase::Strategy),
        Err(PlannerError::NoActivePlan)
    ));
    assert!(matches!(planner.validate(), Err(PlannerError::NoActivePlan)));
    assert!(matches!(planner.next_step(), Err(PlannerError::NoActivePlan)));
    assert!(matches!(planner.export_json(), Err(PlannerError::NoActivePlan)));
    assert!(planner.current_plan().is_none());
}

#[test]
fn test_create_plan_stamps_metadata() {
    let planner = planner_with_plan();
    let plan = planner.require_plan().unwrap();

    assert_eq!(plan.phase, PlanPhase::Analysis);
    assert!(plan.steps.is_empty());
    assert_eq!(plan.metadata.version, 1);
    assert_eq!(plan.metadata.author.as_deref(), Some("tester"));
    assert_eq!(plan.metadata.tags, vec!["refactor".to_string()]);
    assert!(plan.approved_at.is_none());
}

#[test]
fn test_create_plan_replaces_previous() {
    let mut planner = planner_with_plan();
    add(&mut planner, "Old step", &[]);
    let old_id = planner.require_plan().unwrap().id.clone();

    planner
        .create_plan(&CreatePlan::new("Second", "Another goal"))
        .unwrap();
    let plan = planner.require_plan().unwrap();
    assert_ne!(plan.id, old_id);
    assert!(plan.steps.is_empty());
}

#[test]
fn test_create_plan_rejects_blank_title() {
    let mut planner = Planner::default();
    let result = planner.create_plan(&CreatePlan::new("   ", "goal"));
    assert!(matches!(result, Err(PlannerError::InvalidInput { .. })));
    assert!(planner.current_plan().is_none());
}

#[test]
fn test_add_step_assigns_id_and_pending_status() {
    let mut planner = planner_with_plan();
    let first = planner.add_step(StepDraft::new("First")).unwrap();
    let second = planner.add_step(StepDraft::new("Second")).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.status, StepStatus::Pending);

    let plan = planner.require_plan().unwrap();
    assert_eq!(plan.steps.len(), 2);
    assert_eq!(plan.analysis.total_steps, 2);
    assert_eq!(plan.metadata.version, 3);
}

#[test]
fn test_add_step_allows_forward_reference() {
    let mut planner = planner_with_plan();
    let future = StepId::from("step-later");
    add(&mut planner, "Early", &[&future]);

    let report = planner.validate().unwrap();
    assert!(matches!(
        report.issues.as_slice(),
        [ValidationIssue::MissingDependency { dependency, .. }] if dependency == &future
    ));
}

#[test]
fn test_add_step_dedups_dependencies() {
    let mut planner = planner_with_plan();
    let a = add(&mut planner, "A", &[]);
    let b = add(&mut planner, "B", &[&a, &a]);
    assert_eq!(planner.step(&b).unwrap().unwrap().dependencies, vec![a]);
}

#[test]
fn test_remove_step_strips_references() {
    let mut planner = planner_with_plan();
    let a = add(&mut planner, "A", &[]);
    let b = add(&mut planner, "B", &[&a]);

    assert!(planner.remove_step(&a).unwrap());

    let plan = planner.require_plan().unwrap();
    assert_eq!(plan.steps.len(), 1);
    assert!(plan.step(&b).unwrap().dependencies.is_empty());
    assert_eq!(plan.analysis.total_steps, 1);
    assert!(planner.validate().unwrap().is_valid());
}

#[test]
fn test_remove_unknown_step_is_false() {
    let mut planner = planner_with_plan();
    add(&mut planner, "A", &[]);
    let version = planner.require_plan().unwrap().metadata.version;

    assert!(!planner.remove_step(&StepId::from("nope")).unwrap());
    assert_eq!(planner.require_plan().unwrap().metadata.version, version);
}

#[test]
fn test_reorder_steps() {
    let mut planner = planner_with_plan();
    let a = add(&mut planner, "A", &[]);
    let b = add(&mut planner, "B", &[]);
    let c = add(&mut planner, "C", &[]);

    planner
        .reorder_steps(&[c.clone(), StepId::from("unknown"), a.clone(), c.clone()])
        .unwrap();

    let order: Vec<&StepId> = planner
        .require_plan()
        .unwrap()
        .steps
        .iter()
        .map(|step| &step.id)
        .collect();
    assert_eq!(order, vec![&c, &a, &b]);
}

#[test]
fn test_update_step_fields() {
    let mut planner = planner_with_plan();
    let a = add(&mut planner, "A", &[]);
    let b = add(&mut planner, "B", &[]);

    let update = StepUpdate {
        title: Some("B renamed".to_string()),
        risk: Some(RiskLevel::High),
        dependencies: Some(vec![a.clone()]),
        ..StepUpdate::default()
    };
    assert!(planner.update_step(&b, update).unwrap());

    let plan = planner.require_plan().unwrap();
    let step = plan.step(&b).unwrap();
    assert_eq!(step.title, "B renamed");
    assert_eq!(step.risk, RiskLevel::High);
    assert_eq!(plan.analysis.critical_path, vec![a, b]);
    assert_eq!(plan.analysis.risk_assessment, RiskLevel::High);
}

#[test]
fn test_update_step_rejects_blank_title() {
    let mut planner = planner_with_plan();
    let a = add(&mut planner, "A", &[]);
    let update = StepUpdate {
        title: Some(String::new()),
        ..StepUpdate::default()
    };
    assert!(planner.update_step(&a, update).is_err());
    assert!(!planner
        .update_step(&StepId::from("missing"), StepUpdate::default())
        .unwrap());
}

#[test]
fn test_update_step_status_keeps_note() {
    let mut planner = planner_with_plan();
    let a = add(&mut planner, "A", &[]);
    let version = planner.require_plan().unwrap().metadata.version;

    assert!(planner
        .update_step_status(&a, StepStatus::InProgress, Some("started".to_string()))
        .unwrap());
    assert!(planner
        .update_step_status(&a, StepStatus::Completed, None)
        .unwrap());

    let plan = planner.require_plan().unwrap();
    let step = plan.step(&a).unwrap();
    assert_eq!(step.status, StepStatus::Completed);
    assert_eq!(step.notes.as_deref(), Some("started"));
    assert_eq!(plan.metadata.version, version);

    assert!(!planner
        .update_step_status(&StepId::from("missing"), StepStatus::Failed, None)
        .unwrap());
}

#[test]
fn test_phase_transitions_follow_table() {
    let mut planner = planner_with_plan();

    assert!(!planner.transition_phase(PlanPhase::Execution).unwrap());
    assert_eq!(planner.require_plan().unwrap().phase, PlanPhase::Analysis);

    assert!(planner.transition_phase(PlanPhase::Strategy).unwrap());
    assert!(planner.transition_phase(PlanPhase::Presentation).unwrap());
    assert!(planner.transition_phase(PlanPhase::Approval).unwrap());
    assert!(planner.require_plan().unwrap().approved_at.is_some());

    assert!(planner.transition_phase(PlanPhase::Execution).unwrap());
    assert!(planner.transition_phase(PlanPhase::Completed).unwrap());

    let plan = planner.require_plan().unwrap();
    assert!(plan.completed_at.is_some());
    assert!(plan.completed_at >= plan.approved_at);
}

#[test]
fn test_terminal_phases_reject_everything() {
    for terminal in [PlanPhase::Completed, PlanPhase::Cancelled] {
        let mut planner = planner_with_plan();
        planner.require_plan_mut().unwrap().phase = terminal;
        for target in PlanPhase::ALL {
            assert!(
                !planner.transition_phase(target).unwrap(),
                "{terminal:?} -> {target:?} should be rejected"
            );
        }
        assert_eq!(planner.require_plan().unwrap().phase, terminal);
    }
}

#[test]
fn test_cancel_from_every_active_phase() {
    for from in [
        PlanPhase::Analysis,
        PlanPhase::Strategy,
        PlanPhase::Presentation,
        PlanPhase::Approval,
        PlanPhase::Execution,
    ] {
        let mut planner = planner_with_plan();
        planner.require_plan_mut().unwrap().phase = from;
        assert!(planner.transition_phase(PlanPhase::Cancelled).unwrap());
    }
}

#[test]
fn test_readiness_follows_completion() {
    let mut planner = planner_with_plan();
    let a = add(&mut planner, "A", &[]);
    let b = add(&mut planner, "B", &[]);
    let c = add(&mut planner, "C", &[&a, &b]);

    let ready: Vec<StepId> = planner
        .parallel_steps()
        .unwrap()
        .into_iter()
        .map(|step| step.id.clone())
        .collect();
    assert_eq!(ready, vec![a.clone(), b.clone()]);

    planner
        .update_step_status(&a, StepStatus::Completed, None)
        .unwrap();
    assert_eq!(planner.next_step().unwrap().map(|s| &s.id), Some(&b));

    planner
        .update_step_status(&b, StepStatus::Skipped, None)
        .unwrap();
    // A skipped dependency does not unblock its dependents.
    assert!(planner.next_step().unwrap().is_none());

    planner
        .update_step_status(&b, StepStatus::Completed, None)
        .unwrap();
    assert_eq!(planner.next_step().unwrap().map(|s| &s.id), Some(&c));
}

#[test]
fn test_dangling_dependency_blocks_step() {
    let mut planner = planner_with_plan();
    add(&mut planner, "Orphan", &[&StepId::from("ghost")]);
    assert!(planner.next_step().unwrap().is_none());
    assert!(planner.parallel_steps().unwrap().is_empty());
}

#[test]
fn test_validate_is_idempotent() {
    let mut planner = planner_with_plan();
    let a = add(&mut planner, "A", &[]);
    planner
        .add_step(StepDraft::new("Risky").with_risk(RiskLevel::High).depends_on(&a))
        .unwrap();

    let first = planner.validate().unwrap();
    let second = planner.validate().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_validate_ignores_stale_rollback_points() {
    let mut planner = planner_with_plan();
    add(&mut planner, "Backup table", &[]);
    planner
        .add_step(StepDraft::new("Drop table").with_risk(RiskLevel::High))
        .unwrap();

    let mut plan = planner.current_plan().unwrap().clone();
    plan.analysis.rollback_points.clear();

    let report = plan.validate();
    assert!(report.is_valid(), "unexpected issues: {:?}", report.issues);
}

#[test]
fn test_empty_plan_is_invalid() {
    let planner = planner_with_plan();
    let report = planner.validate().unwrap();
    assert_eq!(report.issues, vec![ValidationIssue::EmptyPlan]);
}

#[test]
fn test_export_import_round_trip() {
    let mut planner = planner_with_plan();
    let a = add(&mut planner, "A", &[]);
    add(&mut planner, "B", &[&a]);
    planner.transition_phase(PlanPhase::Strategy).unwrap();

    let json = planner.export_json().unwrap();
    let original = planner.require_plan().unwrap().clone();

    let mut other = Planner::default();
    let imported = other.import_json(&json).unwrap();
    assert_eq!(imported, &original);
    assert_eq!(other.export_json().unwrap(), json);
}

#[test]
fn test_import_recomputes_analysis() {
    let mut planner = planner_with_plan();
    let a = add(&mut planner, "A", &[]);
    add(&mut planner, "B", &[&a]);

    let mut value: serde_json::Value =
        serde_json::from_str(&planner.export_json().unwrap()).unwrap();
    value.as_object_mut().unwrap().remove("analysis");

    let mut other = Planner::default();
    let plan = other.import_json(&value.to_string()).unwrap();
    assert_eq!(plan.analysis.total_steps, 2);
    assert_eq!(plan.analysis.critical_path.len(), 2);
}

#[test]
fn test_malformed_import_keeps_current_plan() {
    let mut planner = planner_with_plan();
    let before = planner.require_plan().unwrap().id.clone();

    assert!(matches!(
        planner.import_json("{ not json"),
        Err(PlannerError::Serialization { .. })
    ));
    assert!(matches!(
        planner.import_json(r#"{"title": "missing everything else"}"#),
        Err(PlannerError::Serialization { .. })
    ));
    assert_eq!(planner.require_plan().unwrap().id, before);
}

#[test]
fn test_progress_and_clear() {
    let mut planner = planner_with_plan();
    let a = add(&mut planner, "A", &[]);
    add(&mut planner, "B", &[]);
    planner
        .update_step_status(&a, StepStatus::Completed, None)
        .unwrap();

    let progress = planner.progress().unwrap();
    assert_eq!(progress.total_steps, 2);
    assert_eq!(progress.completed_steps, 1);
    assert_eq!(progress.pending_steps, 1);

    let cleared = planner.clear_plan();
    assert!(cleared.is_some());
    assert!(matches!(planner.progress(), Err(PlannerError::NoActivePlan)));
}

#[test]
fn test_builder_seeds_plan() {
    let mut source = planner_with_plan();
    add(&mut source, "A", &[]);
    let mut plan = source.clear_plan().unwrap();
    plan.analysis = Default::default();

    let planner = PlannerBuilder::new().with_plan(Some(plan)).build();
    assert_eq!(planner.require_plan().unwrap().analysis.total_steps, 1);
}
