use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command bound to a plan file, with --no-color
fn sw_cmd(plan_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sw").expect("Failed to find sw binary");
    cmd.arg("--no-color")
        .arg("--plan-file")
        .arg(plan_file.to_str().expect("Non UTF-8 temp path"));
    cmd
}

fn create_plan(plan_file: &Path) {
    sw_cmd(plan_file)
        .args(["plan", "create", "Refactor auth", "--goal", "Isolate sessions"])
        .assert()
        .success();
}

/// Add a step and return the id the CLI reports for it
fn add_step(plan_file: &Path, extra: &[&str]) -> String {
    let output = sw_cmd(plan_file)
        .args(["step", "add"])
        .args(extra)
        .output()
        .expect("Failed to run sw");
    assert!(output.status.success(), "step add failed: {output:?}");

    let stdout = String::from_utf8(output.stdout).expect("Non UTF-8 output");
    let rest = stdout
        .split("Added step ")
        .nth(1)
        .expect("No step id in output");
    rest.split(':').next().expect("Malformed output").to_string()
}

#[test]
fn test_cli_without_plan() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");

    sw_cmd(&plan_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("No active plan"));

    sw_cmd(&plan_file)
        .args(["step", "next"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No active plan"));
}

#[test]
fn test_cli_create_plan_persists() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");

    sw_cmd(&plan_file)
        .args([
            "plan",
            "create",
            "Refactor auth",
            "--goal",
            "Isolate sessions",
            "--author",
            "alex",
            "--tags",
            "auth,cleanup",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan plan-"))
        .stdout(predicate::str::contains("Refactor auth"));

    assert!(plan_file.exists());

    sw_cmd(&plan_file)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Refactor auth"))
        .stdout(predicate::str::contains("- **Author**: alex"))
        .stdout(predicate::str::contains("- **Tags**: auth, cleanup"))
        .stdout(predicate::str::contains("No steps in this plan."));
}

#[test]
fn test_cli_next_step_flow() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    create_plan(&plan_file);

    let s1 = add_step(&plan_file, &["Extract session store", "--risk", "low"]);
    let s2 = add_step(&plan_file, &["Switch login flow", "--depends-on", &s1]);

    sw_cmd(&plan_file)
        .args(["step", "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extract session store"));

    sw_cmd(&plan_file)
        .args(["step", "status", &s1, "completed", "--note", "moved to store.rs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is now completed"));

    sw_cmd(&plan_file)
        .args(["step", "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switch login flow"))
        .stdout(predicate::str::contains(s2.as_str()));

    sw_cmd(&plan_file)
        .args(["plan", "analyze"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- **Critical path**: Extract session store → Switch login flow",
        ));

    sw_cmd(&plan_file)
        .args(["plan", "progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1/2)"))
        .stdout(predicate::str::contains("- **Progress**: 50%"));
}

#[test]
fn test_cli_phase_transitions() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    create_plan(&plan_file);

    sw_cmd(&plan_file)
        .args(["plan", "phase", "execution"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cannot move plan from analysis to execution",
        ))
        .stderr(predicate::str::contains("Allowed: strategy, cancelled"));

    sw_cmd(&plan_file)
        .args(["plan", "phase", "strategy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan moved from analysis to strategy"));

    sw_cmd(&plan_file)
        .args(["plan", "phase", "cancelled"])
        .assert()
        .success();

    sw_cmd(&plan_file)
        .args(["plan", "phase", "analysis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("none, the plan is finished"));
}

#[test]
fn test_cli_validate_high_risk_plan() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    create_plan(&plan_file);
    add_step(&plan_file, &["Drop legacy table", "--risk", "high"]);

    sw_cmd(&plan_file)
        .args(["plan", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Plan contains high-risk steps but has no rollback points",
        ));

    sw_cmd(&plan_file)
        .args(["plan", "validate", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed validation"));
}

#[test]
fn test_cli_remove_step_strips_dependency() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    create_plan(&plan_file);

    let base = add_step(&plan_file, &["Base"]);
    let dependent = add_step(&plan_file, &["Dependent", "--depends-on", &base]);

    sw_cmd(&plan_file)
        .args(["step", "remove", &base])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Removed step {base}")));

    sw_cmd(&plan_file)
        .args(["step", "show", &dependent])
        .assert()
        .success()
        .stdout(predicate::str::contains("### [ ] 1. Dependent"))
        .stdout(predicate::str::contains("Depends on").not());

    sw_cmd(&plan_file)
        .args(["step", "remove", &base])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_update_and_ready() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    create_plan(&plan_file);

    let a = add_step(&plan_file, &["A"]);
    let b = add_step(&plan_file, &["B"]);

    sw_cmd(&plan_file)
        .args(["step", "ready"])
        .assert()
        .success()
        .stdout(predicate::str::contains(a.as_str()))
        .stdout(predicate::str::contains(b.as_str()));

    sw_cmd(&plan_file)
        .args(["step", "update", &b, "--title", "B after A", "--depends-on", &a])
        .assert()
        .success();

    sw_cmd(&plan_file)
        .args(["step", "ready"])
        .assert()
        .success()
        .stdout(predicate::str::contains(a.as_str()))
        .stdout(predicate::str::contains(b.as_str()).not());

    sw_cmd(&plan_file)
        .args(["step", "update", &b])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));
}

#[test]
fn test_cli_add_step_with_actions_and_files() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    create_plan(&plan_file);

    let id = add_step(
        &plan_file,
        &[
            "Extract session store",
            "--files",
            "src/session.rs,src/auth.rs",
            "--action",
            "create_file:src/session.rs:New module",
            "--complexity",
            "3",
        ],
    );

    sw_cmd(&plan_file)
        .args(["step", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("`src/auth.rs`, `src/session.rs`"))
        .stdout(predicate::str::contains(
            "1. `create_file` `src/session.rs`: New module",
        ))
        .stdout(predicate::str::contains("- **Complexity**: 3/5"));

    sw_cmd(&plan_file)
        .args(["step", "add", "Too hard", "--complexity", "9"])
        .assert()
        .failure();

    sw_cmd(&plan_file)
        .args(["step", "add", "Bad action", "--action", "teleport:src"])
        .assert()
        .failure();
}

#[test]
fn test_cli_add_batch() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    let drafts_file = temp_dir.path().join("drafts.json");
    create_plan(&plan_file);

    fs::write(
        &drafts_file,
        r#"[
            {"title": "Write tests", "risk": "low", "estimatedComplexity": 2},
            {"title": "Ship", "priority": "high", "affectedFiles": ["CHANGELOG.md"]}
        ]"#,
    )
    .unwrap();

    sw_cmd(&plan_file)
        .args(["step", "add-batch", drafts_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write tests"))
        .stdout(predicate::str::contains("Ship"));

    sw_cmd(&plan_file)
        .args(["plan", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total steps:           2"))
        .stdout(predicate::str::contains("EXECUTION PLAN: Refactor auth"));
}

#[test]
fn test_cli_export_import_round_trip() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    let other_file = temp_dir.path().join("other.json");
    let export_file = temp_dir.path().join("export.json");
    create_plan(&plan_file);
    add_step(&plan_file, &["Only step"]);

    sw_cmd(&plan_file)
        .args(["plan", "export", "--output", export_file.to_str().unwrap()])
        .assert()
        .success();

    sw_cmd(&other_file)
        .args(["plan", "import", export_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Refactor auth (1 steps)"));

    let original = fs::read_to_string(&plan_file).unwrap();
    let imported = fs::read_to_string(&other_file).unwrap();
    assert_eq!(original, imported);

    fs::write(&export_file, "{ not a plan").unwrap();
    sw_cmd(&other_file)
        .args(["plan", "import", export_file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to import plan"));
}

#[test]
fn test_cli_schema_and_clear() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");

    sw_cmd(&plan_file)
        .args(["plan", "schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ExecutionPlan\""))
        .stdout(predicate::str::contains("\"createdAt\""));

    create_plan(&plan_file);
    sw_cmd(&plan_file)
        .args(["plan", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared plan"));
    assert!(!plan_file.exists());
}
