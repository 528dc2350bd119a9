//! Integration tests for the upkeep CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get an upkeep command isolated from the user's configuration
fn upkeep() -> Command {
    let mut cmd = Command::cargo_bin("upkeep").unwrap();
    cmd.env(
        "XDG_CONFIG_HOME",
        std::env::temp_dir().join("upkeep-tests-no-config"),
    )
    .env_remove("UPKEEP_FORMAT")
    .env_remove("UPKEEP_SEED")
    .env_remove("UPKEEP_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Helper to write a file into a temp directory
fn write_file(tmp: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = tmp.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// Basic commands
// ============================================================================

#[test]
fn test_help_displays() {
    upkeep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("maintenance"));
}

#[test]
fn test_version_displays() {
    upkeep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("upkeep"));
}

#[test]
fn test_unknown_command_fails() {
    upkeep()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_pages_lists_every_collection() {
    upkeep()
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::contains("Assets"))
        .stdout(predicate::str::contains("Inventory"))
        .stdout(predicate::str::contains("Preventive Maintenance"))
        .stdout(predicate::str::contains("Work Orders"));

    let ids = stdout_of(upkeep().args(["pages", "-f", "id"]));
    assert_eq!(
        ids.lines().collect::<Vec<_>>(),
        ["asset", "part", "supplier", "user", "task", "work-order"]
    );
}

#[test]
fn test_unknown_collection_fails() {
    upkeep()
        .args(["list", "widgets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown collection"));
}

// ============================================================================
// Listing
// ============================================================================

#[test]
fn test_list_shows_seed_records() {
    upkeep()
        .args(["list", "asset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conveyor Belt A"))
        .stdout(predicate::str::contains("Packaging Machine"))
        .stdout(predicate::str::contains("5 asset(s) found"));
}

#[test]
fn test_list_collection_aliases() {
    upkeep()
        .args(["list", "wo", "-f", "id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WO-001"));
    upkeep()
        .args(["list", "inventory", "-f", "id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PRT-001"));
}

#[test]
fn test_list_search_filter_sort() {
    let out = stdout_of(upkeep().args([
        "list",
        "asset",
        "--search",
        "AST-00",
        "--filter",
        "status=Operational",
        "--sort",
        "lastMaintenance",
        "-f",
        "id",
    ]));
    insta::assert_snapshot!(out, @r"
    AST-004
    AST-003
    AST-001
    ");
}

#[test]
fn test_list_sort_toggles() {
    let base = ["list", "asset", "-F", "status=Operational", "-f", "id"];

    let once = stdout_of(upkeep().args(base).args(["-S", "lastMaintenance"]));
    assert_eq!(once, "AST-004\nAST-003\nAST-001\n");

    let twice = stdout_of(
        upkeep()
            .args(base)
            .args(["-S", "lastMaintenance", "-S", "lastMaintenance"]),
    );
    assert_eq!(twice, "AST-001\nAST-003\nAST-004\n");

    let thrice = stdout_of(upkeep().args(base).args([
        "-S",
        "lastMaintenance",
        "-S",
        "lastMaintenance",
        "-S",
        "lastMaintenance",
    ]));
    assert_eq!(thrice, "AST-001\nAST-003\nAST-004\n");
}

#[test]
fn test_list_search_is_case_insensitive() {
    let out = stdout_of(upkeep().args(["list", "asset", "-s", "CONVEYOR", "-f", "id"]));
    assert_eq!(out, "AST-001\n");
}

#[test]
fn test_list_no_matches() {
    upkeep()
        .args(["list", "asset", "-s", "zzz-nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No assets found."));
}

#[test]
fn test_list_count_and_limit() {
    upkeep()
        .args(["list", "asset", "--count"])
        .assert()
        .success()
        .stdout("5\n");
    upkeep()
        .args(["list", "asset", "-F", "status=operational", "--count"])
        .assert()
        .success()
        .stdout("3\n");

    let out = stdout_of(upkeep().args(["list", "asset", "-n", "2", "-f", "id"]));
    assert_eq!(out, "AST-001\nAST-002\n");
}

#[test]
fn test_list_rejects_bad_filters() {
    upkeep()
        .args(["list", "asset", "-F", "name=Forklift"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be filtered"));
    upkeep()
        .args(["list", "asset", "-F", "status=Broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Broken"));
    upkeep()
        .args(["list", "asset", "-S", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("colour"));
}

#[test]
fn test_list_formats() {
    upkeep()
        .args(["list", "part", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"PRT-001\""));
    upkeep()
        .args(["list", "asset", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AST-001,Conveyor Belt A"));
    upkeep()
        .args(["list", "asset", "-f", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| AST-001"));
}

// ============================================================================
// Show / New / Edit / Delete
// ============================================================================

#[test]
fn test_show_record() {
    upkeep()
        .args(["show", "asset", "AST-002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Forklift 1"))
        .stdout(predicate::str::contains("Under Maintenance"));
    upkeep()
        .args(["show", "asset", "3", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"CNC Machine\""));
}

#[test]
fn test_show_not_found() {
    upkeep()
        .args(["show", "asset", "AST-099"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No asset found"));
    upkeep()
        .args(["show", "asset", "WO-001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("WO-001"));
}

#[test]
fn test_new_creates_record() {
    upkeep()
        .args([
            "new",
            "asset",
            "name=Lathe 2",
            "type=Manufacturing",
            "location=Bay 4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created asset AST-006"))
        .stdout(predicate::str::contains("Lathe 2"))
        .stdout(predicate::str::contains("Operational"));
}

#[test]
fn test_new_rejects_invalid_input() {
    upkeep()
        .args(["new", "asset", "name=Lathe", "type=Spaceship", "location=Bay"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Spaceship"));
    upkeep()
        .args(["new", "asset", "type=Vehicle", "location=Bay"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name"));
    upkeep()
        .args(["new", "asset", "name=Lathe", "type=Vehicle", "location=Bay", "id=AST-100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be set"));
}

#[test]
fn test_edit_updates_fields() {
    upkeep()
        .args(["edit", "asset", "AST-002", "status=Operational", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"Operational\""))
        .stdout(predicate::str::contains("\"name\": \"Forklift 1\""));
}

#[test]
fn test_edit_requires_changes() {
    upkeep()
        .args(["edit", "asset", "AST-002"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
    upkeep()
        .args(["edit", "asset", "AST-042", "name=Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No asset found"));
}

#[test]
fn test_delete_removes_record() {
    let out = stdout_of(upkeep().args(["delete", "asset", "AST-002", "-f", "id"]));
    assert_eq!(out, "AST-001\nAST-003\nAST-004\nAST-005\n");

    upkeep()
        .args(["delete", "asset", "AST-042"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No asset found"));
}

// ============================================================================
// Workspace options and configuration
// ============================================================================

#[test]
fn test_empty_workspace() {
    upkeep()
        .args(["list", "asset", "--empty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No assets found."));
    upkeep()
        .args([
            "--empty",
            "new",
            "part",
            "name=Oil Filter",
            "category=Fluids",
            "quantity=3",
            "unit=pcs",
            "location=Shelf 1",
            "minimumStock=1",
            "price=4.50",
            "-f",
            "id",
        ])
        .assert()
        .success()
        .stdout("PRT-001\n");
}

#[test]
fn test_config_file_sets_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = write_file(&tmp, "upkeep.yaml", "default_format: id\npage_size: 2\n");

    let out = stdout_of(upkeep().args(["list", "asset", "--config"]).arg(&path));
    assert_eq!(out, "AST-001\nAST-002\n");

    // An explicit format still wins over the file
    upkeep()
        .args(["list", "asset", "-f", "csv", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("AST-001,"));
}

#[test]
fn test_config_file_can_disable_seed() {
    let tmp = TempDir::new().unwrap();
    let path = write_file(&tmp, "upkeep.yaml", "seed: false\n");
    upkeep()
        .args(["list", "asset", "--count", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_broken_config_file_fails() {
    let tmp = TempDir::new().unwrap();
    let path = write_file(&tmp, "upkeep.yaml", "page_size: [not, a, number]\n");
    upkeep()
        .args(["list", "asset", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn test_env_overrides_config() {
    upkeep()
        .env("UPKEEP_SEED", "false")
        .args(["list", "asset", "--count"])
        .assert()
        .success()
        .stdout("0\n");
    upkeep()
        .env("UPKEEP_FORMAT", "id")
        .args(["list", "user"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("USR-001\n"));
    upkeep()
        .env("UPKEEP_SEED", "maybe")
        .args(["list", "asset"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("UPKEEP_SEED"));
}

#[test]
fn test_config_show_and_keys() {
    let tmp = TempDir::new().unwrap();
    let path = write_file(&tmp, "upkeep.yaml", "default_format: json\n");
    upkeep()
        .args(["config", "show", "default_format", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("json\n");
    upkeep()
        .args(["config", "show", "seed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not set"));
    upkeep()
        .args(["config", "keys"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size"));
}

// ============================================================================
// Shell
// ============================================================================

#[test]
fn test_shell_script_accumulates_state() {
    let tmp = TempDir::new().unwrap();
    let script = write_file(
        &tmp,
        "session.upkeep",
        "# narrow the asset view step by step\n\
         use asset\n\
         search AST-00\n\
         filter status Operational\n\
         sort lastMaintenance\n",
    );

    upkeep()
        .args(["-q", "-f", "id", "shell", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("AST-004\nAST-003\nAST-001\n"));
}

#[test]
fn test_shell_mutations_persist_within_session() {
    let tmp = TempDir::new().unwrap();
    let script = write_file(
        &tmp,
        "session.upkeep",
        "use wo\n\
         delete WO-002\n\
         new title=\"Replace belt\" assignedTo=\"John Smith\"\n\
         list\n",
    );

    let out = stdout_of(
        upkeep()
            .args(["-q", "-f", "id", "shell", "--script"])
            .arg(&script),
    );
    // The new order reuses the length-derived id WO-005
    assert!(out.ends_with("WO-001\nWO-003\nWO-004\nWO-005\nWO-005\n"), "{}", out);
}

#[test]
fn test_shell_reports_failed_lines() {
    upkeep()
        .args(["-q", "shell"])
        .write_stdin("list\nfrobnicate\nfilter status Operational\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command 'frobnicate'"))
        .stderr(predicate::str::contains("1 command failed"));
}

#[test]
fn test_shell_quit_stops_reading() {
    upkeep()
        .args(["-q", "-f", "id", "shell"])
        .write_stdin("use user\nquit\nfrobnicate\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("USR-001"));
}

// ============================================================================
// Schema and completions
// ============================================================================

#[test]
fn test_schema_lists_fields() {
    let out = stdout_of(upkeep().args(["schema", "asset", "-f", "id"]));
    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        ["id", "name", "type", "status", "location", "lastMaintenance", "nextMaintenance"]
    );
    upkeep()
        .args(["schema", "work-order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("On Hold"));
}

#[test]
fn test_completions_generate() {
    upkeep()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("upkeep"));
}
