use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and the test database
fn timetutor_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("timetutor").expect("Failed to find timetutor binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Pull the first "- ID: <id>" value out of command output
fn extract_id_from_output(output: &str) -> String {
    output
        .lines()
        .find_map(|line| line.strip_prefix("- ID: "))
        .map(|id| id.trim().to_string())
        .expect("Output should contain a plan ID")
}

fn add_plan(temp_dir: &TempDir, subject: &str, time: &str) -> String {
    let output = timetutor_cmd(temp_dir)
        .args(["add", subject, time, "--importance", "high"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    extract_id_from_output(&String::from_utf8(output).expect("Invalid UTF-8"))
}

#[test]
fn test_cli_add_plan() {
    let temp_dir = create_cli_test_environment();

    timetutor_cmd(&temp_dir)
        .args(["add", "Maths", "7-8PM", "--importance", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added plan with ID:"))
        .stdout(predicate::str::contains("### Maths (○ Incomplete)"))
        .stdout(predicate::str::contains("- Importance: 🔴 High"));
}

#[test]
fn test_cli_add_trims_input() {
    let temp_dir = create_cli_test_environment();

    timetutor_cmd(&temp_dir)
        .args(["add", "  Physics  ", " 6-7PM "])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Physics ("))
        .stdout(predicate::str::contains("- Time: 6-7PM\n"))
        .stdout(predicate::str::contains("🟡 Medium"));
}

#[test]
fn test_cli_add_rejects_blank_subject() {
    let temp_dir = create_cli_test_environment();

    timetutor_cmd(&temp_dir)
        .args(["add", "   ", "7-8PM"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Subject and time both need to be filled in"));

    timetutor_cmd(&temp_dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_view_empty_day() {
    let temp_dir = create_cli_test_environment();

    timetutor_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing planned for this day yet."));
}

#[test]
fn test_cli_view_shows_todays_plans() {
    let temp_dir = create_cli_test_environment();
    add_plan(&temp_dir, "Maths", "7-8PM");
    add_plan(&temp_dir, "English", "8-9PM");

    timetutor_cmd(&temp_dir)
        .arg("view")
        .assert()
        .success()
        .stdout(predicate::str::contains("### #1 Maths"))
        .stdout(predicate::str::contains("### #2 English"))
        .stdout(predicate::str::contains("**0 of 2 completed**"))
        .stdout(predicate::str::contains("## Daily Motivation"));
}

#[test]
fn test_cli_view_other_date_is_empty() {
    let temp_dir = create_cli_test_environment();
    add_plan(&temp_dir, "Maths", "7-8PM");

    timetutor_cmd(&temp_dir)
        .args(["view", "--date", "2001-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Monday, 1 January 2001"))
        .stdout(predicate::str::contains("Nothing planned for this day yet."));
}

#[test]
fn test_cli_done_and_track() {
    let temp_dir = create_cli_test_environment();
    let maths = add_plan(&temp_dir, "Maths", "7-8PM");
    add_plan(&temp_dir, "Physics", "8-9PM");

    timetutor_cmd(&temp_dir)
        .args(["done", &maths])
        .assert()
        .success()
        .stdout(predicate::str::contains("One step closer to victory"))
        .stdout(predicate::str::contains("### Maths (✅ Completed)"));

    timetutor_cmd(&temp_dir)
        .arg("track")
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Completed**: 1"))
        .stdout(predicate::str::contains("- **Total**: 2"))
        .stdout(predicate::str::contains("1 tasks done, 1 to go!"));
}

#[test]
fn test_cli_skip_then_reset() {
    let temp_dir = create_cli_test_environment();
    let id = add_plan(&temp_dir, "Chemistry", "5-6PM");

    timetutor_cmd(&temp_dir)
        .args(["skip", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("No problem da!"))
        .stdout(predicate::str::contains("❌ Skipped"));

    timetutor_cmd(&temp_dir)
        .args(["reset", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("○ Incomplete"));
}

#[test]
fn test_cli_perfect_score() {
    let temp_dir = create_cli_test_environment();
    let id = add_plan(&temp_dir, "Maths", "7-8PM");

    timetutor_cmd(&temp_dir).args(["done", &id]).assert().success();

    timetutor_cmd(&temp_dir)
        .arg("track")
        .assert()
        .success()
        .stdout(predicate::str::contains("Perfect score! All tasks completed!"));
}

#[test]
fn test_cli_unknown_id_is_not_an_error() {
    let temp_dir = create_cli_test_environment();

    timetutor_cmd(&temp_dir)
        .args(["done", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plan with ID 12345"));
}

#[test]
fn test_cli_list_all_and_by_date() {
    let temp_dir = create_cli_test_environment();
    add_plan(&temp_dir, "Maths", "7-8PM");

    timetutor_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("# All Plans"))
        .stdout(predicate::str::contains("### Maths"));

    timetutor_cmd(&temp_dir)
        .args(["list", "--date", "2001-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Plans for 2001-01-01"))
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_quote() {
    let temp_dir = create_cli_test_environment();

    let output = timetutor_cmd(&temp_dir)
        .arg("quote")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let quote = String::from_utf8(output).expect("Invalid UTF-8");
    assert!(timetutor_core::quotes::QUOTES.contains(&quote.trim_end()));
}

#[test]
fn test_cli_invalid_date_is_rejected() {
    let temp_dir = create_cli_test_environment();

    timetutor_cmd(&temp_dir)
        .args(["view", "--date", "yesterday"])
        .assert()
        .failure();
}

#[test]
fn test_cli_local_dates_use_system_zone() {
    let temp_dir = create_cli_test_environment();
    // UTC+14, so the local day runs ahead of the UTC day for most of it.
    let zone = "<+14>-14";

    timetutor_cmd(&temp_dir)
        .env("TZ", zone)
        .args(["--local-dates", "add", "Maths", "7-8PM"])
        .assert()
        .success();

    let local_day = jiff::Timestamp::now()
        .to_zoned(jiff::tz::TimeZone::fixed(jiff::tz::offset(14)))
        .date();

    timetutor_cmd(&temp_dir)
        .env("TZ", zone)
        .args(["--local-dates", "list", "--date", &local_day.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Maths"));
}
