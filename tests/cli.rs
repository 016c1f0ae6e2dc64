//! End-to-end tests for the `pnl` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pnl(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pnl").unwrap();
    cmd.env("PNL_TRACKER_DIR", dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn range_last_month_in_leap_year() {
    let dir = TempDir::new().unwrap();
    pnl(&dir)
        .args(["range", "lastMonth", "--today", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-02-01 to 2024-02-29"));
}

#[test]
fn range_rejects_unknown_filter() {
    let dir = TempDir::new().unwrap();
    pnl(&dir)
        .args(["range", "fortnight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fortnight"));
}

#[test]
fn range_rejects_bad_today() {
    let dir = TempDir::new().unwrap();
    pnl(&dir)
        .args(["range", "mtd", "--today", "15/03/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn categories_lists_seed_budgets() {
    let dir = TempDir::new().unwrap();
    pnl(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food (Dabao / Home Delivery)"))
        .stdout(predicate::str::contains("240.00 SGD"));
}

#[test]
fn overview_reports_percentage_and_payers() {
    let dir = TempDir::new().unwrap();
    pnl(&dir)
        .args([
            "overview",
            "--filter",
            "mtd",
            "--today",
            "2024-03-15",
            "--expense",
            "Groceries,12.50,2024-03-01,Eamon",
            "--expense",
            "Transport,20,2024-02-20,Siang Nee",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Month to Date: 2024-03-01 to 2024-03-15"))
        .stdout(predicate::str::contains("25.00%"))
        .stdout(predicate::str::contains("Expenses (1 of 2)"))
        .stdout(predicate::str::contains("Siang Nee").not());
}

#[test]
fn overview_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();
    pnl(&dir)
        .args(["overview", "--expense", "Holidays,10,2024-03-01,Eamon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Holidays"));
}

#[test]
fn init_then_config_uses_custom_dir() {
    let dir = TempDir::new().unwrap();
    pnl(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings"));

    assert!(dir.path().join("config.json").exists());

    pnl(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exist"));

    pnl(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Payers:         Eamon, Siang Nee"));
}

#[test]
fn invalid_settings_file_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();
    pnl(&dir)
        .arg("categories")
        .assert()
        .failure()
        .stderr(predicate::str::contains("settings"));
}
