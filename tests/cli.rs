use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn report_prints_totals_and_remaining_budget() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args([
            "report",
            "--expense",
            "Food,12.5,2024-01-01",
            "--expense",
            "Utilities,17.5,2024-01-02",
            "--budget",
            "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("$12.5"))
        .stdout(predicate::str::contains("1/1/2024"))
        .stdout(predicate::str::contains("Total: $30.00"))
        .stdout(predicate::str::contains("Remaining Budget: $70.00"));
}

#[test]
fn report_without_budget_hides_remaining() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["report", "-e", "Other,5,2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $5.00"))
        .stdout(predicate::str::contains("Remaining Budget").not());
}

#[test]
fn report_filter_keeps_totals() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args([
            "report",
            "-e",
            "Food,10,2024-01-01",
            "-e",
            "Entertainment,20,2024-01-01",
            "--filter",
            "Food",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter: Food"))
        .stdout(predicate::str::contains("Entertainment").not())
        .stdout(predicate::str::contains("Total: $30.00"));
}

#[test]
fn report_skips_incomplete_expenses() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["report", "-e", "Food,,2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."))
        .stdout(predicate::str::contains("Total: $0.00"));
}

#[test]
fn report_non_numeric_amount_is_nan() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["report", "-e", "Food,abc,2024-01-01", "-b", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $NaN"))
        .stdout(predicate::str::contains("Remaining Budget: $NaN"));
}

#[test]
fn report_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["report", "-e", "Rent,900,2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'Rent'"));
}

#[test]
fn report_rejects_malformed_expense() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["report", "-e", "Food;12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CATEGORY,AMOUNT,DATE"));
}

#[test]
fn free_text_mode_accepts_any_category() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "category_mode": "free_text" }"#,
    )
    .unwrap();

    expenses(&dir)
        .args(["report", "-e", "Rent,900,2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Total: $900.00"));
}

#[test]
fn categories_lists_defaults() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Category mode: enumerated"))
        .stdout(predicate::str::contains("Transportation"))
        .stdout(predicate::str::contains("Utilities"));
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized settings"));

    assert!(dir.path().join("config.json").exists());

    expenses(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exist"));
}

#[test]
fn config_prints_paths() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("expenses.log"))
        .stdout(predicate::str::contains("Currency symbol: $"));
}

#[test]
fn invalid_settings_are_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{ "categories": [] }"#).unwrap();

    expenses(&dir)
        .arg("categories")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one category"));
}
