use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const EXPENSES: &str = r#"[
  {"_id": "1", "amount": 45, "category": "food", "description": "Lunch", "date": "2024-01-20", "tags": ["work"]},
  {"_id": "2", "amount": 1500, "category": "rent", "date": "2024-01-05T18:30:00.000Z"},
  {"_id": "3", "amount": 20, "category": "transport", "description": "Metro", "date": "2023-12-28"}
]"#;

fn spendview(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("spendview").unwrap();
    cmd.env("SPENDVIEW_DATA_DIR", data_dir)
        .env_remove("SPENDVIEW_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn write_expenses(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn list_groups_by_month_newest_first() {
    let dir = TempDir::new().unwrap();
    let file = write_expenses(&dir, "expenses.json", EXPENSES);

    let output = spendview(dir.path())
        .args(["list", "--today", "2024-01-20", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Today"))
        .stdout(predicate::str::contains("#work"))
        .stdout(predicate::str::contains("3 shown, total ₹1,565.00"))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    assert!(text.find("January 2024").unwrap() < text.find("December 2023").unwrap());
}

#[test]
fn list_today_filter() {
    let dir = TempDir::new().unwrap();
    let file = write_expenses(&dir, "expenses.json", EXPENSES);

    spendview(dir.path())
        .args(["list", "--filter", "today", "--today", "2024-01-20", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Metro").not())
        .stdout(predicate::str::contains("December").not());
}

#[test]
fn list_search_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let file = write_expenses(&dir, "expenses.json", EXPENSES);

    spendview(dir.path())
        .args(["list", "--search", "METRO", "--today", "2024-01-20", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Metro"))
        .stdout(predicate::str::contains("Lunch").not());
}

#[test]
fn list_without_matches_shows_empty_state() {
    let dir = TempDir::new().unwrap();
    let file = write_expenses(&dir, "expenses.json", EXPENSES);

    spendview(dir.path())
        .args(["list", "-s", "zzz", "--today", "2024-01-20", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching expenses"));
}

#[test]
fn list_reads_api_response_and_csv() {
    let dir = TempDir::new().unwrap();
    let envelope = format!(r#"{{"success": true, "data": {}}}"#, EXPENSES);
    let json_file = write_expenses(&dir, "response.json", &envelope);
    let csv_file = write_expenses(
        &dir,
        "expenses.csv",
        "id,date,amount,category,description,tags\nc1,2024-01-19,99.50,shopping,Shoes,sale;gift\n",
    );

    spendview(dir.path())
        .args(["list", "--today", "2024-01-20", "--file"])
        .arg(&json_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Metro"));

    spendview(dir.path())
        .args(["list", "--today", "2024-01-20", "--file"])
        .arg(&csv_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Yesterday"))
        .stdout(predicate::str::contains("₹99.50"))
        .stdout(predicate::str::contains("#sale #gift"));
}

#[test]
fn stats_cover_the_current_month() {
    let dir = TempDir::new().unwrap();
    let file = write_expenses(&dir, "expenses.json", EXPENSES);

    spendview(dir.path())
        .args(["stats", "--today", "2024-01-20", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Today:       ₹45.00"))
        .stdout(predicate::str::contains("This month:  ₹1,545.00"))
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Transport").not());
}

#[test]
fn export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    let file = write_expenses(&dir, "expenses.json", EXPENSES);

    spendview(dir.path())
        .args(["export", "--format", "csv", "--today", "2024-01-20", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Month,Month Label,Week Start"))
        .stdout(predicate::str::contains(
            "2024-01,January 2024,2024-01-14,Week of Jan 14,1,2024-01-20,food,Lunch,45.00,,work",
        ));
}

#[test]
fn export_json_to_file() {
    let dir = TempDir::new().unwrap();
    let file = write_expenses(&dir, "expenses.json", EXPENSES);
    let output = dir.path().join("view.json");

    spendview(dir.path())
        .args(["export", "--filter", "month", "--pretty", "--today", "2024-01-20", "--file"])
        .arg(&file)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 expenses"));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["filter"]["mode"], "month");
    assert_eq!(value["metadata"]["expense_count"], 2);
    assert_eq!(value["groups"][0]["label"], "January 2024");
    assert_eq!(value["stats"]["categories"][0]["category"], "rent");
}

#[test]
fn missing_expense_file_fails() {
    let dir = TempDir::new().unwrap();

    spendview(dir.path())
        .args(["list", "--file"])
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn negative_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    let file = write_expenses(
        &dir,
        "expenses.json",
        r#"[{"_id": "bad", "amount": -3, "category": "food", "date": "2024-01-01"}]"#,
    );

    spendview(dir.path())
        .args(["list", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad"));
}

#[test]
fn invalid_today_is_a_usage_error() {
    let dir = TempDir::new().unwrap();

    spendview(dir.path())
        .args(["list", "--today", "20-01-2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

#[test]
fn init_creates_empty_list() {
    let dir = TempDir::new().unwrap();

    spendview(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created empty expense list"));

    assert!(dir.path().join("config.json").exists());

    spendview(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded"));

    spendview(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keeping existing expense list"));
}

#[test]
fn config_shows_settings() {
    let dir = TempDir::new().unwrap();

    spendview(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:   ₹"))
        .stdout(predicate::str::contains("First day of week: Sun"))
        .stdout(predicate::str::contains("Breakdown limit:   5"))
        .stdout(predicate::str::contains("run 'spendview init'"));

    spendview(dir.path()).arg("init").assert().success();

    spendview(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("run 'spendview init'").not());
}

#[test]
fn signed_amount_after_currency_symbol_is_rejected() {
    let dir = TempDir::new().unwrap();
    let file = write_expenses(
        &dir,
        "expenses.csv",
        "id,date,amount,category\nn1,2024-01-15,₹-5.00,food\n",
    );

    spendview(dir.path())
        .args(["list", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("n1"))
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn week_start_follows_settings() {
    let dir = TempDir::new().unwrap();
    let file = write_expenses(&dir, "expenses.json", EXPENSES);
    std::fs::write(dir.path().join("config.json"), r#"{"first_day_of_week": 1}"#).unwrap();

    spendview(dir.path())
        .args(["list", "--today", "2024-01-20", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Week of Jan 15"));
}
