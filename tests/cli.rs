use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "gagyebu";

fn gagyebu(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("GAGYEBU_DATA_DIR", data_dir.path());
    cmd.env_remove("GAGYEBU_LOG");
    cmd
}

fn add(data_dir: &TempDir, args: &[&str]) {
    gagyebu(data_dir).arg("add").args(args).assert().success();
}

#[test]
fn add_then_list_shows_signed_amount() {
    let dir = TempDir::new().unwrap();

    gagyebu(&dir)
        .args(["add", "expense", "12,000", "--category", "식비"])
        .args(["--date", "2024-03-05", "--description", "점심"])
        .assert()
        .success()
        .stdout(contains("Recorded expense").and(contains("-12,000원")));

    gagyebu(&dir)
        .args(["list", "--date", "2024-03-05"])
        .assert()
        .success()
        .stdout(contains("점심").and(contains("-12,000원")));

    assert!(dir.path().join("data").join("transactions.json").exists());
}

#[test]
fn add_rejects_unregistered_category() {
    let dir = TempDir::new().unwrap();

    gagyebu(&dir)
        .args(["add", "income", "5000", "--category", "식비"])
        .args(["--date", "2024-03-05"])
        .assert()
        .failure()
        .stderr(contains("Income category not found"));
}

#[test]
fn add_rejects_negative_amount() {
    let dir = TempDir::new().unwrap();

    gagyebu(&dir)
        .args(["add", "expense", "-5000", "--category", "식비"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));
}

#[test]
fn empty_ledger_lists_nothing() {
    let dir = TempDir::new().unwrap();

    gagyebu(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No transactions found."));
}

#[test]
fn summary_totals_every_transaction() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["income", "3000000", "-c", "월급", "-d", "2024-03-01"]);
    add(&dir, &["expense", "12000", "-c", "식비", "-d", "2024-03-05"]);
    add(&dir, &["expense", "8000", "-c", "교통/차량", "-d", "2024-04-02"]);

    gagyebu(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("3,000,000원").and(contains("20,000원")).and(contains("2,980,000원")));
}

#[test]
fn calendar_shows_compact_day_labels() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["expense", "23500", "-c", "식비", "-d", "2024-03-05"]);
    add(&dir, &["income", "5000", "-c", "용돈", "-d", "2024-03-05"]);

    gagyebu(&dir)
        .args(["calendar", "--month", "2024-03", "--select", "2024-03-05"])
        .assert()
        .success()
        .stdout(
            contains("[5]")
                .and(contains("-2만"))
                .and(contains("+5,000"))
                .and(contains("용돈")),
        );
}

#[test]
fn chart_orders_categories_by_amount() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["expense", "1000", "-c", "식비", "-d", "2024-03-05"]);
    add(&dir, &["expense", "3000", "-c", "쇼핑", "-d", "2024-03-06"]);

    gagyebu(&dir)
        .args(["chart", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)쇼핑.*75%.*식비.*25%").unwrap());
}

#[test]
fn chart_without_month_covers_every_month() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["expense", "1000", "-c", "식비", "-d", "2024-03-05"]);
    add(&dir, &["expense", "3000", "-c", "쇼핑", "-d", "2024-04-06"]);

    gagyebu(&dir)
        .arg("chart")
        .assert()
        .success()
        .stdout(
            contains("All expenses by category")
                .and(predicate::str::is_match("(?s)쇼핑.*75%.*식비.*25%").unwrap()),
        );

    gagyebu(&dir)
        .args(["chart", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(
            contains("2024-03 expenses by category")
                .and(contains("식비"))
                .and(contains("100%"))
                .and(contains("쇼핑").not()),
        );
}

#[test]
fn category_rename_is_persisted() {
    let dir = TempDir::new().unwrap();

    gagyebu(&dir)
        .args(["category", "rename", "expense", "0", "외식"])
        .assert()
        .success()
        .stdout(contains("식비 -> 외식"));

    gagyebu(&dir)
        .args(["category", "list", "expense"])
        .assert()
        .success()
        .stdout(contains("0. 외식"));
}

#[test]
fn category_rename_out_of_range_fails() {
    let dir = TempDir::new().unwrap();

    gagyebu(&dir)
        .args(["category", "rename", "income", "99", "보너스"])
        .assert()
        .failure()
        .stderr(contains("out of range"));
}

#[test]
fn delete_removes_transaction() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["expense", "12000", "-c", "식비", "-d", "2024-03-05"]);

    let raw = std::fs::read_to_string(dir.path().join("data").join("transactions.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let id = stored[0]["id"].as_str().unwrap().to_string();
    assert_eq!(stored[0]["type"], "expense");

    gagyebu(&dir)
        .args(["delete", id.as_str()])
        .assert()
        .success()
        .stdout(contains("Deleted transaction"));

    gagyebu(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No transactions found."));
}

#[test]
fn delete_unknown_id_leaves_ledger_alone() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["expense", "12000", "-c", "식비", "-d", "2024-03-05"]);

    gagyebu(&dir)
        .args(["delete", "txn-00000000"])
        .assert()
        .success()
        .stdout(contains("nothing deleted"));

    gagyebu(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("-12,000원"));
}

#[test]
fn config_prints_paths() {
    let dir = TempDir::new().unwrap();

    gagyebu(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Data directory").and(contains("원")));
}
