//! Integration tests for the `pocketbook` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command whose settings live in a throwaway directory
fn pocketbook(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocketbook").unwrap();
    cmd.env("POCKETBOOK_DATA_DIR", dir.path())
        .env_remove("POCKETBOOK_LOG");
    cmd
}

#[test]
fn test_analyze_within_budget() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .args(["analyze", "-i", "5000", "-e", "2000", "-s", "1000", "-n", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Balance: ₹1,500.00"))
        .stdout(predicate::str::contains("Income Distribution"))
        .stdout(predicate::str::contains("40.0% (₹2,000)"))
        .stdout(predicate::str::contains("Outflow Breakdown"));
}

#[test]
fn test_analyze_over_budget_still_succeeds() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .args(["analyze", "--income", "1000", "--expenses", "800", "--savings", "300"])
        .args(["--currency", "$"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Your total spending ($1,100.00) exceeds your income ($1,000.00)!",
        ))
        .stdout(predicate::str::contains("Income Distribution").not());
}

#[test]
fn test_analyze_all_zero_shows_hints() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Balance: ₹0.00"))
        .stdout(predicate::str::contains(
            "Please enter your income and at least one outflow to see the distribution.",
        ));
}

#[test]
fn test_analyze_rejects_negative_amount() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .args(["analyze", "--income", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn test_analyze_rejects_amount_above_maximum() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .args(["analyze", "-i", "1", "-e", "40000000000000000"])
        .args(["-s", "40000000000000000", "-n", "40000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_analyze_json_output() {
    let dir = TempDir::new().unwrap();
    let assert = pocketbook(&dir)
        .args(["analyze", "-i", "100", "-e", "25", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["result"]["remaining"], "75.00");
    assert_eq!(json["result"]["is_over_budget"], false);
    assert_eq!(json["distribution"].as_array().unwrap().len(), 2);
}

#[test]
fn test_analyze_csv_output() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .args(["analyze", "-i", "100", "-e", "25", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Chart,Category,Amount,Percentage"))
        .stdout(predicate::str::contains("outflows,Expenses,25.00,"));
}

#[test]
fn test_analyze_csv_without_charts() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .args(["analyze", "-i", "1000", "-e", "800", "-s", "300", "-f", "csv"])
        .assert()
        .success()
        .stdout("Chart,Category,Amount,Percentage\nstatus,Remaining,-100.00,\n")
        .stderr(predicate::str::contains("exceeds your income"))
        .stderr(predicate::str::contains(
            "Spending exceeds income. Reduce your outflows to generate the analysis.",
        ));

    pocketbook(&dir)
        .args(["analyze", "--format", "csv"])
        .assert()
        .success()
        .stdout("Chart,Category,Amount,Percentage\nstatus,Remaining,0.00,\n")
        .stderr(predicate::str::contains(
            "No outflows (expenses, savings, or investments) entered.",
        ));
}

#[test]
fn test_faq_ask_known_question() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .args(["faq", "ask", "What is the rule of 72?"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "72 ÷ Interest Rate = Years to double your money.",
        ));
}

#[test]
fn test_faq_ask_unknown_question_fails() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .args(["faq", "ask", "What is a stock?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FAQ question not found"));
}

#[test]
fn test_faq_list_and_search() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .args(["faq", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 1. What is savings?"))
        .stdout(predicate::str::contains("13. What is the rule of 72?"));

    pocketbook(&dir)
        .args(["faq", "search", "inflation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Q: What is inflation?"));
}

#[test]
fn test_config_set_currency_persists() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .args(["config", "set-currency", "€"])
        .assert()
        .success();

    assert!(dir.path().join("config.json").exists());

    pocketbook(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: €"));

    pocketbook(&dir)
        .args(["analyze", "-i", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Balance: €10.00"));
}

#[test]
fn test_config_rejects_long_symbol() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .args(["config", "set-currency", "DOUBLOONS"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("longer than 8 characters"));
}
