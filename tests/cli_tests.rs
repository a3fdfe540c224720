//! CLI integration tests - exercise the binary with assert_cmd against
//! temp workbooks.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use chrono::NaiveDate;
use orderdesk::excel::date_to_serial;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_sample_workbook(path: &Path) {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Products").unwrap();
    sheet.write_string(0, 0, "Code").unwrap();
    sheet.write_string(1, 0, "P1").unwrap();
    sheet.write_string(1, 1, "Widget").unwrap();
    sheet.write_string(1, 2, "pcs").unwrap();
    sheet.write_number(1, 3, 10.0).unwrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Customers").unwrap();
    sheet.write_string(0, 0, "Code").unwrap();
    sheet.write_string(1, 0, "C1").unwrap();
    sheet.write_string(1, 1, "Acme").unwrap();
    sheet.write_string(1, 2, "X").unwrap();
    sheet.write_string(1, 3, "Alice").unwrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Orders").unwrap();
    sheet.write_string(0, 0, "Code").unwrap();
    sheet.write_string(1, 0, "O1").unwrap();
    sheet.write_string(1, 1, "P1").unwrap();
    sheet.write_string(1, 2, "C1").unwrap();
    sheet.write_string(1, 3, "A1").unwrap();
    sheet.write_number(1, 4, 3.0).unwrap();
    let serial = date_to_serial(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
    sheet.write_number(1, 5, serial).unwrap();

    workbook.save(path).unwrap();
}

fn sample_workbook(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("orders.xlsx");
    write_sample_workbook(&path);
    path
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("orderdesk"))
        .stdout(predicate::str::contains("golden-client"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("orderdesk"));
}

#[test]
fn test_product_query() {
    let dir = TempDir::new().unwrap();
    let path = sample_workbook(&dir);

    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.arg(&path)
        .args(["product", "Widget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme"))
        .stdout(predicate::str::contains("quantity: 3"))
        .stdout(predicate::str::contains("total: 30.00"))
        .stdout(predicate::str::contains("10.05.2024"));
}

#[test]
fn test_product_query_not_found() {
    let dir = TempDir::new().unwrap();
    let path = sample_workbook(&dir);

    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.arg(&path)
        .args(["product", "Gadget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product not found"));
}

#[test]
fn test_product_query_verbose_dumps_orders() {
    let dir = TempDir::new().unwrap();
    let path = sample_workbook(&dir);

    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.arg(&path)
        .arg("--verbose")
        .args(["product", "Widget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Order: P1 C1 O1 10.05.2024"));
}

#[test]
fn test_golden_client() {
    let dir = TempDir::new().unwrap();
    let path = sample_workbook(&dir);

    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.arg(&path)
        .args(["golden-client", "--year", "2024", "--month", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme"))
        .stdout(predicate::str::contains("1 orders"));
}

#[test]
fn test_golden_client_empty_period() {
    let dir = TempDir::new().unwrap();
    let path = sample_workbook(&dir);

    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.arg(&path)
        .args(["golden-client", "--year", "2023", "--month", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No orders in this period"));
}

#[test]
fn test_golden_client_rejects_month_out_of_range() {
    let dir = TempDir::new().unwrap();
    let path = sample_workbook(&dir);

    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.arg(&path)
        .args(["golden-client", "--year", "2024", "--month", "13"])
        .assert()
        .failure();
}

#[test]
fn test_set_contact_persists() {
    let dir = TempDir::new().unwrap();
    let path = sample_workbook(&dir);

    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.arg(&path)
        .args(["set-contact", "Acme", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated to \"Bob\""));

    // A fresh process sees the persisted change
    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.arg(&path)
        .args(["set-contact", "Acme", "Carol"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated to \"Carol\""));
}

#[test]
fn test_set_contact_unknown_org() {
    let dir = TempDir::new().unwrap();
    let path = sample_workbook(&dir);

    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.arg(&path)
        .args(["set-contact", "Globex", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer not found"));
}

#[test]
fn test_shell_menu_exit() {
    let dir = TempDir::new().unwrap();
    let path = sample_workbook(&dir);

    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.arg(&path)
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Choose a command"));
}

#[test]
fn test_shell_product_query_then_exit() {
    let dir = TempDir::new().unwrap();
    let path = sample_workbook(&dir);

    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.arg(&path)
        .write_stdin("1\nWidget\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme"));
}

#[test]
fn test_shell_invalid_choice_reprompts() {
    let dir = TempDir::new().unwrap();
    let path = sample_workbook(&dir);

    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.arg(&path)
        .write_stdin("9\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input"));
}

#[test]
fn test_shell_golden_client_month_reprompt() {
    let dir = TempDir::new().unwrap();
    let path = sample_workbook(&dir);

    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.arg(&path)
        .write_stdin("3\n2024\n13\n5\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid month"))
        .stdout(predicate::str::contains("Acme"));
}

#[test]
fn test_missing_workbook_still_opens_shell() {
    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.arg("/no/such/workbook.xlsx")
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 products"));
}
