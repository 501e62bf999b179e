//! Init command and global flag behavior.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_init_creates_data_directory() {
    let env = TestEnv::new();

    assert!(!env.data_dir.exists());

    env.command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized lodge in:"))
        .stdout(predicate::str::contains("Created data directory"));

    assert!(env.data_dir.join("lodge.db").exists());
}

#[test]
fn test_init_demo_seeds_inventory() {
    let env = TestEnv::new();

    env.command()
        .args(["init", "--demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded demo inventory"));

    // The demo data includes one confirmed reservation.
    let listing = env.run(&["list"]);
    assert!(listing.contains("confirmed"));
}

#[test]
fn test_init_demo_is_idempotent() {
    let env = TestEnv::new();

    env.command().args(["init", "--demo"]).assert().success();
    env.command().args(["init", "--demo"]).assert().success();

    let listing = env.run(&["list"]);
    assert_eq!(listing.lines().count(), 2, "header plus one reservation");
}

#[test]
fn test_disable_autoinit_without_store_fails() {
    let env = TestEnv::new();

    env.command()
        .args(["--disable-autoinit", "list"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Data directory not found"));
}

#[test]
fn test_data_dir_from_environment() {
    let env = TestEnv::new();

    env.command_bare()
        .env("LODGE_DATA_DIR", &env.data_dir)
        .arg("init")
        .assert()
        .success();

    assert!(env.data_dir.join("lodge.db").exists());
}

#[test]
fn test_config_file_sets_currency() {
    let env = TestEnv::new();
    let property = env.add_property("Hotel Central", "123 Main Street, Prague");
    let unit = env.add_unit(&property, "Deluxe Room", "120");

    std::fs::write(env.data_dir.join("config.yaml"), "default_currency: CZK\n")
        .expect("write config");

    env.command()
        .args([
            "quote",
            "--unit",
            &unit,
            "--check-in",
            "2024-06-03",
            "--check-out",
            "2024-06-04",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("120.00 CZK"));
}

#[test]
fn test_unknown_unit_exits_with_library_error() {
    let env = TestEnv::new();
    env.run(&["init"]);

    env.command()
        .args([
            "quote",
            "--unit",
            "nonexistent",
            "--check-in",
            "2024-06-03",
            "--check-out",
            "2024-06-04",
        ])
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("not found"));
}
