#![cfg(test)]
use std::fs;

use macshift_common::network::interface::InterfaceName;
use macshift_core::backup::{BackupStore, RestoreOutcome};
use macshift_core::platform::{LinuxDriver, MacOsDriver, PlatformDriver};
use tempfile::TempDir;

use crate::support::{LINUX_IFCONFIG, ScriptedRunner, ifconfig_eth0};

fn root() -> bool {
    true
}

#[test]
fn backup_then_restore_on_linux() {
    let dir = TempDir::new().unwrap();
    let store = BackupStore::new(dir.path());
    let runner = ScriptedRunner::new()
        .on("ifconfig", 0, LINUX_IFCONFIG)
        .on("ifconfig eth0", 0, &ifconfig_eth0("de:ad:be:ef:00:01"))
        .on("sudo ifconfig eth0 down", 0, "")
        .on("sudo ifconfig eth0 hw ether de:ad:be:ef:00:01", 0, "")
        .on("sudo ifconfig eth0 up", 0, "");
    let driver = LinuxDriver::new(&runner).with_root_check(root);
    let eth0 = InterfaceName::new("eth0");

    let saved = driver_backup(&store, &driver, &eth0);
    assert_eq!(saved.as_deref(), Some("de:ad:be:ef:00:01"));

    let outcome = store.restore(&driver, &eth0).unwrap();

    assert!(matches!(outcome, RestoreOutcome::Restored(ref mac) if mac.as_str() == "de:ad:be:ef:00:01"));
    assert_eq!(
        runner.calls_starting_with("sudo"),
        vec![
            "sudo ifconfig eth0 down",
            "sudo ifconfig eth0 hw ether de:ad:be:ef:00:01",
            "sudo ifconfig eth0 up",
        ]
    );
}

#[test]
fn restore_uses_one_shot_ether_on_macos() {
    let dir = TempDir::new().unwrap();
    let store = BackupStore::new(dir.path());
    let en0 = InterfaceName::new("en0");
    fs::write(store.path_for(&en0), "DE:AD:BE:EF:00:01\n").unwrap();
    let runner = ScriptedRunner::new().on("sudo ifconfig en0 ether DE:AD:BE:EF:00:01", 0, "");
    let driver = MacOsDriver::new(&runner).with_root_check(root);

    let outcome = store.restore(&driver, &en0).unwrap();

    assert!(matches!(outcome, RestoreOutcome::Restored(_)));
    assert_eq!(runner.calls(), vec!["sudo ifconfig en0 ether DE:AD:BE:EF:00:01"]);
}

#[test]
fn corrupted_backup_is_never_applied() {
    let dir = TempDir::new().unwrap();
    let store = BackupStore::new(dir.path());
    let eth0 = InterfaceName::new("eth0");
    fs::write(store.path_for(&eth0), "garbage").unwrap();
    let runner = ScriptedRunner::new();
    let driver = LinuxDriver::new(&runner).with_root_check(root);

    let outcome = store.restore(&driver, &eth0).unwrap();

    assert_eq!(outcome, RestoreOutcome::Invalid);
    assert!(runner.calls().is_empty());
}

#[test]
fn second_backup_overwrites_first() {
    let dir = TempDir::new().unwrap();
    let store = BackupStore::new(dir.path());
    let runner = ScriptedRunner::new()
        .on("ifconfig eth0", 0, &ifconfig_eth0("11:22:33:44:55:66"))
        .on("ifconfig eth0", 0, &ifconfig_eth0("02:00:00:00:00:02"));
    let driver = LinuxDriver::new(&runner).with_root_check(root);
    let eth0 = InterfaceName::new("eth0");

    driver_backup(&store, &driver, &eth0);
    driver_backup(&store, &driver, &eth0);

    let contents = fs::read_to_string(store.path_for(&eth0)).unwrap();
    assert_eq!(contents, "02:00:00:00:00:02");
}

fn driver_backup(
    store: &BackupStore,
    driver: &dyn PlatformDriver,
    interface: &InterfaceName,
) -> Option<String> {
    store.backup(driver, interface).map(|mac| mac.to_string())
}
