#![cfg(test)]
use std::fs;

use macshift_common::error::MacError;
use macshift_core::backup::{BackupStore, RestoreOutcome};
use macshift_core::platform::WindowsDriver;
use macshift_core::session::Session;
use tempfile::TempDir;

use crate::support::{ScriptedRunner, ScriptedUi};

const IPCONFIG: &str = "\r
Windows IP Configuration\r
\r
Ethernet adapter Ethernet:\r
\r
   IPv4 Address. . . . . . . . . . . : 192.168.1.40\r
\r
Wireless LAN adapter Wi-Fi:\r
\r
   Media State . . . . . . . . . . . : Media disconnected\r
\r
Ethernet adapter Ethernet 2:\r
\r
   Media State . . . . . . . . . . . : Media disconnected\r
";

const GETMAC_CMD: &str = "getmac /FO CSV /V";

fn getmac(ethernet: &str) -> String {
    format!(
        "\"Connection Name\",\"Network Adapter\",\"Physical Address\",\"Transport Name\"\r\n\
         \"Ethernet 2\",\"TAP-Windows Adapter V9\",\"00-FF-4A-2B-19-C3\",\"Media disconnected\"\r\n\
         \"Ethernet\",\"Intel(R) Ethernet Connection I219-V\",\"{ethernet}\",\"\\Device\\Tcpip_{{4D36E972}}\"\r\n"
    )
}

fn windows_host() -> ScriptedRunner {
    ScriptedRunner::new()
        .on("whoami /priv", 0, "PRIVILEGES INFORMATION\r\n")
        .on("ipconfig", 0, IPCONFIG)
        .on(GETMAC_CMD, 0, &getmac("00-1A-2B-3C-4D-5E"))
        .on(GETMAC_CMD, 0, &getmac("02-AB-CD-EF-00-01"))
        .on("netsh interface set interface Ethernet newmac=02:AB:CD:EF:00:01", 0, "")
}

#[test]
fn change_ethernet_adapter() {
    let dir = TempDir::new().unwrap();
    let runner = windows_host();
    let session = Session::new(
        Box::new(WindowsDriver::new(&runner)),
        BackupStore::new(dir.path()),
    );
    let mut ui = ScriptedUi::new(&["1", "02:AB:CD:EF:00:01", "no"]);

    let report = session.run(&mut ui).unwrap();

    assert_eq!(ui.menu, vec!["Ethernet", "Ethernet 2"]);
    assert_eq!(report.backup.unwrap().as_str(), "00:1A:2B:3C:4D:5E");
    assert!(report.verified, "dashed getmac output should match the colon form");
    let backup = fs::read_to_string(dir.path().join("Ethernet_mac_backup.txt")).unwrap();
    assert_eq!(backup, "00:1A:2B:3C:4D:5E");
    assert_eq!(
        runner.calls(),
        vec![
            "whoami /priv",
            "ipconfig",
            GETMAC_CMD,
            "netsh interface set interface Ethernet newmac=02:AB:CD:EF:00:01",
            GETMAC_CMD,
        ]
    );
}

#[test]
fn restore_goes_through_netsh() {
    let dir = TempDir::new().unwrap();
    let runner = windows_host()
        .on("netsh interface set interface Ethernet newmac=00:1A:2B:3C:4D:5E", 0, "");
    let session = Session::new(
        Box::new(WindowsDriver::new(&runner)),
        BackupStore::new(dir.path()),
    );
    let mut ui = ScriptedUi::new(&["1", "02:AB:CD:EF:00:01", "y"]);

    let report = session.run(&mut ui).unwrap();

    let original = "00:1A:2B:3C:4D:5E".parse().unwrap();
    assert_eq!(report.restored, Some(RestoreOutcome::Restored(original)));
    assert_eq!(runner.calls_starting_with("netsh").len(), 2);
}

#[test]
fn failing_whoami_means_not_admin() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new()
        .on("whoami /priv", 1, "")
        .on("ipconfig", 0, IPCONFIG);
    let session = Session::new(
        Box::new(WindowsDriver::new(&runner)),
        BackupStore::new(dir.path()),
    );
    let mut ui = ScriptedUi::new(&["1"]);

    let err = session.run(&mut ui).unwrap_err();

    assert!(matches!(err, MacError::InsufficientPrivileges(_)));
    assert_eq!(runner.calls(), vec!["whoami /priv"]);
}

#[test]
fn netsh_failure_is_fatal() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new()
        .on("whoami /priv", 0, "")
        .on("ipconfig", 0, IPCONFIG)
        .on(GETMAC_CMD, 0, &getmac("00-1A-2B-3C-4D-5E"))
        .on("netsh interface set interface Ethernet 2 newmac=02:AB:CD:EF:00:01", 1, "");
    let session = Session::new(
        Box::new(WindowsDriver::new(&runner)),
        BackupStore::new(dir.path()),
    );
    let mut ui = ScriptedUi::new(&["2", "02:AB:CD:EF:00:01", "y"]);

    let err = session.run(&mut ui).unwrap_err();

    assert!(matches!(err, MacError::CommandFailed { ref program, .. } if program == "netsh"));
    let backup = fs::read_to_string(dir.path().join("Ethernet 2_mac_backup.txt")).unwrap();
    assert_eq!(backup, "00:FF:4A:2B:19:C3");
}
