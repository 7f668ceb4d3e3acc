// CLASSIFICATION: COMMUNITY
// Filename: driver_demo.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Host re-enactment of a driver entry point using the kmlog entry points.
//! Lines go to stderr in place of the kernel debugger.

use kmlog::{LogError, NtStatus, WideStr};

/// Stand-in for `DRIVER_OBJECT`; only its address is logged.
struct DriverObject {
    _reserved: [u8; 0x150],
}

fn driver_entry(driver_object: &DriverObject, registry_path: &[u16]) -> NtStatus {
    kmlog::guarded(|| {
        kmlog::info!("Hello, world!")?;
        kmlog::debug!("Driver object: {:#x}", driver_object as *const DriverObject as usize)?;
        kmlog::debug!(wide: "Registry path: {}", WideStr::until_nul(registry_path))?;
        Ok::<(), LogError>(())
    })
}

fn main() {
    if let Err(err) = kmlog::bridge::init() {
        eprintln!("log backend already installed: {err}");
    }

    let driver_object = DriverObject {
        _reserved: [0; 0x150],
    };
    let registry_path: Vec<u16> = "\\Registry\\Machine\\System\\CurrentControlSet\\Services\\kmlog\0"
        .encode_utf16()
        .collect();

    let status = driver_entry(&driver_object, &registry_path);
    log::info!("driver_entry returned {status}");
    std::process::exit(if status.is_success() { 0 } else { 1 });
}
