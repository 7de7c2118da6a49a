use super::*;
use crate::api::{decode_response, DiskInfo};

fn sample() -> SysInfo {
    SysInfo {
        used_mem: 512 * 1024 * 1024,
        total_mem: 2 * 1024 * 1024 * 1024,
        disks: vec![
            DiskInfo {
                mount_point: "/".into(),
                used_space: 1024,
                total_space: 4096,
                ..DiskInfo::default()
            },
            DiskInfo {
                mount_point: "/mnt/media".into(),
                used_space: 0,
                total_space: 1_000_000,
                ..DiskInfo::default()
            },
        ],
        ..SysInfo::default()
    }
}

#[test]
fn memory_bar_is_formatted() {
    let report = SysInfoReport::from_sysinfo(&sample(), ByteUnits::Binary);
    assert_eq!(report.memory.used_text, "512.0 MiB");
    assert_eq!(report.memory.total_text, "2.0 GiB");
    assert_eq!(report.memory.total, 2 * 1024 * 1024 * 1024);
}

#[test]
fn one_bar_per_disk_in_order() {
    let report = SysInfoReport::from_sysinfo(&sample(), ByteUnits::Decimal);
    assert_eq!(report.disks.len(), 2);
    assert_eq!(report.disks[0].caption(), "/: 1.0 KB/4.1 KB");
    assert_eq!(report.disks[1].caption(), "/mnt/media: 0 B/1.0 MB");
}

#[test]
fn report_replaces_previous_disks() {
    let first = SysInfoReport::from_sysinfo(&sample(), ByteUnits::Binary);
    let second = SysInfoReport::from_sysinfo(&SysInfo::default(), ByteUnits::Binary);
    assert_eq!(first.disks.len(), 2);
    assert!(second.disks.is_empty());
    assert_eq!(second.memory.caption(), "Memory: 0 B/0 B");
}

#[test]
fn report_from_server_payload() {
    let info: SysInfo = decode_response(
        200,
        r#"{"used_mem":1024,"total_mem":2048,"used_mem_readable":"1 kB","total_mem_readable":"2 kB",
            "disks":[{"fs":"ext4","used_space":1,"total_space":2,"used_space_readable":"1 B","total_space_readable":"2 B"}]}"#,
    )
    .unwrap();
    let report = SysInfoReport::from_sysinfo(&info, ByteUnits::Binary);
    assert_eq!(report.disks[0].label, "ext4");
    assert_eq!(report.memory.caption(), "Memory: 1.0 KiB/2.0 KiB");
}
