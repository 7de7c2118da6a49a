//! Memory and disk usage bars fed by `/api/sysinfo`.

use crate::api::SysInfo;
use crate::format_bytes::{format_bytes, ByteUnits};

pub const SYSINFO_POLL_INTERVAL_MS: u32 = 2500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageBar {
    pub label: String,
    pub used: u64,
    pub total: u64,
    pub used_text: String,
    pub total_text: String,
}

impl UsageBar {
    fn new(label: impl Into<String>, used: u64, total: u64, units: ByteUnits) -> Self {
        Self {
            label: label.into(),
            used,
            total,
            used_text: format_bytes(used, units),
            total_text: format_bytes(total, units),
        }
    }

    /// `"{label}: used/total"`, the caption above each bar.
    pub fn caption(&self) -> String {
        format!("{}: {}/{}", self.label, self.used_text, self.total_text)
    }
}

/// One poll's worth of rendering. Each report replaces the last wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysInfoReport {
    pub memory: UsageBar,
    pub disks: Vec<UsageBar>,
}

impl SysInfoReport {
    pub fn from_sysinfo(info: &SysInfo, units: ByteUnits) -> Self {
        Self {
            memory: UsageBar::new("Memory", info.used_mem, info.total_mem, units),
            disks: info
                .disks
                .iter()
                .map(|disk| {
                    UsageBar::new(
                        disk.mount_point.clone(),
                        disk.used_space,
                        disk.total_space,
                        units,
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests;
