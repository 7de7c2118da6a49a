//! Human-readable byte sizes for the usage widgets.

use serde::{Deserialize, Serialize};

/// Unit table used by [`format_bytes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ByteUnits {
    /// Powers of 1024: KiB, MiB, ...
    #[default]
    Binary,
    /// Powers of 1000: KB, MB, ...
    Decimal,
}

impl ByteUnits {
    fn base(self) -> f64 {
        match self {
            Self::Binary => 1024.0,
            Self::Decimal => 1000.0,
        }
    }

    fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Binary => &["B", "KiB", "MiB", "GiB", "TiB"],
            Self::Decimal => &["B", "KB", "MB", "GB", "TB"],
        }
    }
}

pub fn format_bytes(bytes: u64, units: ByteUnits) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = units.base();
    let labels = units.labels();
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= base && unit < labels.len() - 1 {
        value /= base;
        unit += 1;
    }

    if unit == 0 {
        return format!("{bytes} B");
    }
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded:.1} {}", labels[unit])
}

#[cfg(test)]
mod tests;
