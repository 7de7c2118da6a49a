use super::*;

#[test]
fn zero_is_bytes() {
    assert_eq!(format_bytes(0, ByteUnits::Binary), "0 B");
    assert_eq!(format_bytes(0, ByteUnits::Decimal), "0 B");
}

#[test]
fn one_unit_step() {
    assert_eq!(format_bytes(1024, ByteUnits::Binary), "1.0 KiB");
    assert_eq!(format_bytes(1000, ByteUnits::Decimal), "1.0 KB");
    assert_eq!(format_bytes(1000, ByteUnits::Binary), "1000 B");
}

#[test]
fn rounds_to_one_decimal() {
    assert_eq!(format_bytes(1536, ByteUnits::Binary), "1.5 KiB");
    assert_eq!(format_bytes(3 * 1024 * 1024 + 104_858, ByteUnits::Binary), "3.1 MiB");
    assert_eq!(format_bytes(2_345_000_000, ByteUnits::Decimal), "2.3 GB");
}

#[test]
fn stops_at_largest_unit() {
    let pib = 1024u64.pow(5);
    assert_eq!(format_bytes(pib, ByteUnits::Binary), "1024.0 TiB");
}

#[test]
fn units_deserialize_lowercase() {
    let units: ByteUnits = serde_json::from_str("\"decimal\"").unwrap();
    assert_eq!(units, ByteUnits::Decimal);
}
