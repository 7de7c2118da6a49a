use super::*;

#[test]
fn decode_response_rejects_server_errors() {
    let err = decode_response::<TrackMetadata>(500, "{\"title\":\"x\"}").unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(matches!(
        decode_response::<TrackMetadata>(404, ""),
        Err(FetchError::Status(404))
    ));
}

#[test]
fn decode_response_reports_malformed_json() {
    let err = decode_response::<Vec<ListingEntry>>(200, "<html>").unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
    assert_eq!(err.status(), None);
}

#[test]
fn metadata_accepts_numbers_and_blanks() {
    let meta: TrackMetadata = decode_response(
        200,
        r#"{"title":"Song","artist":"  ","year":1999,"track":"3","genre":null}"#,
    )
    .unwrap();
    assert_eq!(meta.title.as_deref(), Some("Song"));
    assert_eq!(meta.artist, None);
    assert_eq!(meta.year.as_deref(), Some("1999"));
    assert_eq!(meta.track.as_deref(), Some("3"));
    assert_eq!(meta.genre, None);
    assert_eq!(meta.album, None);
}

#[test]
fn sysinfo_accepts_fs_alias_for_mount_point() {
    let info: SysInfo = decode_response(
        200,
        r#"{"used_mem":1,"total_mem":2,"used_mem_readable":"1 B","total_mem_readable":"2 B",
            "disks":[{"fs":"/dev/sda1","used_space":5,"total_space":10}]}"#,
    )
    .unwrap();
    assert_eq!(info.disks.len(), 1);
    assert_eq!(info.disks[0].mount_point, "/dev/sda1");
    assert_eq!(info.disks[0].used_space_readable, "");
}

#[test]
fn client_builds_endpoint_urls() {
    let client = MirrorClient::new("https://mirror.example/");
    assert_eq!(client.base_url(), "https://mirror.example");
    assert_eq!(
        client.listing_url("/music/album"),
        "https://mirror.example/api/listing/music/album"
    );
    assert_eq!(
        client.metadata_url("/music/b.mp3"),
        "https://mirror.example/api/music/b.mp3"
    );
    assert_eq!(client.sysinfo_url(), "https://mirror.example/api/sysinfo");
}

#[test]
fn media_urls() {
    assert_eq!(download_url("/a/b.mp3"), "/a/b.mp3?download");
    assert_eq!(raw_file_url("/a/b.mp4"), "/file/a/b.mp4");
    assert_eq!(poster_url("/a/b.mp4"), "/poster/a/b.mp4");
}

#[test]
fn listing_entry_folder_flag() {
    let entries: Vec<ListingEntry> =
        decode_response(200, r#"[{"name":"sub","ext":"folder"},{"name":"a.mp3"}]"#).unwrap();
    assert!(entries[0].is_folder());
    assert!(!entries[1].is_folder());
    assert_eq!(entries[1].ext, "");
}
