use super::*;

#[test]
fn classification_table() {
    let cases = [
        ("folder", EntryKind::Folder, "folder"),
        ("PNG", EntryKind::Image, "img"),
        ("svg", EntryKind::Image, "img"),
        ("gif", EntryKind::Animation, "anm"),
        ("3gp", EntryKind::Animation, "anm"),
        ("jar", EntryKind::Shape, "shp"),
        ("m4a", EntryKind::Sound, "snd"),
        ("7z", EntryKind::Archive, "zpi"),
        ("txt", EntryKind::File, "file"),
        ("", EntryKind::File, "file"),
    ];
    for (ext, kind, class) in cases {
        assert_eq!(EntryKind::classify(ext), kind, "{ext}");
        assert_eq!(kind.css_class(), class);
    }
}

#[test]
fn actions_expand_or_open() {
    assert_eq!(
        EntryKind::Folder.action("/music/", "Live Sets"),
        EntryAction::Expand("/music/Live Sets/".into())
    );
    assert_eq!(
        EntryKind::Archive.action("/", "pack.zip"),
        EntryAction::Expand("/pack.zip/".into())
    );
    assert_eq!(
        EntryKind::File.action("/my docs/", "read me.txt"),
        EntryAction::Open("/my%20docs/read%20me.txt".into())
    );
}

fn listing() -> Vec<ListingEntry> {
    vec![
        ListingEntry::new("music", "folder"),
        ListingEntry::new("notes.txt", "txt"),
    ]
}

#[test]
fn toggle_opens_then_closes() {
    let mut nodes = FolderNode::from_listing("/", &listing());
    assert_eq!(nodes[0].path, "/music/");
    assert_eq!(nodes[1].toggle(), None);
    assert_eq!(nodes[1].action(), EntryAction::Open("/notes.txt".into()));
    assert_eq!(nodes[0].action(), EntryAction::Expand("/music/".into()));

    let folder = &mut nodes[0];
    assert_eq!(folder.toggle().as_deref(), Some("/music/"));
    folder.set_children(&[ListingEntry::new("a.mp3", "mp3")]);
    assert_eq!(folder.children[0].path, "/music/a.mp3/");
    assert_eq!(folder.children[0].kind, EntryKind::Sound);

    assert_eq!(folder.toggle(), None);
    assert!(!folder.open);
    assert!(folder.children.is_empty());
}

#[test]
fn children_for_closed_node_are_dropped() {
    let mut nodes = FolderNode::from_listing("/", &listing());
    let folder = &mut nodes[0];
    folder.toggle();
    folder.toggle();
    folder.set_children(&listing());
    assert!(folder.children.is_empty());
}

#[test]
fn find_nested_node() {
    let mut nodes = FolderNode::from_listing("/", &listing());
    nodes[0].toggle();
    nodes[0].set_children(&[ListingEntry::new("live", "folder")]);

    let found = FolderNode::find_mut(&mut nodes, "/music/live/").unwrap();
    assert_eq!(found.name, "live");
    assert!(FolderNode::find_mut(&mut nodes, "/nope/").is_none());
}

#[test]
fn dialog_selects_browsed_folder() {
    let mut dialog = BrowseDialog::default();
    dialog.open();
    assert!(dialog.visible);
    assert_eq!(dialog.browsing, "/");

    dialog.browse("/music/live/");
    assert_eq!(dialog.select(), "/music/live/");
    assert!(!dialog.visible);
    assert_eq!(dialog.selected.as_deref(), Some("/music/live/"));

    dialog.open();
    assert_eq!(dialog.browsing, "/music/live/");
    dialog.close();
    assert!(!dialog.visible);
}
