use super::*;

#[test]
fn parse_builds_tree_with_text_and_attributes() {
    let raw = br#"<?xml version="1.0"?>
<Root kind="test">
  <Name>Tom &amp; Jerry</Name>
  <List>
    <Item id="1" />
    <Item id="2">two</Item>
  </List>
</Root>"#;
    let root = parse_document(raw).unwrap();
    assert_eq!(root.name, "Root");
    assert_eq!(root.attribute("kind"), Some("test"));
    assert_eq!(root.child_text("Name"), Some("Tom & Jerry"));

    let list = root.child("List").unwrap();
    let items: Vec<_> = list.children_named("Item").collect();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].attribute("id"), Some("1"));
    assert_eq!(items[1].text, "two");
    assert_eq!(root.descend(&["List", "Item"]).map(|i| i.attribute("id")), Some(Some("1")));
}

#[test]
fn blank_children_read_as_absent() {
    let root = parse_document(b"<Root><Empty /><Blank>   </Blank></Root>").unwrap();
    assert_eq!(root.child_text("Empty"), None);
    assert_eq!(root.child_text("Blank"), None);
    assert_eq!(root.child_text("Missing"), None);
}

#[test]
fn child_parsed_rejects_garbage() {
    let root = parse_document(b"<Root><Count>12</Count><Bad>twelve</Bad></Root>").unwrap();
    assert_eq!(root.child_parsed::<u32>("Count").unwrap(), Some(12));
    assert_eq!(root.child_parsed::<u32>("Missing").unwrap(), None);
    assert!(matches!(
        root.child_parsed::<u32>("Bad"),
        Err(SidecarError::Invalid(_))
    ));
}

#[test]
fn cdata_is_kept_as_text() {
    let root = parse_document(b"<Root><Summary><![CDATA[a < b]]></Summary></Root>").unwrap();
    assert_eq!(root.child_text("Summary"), Some("a < b"));
}

#[test]
fn malformed_documents_fail() {
    assert!(parse_document(b"<Root><Open></Root>").is_err());
    assert!(parse_document(b"").is_err());
    assert!(parse_document(b"<Root>").is_err());
}

#[test]
fn expect_root_checks_name() {
    let root = parse_document(b"<Other />").unwrap();
    assert!(expect_root(&root, "Other").is_ok());
    assert!(matches!(expect_root(&root, "ComicInfo"), Err(SidecarError::Invalid(_))));
}

#[test]
fn writer_escapes_and_indents() {
    let mut w = XmlWriter::new();
    w.open("Root", &[("a", "x\"y".to_string())]);
    w.element("Name", "Tom & Jerry");
    w.element_opt("Skipped", Some("  "));
    w.element_opt("Skipped", None);
    w.empty("Leaf", &[("n", "1".to_string())]);
    w.close("Root");
    let out = w.finish();
    assert!(out.starts_with("<?xml"));
    assert!(out.contains("<Root a=\"x&quot;y\">\n"));
    assert!(out.contains("  <Name>Tom &amp; Jerry</Name>\n"));
    assert!(out.contains("  <Leaf n=\"1\" />\n"));
    assert!(!out.contains("Skipped"));

    let parsed = parse_document(out.as_bytes()).unwrap();
    assert_eq!(parsed.child_text("Name"), Some("Tom & Jerry"));
}
