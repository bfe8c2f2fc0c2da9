//! Integration tests for page files

use typecast::animator::{extract_lines, LINE_ATTR};
use typecast::host::{CONTAINER_CLASS, INIT_ATTR};
use typecast::page::TITLE_ATTR;
use typecast::{LineKind, Page};

use crate::helpers::{fixtures_dir, temp_fixture};

#[test]
fn toml_fixture_builds_one_container() {
    let page = Page::load(fixtures_dir().join("demo.toml")).unwrap();
    let doc = page.to_document();

    let containers = doc.query_class(doc.root(), CONTAINER_CLASS);
    assert_eq!(containers.len(), 1);
    assert_eq!(doc.attribute(containers[0], TITLE_ATTR), Some("bash"));
    assert_eq!(doc.attribute(containers[0], INIT_ATTR), None);

    let lines = extract_lines(&doc, containers[0]);
    let kinds: Vec<_> = lines.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![LineKind::Input, LineKind::Progress, LineKind::Literal]
    );
    assert_eq!(lines[0].text, "ls");
    assert_eq!(lines[2].text, "a.txt");
}

#[test]
fn json_is_chosen_by_extension() {
    let (_dir, path) = temp_fixture("multi.json");
    let page = Page::load(&path).unwrap();

    assert_eq!(page.terminals.len(), 2);
    assert_eq!(page.terminals[0].title.as_deref(), Some("left"));
    assert!(page.terminals[1].lines.is_empty());
}

#[test]
fn toml_page_with_unknown_extension_parses_as_toml() {
    let (dir, _) = temp_fixture("demo.toml");
    let path = dir.path().join("demo.page");
    std::fs::copy(fixtures_dir().join("demo.toml"), &path).unwrap();

    let page = Page::load(&path).unwrap();
    assert_eq!(page.terminals[0].lines.len(), 3);
}

#[test]
fn broken_fixture_names_the_file() {
    let err = Page::load(fixtures_dir().join("broken.toml")).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Invalid page file"));
    assert!(message.contains("broken.toml"));
}

#[test]
fn whitespace_in_text_is_kept() {
    let page = Page::from_json(
        r#"{"terminal":[{"line":[{"ty":"input","text":"  indented  "},{"text":""}]}]}"#,
    )
    .unwrap();
    let doc = page.to_document();
    let container = doc.query_class(doc.root(), CONTAINER_CLASS)[0];
    let lines = extract_lines(&doc, container);

    assert_eq!(lines[0].text, "  indented  ");
    assert_eq!(lines[1].text, "");
    assert_eq!(doc.query_attribute(container, LINE_ATTR).len(), 2);
}
