mod common;

use bmml2dot::core::MockupAnalyzer;
use bmml2dot::formatters::DotFormatter;
use common::{link_control, write_mockup};
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn analyzer_end_to_end_on_two_mockups() {
    let dir = tempfile::TempDir::new().unwrap();
    let a = write_mockup(
        dir.path(),
        "A.bmml",
        &link_control("Paragraph", "go+to", "B%26bm%3BB.bmml"),
    );
    let b = write_mockup(dir.path(), "B.bmml", "");

    let mut diagnostics = Vec::new();
    let graph = MockupAnalyzer::new()
        .unwrap()
        .analyze(&[a, b], &mut diagnostics)
        .unwrap();

    assert_eq!(
        DotFormatter::new().format_graph(&graph),
        "digraph G {\n\t\"A.bmml\" -> \"B.bmml\"[label=\"go to\"]\n}\n"
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn broken_file_is_reported_and_skipped() {
    let dir = tempfile::TempDir::new().unwrap();
    let broken = dir.path().join("Broken.bmml");
    fs::write(&broken, "<mockup><controls>").unwrap();
    let bad_escape = write_mockup(
        dir.path(),
        "Escape.bmml",
        &format!(
            "{}\n{}",
            link_control("Paragraph", "fine", "C%26bm%3BC.bmml"),
            link_control("Paragraph", "bad%", "C%26bm%3BC.bmml")
        ),
    );
    let good = write_mockup(
        dir.path(),
        "Good.bmml",
        &link_control("Button", "Next", "C%26bm%3BC.bmml"),
    );
    let missing = dir.path().join("Missing.bmml");

    let mut diagnostics = Vec::new();
    let graph = MockupAnalyzer::new()
        .unwrap()
        .analyze(&[broken, bad_escape, missing, good], &mut diagnostics)
        .unwrap();

    // nothing from the escape file survives, even its first control
    assert_eq!(graph.edge_count(), 1);
    let stderr = String::from_utf8(diagnostics).unwrap();
    let lines: Vec<_> = stderr.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Broken.bmml: "));
    assert!(lines[1].contains("Escape.bmml: "));
    assert!(lines[2].contains("Missing.bmml"));
}

#[test]
fn unresolved_link_writes_one_diagnostic_line() {
    let dir = tempfile::TempDir::new().unwrap();
    let menu = write_mockup(
        dir.path(),
        "Menu.bmml",
        r#"    <control controlTypeID="com.balsamiq.mockups::TabBar">
      <controlProperties>
        <text>One%2CTwo%2CThree</text>
        <hrefs>X%26bm%3BX.bmml%2Cnowhere%2CZ%26bm%3BZ.bmml</hrefs>
      </controlProperties>
    </control>"#,
    );

    let mut diagnostics = Vec::new();
    let graph = MockupAnalyzer::new()
        .unwrap()
        .analyze(&[menu], &mut diagnostics)
        .unwrap();

    assert_eq!(
        DotFormatter::new().format_graph(&graph),
        "digraph G {\n\
         \t\"Menu.bmml\" -> \"X.bmml\"[label=\"One\"]\n\
         \t\"Menu.bmml\" -> \"Z.bmml\"[label=\"Three\"]\n\
         }\n"
    );
    assert_eq!(
        String::from_utf8(diagnostics).unwrap(),
        "Menu.bmml: 'Two' has no matching link\n"
    );
}

#[test]
fn directories_expand_to_sorted_mockups() {
    let dir = tempfile::TempDir::new().unwrap();
    write_mockup(
        dir.path(),
        "b.bmml",
        &link_control("Button", "to+a", "a%26bm%3Ba.bmml"),
    );
    write_mockup(
        dir.path(),
        "a.bmml",
        &link_control("Button", "to+b", "b%26bm%3Bb.bmml"),
    );
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let mut diagnostics = Vec::new();
    let graph = MockupAnalyzer::new()
        .unwrap()
        .analyze(&[dir.path().to_path_buf()], &mut diagnostics)
        .unwrap();

    assert_eq!(
        DotFormatter::new().format_graph(&graph),
        "digraph G {\n\
         \t\"a.bmml\" -> \"b.bmml\"[label=\"to b\"]\n\
         \t\"b.bmml\" -> \"a.bmml\"[label=\"to a\"]\n\
         }\n"
    );
}

#[test]
fn warnings_before_a_decoding_failure_are_still_reported() {
    let dir = tempfile::TempDir::new().unwrap();
    let wizard = write_mockup(
        dir.path(),
        "W.bmml",
        &format!(
            "{}\n{}",
            link_control("Button", "lost", "nowhere"),
            link_control("Paragraph", "bad%", "C%26bm%3BC.bmml")
        ),
    );

    let mut diagnostics = Vec::new();
    let graph = MockupAnalyzer::new()
        .unwrap()
        .analyze(&[wizard], &mut diagnostics)
        .unwrap();

    assert_eq!(graph.edge_count(), 0);
    let stderr = String::from_utf8(diagnostics).unwrap();
    let lines: Vec<_> = stderr.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "W.bmml: 'lost' has no matching link");
    assert!(lines[1].contains("W.bmml: incomplete trailing escape"));
}

#[test]
fn latin1_mockup_still_contributes_edges() {
    let dir = tempfile::TempDir::new().unwrap();
    let latin = dir.path().join("L.bmml");
    let mut bytes = br#"<?xml version="1.0" encoding="ISO-8859-1"?>
<mockup version="1.0" skin="sketch" title="Men"#
        .to_vec();
    bytes.push(0xFC);
    bytes.extend_from_slice(
        format!(
            "\">\n  <controls>\n{}\n  </controls>\n</mockup>\n",
            link_control("Button", "Next", "M%26bm%3BM.bmml")
        )
        .as_bytes(),
    );
    fs::write(&latin, bytes).unwrap();

    let mut diagnostics = Vec::new();
    let graph = MockupAnalyzer::new()
        .unwrap()
        .analyze(&[latin], &mut diagnostics)
        .unwrap();

    assert!(diagnostics.is_empty());
    assert_eq!(
        DotFormatter::new().format_graph(&graph),
        "digraph G {\n\t\"L.bmml\" -> \"M.bmml\"[label=\"Next\"]\n}\n"
    );
}
