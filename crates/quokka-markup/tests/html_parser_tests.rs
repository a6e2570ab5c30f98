//! Integration tests for the HTML-aware tree builder.

use quokka_dom::{Child, ElementKind, NodeId, Tree};
use quokka_markup::{ParseError, parse_markup_html};

/// Helper to get the first top-level element id.
fn first_root(tree: &Tree) -> NodeId {
    tree.roots()
        .iter()
        .find_map(Child::as_element)
        .expect("tree should have an element root")
}

#[test]
fn test_void_elements_take_no_children() {
    let tree = parse_markup_html("<div><br>after</div>").expect("parse should succeed");
    let div = first_root(&tree);
    let children = tree.children(div);

    assert_eq!(children.len(), 2);
    let br = children[0].as_element().expect("br element");
    let br_node = tree.get(br).expect("br node");
    assert_eq!(br_node.kind, ElementKind::Void);
    assert!(br_node.children.is_empty());
    assert_eq!(children[1].as_text(), Some("after"));
}

#[test]
fn test_void_element_tolerates_self_closing_marker() {
    let tree = parse_markup_html("<p><img src=\"x.png\"/>done</p>").expect("parse should succeed");
    let p = first_root(&tree);
    let img = tree
        .find_descendant(p, |node| node.name == "img")
        .expect("img element");
    assert_eq!(tree.get(img).expect("img node").attr("src"), Some("x.png"));
    assert_eq!(tree.text_content(p), "done");
}

#[test]
fn test_layout_whitespace_collapses_and_drops() {
    let source = "<ul>\n    <li>\n        one\n    </li>\n    <li>two</li>\n</ul>";
    let tree = parse_markup_html(source).expect("parse should succeed");
    let ul = first_root(&tree);

    let items = tree.find_descendants(ul, |node| node.name == "li");
    assert_eq!(items.len(), 2);
    assert_eq!(tree.text_content(items[0]), "one");
    assert_eq!(tree.text_content(items[1]), "two");
    // The indentation runs between the items produced no text children.
    assert!(tree
        .children(ul)
        .iter()
        .all(|child| child.as_element().is_some()));
}

#[test]
fn test_interior_whitespace_collapses_to_single_spaces() {
    let tree = parse_markup_html("<p>one\n   two\t three</p>").expect("parse should succeed");
    assert_eq!(tree.text_content(first_root(&tree)), "one two three");
}

#[test]
fn test_script_content_is_captured_verbatim() {
    let source = "<script>\n    if (a < b && c) { run(); }\n</script>";
    let tree = parse_markup_html(source).expect("parse should succeed");
    let script = first_root(&tree);

    let node = tree.get(script).expect("script node");
    assert_eq!(node.kind, ElementKind::Html);
    assert_eq!(tree.text_content(script), "    if (a < b && c) { run(); }");
}

#[test]
fn test_inline_script_is_a_single_text_child() {
    let tree = parse_markup_html("<script>if (a<b) {}</script>").expect("parse should succeed");
    let children = tree.children(first_root(&tree));
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].as_text(), Some("if (a<b) {}"));
}

#[test]
fn test_raw_text_ends_only_at_its_own_closing_tag() {
    let tree = parse_markup_html("<style>a</b{}</style>").expect("parse should succeed");
    assert_eq!(tree.text_content(first_root(&tree)), "a</b{}");

    let err = parse_markup_html("<script>while (true)").expect_err("no closing tag");
    assert!(matches!(err, ParseError::Lex(_)));
}

#[test]
fn test_self_closing_marker_ignored_on_recognized_elements() {
    let tree = parse_markup_html("<div/>text</div>").expect("parse should succeed");
    let div = first_root(&tree);
    assert_eq!(tree.text_content(div), "text");
    assert_eq!(tree.get(div).expect("div node").kind, ElementKind::Html);
}

#[test]
fn test_self_closing_marker_honored_on_unrecognized_elements() {
    let tree = parse_markup_html("<widget/><span>s</span>").expect("parse should succeed");
    assert_eq!(tree.roots().len(), 2);

    let widget = tree.roots()[0].as_element().expect("widget element");
    let widget_node = tree.get(widget).expect("widget node");
    assert_eq!(widget_node.kind, ElementKind::Untyped);
    assert!(widget_node.children.is_empty());
}

#[test]
fn test_element_names_are_case_sensitive() {
    // <BR> is not the void element, so it needs a closing tag.
    let err = parse_markup_html("<BR>").expect_err("unclosed element");
    assert!(matches!(err, ParseError::Lex(_)));

    let tree = parse_markup_html("<BR></BR>").expect("parse should succeed");
    assert_eq!(
        tree.get(first_root(&tree)).expect("root node").kind,
        ElementKind::Untyped
    );
}

#[test]
fn test_doctype_falls_out_as_text() {
    let source = "<!DOCTYPE html>\n<html><body>hi</body></html>";
    let tree = parse_markup_html(source).expect("parse should succeed");

    assert_eq!(tree.roots().len(), 2);
    assert_eq!(tree.roots()[0].as_text(), Some("<!DOCTYPE html>"));
    let html = first_root(&tree);
    assert_eq!(tree.get(html).expect("html node").name, "html");
}

#[test]
fn test_comments_never_produce_elements() {
    let tree =
        parse_markup_html("<div><!-- <span>gone</span> --><em>kept</em></div>")
            .expect("parse should succeed");
    let div = first_root(&tree);

    assert!(tree.find_descendant(div, |node| node.name == "span").is_none());
    let em = tree
        .find_descendant(div, |node| node.name == "em")
        .expect("em survives");
    assert_eq!(tree.text_content(em), "kept");
    // The masked comment collapses away entirely.
    assert_eq!(tree.children(div).len(), 1);
}

#[test]
fn test_document_queries() {
    let source = "<html><body><div id=\"app\" class=\"shell dark\">\
                  <p>one</p><p>two</p></div></body></html>";
    let tree = parse_markup_html(source).expect("parse should succeed");
    let html = first_root(&tree);

    let app = tree
        .find_descendant(html, |node| node.id() == Some("app"))
        .expect("app div");
    assert!(tree.get(app).expect("app node").classes().contains("dark"));

    let paragraphs = tree.find_descendants(html, |node| node.name == "p");
    assert_eq!(paragraphs.len(), 2);

    let body = tree
        .find_ancestor(paragraphs[0], |node| node.name == "body")
        .expect("body ancestor");
    assert!(tree.is_descendant_of(paragraphs[1], body));
    assert_eq!(tree.parent(app), Some(body));
}

#[test]
fn test_spans_index_the_original_source() {
    let source = "<div><br></div>";
    let tree = parse_markup_html(source).expect("parse should succeed");
    let div = first_root(&tree);

    let div_node = tree.get(div).expect("div node");
    assert_eq!(div_node.span.slice(source), Some(source));

    let br = div_node.children[0].as_element().expect("br element");
    assert_eq!(tree.get(br).expect("br node").span.slice(source), Some("<br>"));
}
