//! Integration tests for tree serialization.

use quokka_dom::{ElementKind, Node, NodeId, RenderOptions, Setting, Tree, trim_blank_lines};

/// Helper to allocate a named element with a kind under an optional parent.
fn add(tree: &mut Tree, parent: Option<NodeId>, name: &str, kind: ElementKind) -> NodeId {
    let id = tree.alloc(Node::new(name, kind));
    match parent {
        Some(parent_id) => tree.append_child(parent_id, id),
        None => tree.push_root(id),
    }
    id
}

#[test]
fn test_childless_elements_follow_self_closing_policy() {
    let mut tree = Tree::new();
    let div = add(&mut tree, None, "div", ElementKind::Html);
    let widget = add(&mut tree, None, "widget", ElementKind::Untyped);
    let br = add(&mut tree, None, "br", ElementKind::Void);

    let options = RenderOptions::default();
    assert_eq!(tree.render(div, &options), "<div></div>");
    assert_eq!(tree.render(widget, &options), "<widget/>");
    assert_eq!(tree.render(br, &options), "<br/>");
}

#[test]
fn test_attribute_rendering() {
    let mut tree = Tree::new();
    let a = add(&mut tree, None, "a", ElementKind::Html);
    if let Some(node) = tree.get_mut(a) {
        node.attributes.set("href", "/home");
        node.attributes.set("hidden", "");
        node.attributes.set("title", "say \"hi\"");
    }
    tree.append_text(a, "go");

    // Empty values render bare, values holding a double quote switch to
    // single-quote delimiters.
    assert_eq!(
        tree.render(a, &RenderOptions::default()),
        "<a href=\"/home\" hidden title='say \"hi\"'>go</a>"
    );
}

#[test]
fn test_pretty_printing_indents_nested_elements() {
    let mut tree = Tree::new();
    let html = add(&mut tree, None, "html", ElementKind::Html);
    let body = add(&mut tree, Some(html), "body", ElementKind::Html);
    let p = add(&mut tree, Some(body), "p", ElementKind::Html);
    tree.append_text(p, "hi");

    assert_eq!(
        tree.render(html, &RenderOptions::default()),
        "<html>\n    <body>\n        <p>hi</p>\n    </body>\n</html>"
    );
}

#[test]
fn test_pretty_printing_drops_blank_text() {
    let mut tree = Tree::new();
    let ul = add(&mut tree, None, "ul", ElementKind::Html);
    tree.append_text(ul, "\n  ");
    let li = add(&mut tree, Some(ul), "li", ElementKind::Html);
    tree.append_text(li, "one");
    tree.append_text(ul, "\n");

    assert_eq!(
        tree.render(ul, &RenderOptions::default()),
        "<ul>\n    <li>one</li>\n</ul>"
    );
}

#[test]
fn test_whitespace_only_text_child_renders_empty_element() {
    let mut tree = Tree::new();
    let p = add(&mut tree, None, "p", ElementKind::Html);
    tree.append_text(p, "\n   \n");
    assert_eq!(tree.render(p, &RenderOptions::default()), "<p></p>");
}

#[test]
fn test_verbatim_policy_concatenates_children() {
    let mut tree = Tree::new();
    let a = add(&mut tree, None, "a", ElementKind::Untyped);
    tree.append_text(a, "one ");
    let _ = add(&mut tree, Some(a), "b", ElementKind::Untyped);
    tree.append_text(a, " two");

    assert_eq!(
        tree.render(a, &RenderOptions::verbatim()),
        "<a>one <b/> two</a>"
    );
}

#[test]
fn test_fixed_settings_override_per_node_defaults() {
    let mut tree = Tree::new();
    let div = add(&mut tree, None, "div", ElementKind::Html);
    let span = add(&mut tree, Some(div), "span", ElementKind::Html);
    tree.append_text(span, "x");

    let two_wide = RenderOptions {
        preserve_whitespace: Setting::Fixed(false),
        allow_self_closing: Setting::Fixed(false),
        format: Setting::Fixed(true),
        tab_width: Setting::Fixed(2),
    };
    assert_eq!(tree.render(div, &two_wide), "<div>\n  <span>x</span>\n</div>");

    let unformatted = RenderOptions {
        format: Setting::Fixed(false),
        ..two_wide
    };
    assert_eq!(tree.render(div, &unformatted), "<div><span>x</span></div>");
}

#[test]
fn test_per_node_setting_resolution() {
    let pre = Node::new("pre", ElementKind::Html);
    let div = Node::new("div", ElementKind::Html);

    let by_name: Setting<bool> = Setting::PerNode(|node| node.name == "pre");
    assert!(by_name.resolve(&pre));
    assert!(!by_name.resolve(&div));
    assert!(!Setting::Fixed(false).resolve(&pre));
}

#[test]
fn test_block_text_reindents_at_nesting_depth() {
    let mut tree = Tree::new();
    let script = add(&mut tree, None, "script", ElementKind::Html);
    tree.append_text(script, "if (a < b) {\n    go();\n}");

    assert_eq!(
        tree.render(script, &RenderOptions::default()),
        "<script>\n    if (a < b) {\n        go();\n    }\n</script>"
    );
}

#[test]
fn test_mixed_children_each_on_own_line() {
    let mut tree = Tree::new();
    let div = add(&mut tree, None, "div", ElementKind::Html);
    tree.append_text(div, "lead");
    let span = add(&mut tree, Some(div), "span", ElementKind::Html);
    tree.append_text(span, "in");
    tree.append_text(div, "tail");

    assert_eq!(
        tree.render(div, &RenderOptions::default()),
        "<div>\n    lead\n    <span>in</span>\n    tail\n</div>"
    );
}

#[test]
fn test_display_renders_every_root() {
    let mut tree = Tree::new();
    tree.push_root_text("x");
    let b = add(&mut tree, None, "b", ElementKind::Html);
    tree.append_text(b, "bold");
    tree.push_root_text("y");

    assert_eq!(tree.to_string(), "x<b>bold</b>y");
}

#[test]
fn test_trim_blank_lines() {
    assert_eq!(trim_blank_lines("\n  \n  code\n  more\n\n"), "  code\n  more");
    assert_eq!(trim_blank_lines("   "), "");
    assert_eq!(trim_blank_lines(""), "");
    assert_eq!(trim_blank_lines("one"), "one");
    assert_eq!(trim_blank_lines("\r\n x\r\n"), " x");
    // Interior blank lines survive.
    assert_eq!(trim_blank_lines("a\n\nb"), "a\n\nb");
}
