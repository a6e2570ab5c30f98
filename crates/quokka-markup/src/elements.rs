//! Hand-curated HTML element tables for the HTML-aware builder.
//!
//! Lookups are ASCII case-sensitive against lowercase names: `<BR>` is an
//! untyped element here, consistent with the case-sensitive closing-tag
//! rule of the grammar.

use quokka_dom::ElementKind;

/// Recognized HTML element names, sorted for binary search.
const HTML_ELEMENTS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
    "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col", "colgroup",
    "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl", "dt", "em", "embed",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "head", "header", "hgroup", "hr", "html", "i", "iframe", "img", "input", "ins", "kbd", "label",
    "legend", "li", "link", "main", "map", "mark", "menu", "meta", "meter", "nav", "noscript",
    "object", "ol", "optgroup", "option", "output", "p", "param", "picture", "pre", "progress",
    "q", "rp", "rt", "ruby", "s", "samp", "script", "search", "section", "select", "slot", "small",
    "source", "span", "strong", "style", "sub", "summary", "sup", "table", "tbody", "td",
    "template", "textarea", "tfoot", "th", "thead", "time", "title", "tr", "track", "u", "ul",
    "var", "video", "wbr",
];

/// The void subset, childless by definition.
///
/// Per [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements):
/// "Void elements only have a start tag; end tags must not be specified for
/// void elements."
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is captured as raw text, never parsed as markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Check membership in the recognized HTML set.
pub(crate) fn is_recognized(name: &str) -> bool {
    HTML_ELEMENTS.binary_search(&name).is_ok()
}

/// Check membership in the void subset.
pub(crate) fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.binary_search(&name).is_ok()
}

/// Check membership in the raw-text subset.
pub(crate) fn is_raw_text(name: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&name)
}

/// Classify a tag name for the node's kind tag.
pub(crate) fn classify(name: &str) -> ElementKind {
    if is_void(name) {
        ElementKind::Void
    } else if is_recognized(name) {
        ElementKind::Html
    } else {
        ElementKind::Untyped
    }
}
