//! HTML sanitization for free-text fields.
//!
//! Input is parsed as an HTML fragment and re-serialized, keeping plain
//! text and harmless formatting while removing anything that can execute
//! or load content: script-like elements (with their content), event
//! handler attributes, and `javascript:`-style URLs.

use scraper::{ElementRef, Html, Node};

/// Elements removed together with everything inside them.
const DROP_WITH_CONTENT: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "noscript", "template", "frame", "frameset",
    "applet", "base", "link", "meta", "title", "svg", "math",
];

/// Elements kept as markup. Anything else is unwrapped to its children.
const ALLOWED_ELEMENTS: &[&str] = &[
    "a", "b", "i", "em", "strong", "u", "s", "p", "br", "span", "div", "ul", "ol", "li", "code",
    "pre", "small", "sub", "sup", "blockquote", "h1", "h2", "h3", "h4", "h5", "h6",
];

const VOID_ELEMENTS: &[&str] = &["br"];

const ALLOWED_ATTRIBUTES: &[&str] = &["href", "title", "alt", "class", "id", "lang", "dir"];

const URL_ATTRIBUTES: &[&str] = &["href", "src", "action", "formaction", "xlink:href"];

const UNSAFE_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Strip executable markup from `input`, preserving its text.
///
/// Text content is entity-encoded (`&`, `<`, `>`) the way an HTML
/// serializer writes it. Input without any markup-significant character is
/// returned unchanged. Input that does get parsed has its line endings
/// normalized (`\r\n` and lone `\r` become `\n`), so only that path loses
/// carriage returns.
pub fn sanitize(input: &str) -> String {
    if !input.contains(['<', '>', '&']) {
        return input.to_string();
    }

    let fragment = Html::parse_fragment(input);
    let mut out = String::with_capacity(input.len());
    write_children(fragment.root_element(), &mut out);
    out
}

fn write_children(parent: ElementRef<'_>, out: &mut String) {
    for child in parent.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&html_escape::encode_text(&**text)),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    write_element(element, out);
                }
            }
            // comments, doctypes, processing instructions
            _ => {}
        }
    }
}

fn write_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();

    if DROP_WITH_CONTENT.contains(&name) {
        log::trace!("[sanitize] dropping <{}> with content", name);
        return;
    }

    if !ALLOWED_ELEMENTS.contains(&name) {
        log::trace!("[sanitize] unwrapping <{}>", name);
        write_children(element, out);
        return;
    }

    out.push('<');
    out.push_str(name);
    for (attr, value) in element.value().attrs() {
        if is_safe_attribute(attr, value) {
            out.push(' ');
            out.push_str(attr);
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
            out.push('"');
        } else {
            log::trace!("[sanitize] dropping attribute {} on <{}>", attr, name);
        }
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    write_children(element, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn is_safe_attribute(name: &str, value: &str) -> bool {
    let name = name.to_ascii_lowercase();
    if name.starts_with("on") {
        return false;
    }
    if URL_ATTRIBUTES.contains(&name.as_str()) && has_unsafe_scheme(value) {
        return false;
    }
    ALLOWED_ATTRIBUTES.contains(&name.as_str())
}

/// Browsers ignore whitespace and control characters inside a scheme, so
/// `java\tscript:` must be caught too.
fn has_unsafe_scheme(value: &str) -> bool {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    UNSAFE_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}
