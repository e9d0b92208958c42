//! Tests for HTML sanitization.

use regform::sanitize::sanitize;

#[test]
fn test_plain_text_is_unchanged() {
    for text in ["", "Jo", "jo@example.com", "  spaced  out  ", "O'Brien \"Jr\"", "Zoë 😀"] {
        assert_eq!(sanitize(text), text);
    }
}

#[test]
fn test_script_is_removed_with_content() {
    assert_eq!(sanitize("<script>alert(1)</script>"), "");
    assert_eq!(sanitize("Jo<script>alert(1)</script>"), "Jo");
    assert_eq!(sanitize("<SCRIPT src=\"x.js\"></SCRIPT>Jo"), "Jo");
}

#[test]
fn test_embedding_elements_are_removed() {
    assert_eq!(sanitize("<iframe src=\"https://evil.example\"></iframe>Jo"), "Jo");
    assert_eq!(sanitize("<style>body{display:none}</style>Jo"), "Jo");
    assert_eq!(sanitize("<svg onload=\"alert(1)\"><circle/></svg>Jo"), "Jo");
}

#[test]
fn test_event_handlers_are_removed() {
    assert_eq!(sanitize("<b onclick=\"steal()\">Jo</b>"), "<b>Jo</b>");
    assert_eq!(sanitize("<img src=x onerror=alert(1)>"), "");
}

#[test]
fn test_javascript_urls_are_removed() {
    assert_eq!(
        sanitize("<a href=\"javascript:alert(1)\">Jo</a>"),
        "<a>Jo</a>"
    );
    assert_eq!(
        sanitize("<a href=\" JaVaScRiPt:alert(1)\">Jo</a>"),
        "<a>Jo</a>"
    );
}

#[test]
fn test_safe_markup_is_kept() {
    assert_eq!(sanitize("<p>Hello <i>world</i></p>"), "<p>Hello <i>world</i></p>");
    assert_eq!(
        sanitize("<a href=\"https://example.com\">Jo</a>"),
        "<a href=\"https://example.com\">Jo</a>"
    );
    assert_eq!(sanitize("line<br>break"), "line<br>break");
}

#[test]
fn test_unknown_elements_are_unwrapped() {
    assert_eq!(sanitize("<custom-tag>Jo</custom-tag>"), "Jo");
    assert_eq!(sanitize("<form><input value=\"x\">Jo</form>"), "Jo");
}

#[test]
fn test_comments_are_removed() {
    assert_eq!(sanitize("<!-- hidden -->Jo"), "Jo");
}

#[test]
fn test_text_is_entity_encoded() {
    assert_eq!(sanitize("Tom & Jerry"), "Tom &amp; Jerry");
    assert_eq!(sanitize("1 < 2"), "1 &lt; 2");
    assert_eq!(sanitize("&lt;script&gt;"), "&lt;script&gt;");
}

#[test]
fn test_line_endings_depend_on_markup() {
    assert_eq!(sanitize("Jo\r\nco"), "Jo\r\nco");
    assert_eq!(sanitize("Jo\r\n& co"), "Jo\n&amp; co");
}
