//! Shelf definition stub.

const SHELF_COMMENT: &str = "<!-- This file contains definitions of shelves, toolbars, and tools.
 It should not be hand-edited when it is being used by the application.
 Note, that two definitions of the same element are not allowed in
 a single file. -->";

/// Render an empty shelf document with one `toolshelf` element.
pub fn render_shelf(name: &str, label: &str) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<shelfDocument>\n");
    out.push_str("  ");
    out.push_str(SHELF_COMMENT);
    out.push('\n');
    out.push_str(&format!(
        "  <toolshelf name=\"{}\" label=\"{}\">\n",
        escape_attr(name),
        escape_attr(label)
    ));
    out.push_str("  </toolshelf>\n");
    out.push_str("</shelfDocument>\n");
    out
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
