//! Listing page builder.
//!
//! A single pass over the dataset index: every entry becomes one list item,
//! in the order the provider returned them. Nothing is filtered, deduplicated
//! or re-sorted here.

use crate::config::{BULK_JSON_ARCHIVE, BULK_TARBALL, PAGE_TITLE};
use crate::types::{DatasetIndex, LastModified, ListingEntry};

/// Escape a string for HTML text content and double-quoted attributes.
///
/// # Examples
/// ```
/// use gadi_site::page::escape_html;
///
/// assert_eq!(escape_html("A & B <i>"), "A &amp; B &lt;i&gt;");
/// assert_eq!(escape_html("Bürgerliches Gesetzbuch"), "Bürgerliches Gesetzbuch");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the complete page.
///
/// Pure function of its inputs: the same index and timestamp always produce
/// byte-identical output.
pub fn render_listing<E: ListingEntry>(
    index: &DatasetIndex<E>,
    last_modified: &LastModified,
) -> String {
    let title = escape_html(PAGE_TITLE);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"de\">\n");
    html.push_str("<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str("<main>\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));
    html.push_str(&format!(
        "<p>Zuletzt aktualisiert: <em>{}</em></p>\n",
        escape_html(last_modified.as_str())
    ));

    html.push_str("<p>Alle Gesetze als:</p>\n");
    html.push_str("<ul class=\"bulk\">\n");
    html.push_str(&bulk_item(
        BULK_JSON_ARCHIVE,
        "Große JSON-Datei",
        "all_laws.json.gz",
    ));
    html.push_str(&bulk_item(
        BULK_TARBALL,
        "Tarball mit einzelnen JSON-Dateien je Gesetz",
        "all_laws.tar.gz",
    ));
    html.push_str("</ul>\n");

    html.push_str("<p>Oder direkt hier zu den einzelnen JSON-Dateien:</p>\n");
    html.push_str("<ul class=\"laws\">\n");
    for (position, entry) in index.iter().enumerate() {
        if entry.identifier().is_empty() {
            tracing::warn!(position, text = %entry.link_text(), "Law entry without identifier");
        }
        html.push_str(&format!(
            "<li class=\"law\"><a href=\"{}\">{}</a></li>\n",
            escape_html(&entry.link_target()),
            escape_html(&entry.link_text())
        ));
    }
    html.push_str("</ul>\n");

    html.push_str("</main>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

fn bulk_item(href: &str, label: &str, file_name: &str) -> String {
    format!(
        "<li class=\"bulk\"><a href=\"{}\">{} (<code>{}</code>)</a></li>\n",
        escape_html(href),
        escape_html(label),
        escape_html(file_name)
    )
}
