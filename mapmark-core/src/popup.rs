// Popup HTML assembly for marker records

use crate::model::MarkerRecord;

const HEADING_START: &str = "<h3 style='text-align:center;'>";
const HEADING_END: &str = "</h3>";
const LINK_START: &str = "<p style='text-align:center;'><a href='";
const WIKI_LINK_END: &str = "' target='_blank'>~ Wiki ~</a></p>";
const SITE_LINK_END: &str = "' target='_blank'>~ WWW ~</a></p>";
const TEXT_START: &str = "<p style='text-align:center;font-size:larger;'>";
const TEXT_END: &str = "</p>";
const IMAGE_START: &str = "<img style='border-radius:0.3rem;max-width:35vw;' src='";
const IMAGE_END: &str = "'>";

/// Build the popup body for a marker.
///
/// Each fragment is included on its own test: the wiki link when it is set
/// and not `"None"`, the description text and site link together when a
/// site link is set. Heading and image are always present.
///
/// `name_code` and `text` are inserted as authored so data files can carry
/// inline markup such as `<br>`. Link and image URLs only have their quote
/// escaped, which keeps them inside the attribute.
pub fn build_popup(record: &MarkerRecord) -> String {
    let mut html = String::new();

    html.push_str(HEADING_START);
    html.push_str(&record.name_code);
    html.push_str(HEADING_END);

    if record.has_wiki_link() {
        html.push_str(LINK_START);
        html.push_str(&escape_attribute(&record.wiki_link));
        html.push_str(WIKI_LINK_END);
    }

    if record.has_site_link() {
        html.push_str(TEXT_START);
        html.push_str(&record.text);
        html.push_str(TEXT_END);

        html.push_str(LINK_START);
        html.push_str(&escape_attribute(&record.site_link));
        html.push_str(SITE_LINK_END);
    }

    html.push_str(IMAGE_START);
    html.push_str(&escape_attribute(&record.img_url));
    html.push_str(IMAGE_END);

    html
}

// Values sit between single quotes; anything else stays byte-for-byte
fn escape_attribute(value: &str) -> String {
    value.replace('\'', "&#39;")
}

/// Escape text for use in element content or a single-quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
