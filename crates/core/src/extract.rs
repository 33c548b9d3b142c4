use regex::Regex;

/// Convert an HTML document into plain, whitespace-normalized text.
///
/// The pipeline runs in a fixed order, each step operating on the output of
/// the previous one: script blocks, style blocks, remaining tags, whitespace
/// collapsing, then entity decoding. Only five entities are decoded; anything
/// else is left untouched.
pub fn extract_text(html: &str) -> String {
    let text = remove_tag_blocks(html, "script");
    let text = remove_tag_blocks(&text, "style");
    let text = strip_tags(&text);
    let text = collapse_whitespace(&text);
    decode_entities(&text)
}

/// Remove whole `<tag>...</tag>` blocks, case-insensitive, across newlines
fn remove_tag_blocks(html: &str, tag: &str) -> String {
    let re = Regex::new(&format!(r"(?is)<{tag}[^>]*>.*?</{tag}>")).unwrap();
    re.replace_all(html, "").to_string()
}

/// Replace every remaining tag with a single space
fn strip_tags(html: &str) -> String {
    let re = Regex::new(r"<[^>]*>").unwrap();
    re.replace_all(html, " ").to_string()
}

/// Collapse consecutive whitespace (including newlines) into one space
fn collapse_whitespace(text: &str) -> String {
    let re = Regex::new(r"\s+").unwrap();
    re.replace_all(text, " ").trim().to_string()
}

/// Decode the five supported HTML entities, in a fixed order
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
}
