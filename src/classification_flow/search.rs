use crate::config::SearchConfig;

pub const SEARCH_DIALOG_TITLE: &str = "Search the web";

/// Model labels use underscores between words.
pub fn display_label(label: &str) -> String {
    label.replace('_', " ")
}

pub fn search_prompt(config: &SearchConfig, label: &str) -> String {
    format!(
        "Search for \"{} {}\"?",
        config.query_prefix,
        display_label(label)
    )
}

pub fn search_url(config: &SearchConfig, label: &str) -> String {
    let query = format!("{} {}", config.query_prefix, display_label(label));
    format!(
        "https://{}/search?q={}",
        config.host,
        encode_query_component(&query)
    )
}

/// Percent-encodes everything outside the RFC 3986 unreserved set. Spaces become `%20`.
pub fn encode_query_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
