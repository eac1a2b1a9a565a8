//! TOML string escaping.

/// Escape `value` for use inside a double-quoted TOML string.
///
/// Backslash goes first so later substitutions are not escaped twice.
pub fn escape_toml_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Render `key` as a dotted-key segment, quoting it unless it is a bare key.
pub fn key_segment(key: &str) -> String {
    let bare = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        key.to_string()
    } else {
        format!("\"{}\"", escape_toml_string(key))
    }
}
