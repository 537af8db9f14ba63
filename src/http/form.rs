// ABOUTME: Query-string and urlencoded form encoding, plus file-part bodies.
// ABOUTME: Keeps '/' unescaped in values so repository paths stay readable.

use bytes::Bytes;

use super::transport::RequestBody;

/// Percent-encode a query or form value, leaving `/` as is.
pub fn encode_value(value: &str) -> String {
    urlencoding::encode(value).replace("%2F", "/")
}

/// Render `key=value` pairs joined by `&`.
pub fn encode_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), encode_value(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Append an encoded query string to an endpoint path.
pub fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, encode_pairs(pairs))
    }
}

pub fn form(pairs: &[(&str, &str)]) -> RequestBody {
    RequestBody::Form(encode_pairs(pairs))
}

/// Single-file multipart body; the transport picks the boundary.
pub fn file_part(field: &str, file_name: &str, content: impl Into<Bytes>) -> RequestBody {
    RequestBody::File {
        field: field.to_string(),
        file_name: file_name.to_string(),
        content: content.into(),
    }
}
