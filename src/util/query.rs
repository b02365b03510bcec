//! Query-string encoding and parsing

use thiserror::Error;

/// Errors from [`parse_query_string`].
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("invalid percent-encoding in query component: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),
}

/// Serialize key/value pairs into a percent-encoded query string.
///
/// Preserves pair order; no leading `?`.
pub fn to_query_string<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a percent-encoded query string into key/value pairs.
///
/// Accepts an optional leading `?`. A component without `=` parses as a key
/// with an empty value; empty components are skipped. Later duplicate keys
/// are kept as separate pairs.
pub fn parse_query_string(query: &str) -> Result<Vec<(String, String)>, QueryError> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut pairs = Vec::new();
    for component in query.split('&') {
        if component.is_empty() {
            continue;
        }
        let (key, value) = component.split_once('=').unwrap_or((component, ""));
        pairs.push((
            urlencoding::decode(key)?.into_owned(),
            urlencoding::decode(value)?.into_owned(),
        ));
    }
    Ok(pairs)
}
