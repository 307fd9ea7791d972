//! Query parameter extraction for submit links

/// Query parameters of `url` as ordered `(name, value)` pairs.
///
/// The whole URL is percent-decoded first. Returns `None` for an empty
/// URL, the literal `"undefined"`, or a URL without a query string. Pairs
/// without `=` are skipped.
pub fn url_params(url: &str) -> Option<Vec<(String, String)>> {
    if url.is_empty() || url == "undefined" {
        return None;
    }

    let decoded = urlencoding::decode(url)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| url.to_string());

    let (_, query) = decoded.split_once('?')?;
    let params = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    Some(params)
}
