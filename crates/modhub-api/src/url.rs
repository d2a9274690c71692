//! Module URL builder.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in path segments and query components. Everything
/// except the RFC 3986 unreserved set.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Builds absolute URLs to module-relative resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base: String,
}

impl UrlBuilder {
    /// Creates a builder. Trailing `/` on `base` is ignored.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the base URL without a trailing `/`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns `{base}/modules/{module}/{resource}?{query}`.
    ///
    /// Leading `/` on `resource` is stripped. Query pairs are encoded in
    /// the order given; an empty query adds no `?`.
    pub fn module_url(&self, module: &str, resource: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}/modules/{}",
            self.base,
            utf8_percent_encode(module, COMPONENT)
        );

        let resource = resource.trim_start_matches('/');
        if !resource.is_empty() {
            url.push('/');
            url.push_str(resource);
        }

        if !query.is_empty() {
            url.push('?');
            url.push_str(&encode_query(query));
        }
        url
    }
}

/// Encodes `key=value` pairs joined by `&`, preserving order.
pub fn encode_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, COMPONENT),
                utf8_percent_encode(value, COMPONENT)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
