//! Absolute URI construction with percent-encoded path variables and query
//! values.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything outside RFC 3986 "unreserved" gets encoded, so a space becomes
/// `%20` and `&`, `=`, `/` cannot leak into the structure of the URI.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Builds `base + path + ?query`.
///
/// The base address is not validated; a malformed one only fails when the
/// request is sent.
#[derive(Debug, Clone)]
pub struct UriBuilder {
    base: String,
    path: String,
    query: Vec<(String, String)>,
}

impl UriBuilder {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            path: String::new(),
            query: Vec::new(),
        }
    }

    /// Append a literal path. It is taken as-is and must already be valid.
    pub fn path(mut self, path: &str) -> Self {
        if !path.starts_with('/') {
            self.path.push('/');
        }
        self.path.push_str(path.trim_end_matches('/'));
        self
    }

    /// Append one encoded path segment.
    pub fn path_var(mut self, value: &str) -> Self {
        self.path.push('/');
        self.path.extend(utf8_percent_encode(value, COMPONENT));
        self
    }

    pub fn query_param(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Like `query_param`, but `None` leaves the parameter out entirely.
    pub fn optional_query_param(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.query_param(name, value),
            None => self,
        }
    }

    pub fn build(&self) -> String {
        let mut uri = format!("{}{}", self.base, self.path);
        for (i, (name, value)) in self.query.iter().enumerate() {
            uri.push(if i == 0 { '?' } else { '&' });
            uri.extend(utf8_percent_encode(name, COMPONENT));
            uri.push('=');
            uri.extend(utf8_percent_encode(value, COMPONENT));
        }
        uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_path_and_single_query() {
        let uri = UriBuilder::new("http://localhost:7070")
            .path("/api/server/get-call-obj")
            .query_param("query", "foo")
            .build();
        assert_eq!(uri, "http://localhost:7070/api/server/get-call-obj?query=foo");
    }

    #[test]
    fn encodes_spaces_and_reserved_characters() {
        let uri = UriBuilder::new("http://localhost:7070")
            .path("/search")
            .query_param("query", "a b&c=d/é")
            .build();
        assert_eq!(uri, "http://localhost:7070/search?query=a%20b%26c%3Dd%2F%C3%A9");
    }

    #[test]
    fn missing_optional_param_is_omitted() {
        let uri = UriBuilder::new("http://localhost:7070")
            .path("/api/server/get-call-obj")
            .optional_query_param("query", None)
            .build();
        assert_eq!(uri, "http://localhost:7070/api/server/get-call-obj");
    }

    #[test]
    fn multiple_params_keep_insertion_order() {
        let uri = UriBuilder::new("https://openapi.naver.com/")
            .path("v1/search/shop.json")
            .query_param("display", 15)
            .query_param("query", "mac")
            .build();
        assert_eq!(uri, "https://openapi.naver.com/v1/search/shop.json?display=15&query=mac");
    }

    #[test]
    fn path_var_is_encoded_as_one_segment() {
        let uri = UriBuilder::new("http://localhost:7070")
            .path("/api/server/post-call")
            .path_var("Air Pods/2")
            .build();
        assert_eq!(uri, "http://localhost:7070/api/server/post-call/Air%20Pods%2F2");
    }

    #[test]
    fn base_address_is_not_validated() {
        let uri = UriBuilder::new("not a url").path("/x").build();
        assert_eq!(uri, "not a url/x");
    }
}
