use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A short code identifier for a shortened URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortCode(String);

impl ShortCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_inner() {
        let code = ShortCode::new("abc12");
        assert_eq!(code.to_string(), "abc12");
        assert_eq!(code.as_str(), "abc12");
    }

    #[test]
    fn to_url_joins_base() {
        let code = ShortCode::new("abc12");
        assert_eq!(code.to_url("http://localhost:8080"), "http://localhost:8080/abc12");
        assert_eq!(code.to_url("http://localhost:8080/"), "http://localhost:8080/abc12");
    }
}
