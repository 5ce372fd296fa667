//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use std::fmt;
use url::Url;

/// Base URL of the records listing endpoint.
///
/// Only `http` and `https` endpoints are accepted. Any query already present
/// on the URL is kept; paging parameters are appended after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(Url);

impl Endpoint {
    const SCHEMES: &'static [&'static str] = &["http", "https"];

    /// Parses an endpoint, trimming surrounding whitespace first.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::EmptyField("endpoint"));
        }

        let invalid = |reason: String| ValidationError::InvalidUrl {
            url: raw.to_string(),
            reason,
        };

        let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if !Self::SCHEMES.contains(&url.scheme()) {
            return Err(invalid(format!(
                "scheme '{}' is not served, expected http or https",
                url.scheme()
            )));
        }
        if url.cannot_be_a_base() || url.host().is_none() {
            return Err(invalid("endpoint has no host".to_string()));
        }

        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_accepts_http_and_https() {
        assert!(Endpoint::parse("http://localhost:3000/records").is_ok());
        assert!(Endpoint::parse(" https://api.example.com/records ").is_ok());
    }

    #[test]
    fn test_endpoint_rejects_other_schemes() {
        let err = Endpoint::parse("ftp://example.com/records").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUrl { .. }));
    }

    #[test]
    fn test_endpoint_rejects_empty_and_garbage() {
        assert!(matches!(
            Endpoint::parse("  "),
            Err(ValidationError::EmptyField("endpoint"))
        ));
        assert!(Endpoint::parse("not a url").is_err());
    }
}
