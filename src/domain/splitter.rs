//! Split a URL into domain name and extension

use crate::error::Result;
use crate::split_error;
use crate::types::Label;
use regex::Regex;

/// Leading `scheme://` prefix
const PROTOCOL_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9+.\-]*://";

/// Domain label, the first dot, then the extension up to the first character
/// that cannot appear in a host name
const SPLIT_PATTERN: &str = r"^(?P<domain>[A-Za-z0-9-]*)(?P<sep>.?)(?P<extension>[A-Za-z0-9.]*)";

/// Regex-backed URL splitter
#[derive(Debug, Clone)]
pub struct UrlSplitter {
    protocol: Regex,
    split: Regex,
}

impl UrlSplitter {
    /// Create a new splitter
    pub fn new() -> Result<Self> {
        Ok(Self {
            protocol: Regex::new(PROTOCOL_PATTERN)?,
            split: Regex::new(SPLIT_PATTERN)?,
        })
    }

    /// Strip a leading `scheme://` if present
    pub fn trim_protocol<'a>(&self, url: &'a str) -> &'a str {
        match self.protocol.find(url) {
            Some(m) => &url[m.end()..],
            None => url,
        }
    }

    /// Split `url` into its domain label and extension
    pub fn split(&self, url: &str) -> Result<(Label, Label)> {
        let caps = self
            .split
            .captures(url)
            .ok_or_else(|| split_error!(url, "URL does not look like label.extension"))?;

        let domain = caps.name("domain").map_or("", |m| m.as_str());
        let sep = caps.name("sep").map_or("", |m| m.as_str());
        let extension = caps.name("extension").map_or("", |m| m.as_str());

        if domain.is_empty() {
            return Err(split_error!(url, "domain name is empty"));
        }
        if sep != "." {
            return Err(split_error!(url, "missing '.' after domain name"));
        }
        if extension.is_empty() || extension.starts_with('.') || extension.ends_with('.') {
            return Err(split_error!(url, "extension '{}' is empty or malformed", extension));
        }

        tracing::debug!(url = %url, domain = %domain, extension = %extension, "Split URL");

        Ok((Label::new(domain)?, Label::new(extension)?))
    }
}

/// Strip a leading `scheme://` from `url`
pub fn trim_protocol(url: &str) -> Result<&str> {
    Ok(UrlSplitter::new()?.trim_protocol(url))
}

/// Split `url` into domain label and extension
pub fn split_url(url: &str) -> Result<(Label, Label)> {
    UrlSplitter::new()?.split(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BitsquatError;

    fn split(url: &str) -> (String, String) {
        let (d, e) = split_url(url).unwrap();
        (d.into_string(), e.into_string())
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(split("foobar.com"), ("foobar".into(), "com".into()));
        assert_eq!(split("my-site.io"), ("my-site".into(), "io".into()));
    }

    #[test]
    fn test_multi_part_extension() {
        assert_eq!(split("bbc.co.uk"), ("bbc".into(), "co.uk".into()));
    }

    #[test]
    fn test_stops_at_path_and_port() {
        assert_eq!(split("example.com/login?x=1"), ("example".into(), "com".into()));
        assert_eq!(split("example.org:8080"), ("example".into(), "org".into()));
    }

    #[test]
    fn test_split_errors() {
        for bad in ["", "nodot", ".com", "foo.", "foo..com", "foo/bar.com", "foo.com."] {
            assert!(
                matches!(split_url(bad), Err(BitsquatError::Split { .. })),
                "{:?} should fail",
                bad
            );
        }
    }

    #[test]
    fn test_trim_protocol() {
        assert_eq!(trim_protocol("https://foobar.com").unwrap(), "foobar.com");
        assert_eq!(trim_protocol("http://foobar.com/x").unwrap(), "foobar.com/x");
        assert_eq!(trim_protocol("foobar.com").unwrap(), "foobar.com");
        assert_eq!(trim_protocol("git+ssh://host.dev").unwrap(), "host.dev");
    }
}
