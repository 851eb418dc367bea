//! Locator parsing.
//!
//! Turns a locator string into a [`Url`], a sum type over the four
//! supported schemes. Each variant carries only the fields that make sense
//! for it: network locators have a host, port and absolute path, `file`
//! locators a filesystem path, and `data` locators their raw text.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use plainview_types::error::{PlainviewError, Result};

/// Default port for `http` (and `file`, where it is unused).
pub const HTTP_PORT: u16 = 80;

/// Default port for `https`.
pub const HTTPS_PORT: u16 = 443;

/// The scheme of a parsed [`Url`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
    File,
    Data,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
            Scheme::File => "file",
            Scheme::Data => "data",
        }
    }
}

/// Addressing for an `http` or `https` locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTarget {
    pub host: String,
    pub port: u16,
    /// Request path; always starts with `/`.
    pub path: String,
}

/// A parsed locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Url {
    Http(HttpTarget),
    Https(HttpTarget),
    /// A local file. The path is taken verbatim from after the host part.
    File { path: PathBuf },
    /// An inline `data:` locator, kept verbatim, prefix included.
    Data { raw: String },
}

impl Url {
    /// Parse a locator string.
    ///
    /// Anything starting with `data` is an opaque inline locator. Otherwise
    /// the string must be `scheme://rest` with a scheme of `http`, `https`
    /// or `file`; `rest` is split into `host[:port]` and a path at the
    /// first `/`.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.starts_with("data") {
            return Ok(Url::Data {
                raw: raw.to_string(),
            });
        }

        let (scheme, rest) = raw.split_once("://").ok_or_else(|| {
            PlainviewError::MalformedLocator(format!("no scheme separator in {raw:?}"))
        })?;

        let scheme = match scheme {
            "http" => Scheme::Http,
            "https" => Scheme::Https,
            "file" => Scheme::File,
            other => {
                return Err(PlainviewError::MalformedLocator(format!(
                    "unsupported scheme {other:?}"
                )));
            },
        };

        // A host-only locator behaves as if it ended in `/`.
        let (host_part, path_part) = rest.split_once('/').unwrap_or((rest, ""));

        // The port is checked for every scheme, even though `file` ignores it.
        let (host, port) = match host_part.split_once(':') {
            Some((host, port)) => {
                let port = port.parse::<u16>().map_err(|_| {
                    PlainviewError::MalformedLocator(format!("bad port {port:?} in {raw:?}"))
                })?;
                (host, Some(port))
            },
            None => (host_part, None),
        };

        if scheme == Scheme::File {
            return Ok(Url::File {
                path: PathBuf::from(path_part),
            });
        }

        let port = port.unwrap_or(if scheme == Scheme::Https {
            HTTPS_PORT
        } else {
            HTTP_PORT
        });
        if host.is_empty() {
            return Err(PlainviewError::MalformedLocator(format!(
                "missing host in {raw:?}"
            )));
        }

        let target = HttpTarget {
            host: host.to_string(),
            port,
            path: format!("/{path_part}"),
        };
        Ok(match scheme {
            Scheme::Https => Url::Https(target),
            _ => Url::Http(target),
        })
    }

    pub fn scheme(&self) -> Scheme {
        match self {
            Url::Http(_) => Scheme::Http,
            Url::Https(_) => Scheme::Https,
            Url::File { .. } => Scheme::File,
            Url::Data { .. } => Scheme::Data,
        }
    }

    /// Network addressing, for `http` and `https` locators.
    pub fn target(&self) -> Option<&HttpTarget> {
        match self {
            Url::Http(target) | Url::Https(target) => Some(target),
            _ => None,
        }
    }

    pub fn host(&self) -> Option<&str> {
        self.target().map(|t| t.host.as_str())
    }

    pub fn port(&self) -> Option<u16> {
        self.target().map(|t| t.port)
    }

    /// Request path for network locators, filesystem path for `file`.
    pub fn path(&self) -> Option<&str> {
        match self {
            Url::Http(target) | Url::Https(target) => Some(&target.path),
            Url::File { path } => path.to_str(),
            Url::Data { .. } => None,
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Url::File { path } => Some(path),
            _ => None,
        }
    }
}

impl FromStr for Url {
    type Err = PlainviewError;

    fn from_str(s: &str) -> Result<Self> {
        Url::parse(s)
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Url::Http(t) | Url::Https(t) => {
                let default_port = if self.scheme() == Scheme::Https {
                    HTTPS_PORT
                } else {
                    HTTP_PORT
                };
                write!(f, "{}://{}", self.scheme().as_str(), t.host)?;
                if t.port != default_port {
                    write!(f, ":{}", t.port)?;
                }
                write!(f, "{}", t.path)
            },
            Url::File { path } => write!(f, "file:///{}", path.display()),
            Url::Data { raw } => write!(f, "{raw}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn host_only_gets_root_path() {
        let url = Url::parse("http://example.org").unwrap();
        assert_eq!(url.scheme(), Scheme::Http);
        assert_eq!(url.host(), Some("example.org"));
        assert_eq!(url.port(), Some(80));
        assert_eq!(url.path(), Some("/"));
    }

    #[test]
    fn explicit_port_overrides_default() {
        let url = Url::parse("https://example.org:8443/a/b").unwrap();
        assert_eq!(url.scheme(), Scheme::Https);
        assert_eq!(url.host(), Some("example.org"));
        assert_eq!(url.port(), Some(8443));
        assert_eq!(url.path(), Some("/a/b"));
    }

    #[test]
    fn https_defaults_to_443() {
        let url = Url::parse("https://example.org/index.html").unwrap();
        assert_eq!(url.port(), Some(443));
        assert_eq!(url.path(), Some("/index.html"));
    }

    #[test]
    fn path_keeps_query_verbatim() {
        let url = Url::parse("http://example.org/search?q=rust#top").unwrap();
        assert_eq!(url.path(), Some("/search?q=rust#top"));
    }

    #[test]
    fn file_path_is_verbatim_after_host_part() {
        let url = Url::parse("file://localhost/notes/today.html").unwrap();
        assert_eq!(url.scheme(), Scheme::File);
        assert_eq!(url.file_path(), Some(Path::new("notes/today.html")));
        assert_eq!(url.host(), None);
        assert_eq!(url.port(), None);
    }

    #[test]
    fn file_with_empty_host_drops_first_slash() {
        let url = Url::parse("file:///temp/test.html").unwrap();
        assert_eq!(url.file_path(), Some(Path::new("temp/test.html")));
    }

    #[test]
    fn data_keeps_whole_string() {
        let url = Url::parse("data:text/plain,Hello").unwrap();
        assert_eq!(url.scheme(), Scheme::Data);
        assert_eq!(
            url,
            Url::Data {
                raw: "data:text/plain,Hello".to_string()
            }
        );
        assert_eq!(url.path(), None);
    }

    #[test]
    fn unknown_scheme_rejected() {
        let err = Url::parse("ftp://example.org/file").unwrap_err();
        assert!(matches!(err, PlainviewError::MalformedLocator(_)));
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn missing_separator_rejected() {
        assert!(matches!(
            Url::parse("example.org/index.html"),
            Err(PlainviewError::MalformedLocator(_))
        ));
        assert!(Url::parse("").is_err());
    }

    #[test]
    fn bad_port_rejected() {
        let err = Url::parse("http://example.org:http/").unwrap_err();
        assert!(err.to_string().contains("bad port"));
        assert!(Url::parse("http://example.org:99999/").is_err());
        assert!(Url::parse("http://example.org:/").is_err());
    }

    #[test]
    fn file_port_is_checked_then_ignored() {
        let err = Url::parse("file://host:abc/x").unwrap_err();
        assert!(err.to_string().contains("bad port"));

        let url = Url::parse("file://host:8080/x").unwrap();
        assert_eq!(url.file_path(), Some(Path::new("x")));
        assert_eq!(url.port(), None);
    }

    #[test]
    fn empty_host_rejected() {
        assert!(Url::parse("http:///path").is_err());
        assert!(Url::parse("https://:8443/").is_err());
    }

    #[test]
    fn scheme_is_case_sensitive() {
        assert!(Url::parse("HTTP://example.org/").is_err());
    }

    #[test]
    fn from_str_matches_parse() {
        let url: Url = "http://example.org:8080/x".parse().unwrap();
        assert_eq!(url, Url::parse("http://example.org:8080/x").unwrap());
    }

    #[test]
    fn display_omits_default_port() {
        let url = Url::parse("http://example.org:80/a").unwrap();
        assert_eq!(url.to_string(), "http://example.org/a");
        let url = Url::parse("https://example.org:8443/a").unwrap();
        assert_eq!(url.to_string(), "https://example.org:8443/a");
        let url = Url::parse("http://example.org").unwrap();
        assert_eq!(url.to_string(), "http://example.org/");
    }

    #[test]
    fn display_of_file_and_data() {
        let url = Url::parse("file://host/a/b.html").unwrap();
        assert_eq!(url.to_string(), "file:///a/b.html");
        assert_eq!(Url::parse(&url.to_string()).unwrap(), url);

        let url = Url::parse("data:,x").unwrap();
        assert_eq!(url.to_string(), "data:,x");
    }

    proptest! {
        #[test]
        fn network_locators_round_trip(
            https in any::<bool>(),
            host in "[a-z][a-z0-9-]{0,15}(\\.[a-z]{2,6}){0,2}",
            port in proptest::option::of(1u16..),
            path in "(/[A-Za-z0-9._~-]{0,8}){0,4}",
        ) {
            let scheme = if https { "https" } else { "http" };
            let mut raw = format!("{scheme}://{host}");
            if let Some(port) = port {
                raw.push_str(&format!(":{port}"));
            }
            raw.push_str(&path);

            let url = Url::parse(&raw).unwrap();
            let expected_path = if path.is_empty() { "/" } else { path.as_str() };
            prop_assert_eq!(url.host(), Some(host.as_str()));
            prop_assert_eq!(url.path(), Some(expected_path));
            prop_assert_eq!(Url::parse(&url.to_string()).unwrap(), url);
        }
    }
}
