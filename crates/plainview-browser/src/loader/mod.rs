//! Resource loading: turns a parsed [`Url`] into response text.
//!
//! Dispatch is purely on the locator's variant. Every call is a fresh,
//! independent attempt: no cache, no pooling, no retry.

pub mod data;
pub mod file;
pub mod http;

use plainview_net::tls::TlsProvider;
use plainview_types::error::{PlainviewError, Result};

use crate::url::Url;

pub use http::HttpResponse;

/// Fetch the payload behind `url`.
///
/// `tls` is required for `https` locators; without it they fail with a
/// TLS error rather than falling back to plain HTTP.
pub fn fetch(url: &Url, tls: Option<&dyn TlsProvider>, user_agent: &str) -> Result<String> {
    match url {
        Url::File { path } => file::read_file(path),
        Url::Data { raw } => data::decode_data_url(raw),
        Url::Http(target) => Ok(http::http_get(target, None, user_agent)?.body),
        Url::Https(target) => {
            let tls = tls.ok_or_else(|| {
                PlainviewError::Tls(format!(
                    "no TLS provider configured for https://{}",
                    target.host
                ))
            })?;
            Ok(http::http_get(target, Some(tls), user_agent)?.body)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{PassthroughTls, serve_once};

    const UA: &str = "plainview-test";

    #[test]
    fn data_locator_decodes_payload() {
        let url = Url::parse("data:text/plain,Hello").unwrap();
        assert_eq!(fetch(&url, None, UA).unwrap(), "Hello");
    }

    #[test]
    fn missing_file_is_not_found() {
        let url = Url::parse("file://localhost/no/such/dir/page.html").unwrap();
        let err = fetch(&url, None, UA).unwrap_err();
        assert!(matches!(err, PlainviewError::NotFound(_)));
    }

    #[test]
    fn http_locator_returns_body() {
        let (port, server) = serve_once(b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n<p>hi</p>");
        let url = Url::parse(&format!("http://127.0.0.1:{port}/index.html")).unwrap();
        assert_eq!(fetch(&url, None, UA).unwrap(), "<p>hi</p>");
        let request = server.join().unwrap();
        assert!(request.starts_with("GET /index.html HTTP/1.1\r\n"));
    }

    #[test]
    fn https_without_provider_fails() {
        let url = Url::parse("https://example.org/").unwrap();
        let err = fetch(&url, None, UA).unwrap_err();
        assert!(matches!(err, PlainviewError::Tls(_)));
        assert!(err.to_string().contains("no TLS provider"));
    }

    #[test]
    fn https_goes_through_the_provider() {
        let (port, server) = serve_once(b"HTTP/1.1 200 OK\r\n\r\nsecure");
        let url = Url::parse(&format!("https://127.0.0.1:{port}/")).unwrap();
        let provider = PassthroughTls::default();
        assert_eq!(fetch(&url, Some(&provider), UA).unwrap(), "secure");
        assert_eq!(provider.server_names(), vec!["127.0.0.1".to_string()]);
        server.join().unwrap();
    }
}
