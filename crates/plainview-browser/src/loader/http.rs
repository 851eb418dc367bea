//! Minimal HTTP/1.1 GET client.
//!
//! One connection per request, `Connection: close`, body read until the
//! server hangs up. Plain HTTP goes straight over TCP; HTTPS wraps the
//! socket with whatever [`TlsProvider`] the caller supplies.

use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, Read, Write};

use plainview_net::StdNetworkStream;
use plainview_net::tls::TlsProvider;
use plainview_types::error::{PlainviewError, Result};
use plainview_types::stream::NetworkStream;

use crate::url::HttpTarget;

/// Response headers this client refuses, since it cannot decode them.
const UNSUPPORTED_HEADERS: [&str; 2] = ["transfer-encoding", "content-encoding"];

/// A parsed HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// Protocol version from the status line (e.g. `HTTP/1.1`).
    pub version: String,
    pub status_code: u16,
    /// Reason phrase; empty if the server sent none.
    pub reason: String,
    /// Headers keyed by lower-cased name. On duplicates the last one wins.
    pub headers: HashMap<String, String>,
    /// Everything after the blank line, up to connection close.
    pub body: String,
}

impl HttpResponse {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }
}

/// Perform a GET for `target`, over TLS when `tls` is given.
///
/// The connection is closed before returning. On an error after connect,
/// the socket is dropped with the stream, which closes it.
pub fn http_get(
    target: &HttpTarget,
    tls: Option<&dyn TlsProvider>,
    user_agent: &str,
) -> Result<HttpResponse> {
    let stream: Box<dyn NetworkStream> =
        Box::new(StdNetworkStream::connect(&target.host, target.port)?);
    let stream = match tls {
        Some(provider) => provider.connect_tls(stream, &target.host)?,
        None => stream,
    };

    log::debug!(
        "GET {} from {}:{}{}",
        target.path,
        target.host,
        target.port,
        if tls.is_some() { " (TLS)" } else { "" },
    );

    let mut adapter = NetworkStreamAdapter(stream);
    write_request(&mut adapter, target, user_agent)?;

    let mut reader = BufReader::new(adapter);
    let response = read_response(&mut reader)?;

    if let Err(e) = reader.into_inner().0.close() {
        log::debug!("closing connection to {}: {e}", target.host);
    }

    if !(200..300).contains(&response.status_code) {
        log::warn!(
            "{} {} {} from {}",
            response.version,
            response.status_code,
            response.reason,
            target.host,
        );
    }
    Ok(response)
}

/// Send the request line and the three fixed headers.
pub fn write_request(stream: &mut impl Write, target: &HttpTarget, user_agent: &str) -> Result<()> {
    let request = format!(
        "GET {path} HTTP/1.1\r\n\
         Host: {host}\r\n\
         Connection: close\r\n\
         User-Agent: {user_agent}\r\n\
         \r\n",
        path = target.path,
        host = target.host,
    );
    stream.write_all(request.as_bytes())?;
    stream.flush()?;
    Ok(())
}

/// Read a status line, headers up to a bare `\r\n` line, and the body up
/// to EOF.
///
/// Fails with [`PlainviewError::UnsupportedResponse`] as soon as the
/// headers declare a transfer or content encoding; the body is not read.
pub fn read_response(reader: &mut impl BufRead) -> Result<HttpResponse> {
    let status_line = read_crlf_line(reader)?;
    if status_line.is_empty() {
        return Err(PlainviewError::MalformedResponse(
            "empty response".to_string(),
        ));
    }
    let (version, status_code, reason) = parse_status_line(&status_line)?;

    let headers = read_headers(reader)?;
    for name in UNSUPPORTED_HEADERS {
        if let Some(value) = headers.get(name) {
            return Err(PlainviewError::UnsupportedResponse(format!(
                "{name}: {value}"
            )));
        }
    }

    let mut body = Vec::new();
    reader.read_to_end(&mut body)?;
    let body = String::from_utf8(body).map_err(|e| {
        PlainviewError::MalformedResponse(format!("body is not valid UTF-8: {e}"))
    })?;

    log::debug!(
        "{version} {status_code} {reason}: {} headers, {} body bytes",
        headers.len(),
        body.len(),
    );

    Ok(HttpResponse {
        version,
        status_code,
        reason,
        headers,
        body,
    })
}

/// Split `HTTP/1.1 200 OK\r\n` on its first two spaces.
fn parse_status_line(line: &str) -> Result<(String, u16, String)> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut parts = line.splitn(3, ' ');
    let version = parts.next().unwrap_or_default();
    let code = parts
        .next()
        .ok_or_else(|| PlainviewError::MalformedResponse(format!("bad status line: {line:?}")))?;
    let reason = parts.next().unwrap_or_default();

    let status_code = code.parse::<u16>().map_err(|_| {
        PlainviewError::MalformedResponse(format!("bad status code in: {line:?}"))
    })?;
    Ok((version.to_string(), status_code, reason.to_string()))
}

fn read_headers(reader: &mut impl BufRead) -> Result<HashMap<String, String>> {
    let mut headers = HashMap::new();
    loop {
        let line = read_crlf_line(reader)?;
        if line.is_empty() {
            return Err(PlainviewError::MalformedResponse(
                "connection closed before end of headers".to_string(),
            ));
        }
        if line == "\r\n" {
            return Ok(headers);
        }
        let (name, value) = line.split_once(':').ok_or_else(|| {
            PlainviewError::MalformedResponse(format!("bad header line: {:?}", line.trim_end()))
        })?;
        headers.insert(name.trim().to_lowercase(), value.trim().to_string());
    }
}

/// Read one line terminated by `\r\n`, terminator included.
///
/// A bare `\n` does not end the line. Returns an empty string at EOF and
/// whatever is left if the stream ends mid-line.
fn read_crlf_line(reader: &mut impl BufRead) -> Result<String> {
    let mut line = Vec::new();
    while reader.read_until(b'\n', &mut line)? > 0 {
        if line.ends_with(b"\r\n") {
            break;
        }
    }
    String::from_utf8(line).map_err(|e| {
        PlainviewError::MalformedResponse(format!("response line is not valid UTF-8: {e}"))
    })
}

// -------------------------------------------------------------------
// NetworkStream → Read + Write adapter
// -------------------------------------------------------------------

/// Adapts a `Box<dyn NetworkStream>` to `std::io::Read` + `std::io::Write`
/// so it can sit under a `BufReader`.
struct NetworkStreamAdapter(Box<dyn NetworkStream>);

impl Read for NetworkStreamAdapter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf).map_err(PlainviewError::into_io_error)
    }
}

impl Write for NetworkStreamAdapter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf).map_err(PlainviewError::into_io_error)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
