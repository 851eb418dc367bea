//! Shared test utilities for the browser crate.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Mutex;
use std::thread::JoinHandle;

use plainview_net::tls::TlsProvider;
use plainview_types::error::Result;
use plainview_types::stream::NetworkStream;

/// Accept one connection on a loopback port, read the request head, reply
/// with `response` and hang up.
///
/// Returns the port and a handle yielding the request text the server saw.
pub fn serve_once(response: &'static [u8]) -> (u16, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.ends_with(b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        // The client may hang up early (e.g. on an unsupported header).
        let _ = stream.write_all(response);
        String::from_utf8(request).unwrap()
    });

    (port, handle)
}

/// A TLS provider that hands the plain stream straight back, recording
/// the server names it was asked to verify.
#[derive(Default)]
pub struct PassthroughTls {
    names: Mutex<Vec<String>>,
}

impl PassthroughTls {
    pub fn server_names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }
}

impl TlsProvider for PassthroughTls {
    fn connect_tls(
        &self,
        stream: Box<dyn NetworkStream>,
        server_name: &str,
    ) -> Result<Box<dyn NetworkStream>> {
        self.names.lock().unwrap().push(server_name.to_string());
        Ok(stream)
    }
}
