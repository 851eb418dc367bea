//! [`TlsProvider`] backed by rustls + ring.
//!
//! Enabled by the `tls-rustls` feature (on by default).

use std::io::{self, Read, Write};
use std::sync::Arc;

use rustls::pki_types::ServerName;
use rustls::{ClientConfig, ClientConnection, RootCertStore};

use plainview_types::error::{PlainviewError, Result};
use plainview_types::stream::NetworkStream;

use super::tls::TlsProvider;

/// Shared, reusable TLS client configuration.
pub struct RustlsTlsProvider {
    config: Arc<ClientConfig>,
}

impl RustlsTlsProvider {
    /// Build a provider that trusts Mozilla's root CA bundle.
    pub fn new() -> Self {
        let root_store = RootCertStore::from_iter(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        Self::with_root_store(root_store)
    }

    /// Build a provider that trusts exactly the given roots.
    pub fn with_root_store(root_store: RootCertStore) -> Self {
        let config = ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for RustlsTlsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TlsProvider for RustlsTlsProvider {
    fn connect_tls(
        &self,
        stream: Box<dyn NetworkStream>,
        server_name: &str,
    ) -> Result<Box<dyn NetworkStream>> {
        let sni = ServerName::try_from(server_name.to_owned())
            .map_err(|e| PlainviewError::Tls(format!("invalid server name: {e}")))?;

        let conn = ClientConnection::new(Arc::clone(&self.config), sni)
            .map_err(|e| PlainviewError::Tls(format!("TLS init: {e}")))?;

        let stream = RustlsStream::handshake(conn, stream)?;
        log::debug!("TLS session established with {server_name}");
        Ok(Box::new(stream))
    }
}

// ---------------------------------------------------------------------------
// RustlsStream
// ---------------------------------------------------------------------------

/// A TLS session layered over an inner [`NetworkStream`].
struct RustlsStream {
    tls: ClientConnection,
    inner: Box<dyn NetworkStream>,
}

impl RustlsStream {
    /// Drive the handshake to completion before handing the stream out.
    fn handshake(mut tls: ClientConnection, mut inner: Box<dyn NetworkStream>) -> Result<Self> {
        let mut adapter = IoAdapter::new(&mut *inner);
        while tls.is_handshaking() {
            let (read, written) = tls
                .complete_io(&mut adapter)
                .map_err(|e| PlainviewError::Tls(format!("handshake: {e}")))?;
            if read == 0 && written == 0 {
                return Err(PlainviewError::Tls(
                    "connection closed during handshake".to_string(),
                ));
            }
        }
        Ok(Self { tls, inner })
    }

    fn flush_tls(&mut self) -> Result<()> {
        let mut adapter = IoAdapter::new(&mut *self.inner);
        while self.tls.wants_write() {
            self.tls
                .write_tls(&mut adapter)
                .map_err(|e| PlainviewError::Tls(format!("write_tls: {e}")))?;
        }
        Ok(())
    }
}

impl NetworkStream for RustlsStream {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        loop {
            match self.tls.reader().read(buf) {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => {},
                // Peer closed TCP without close_notify; treat as end of body.
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(0),
                Err(e) => return Err(PlainviewError::Tls(format!("read: {e}"))),
            }

            let mut adapter = IoAdapter::new(&mut *self.inner);
            let n = self
                .tls
                .read_tls(&mut adapter)
                .map_err(|e| PlainviewError::Tls(format!("read_tls: {e}")))?;
            if n == 0 {
                return Ok(0);
            }
            self.tls
                .process_new_packets()
                .map_err(|e| PlainviewError::Tls(format!("process: {e}")))?;
        }
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.tls
            .writer()
            .write_all(data)
            .map_err(|e| PlainviewError::Tls(format!("write: {e}")))?;
        self.flush_tls()?;
        Ok(data.len())
    }

    fn close(&mut self) -> Result<()> {
        self.tls.send_close_notify();
        // Best effort: the peer may already be gone.
        if let Err(e) = self.flush_tls() {
            log::debug!("close_notify not delivered: {e}");
        }
        self.inner.close()
    }
}

// ---------------------------------------------------------------------------
// IoAdapter: bridge NetworkStream to std::io::Read + std::io::Write
// ---------------------------------------------------------------------------

/// Lets rustls call `std::io::Read` / `Write` on a `&mut dyn NetworkStream`.
struct IoAdapter<'a> {
    inner: &'a mut dyn NetworkStream,
}

impl<'a> IoAdapter<'a> {
    fn new(inner: &'a mut dyn NetworkStream) -> Self {
        Self { inner }
    }
}

impl io::Read for IoAdapter<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf).map_err(PlainviewError::into_io_error)
    }
}

impl io::Write for IoAdapter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).map_err(PlainviewError::into_io_error)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
