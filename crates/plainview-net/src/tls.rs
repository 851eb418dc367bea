//! TLS provider abstraction.
//!
//! A [`TlsProvider`] wraps a plain TCP [`NetworkStream`] in a TLS session.
//! The HTTP client only sees this trait, so it never depends on a concrete
//! TLS library.

use plainview_types::error::Result;
use plainview_types::stream::NetworkStream;

/// Provides TLS client connections.
pub trait TlsProvider: Send + Sync {
    /// Wrap `stream` in a TLS client session and complete the handshake.
    ///
    /// `server_name` is used for SNI and certificate verification.
    fn connect_tls(
        &self,
        stream: Box<dyn NetworkStream>,
        server_name: &str,
    ) -> Result<Box<dyn NetworkStream>>;
}
