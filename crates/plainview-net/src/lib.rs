//! Networking: blocking TCP streams and the TLS provider abstraction.

mod std_stream;
pub mod tls;
#[cfg(feature = "tls-rustls")]
pub mod tls_rustls;

pub use std_stream::StdNetworkStream;
pub use tls::TlsProvider;
#[cfg(feature = "tls-rustls")]
pub use tls_rustls::RustlsTlsProvider;
