//! [`NetworkStream`] over a blocking `std::net::TcpStream`.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};

use plainview_types::error::Result;
use plainview_types::stream::NetworkStream;

/// A plain TCP connection.
///
/// Blocking, with no connect or read timeout: a peer that never answers
/// stalls the caller until the OS gives up on the socket.
pub struct StdNetworkStream {
    stream: TcpStream,
}

impl StdNetworkStream {
    /// Resolve `host` and open a TCP connection to `(host, port)`.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        log::debug!("connecting to {host}:{port}");
        let stream = TcpStream::connect((host, port))?;
        Ok(Self { stream })
    }

    /// Wrap an already-connected socket.
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }
}

impl NetworkStream for StdNetworkStream {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(self.stream.read(buf)?)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        Ok(self.stream.write(data)?)
    }

    fn close(&mut self) -> Result<()> {
        match self.stream.shutdown(Shutdown::Both) {
            // The peer may already have torn the connection down.
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            other => other.map_err(Into::into),
        }
    }
}
