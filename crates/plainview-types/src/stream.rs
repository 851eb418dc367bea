//! Byte-stream abstraction used by the transport layer.
//!
//! Plain TCP connections and TLS sessions both implement
//! [`NetworkStream`], so the HTTP client never needs to know which one it
//! is talking through.

use crate::error::Result;

/// A connected, blocking, bidirectional byte stream.
pub trait NetworkStream: Send {
    /// Read up to `buf.len()` bytes. `Ok(0)` means the peer closed the
    /// connection.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Write bytes, returning how many were accepted.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Close the connection. Further reads and writes are invalid.
    fn close(&mut self) -> Result<()>;
}
