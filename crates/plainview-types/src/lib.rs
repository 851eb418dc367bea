//! Foundation types for plainview.
//!
//! Holds the error taxonomy shared by every crate in the workspace and the
//! byte-stream trait the transport layer is written against.

pub mod error;
pub mod stream;
