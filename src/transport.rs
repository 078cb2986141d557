//! Live-update transport seam
//!
//! The real channel to connected browser sessions belongs to the host dev
//! server; the pipeline only needs a one-method send surface. Delivery
//! guarantees live behind the seam — sends are fire-and-forget and never
//! retried.

use std::io::{self, Write};

use crate::error::Result;
use crate::update::UpdateMessage;

/// Channel used to push update notifications to the client.
pub trait UpdateTransport {
    /// Deliver one message. A returned error propagates to the caller but the
    /// pipeline performs no retry.
    fn send(&mut self, message: &UpdateMessage) -> Result<()>;
}

/// Transport writing one JSON document per line to any writer.
///
/// The shape a dev server's socket layer consumes directly; also convenient
/// for tests, which can hand in a `Vec<u8>`.
#[derive(Debug)]
pub struct JsonLineTransport<W> {
    writer: W,
}

impl<W: Write> JsonLineTransport<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Give the writer back.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> UpdateTransport for JsonLineTransport<W> {
    fn send(&mut self, message: &UpdateMessage) -> Result<()> {
        serde_json::to_writer(&mut self.writer, message).map_err(io::Error::from)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
