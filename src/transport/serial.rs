//! Serial implementation of the line transport.

use std::io::{self, Read, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use serialport::{FlowControl, SerialPort};

use super::{LineBuffer, LineTransport};
use crate::status::StatusLine;

const READ_CHUNK_BYTES: usize = 256;

/// Line transport over the serial port the receiver is attached to.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    buffer: LineBuffer,
}

impl SerialTransport {
    /// Open the port at 8N1 with the given read timeout. A timeout
    /// bounds each poll; it is not an error.
    pub fn open(path: &str, baud: u32, read_timeout: Duration) -> Result<Self> {
        let port = serialport::new(path, baud)
            .timeout(read_timeout)
            .flow_control(FlowControl::None)
            .open()
            .with_context(|| format!("failed to open serial port {path}"))?;
        Ok(Self {
            port,
            buffer: LineBuffer::new(),
        })
    }
}

impl LineTransport for SerialTransport {
    fn poll_line(&mut self) -> io::Result<Option<String>> {
        if let Some(line) = self.buffer.next_line() {
            return Ok(Some(line));
        }
        let mut chunk = [0u8; READ_CHUNK_BYTES];
        match self.port.read(&mut chunk) {
            Ok(0) => Ok(None),
            Ok(read) => {
                self.buffer.feed(&chunk[..read]);
                Ok(self.buffer.next_line())
            }
            Err(err) if err.kind() == io::ErrorKind::TimedOut => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn send(&mut self, status: &StatusLine) -> io::Result<()> {
        self.port.write_all(status.as_str().as_bytes())?;
        self.port.flush()
    }
}
