//! Line transport between the receiver and the controller.
//!
//! One text line in is one raw button token; one text line out is a
//! [`StatusLine`] for the remote display. Framing (newline terminator,
//! whitespace trimming) lives here, not in the controller.

mod serial;

pub use serial::SerialTransport;

use std::collections::VecDeque;
use std::io;

use crate::status::StatusLine;

pub trait LineTransport {
    /// Next complete, trimmed input line, or `None` if no full line has
    /// arrived yet. Blocking is bounded by the underlying read timeout.
    fn poll_line(&mut self) -> io::Result<Option<String>>;

    /// Write one status line toward the remote display.
    fn send(&mut self, status: &StatusLine) -> io::Result<()>;
}

/// Accumulates raw bytes and hands back newline-terminated lines,
/// trimmed on both ends. Bytes after a newline in the same chunk are
/// kept for the following lines.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
    ready: VecDeque<String>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if byte == b'\n' {
                let raw = std::mem::take(&mut self.pending);
                let line = String::from_utf8_lossy(&raw).trim().to_string();
                self.ready.push_back(line);
            } else {
                self.pending.push(byte);
            }
        }
    }

    pub fn next_line(&mut self) -> Option<String> {
        self.ready.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_line_across_partial_reads() {
        let mut buffer = LineBuffer::new();
        buffer.feed(b"BA45");
        assert_eq!(buffer.next_line(), None);
        buffer.feed(b"FF00\n");
        assert_eq!(buffer.next_line(), Some("BA45FF00".to_string()));
        assert_eq!(buffer.next_line(), None);
    }

    #[test]
    fn trims_carriage_return_and_whitespace() {
        let mut buffer = LineBuffer::new();
        buffer.feed(b"  BA45FF00\r\n");
        assert_eq!(buffer.next_line(), Some("BA45FF00".to_string()));
    }

    #[test]
    fn queues_multiple_lines_in_order() {
        let mut buffer = LineBuffer::new();
        buffer.feed(b"EA15FF00\nB946FF00\ntail");
        assert_eq!(buffer.next_line(), Some("EA15FF00".to_string()));
        assert_eq!(buffer.next_line(), Some("B946FF00".to_string()));
        assert_eq!(buffer.next_line(), None);
        buffer.feed(b"\n");
        assert_eq!(buffer.next_line(), Some("tail".to_string()));
    }

    #[test]
    fn blank_line_yields_empty_string() {
        let mut buffer = LineBuffer::new();
        buffer.feed(b" \r\n");
        assert_eq!(buffer.next_line(), Some(String::new()));
    }
}
