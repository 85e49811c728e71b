//! SSE (Server-Sent Events) framing.
//!
//! Turns the raw byte stream of an event-stream response into discrete
//! frames. The wire format is line oriented:
//! - `data: <payload>` - one fragment of the frame payload
//! - `event: <name>` - name of the frame, kept as metadata
//! - Empty line - signals end of the frame
//! - Anything else (`id:`, `retry:`, `:` comments) - ignored
//!
//! Lines end with `\n`, `\r\n` or a bare `\r`. A line longer than
//! [`MAX_LINE_LEN`] bytes ends the stream with [`FrameError::LineTooLong`].
//!
//! Framing works on bytes, so chunk boundaries may fall anywhere, including
//! inside a multi-byte UTF-8 sequence. No JSON is interpreted here.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use futures::stream::{self, Stream, StreamExt};
use std::pin::Pin;

use crate::traits::{ByteStream, HttpError};

/// Longest line accepted before the framer gives up on a stream.
pub const MAX_LINE_LEN: usize = 1024 * 1024;

/// Errors surfaced while framing a response body.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameError {
    /// The underlying body failed while reading.
    #[error("Error reading stream: {0}")]
    Read(HttpError),
    /// The connection closed in the middle of a line.
    #[error("Stream closed in the middle of a frame")]
    Truncated,
    /// A line grew past the limit without a terminator.
    #[error("Stream line exceeds {limit} bytes")]
    LineTooLong {
        /// Maximum accepted line length in bytes.
        limit: usize,
    },
}

/// One complete event payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Value of the last `event:` line of the frame, if any
    pub event: Option<String>,
    /// Concatenated `data:` fragments, joined with `\n`
    pub data: Bytes,
}

impl Frame {
    /// Create a frame without an event name.
    pub fn data(data: impl Into<Bytes>) -> Self {
        Self {
            event: None,
            data: data.into(),
        }
    }

    /// The greeting the service sends when a stream is opened.
    pub fn is_open_greeting(&self) -> bool {
        self.event.as_deref() == Some("open")
    }
}

/// Stateful line-to-frame parser.
///
/// Accumulates `data:` fragments until an empty line, then emits the frame.
#[derive(Debug, Default)]
pub struct FrameParser {
    event: Option<String>,
    data: BytesMut,
    fragments: usize,
}

impl FrameParser {
    /// Create a new frame parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line (without its terminator) to the parser.
    ///
    /// Returns `Some(frame)` when the line completes a frame.
    pub fn feed_line(&mut self, line: &[u8]) -> Option<Frame> {
        if line.is_empty() {
            return self.take_frame();
        }

        if let Some(rest) = line.strip_prefix(b"data:") {
            if self.fragments > 0 {
                self.data.put_u8(b'\n');
            }
            self.data.extend_from_slice(strip_one_space(rest));
            self.fragments += 1;
        } else if let Some(rest) = line.strip_prefix(b"event:") {
            self.event = Some(String::from_utf8_lossy(strip_one_space(rest)).into_owned());
        }

        None
    }

    /// Emit whatever complete fragments are pending at end of input.
    pub fn finish(&mut self) -> Option<Frame> {
        self.take_frame()
    }

    /// Clear any accumulated state.
    pub fn reset(&mut self) {
        self.event = None;
        self.data.clear();
        self.fragments = 0;
    }

    /// Whether a frame has started accumulating.
    pub fn is_pending(&self) -> bool {
        self.fragments > 0
    }

    fn take_frame(&mut self) -> Option<Frame> {
        let event = self.event.take();
        if self.fragments == 0 {
            return None;
        }

        self.fragments = 0;
        Some(Frame {
            event,
            data: self.data.split().freeze(),
        })
    }
}

fn strip_one_space(value: &[u8]) -> &[u8] {
    value.strip_prefix(b" ").unwrap_or(value)
}

/// Splits incoming chunks into lines ending in `\n`, `\r\n` or `\r`.
#[derive(Debug, Default)]
pub struct LineSplitter {
    buffer: BytesMut,
    /// Bytes at the front of `buffer` already known to hold no terminator
    scanned: usize,
    /// The last line ended in `\r` at the end of the buffer; a `\n` that
    /// starts the next chunk belongs to it
    skip_lf: bool,
}

impl LineSplitter {
    /// Create an empty splitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk read from the network.
    pub fn push(&mut self, chunk: &[u8]) {
        self.buffer.extend_from_slice(chunk);
    }

    /// Take the next complete line, without its terminator.
    ///
    /// Only bytes pushed since the previous call are searched.
    pub fn next_line(&mut self) -> Option<Bytes> {
        if self.skip_lf && !self.buffer.is_empty() {
            self.skip_lf = false;
            if self.buffer[0] == b'\n' {
                self.buffer.advance(1);
            }
        }

        let Some(offset) = self.buffer[self.scanned..]
            .iter()
            .position(|b| *b == b'\n' || *b == b'\r')
        else {
            self.scanned = self.buffer.len();
            return None;
        };

        let end = self.scanned + offset;
        let terminator = self.buffer[end];
        let mut line = self.buffer.split_to(end + 1);
        line.truncate(end);
        self.scanned = 0;

        if terminator == b'\r' {
            match self.buffer.first() {
                Some(b'\n') => self.buffer.advance(1),
                Some(_) => {}
                None => self.skip_lf = true,
            }
        }
        Some(line.freeze())
    }

    /// Bytes of an unterminated line still waiting for more input.
    pub fn remainder(&self) -> &[u8] {
        &self.buffer
    }
}

/// Stream of frames produced from a response body.
pub type FrameStream = Pin<Box<dyn Stream<Item = Result<Frame, FrameError>> + Send>>;

struct FramerState {
    body: ByteStream,
    lines: LineSplitter,
    parser: FrameParser,
    finished: bool,
}

/// Frame a response body.
///
/// The returned stream is lazy: the body is only read when the next frame is
/// requested, so at most one frame is held in memory. It ends after the
/// first error. On a clean end of input, fragments on fully terminated lines
/// form a last frame; a dangling partial line yields
/// [`FrameError::Truncated`].
pub fn frames(body: ByteStream) -> FrameStream {
    let state = FramerState {
        body,
        lines: LineSplitter::new(),
        parser: FrameParser::new(),
        finished: false,
    };

    let framed = stream::unfold(state, |mut state| async move {
        loop {
            if state.finished {
                return None;
            }

            if let Some(line) = state.lines.next_line() {
                match state.parser.feed_line(&line) {
                    Some(frame) => return Some((Ok(frame), state)),
                    None => continue,
                }
            }

            if state.lines.remainder().len() > MAX_LINE_LEN {
                state.finished = true;
                let err = FrameError::LineTooLong { limit: MAX_LINE_LEN };
                return Some((Err(err), state));
            }

            match state.body.next().await {
                Some(Ok(chunk)) => state.lines.push(&chunk),
                Some(Err(e)) => {
                    state.finished = true;
                    return Some((Err(FrameError::Read(e)), state));
                }
                None => {
                    state.finished = true;
                    if !state.lines.remainder().is_empty() {
                        return Some((Err(FrameError::Truncated), state));
                    }
                    let last = state.parser.finish();
                    return last.map(|frame| (Ok(frame), state));
                }
            }
        }
    });

    Box::pin(framed)
}
