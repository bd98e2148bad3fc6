//! Lazy body framing.
//!
//! A multi-line body is read one line per pull. The framer strips the
//! dot-stuffing added by the sender and stops at the `.` terminator without
//! reading past it, so the next response on the same connection stays in
//! sync. A body that is not read to the end leaves its remaining lines in
//! the source; callers must drain it before the next exchange.

use std::pin::Pin;

use futures::{Stream, StreamExt};
use tokio::io::AsyncBufRead;

use crate::config::DecoderConfig;
use crate::errors::ResponseError;
use crate::net::line::{is_terminator, read_line};

/// Raw line source owned by a response while its body is alive.
pub type LineSource = Box<dyn AsyncBufRead + Send + Unpin>;

/// Already framed and unstuffed chunks.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<String, ResponseError>> + Send>>;

/// Undoes dot-stuffing on a single content line.
pub fn unstuff(line: String) -> String {
    if line.starts_with("..") {
        line[1..].to_string()
    } else {
        line
    }
}

/// Pulls body lines from a raw source until the terminator.
pub struct BodyFramer {
    source: LineSource,
    config: DecoderConfig,
    done: bool,
}

impl BodyFramer {
    pub fn new(source: LineSource, config: DecoderConfig) -> Self {
        Self { source, config, done: false }
    }

    /// Returns the next decoded line (terminator included), or `None` once
    /// the `.` line or end-of-input has been reached.
    pub async fn next_chunk(&mut self) -> Result<Option<String>, ResponseError> {
        if self.done {
            return Ok(None);
        }

        let read = read_line(&mut self.source, &self.config).await;
        if read.is_err() {
            // The source is mid-line; nothing after this point can be framed.
            self.done = true;
        }

        let Some(line) = read? else {
            self.done = true;
            if self.config.strict_termination {
                return Err(ResponseError::UnexpectedEof);
            }
            log::warn!("input ended before body terminator, treating as end of body");
            return Ok(None);
        };

        if is_terminator(&line) {
            self.done = true;
            return Ok(None);
        }

        log::trace!("body line: {:?}", line);
        Ok(Some(unstuff(line)))
    }

    /// Gives the source back, positioned after whatever has been read so far.
    pub fn into_source(self) -> LineSource {
        self.source
    }
}

/// Body of a response, resolved once at construction time.
///
/// `Empty` and `Framed` keep the connection's line source so it can be
/// reused for the next response once the body has been drained.
pub enum Body {
    /// No block follows the status line. The source, if any, is untouched.
    Empty(Option<LineSource>),
    /// Lines are framed from a raw source on demand.
    Framed(BodyFramer),
    /// Chunks were framed elsewhere and are passed through untouched.
    Decoded(ChunkStream),
}

impl Body {
    pub async fn next_chunk(&mut self) -> Result<Option<String>, ResponseError> {
        match self {
            Body::Empty(_) => Ok(None),
            Body::Framed(framer) => framer.next_chunk().await,
            Body::Decoded(stream) => stream.next().await.transpose(),
        }
    }

    /// Drains the remaining chunks in place and concatenates them.
    pub async fn drain(&mut self) -> Result<String, ResponseError> {
        let mut out = String::new();
        while let Some(chunk) = self.next_chunk().await? {
            out.push_str(&chunk);
        }
        Ok(out)
    }

    /// Drains the body and concatenates all chunks.
    pub async fn text(mut self) -> Result<String, ResponseError> {
        self.drain().await
    }

    /// Gives the line source back, positioned after whatever has been read.
    /// `None` for passthrough bodies, which never owned one.
    pub fn into_source(self) -> Option<LineSource> {
        match self {
            Body::Empty(source) => source,
            Body::Framed(framer) => Some(framer.into_source()),
            Body::Decoded(_) => None,
        }
    }

    /// Exposes the body as a stream of decoded chunks, for handing to
    /// [`Response::from_stream`](crate::net::Response::from_stream).
    ///
    /// The line source goes with the stream and is dropped when it ends.
    pub fn into_stream(self) -> ChunkStream {
        match self {
            Body::Decoded(stream) => stream,
            Body::Empty(_) => Box::pin(futures::stream::empty()),
            body @ Body::Framed(_) => Box::pin(futures::stream::unfold(body, |mut body| async move {
                match body.next_chunk().await {
                    Ok(Some(chunk)) => Some((Ok(chunk), body)),
                    Ok(None) => None,
                    // Stop after an error; an empty body keeps the stream fused.
                    Err(e) => Some((Err(e), Body::Empty(None))),
                }
            })),
        }
    }
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Empty(source) => f.debug_struct("Body::Empty").field("has_source", &source.is_some()).finish(),
            Body::Framed(framer) => f.debug_struct("Body::Framed").field("done", &framer.done).finish(),
            Body::Decoded(_) => f.write_str("Body::Decoded"),
        }
    }
}
