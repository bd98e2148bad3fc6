//! NNTP response model.
//!
//! A [`Response`] holds the parsed head of a server reply (status code,
//! reason text and, for `220`/`221`, the article headers) plus a body that
//! is read lazily from the connection.
//!
//! ## Construction
//! - [`Response::from_reader`] decodes a full reply from a line source.
//! - [`Response::new`] takes the head from the caller and frames the
//!   remaining source according to the given status.
//! - [`Response::from_stream`] wraps a body that was already framed, e.g.
//!   the body of another `Response`. Nothing is unstuffed twice.
//!
//! ## Notes
//! - The body can be consumed once. [`Response::text`] or
//!   [`Response::take_body`] after that fails with
//!   [`ResponseError::BodyAlreadyConsumed`].
//! - A multi-line body must be drained before the next command is sent on
//!   the same connection. [`Response::into_source`] (or
//!   [`Body::into_source`] on a taken body) hands the connection back for
//!   the next response; single-line responses never read from it.
//! - The status passed to [`Response::new`] and [`Response::from_stream`]
//!   must be a three digit code (`100..=599`); this is checked in debug
//!   builds.
use futures::Stream;
use tokio::io::AsyncBufRead;

use crate::config::DecoderConfig;
use crate::errors::ResponseError;
use crate::net::body::{Body, BodyFramer, ChunkStream, LineSource};
use crate::net::classify::is_multiline;
use crate::net::codes::has_header_block;
use crate::net::headers::{read_header_block, HeaderBlockEnd, Headers};
use crate::net::status::read_status_line;

const DEFAULT_STATUS: u16 = 200;

/// Head values supplied by the caller for [`Response::new`] and
/// [`Response::from_stream`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseInit {
    pub status: u16,
    pub status_text: String,
    pub headers: Headers,
}

impl Default for ResponseInit {
    fn default() -> Self {
        Self {
            status: DEFAULT_STATUS,
            status_text: String::new(),
            headers: Headers::new(),
        }
    }
}

impl ResponseInit {
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            ..Self::default()
        }
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }
}

#[derive(Debug)]
pub struct Response {
    /// Three digit status code (e.g. `211`, `430`).
    status: u16,

    /// Text after the status code, trimmed. May be empty.
    status_text: String,

    /// Article headers; only filled for `220` and `221` replies.
    headers: Headers,

    /// `None` once the body has been handed out by `take_body`.
    body: Option<Body>,

    /// Set by the first `text` or `take_body`.
    consumed: bool,
}

impl Response {
    /// Decodes one response from `reader` with the default configuration.
    pub async fn from_reader<R>(reader: R) -> Result<Self, ResponseError>
    where
        R: AsyncBufRead + Send + Unpin + 'static,
    {
        Self::from_reader_with_config(reader, DecoderConfig::default()).await
    }

    /// Decodes one response: status line, then the header block for `220`
    /// and `221`, then the body as decided by the status.
    pub async fn from_reader_with_config<R>(
        mut reader: R,
        config: DecoderConfig,
    ) -> Result<Self, ResponseError>
    where
        R: AsyncBufRead + Send + Unpin + 'static,
    {
        let status_line = read_status_line(&mut reader, &config).await?;
        let status = status_line.status;
        let status_text = status_line.status_text;

        let multiline = is_multiline(status, &status_text);
        log::debug!("status {} {:?} (multi-line: {})", status, status_text, multiline);

        if multiline && has_header_block(status) {
            let (headers, end) = read_header_block(&mut reader, &config).await?;
            let body = match end {
                HeaderBlockEnd::Body => Body::Framed(BodyFramer::new(Box::new(reader), config)),
                HeaderBlockEnd::NoBody => Body::Empty(Some(Box::new(reader))),
            };

            return Ok(Self { status, status_text, headers, body: Some(body), consumed: false });
        }

        let init = ResponseInit { status, status_text, headers: Headers::new() };
        Ok(Self::new_with_config(reader, init, config))
    }

    /// Builds a response around a raw line source positioned after the head.
    ///
    /// The body is framed only when `init.status`/`init.status_text` say a
    /// block follows; otherwise the source is never read and is kept for
    /// [`Response::into_source`].
    pub fn new<R>(reader: R, init: ResponseInit) -> Self
    where
        R: AsyncBufRead + Send + Unpin + 'static,
    {
        Self::new_with_config(reader, init, DecoderConfig::default())
    }

    pub fn new_with_config<R>(reader: R, init: ResponseInit, config: DecoderConfig) -> Self
    where
        R: AsyncBufRead + Send + Unpin + 'static,
    {
        debug_assert_valid_status(init.status);

        let body = if is_multiline(init.status, &init.status_text) {
            Body::Framed(BodyFramer::new(Box::new(reader), config))
        } else {
            Body::Empty(Some(Box::new(reader)))
        };

        Self {
            status: init.status,
            status_text: init.status_text,
            headers: init.headers,
            body: Some(body),
            consumed: false,
        }
    }

    /// Wraps chunks that are already framed and unstuffed.
    pub fn from_stream<S>(stream: S, init: ResponseInit) -> Self
    where
        S: Stream<Item = Result<String, ResponseError>> + Send + 'static,
    {
        debug_assert_valid_status(init.status);

        let stream: ChunkStream = Box::pin(stream);
        Self {
            status: init.status,
            status_text: init.status_text,
            headers: init.headers,
            body: Some(Body::Decoded(stream)),
            consumed: false,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// True once the body has been taken or read.
    pub fn body_used(&self) -> bool {
        self.consumed
    }

    /// Whether a dot-terminated block follows, judged from status and text.
    pub fn is_multiline(&self) -> bool {
        is_multiline(self.status, &self.status_text)
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 3xx
    pub fn is_continuation(&self) -> bool {
        (300..400).contains(&self.status)
    }

    /// 4xx and 5xx
    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.status)
    }

    /// Hands out the body. Fails if it was already taken or read.
    pub fn take_body(&mut self) -> Result<Body, ResponseError> {
        if self.consumed {
            return Err(ResponseError::BodyAlreadyConsumed);
        }
        self.consumed = true;
        self.body.take().ok_or(ResponseError::BodyAlreadyConsumed)
    }

    /// Reads the whole body into one string. The drained body stays in place
    /// so the source can still be recovered with [`Response::into_source`].
    pub async fn text(&mut self) -> Result<String, ResponseError> {
        if self.consumed {
            return Err(ResponseError::BodyAlreadyConsumed);
        }
        self.consumed = true;
        match self.body.as_mut() {
            Some(body) => body.drain().await,
            None => Err(ResponseError::BodyAlreadyConsumed),
        }
    }

    /// Gives back the line source, positioned after what this response has
    /// read. Returns `None` for passthrough responses and after `take_body`.
    pub fn into_source(self) -> Option<LineSource> {
        self.body.and_then(Body::into_source)
    }
}

#[inline]
fn debug_assert_valid_status(status: u16) {
    debug_assert!(
        (100..=599).contains(&status),
        "status {status} is not a three digit code"
    );
}
