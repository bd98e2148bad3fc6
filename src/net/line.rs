//! Bounded line reads on top of a buffered async source.

use crate::config::DecoderConfig;
use crate::errors::ResponseError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

/// Reads one line including its terminator. Returns `None` on end-of-input.
///
/// Never buffers more than `max_line_length` bytes; a longer line fails with
/// [`ResponseError::LineTooLong`].
pub(crate) async fn read_raw_line<R>(
    reader: &mut R,
    config: &DecoderConfig,
) -> Result<Option<Vec<u8>>, ResponseError>
where
    R: AsyncBufRead + Unpin + ?Sized,
{
    let limit = config.max_line_length;
    let mut buf = Vec::new();

    // One extra byte so that a line of exactly `limit` bytes is accepted.
    let mut bounded = (&mut *reader).take(limit as u64 + 1);
    let n = bounded.read_until(b'\n', &mut buf).await?;
    if n == 0 {
        return Ok(None);
    }

    if buf.len() > limit {
        return Err(ResponseError::LineTooLong { limit });
    }

    Ok(Some(buf))
}

/// Reads one line and decodes it as text according to `config`.
pub(crate) async fn read_line<R>(
    reader: &mut R,
    config: &DecoderConfig,
) -> Result<Option<String>, ResponseError>
where
    R: AsyncBufRead + Unpin + ?Sized,
{
    match read_raw_line(reader, config).await? {
        Some(raw) => decode_line(raw, config).map(Some),
        None => Ok(None),
    }
}

fn decode_line(raw: Vec<u8>, config: &DecoderConfig) -> Result<String, ResponseError> {
    match String::from_utf8(raw) {
        Ok(text) => Ok(text),
        Err(e) if config.lossy_utf8 => {
            log::debug!("replacing invalid UTF-8 in line: {}", e.utf8_error());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
        Err(_) => Err(ResponseError::InvalidUtf8),
    }
}

/// Strips a trailing `\r\n` or `\n`.
pub(crate) fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// True for the `.` line that ends a multi-line block.
pub(crate) fn is_terminator(line: &str) -> bool {
    trim_line_ending(line) == "."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_lines_with_terminators() {
        let mut src: &[u8] = b"one\r\ntwo\nthree";
        let cfg = DecoderConfig::default();

        assert_eq!(read_line(&mut src, &cfg).await.unwrap().as_deref(), Some("one\r\n"));
        assert_eq!(read_line(&mut src, &cfg).await.unwrap().as_deref(), Some("two\n"));
        assert_eq!(read_line(&mut src, &cfg).await.unwrap().as_deref(), Some("three"));
        assert!(read_line(&mut src, &cfg).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn enforces_line_limit() {
        let cfg = DecoderConfig::builder().max_line_length(5).build().unwrap();

        let mut fits: &[u8] = b"abc\r\n";
        assert_eq!(read_line(&mut fits, &cfg).await.unwrap().as_deref(), Some("abc\r\n"));

        let mut too_long: &[u8] = b"abcdef\r\n";
        match read_line(&mut too_long, &cfg).await {
            Err(ResponseError::LineTooLong { limit }) => assert_eq!(limit, 5),
            other => panic!("expected LineTooLong, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn invalid_utf8_is_lossy_by_default() {
        let mut src: &[u8] = b"\xffhello\r\n";
        let line = read_line(&mut src, &DecoderConfig::default()).await.unwrap().unwrap();
        assert!(line.ends_with("hello\r\n"));
        assert!(line.starts_with('\u{FFFD}'));
    }

    #[tokio::test]
    async fn invalid_utf8_fails_in_strict_mode() {
        let cfg = DecoderConfig::builder().lossy_utf8(false).build().unwrap();
        let mut src: &[u8] = b"\xffhello\r\n";
        assert!(matches!(read_line(&mut src, &cfg).await, Err(ResponseError::InvalidUtf8)));
    }

    #[test]
    fn terminator_forms() {
        assert!(is_terminator(".\r\n"));
        assert!(is_terminator(".\n"));
        assert!(is_terminator("."));
        assert!(!is_terminator("..\r\n"));
        assert!(!is_terminator(". \r\n"));
        assert!(!is_terminator("\r\n"));
    }
}
