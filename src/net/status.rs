use crate::config::DecoderConfig;
use crate::errors::ResponseError;
use crate::net::line::{read_line, trim_line_ending};
use tokio::io::AsyncBufRead;

/// Parsed first line of a response: `DDD[ <reason text>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub status: u16,
    pub status_text: String,
}

/// Reads exactly one line from `reader` and parses it as a status line.
pub async fn read_status_line<R>(
    reader: &mut R,
    config: &DecoderConfig,
) -> Result<StatusLine, ResponseError>
where
    R: AsyncBufRead + Unpin + ?Sized,
{
    let line = read_line(reader, config)
        .await?
        .ok_or_else(|| ResponseError::InvalidStatusLine(String::new()))?;

    parse_status_line(trim_line_ending(&line))
}

/// Parses a status line with its line ending already removed.
pub fn parse_status_line(line: &str) -> Result<StatusLine, ResponseError> {
    let invalid = || ResponseError::InvalidStatusLine(line.to_string());

    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits != 3 {
        return Err(invalid());
    }

    let (code, rest) = line.split_at(digits);
    let status: u16 = code.parse().map_err(|_| invalid())?;
    if !(100..=599).contains(&status) {
        return Err(invalid());
    }

    // The code must stand alone: "2050" or "205abc" are not status lines.
    if !rest.is_empty() && !rest.starts_with(|c: char| c.is_whitespace()) {
        return Err(invalid());
    }

    Ok(StatusLine {
        status,
        status_text: rest.trim().to_string(),
    })
}
