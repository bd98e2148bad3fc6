//! Article header block parsing.
//!
//! Only `220` and `221` responses carry a header block. The block is a run of
//! `Name: value` lines ended either by a blank line (the body follows) or by
//! the `.` terminator (no body, as in a HEAD response).

use crate::config::DecoderConfig;
use crate::errors::ResponseError;
use crate::net::line::{is_terminator, read_line, trim_line_ending};
use tokio::io::AsyncBufRead;

/// Ordered header map with lowercase names. Inserting an existing name
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header, returning the previous value for that name.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        let name = name.trim().to_ascii_lowercase();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (k, v) in iter {
            headers.insert(k.as_ref(), v);
        }
        headers
    }
}

/// How a header block ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderBlockEnd {
    /// Blank line seen; body lines follow.
    Body,
    /// Terminator or end-of-input seen; there is no body.
    NoBody,
}

/// Splits one header line (line ending already removed) into name and value.
pub fn parse_header_line(line: &str) -> Result<(String, String), ResponseError> {
    let (name, value) = line
        .split_once(':')
        .ok_or_else(|| ResponseError::InvalidHeaderLine(line.to_string()))?;

    let value = value.strip_prefix(' ').unwrap_or(value);
    Ok((name.trim().to_ascii_lowercase(), value.to_string()))
}

/// Reads header lines until a blank line, the terminator, or end-of-input.
pub async fn read_header_block<R>(
    reader: &mut R,
    config: &DecoderConfig,
) -> Result<(Headers, HeaderBlockEnd), ResponseError>
where
    R: AsyncBufRead + Unpin + ?Sized,
{
    let mut headers = Headers::new();

    loop {
        let Some(line) = read_line(reader, config).await? else {
            log::debug!("end of input inside header block after {} headers", headers.len());
            return Ok((headers, HeaderBlockEnd::NoBody));
        };

        if is_terminator(&line) {
            return Ok((headers, HeaderBlockEnd::NoBody));
        }

        let line = trim_line_ending(&line);
        if line.is_empty() {
            return Ok((headers, HeaderBlockEnd::Body));
        }

        let (name, value) = parse_header_line(line)?;
        if let Some(previous) = headers.insert(&name, value) {
            log::debug!("header {:?} repeated, dropping earlier value {:?}", name, previous);
        }
    }
}
