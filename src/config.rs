//! Decoder configuration.
//!
//! `DecoderConfig` controls how strictly the response decoder treats the
//! incoming line stream. The defaults favor availability: lines are decoded
//! lossily and a body cut short by the transport simply ends.
//!
//! `DecoderConfig` provides defaults via [`Default`] and a fluent
//! [`DecoderConfig::builder()`] for customization with validation.
//!
//! # Examples
//!
//! ## Use defaults
//! ```rust
//! use nntp_response::DecoderConfig;
//! let cfg = DecoderConfig::default();
//! assert_eq!(cfg.max_line_length, 64 * 1024);
//! ```
//!
//! ## Customize with the builder
//! ```rust
//! use nntp_response::DecoderConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = DecoderConfig::builder()
//!     .max_line_length(998)
//!     .lossy_utf8(false)
//!     .strict_termination(true)
//!     .build()?; // returns Result<DecoderConfig, DecoderConfigError>
//! # Ok(()) }
//! ```
//!
//! # Fields (summary)
//! - `max_line_length`: Largest line (terminator included) buffered at once (default: 64 KiB).
//! - `lossy_utf8`: Replace invalid UTF-8 instead of failing (default: `true`).
//! - `strict_termination`: Fail when input ends before the `.` terminator (default: `false`).
//!
//! # Errors
//!
//! Builder validation returns [`DecoderConfigError`] when `max_line_length`
//! cannot hold a bare terminator line.

use std::fmt;

const DEFAULT_MAX_LINE_LENGTH: usize = 64 * 1024;

/// Smallest usable limit: room for `".\r\n"`.
const MIN_LINE_LENGTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    pub max_line_length: usize,
    pub lossy_utf8: bool,
    pub strict_termination: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            lossy_utf8: true,
            strict_termination: false,
        }
    }
}

impl DecoderConfig {
    pub fn builder() -> DecoderConfigBuilder {
        DecoderConfigBuilder::default()
    }
}

/// Builder for [`DecoderConfig`].
#[derive(Debug, Clone, Default)]
pub struct DecoderConfigBuilder {
    inner: DecoderConfig,
}

impl DecoderConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut DecoderConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn max_line_length(self, n: usize) -> Self { self.map(|c| c.max_line_length = n) }
    pub fn lossy_utf8(self, on: bool) -> Self { self.map(|c| c.lossy_utf8 = on) }
    pub fn strict_termination(self, on: bool) -> Self { self.map(|c| c.strict_termination = on) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut DecoderConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<DecoderConfig, DecoderConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoderConfigError {
    LineLengthTooSmall(usize),
}

impl fmt::Display for DecoderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecoderConfigError::LineLengthTooSmall(n) =>
                write!(f, "max_line_length {n} is too small (expected at least {MIN_LINE_LENGTH})"),
        }
    }
}
impl std::error::Error for DecoderConfigError {}

fn validate(c: &DecoderConfig) -> Result<(), DecoderConfigError> {
    if c.max_line_length < MIN_LINE_LENGTH {
        return Err(DecoderConfigError::LineLengthTooSmall(c.max_line_length));
    }
    Ok(())
}
