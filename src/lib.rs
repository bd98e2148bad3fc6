//! Decoding of NNTP server responses.
//!
//! Reads a status line, decides from the status code whether a
//! dot-terminated block follows, parses the article header block for
//! `220`/`221`, and frames the body lazily while undoing dot-stuffing.
//!
//! ```rust
//! use nntp_response::Response;
//! # fn main() -> Result<(), nntp_response::ResponseError> {
//! # futures::executor::block_on(async {
//! let input: &'static [u8] = b"215 list follows\r\nmisc.test 3002322 3000234 y\r\n.\r\n";
//! let mut response = Response::from_reader(input).await?;
//! assert_eq!(response.status(), 215);
//! assert_eq!(response.text().await?, "misc.test 3002322 3000234 y\r\n");
//! # Ok::<(), nntp_response::ResponseError>(())
//! # })
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod net;

pub use config::{DecoderConfig, DecoderConfigBuilder, DecoderConfigError};
pub use errors::ResponseError;
pub use net::*;
