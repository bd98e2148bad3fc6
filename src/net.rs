pub mod body;
pub mod classify;
pub mod codes;
pub mod headers;
mod line;
pub mod response;
pub mod status;

pub use body::{Body, BodyFramer, ChunkStream, LineSource};
pub use classify::is_multiline;
pub use headers::{HeaderBlockEnd, Headers};
pub use response::{Response, ResponseInit};
pub use status::StatusLine;
