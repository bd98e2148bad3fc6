//! Decodes one NNTP response from stdin and prints its parts.
//!
//! ```text
//! printf '220 1 <a@b>\r\nSubject: hi\r\n\r\n..body\r\n.\r\n' | cargo run --example decode_stdin
//! ```
use nntp_response::{DecoderConfig, Response};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DecoderConfig::builder()
        .strict_termination(std::env::var_os("NNTP_STRICT").is_some())
        .build()?;

    let reader = BufReader::new(tokio::io::stdin());
    let mut response = Response::from_reader_with_config(reader, config).await?;

    println!("status: {} {}", response.status(), response.status_text());
    for (name, value) in response.headers().iter() {
        println!("header: {name} = {value}");
    }

    let mut body = response.take_body()?;
    while let Some(chunk) = body.next_chunk().await? {
        print!("body: {chunk}");
    }

    Ok(())
}
