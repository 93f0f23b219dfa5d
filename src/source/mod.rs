mod html;

use crate::engine::{tokenize, WordSequence};
use reqwest::{StatusCode, Url};
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

pub use html::html_to_text;

mod constants {
    use std::time::Duration;

    pub const USER_AGENT: &str = concat!("skim/", env!("CARGO_PKG_VERSION"));
    pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
    /// Bytes inspected when sniffing for binary content.
    pub const SNIFF_LEN: usize = 8192;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Stdin,
    File,
    Url,
}

impl Origin {
    fn binary_reason(self) -> String {
        match self {
            Origin::File => "Cannot open binary file".to_string(),
            other => format!("Cannot read binary content from {}", other),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Stdin => write!(f, "stdin"),
            Origin::File => write!(f, "file"),
            Origin::Url => write!(f, "URL content"),
        }
    }
}

/// Reasons a source produced no readable words. The `Display` text is the
/// short reason shown in the UI; the underlying error, if any, is its source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Error reading from stdin")]
    Stdin(#[source] io::Error),
    #[error("Error reading file")]
    Read(#[source] io::Error),
    #[error("Error fetching URL")]
    Fetch(#[from] reqwest::Error),
    #[error("Error fetching URL: HTTP {0}")]
    Status(StatusCode),
    #[error("{}", .0.binary_reason())]
    Binary(Origin),
    #[error("No words found in {0}")]
    NoWords(Origin),
}

/// True when stdin carries content: a pipe, a socket or a redirected regular
/// file. Terminals and other character devices such as `/dev/null` do not.
pub fn stdin_is_piped() -> bool {
    #[cfg(unix)]
    {
        use std::os::fd::AsFd;
        match io::stdin().as_fd().try_clone_to_owned() {
            Ok(fd) => is_content_stream(&fs::File::from(fd)),
            Err(_) => false,
        }
    }
    #[cfg(not(unix))]
    {
        use std::io::IsTerminal;
        !io::stdin().is_terminal()
    }
}

#[cfg(unix)]
fn is_content_stream(file: &fs::File) -> bool {
    use std::os::unix::fs::FileTypeExt;
    file.metadata()
        .map(|meta| {
            let kind = meta.file_type();
            kind.is_fifo() || kind.is_file() || kind.is_socket()
        })
        .unwrap_or(false)
}

pub fn read_stdin() -> Result<WordSequence, SourceError> {
    let mut content = Vec::new();
    io::stdin()
        .read_to_end(&mut content)
        .map_err(SourceError::Stdin)?;
    words_from_bytes(&content, Origin::Stdin)
}

pub fn read_file(path: &Path) -> Result<WordSequence, SourceError> {
    let content = fs::read(path).map_err(SourceError::Read)?;
    tracing::debug!(target: "source", path = %path.display(), bytes = content.len(), "file read");
    words_from_bytes(&content, Origin::File)
}

/// Blocking GET; the body is treated as HTML and reduced to its text.
pub fn fetch_url(url: &str) -> Result<WordSequence, SourceError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(constants::FETCH_TIMEOUT)
        .user_agent(constants::USER_AGENT)
        .build()?;
    let response = client.get(url).send()?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(SourceError::Status(status));
    }
    let body = response.text()?;
    tracing::debug!(target: "source", %url, bytes = body.len(), "url fetched");
    tokenize(&html_to_text(&body)).ok_or(SourceError::NoWords(Origin::Url))
}

/// Absolute URL with both a scheme and a host.
pub fn is_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty()))
        .unwrap_or(false)
}

/// A NUL byte near the start marks content as binary.
pub fn is_binary(content: &[u8]) -> bool {
    content
        .iter()
        .take(constants::SNIFF_LEN)
        .any(|&b| b == 0)
}

fn words_from_bytes(content: &[u8], origin: Origin) -> Result<WordSequence, SourceError> {
    if is_binary(content) {
        return Err(SourceError::Binary(origin));
    }
    tokenize(&String::from_utf8_lossy(content)).ok_or(SourceError::NoWords(origin))
}
