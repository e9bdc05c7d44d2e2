/// Content sniffing with an extension fallback.
///
/// The leading bytes of the file are matched against known magic numbers
/// first. Plain text and other formats without a signature are then looked up
/// by extension. When the name does not help either, a file whose leading
/// bytes are NUL-free UTF-8 is reported as `text/plain`. Anything else yields
/// [`ProbeError::Unknown`].
use super::{MimeProbe, ProbeError};
use infer::Infer;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::trace;

/// How much of a file the plain-text check looks at.
const TEXT_SAMPLE_LEN: u64 = 8192;

const TEXT_PLAIN: &str = "text/plain";

pub struct ContentSniffer {
    matchers: Infer,
}

impl ContentSniffer {
    pub fn new() -> Self {
        Self {
            matchers: Infer::new(),
        }
    }
}

impl Default for ContentSniffer {
    fn default() -> Self {
        Self::new()
    }
}

impl MimeProbe for ContentSniffer {
    fn probe(&self, path: &Path) -> Result<String, ProbeError> {
        let sniffed = self
            .matchers
            .get_from_path(path)
            .map_err(|source| ProbeError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(found) = sniffed {
            trace!(path = %path.display(), mime = found.mime_type(), "sniffed from content");
            return Ok(found.mime_type().to_string());
        }

        if let Some(guessed) = mime_guess::from_path(path).first_raw() {
            trace!(path = %path.display(), mime = guessed, "guessed from extension");
            return Ok(guessed.to_string());
        }

        let is_text = looks_like_text(path).map_err(|source| ProbeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if is_text {
            trace!(path = %path.display(), "plain text by content");
            return Ok(TEXT_PLAIN.to_string());
        }
        Err(ProbeError::Unknown(path.to_path_buf()))
    }
}

/// True when the first [`TEXT_SAMPLE_LEN`] bytes are non-empty, contain no NUL
/// and decode as UTF-8. A character cut off by the sample limit still counts.
fn looks_like_text(path: &Path) -> io::Result<bool> {
    let mut sample = Vec::with_capacity(TEXT_SAMPLE_LEN as usize);
    File::open(path)?
        .take(TEXT_SAMPLE_LEN)
        .read_to_end(&mut sample)?;

    if sample.is_empty() || sample.contains(&0) {
        return Ok(false);
    }
    Ok(match std::str::from_utf8(&sample) {
        Ok(_) => true,
        // `error_len() == None` means the input ended mid-character.
        Err(err) => err.error_len().is_none() && sample.len() as u64 == TEXT_SAMPLE_LEN,
    })
}
