//! Byte-to-text decoding of certificate exports

use crate::error::ExtractorError;
use encoding_rs::{Encoding, EUC_KR};
use tracing::debug;

/// Windows names of code page 949, which WHATWG folds into `euc-kr`
const WINDOWS_949_ALIASES: [&str; 4] = ["cp949", "ms949", "uhc", "windows-949"];

/// Resolve an encoding label such as `euc-kr`, `cp949` or `utf-8`
///
/// Labels come from the WHATWG registry, plus the Windows aliases of code
/// page 949.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding, ExtractorError> {
    let label = label.trim();
    if WINDOWS_949_ALIASES
        .iter()
        .any(|alias| alias.eq_ignore_ascii_case(label))
    {
        return Ok(EUC_KR);
    }
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| ExtractorError::UnknownEncoding(label.to_string()))
}

/// Decode a document and normalize its line endings to `\n`
///
/// A byte-order mark wins over `encoding_label`. Malformed input is an error;
/// no replacement characters are ever produced.
pub fn decode_document(bytes: &[u8], encoding_label: &str) -> Result<String, ExtractorError> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_length)) => (encoding, &bytes[bom_length..]),
        None => (resolve_encoding(encoding_label)?, bytes),
    };

    debug!("Decoding {} bytes as {}", body.len(), encoding.name());

    let text = encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| ExtractorError::Decode {
            encoding: encoding.name().to_string(),
        })?;

    Ok(normalize_line_endings(&text))
}

fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
