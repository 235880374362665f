//! Entry encoders
//!
//! Each table entry is encoded to its final text before anything is
//! emitted:
//! - string table: `"<id>":"<escaped text>"`
//! - metadata table: `"<id>":<json record>`
//! - program data: `0x<hex>`

pub mod escape;
pub mod hex;
pub mod metadata;

pub use escape::{EscapeRules, escape_literal};
pub use hex::{hex_token, hex_tokens, parse_hex_token};
pub use metadata::encode_metadata;

use crate::error::Result;
use crate::formats::{LineMetadata, LocalizedLine};

/// Encode one string table entry.
pub fn string_entry(line: &LocalizedLine, rules: EscapeRules) -> String {
    format!(
        "\"{}\":\"{}\"",
        escape_literal(&line.id, rules),
        escape_literal(&line.text, rules)
    )
}

/// Encode one metadata table entry.
pub fn metadata_entry(meta: &LineMetadata, rules: EscapeRules) -> Result<String> {
    Ok(format!(
        "\"{}\":{}",
        escape_literal(&meta.id, rules),
        encode_metadata(meta)?
    ))
}
