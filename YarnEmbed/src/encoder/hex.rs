//! Byte array literal tokens

/// Format one byte as `0x` followed by two lowercase hex digits.
pub fn hex_token(byte: u8) -> String {
    format!("0x{byte:02x}")
}

/// One [`hex_token`] per input byte, in order.
pub fn hex_tokens(bytes: &[u8]) -> Vec<String> {
    bytes.iter().copied().map(hex_token).collect()
}

/// Parse a token produced by [`hex_token`].
///
/// Accepts either case for the digits; returns `None` for anything that is
/// not `0x` plus exactly two hex digits.
pub fn parse_hex_token(token: &str) -> Option<u8> {
    let digits = token.strip_prefix("0x")?;
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}
