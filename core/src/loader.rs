use crate::error::VmError;

/// Parses a hex-text program into raw bytes.
///
/// Tokens are separated by any whitespace. A token is either one byte
/// (`"A2"`) or one big-endian word (`"A2F0"`), so both of these load the same
/// two bytes:
/// ```text
/// A2 F0
/// A2F0
/// ```
pub fn parse_hex(text: &str) -> Result<Vec<u8>, VmError> {
    let mut bytes = Vec::new();
    for (index, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            let malformed = || VmError::MalformedToken {
                token: token.to_string(),
                line: index + 1,
            };
            if !token.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(malformed());
            }
            match token.len() {
                2 => bytes.push(parse_byte(token).ok_or_else(malformed)?),
                4 => {
                    bytes.push(parse_byte(&token[..2]).ok_or_else(malformed)?);
                    bytes.push(parse_byte(&token[2..]).ok_or_else(malformed)?);
                }
                _ => return Err(malformed()),
            }
        }
    }
    Ok(bytes)
}

fn parse_byte(digits: &str) -> Option<u8> {
    u8::from_str_radix(digits, 16).ok()
}
