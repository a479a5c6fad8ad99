use crate::error::DecodeError;

/// Decode a form-urlencoded BMML field value.
///
/// `+` becomes a space and every `%XX` escape becomes the ISO-8859-1
/// character with code point `0xXX`. Everything else passes through
/// untouched.
pub fn decode_text(raw: &str) -> Result<String, DecodeError> {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '+' => decoded.push(' '),
            '%' => {
                let (high, low) = match (chars.next(), chars.next()) {
                    (Some((_, high)), Some((_, low))) => (high, low),
                    _ => return Err(DecodeError::IncompleteEscape { offset }),
                };
                match (high.to_digit(16), low.to_digit(16)) {
                    // ISO-8859-1 maps each byte straight onto U+0000..U+00FF.
                    (Some(high), Some(low)) => decoded.push(latin1_char(high << 4 | low)),
                    _ => return Err(DecodeError::IllegalHex { offset }),
                }
            }
            other => decoded.push(other),
        }
    }

    Ok(decoded)
}

/// Transcode ISO-8859-1 bytes to a string.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}

fn latin1_char(byte: u32) -> char {
    char::from(byte as u8)
}
