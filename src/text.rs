//! Fixed-width legacy text used by the two hardware families.

use byteorder::{BigEndian, ByteOrder};

/// Decodes cartridge text: one byte per character, proprietary table,
/// terminated by the first control byte (0xFA..=0xFF).
pub fn decode_gba_text(text_data: &[u8]) -> String {
    let mut out_text = String::new();
    for byte in text_data {
        let decoded_char = match *byte {
            0xfa..=0xff => break,
            0x00 => ' ',
            digit @ 0xa1..=0xaa => char::from(b'0' + (digit - 0xa1)),
            0xab => '!',
            0xac => '?',
            0xad => '.',
            0xae => '-',
            0xb0 => '…',
            0xb1 => '“',
            0xb2 => '”',
            0xb3 => '‘',
            0xb4 => '’',
            0xb5 => '♂',
            0xb6 => '♀',
            0xb8 => ',',
            0xba => '/',
            upper @ 0xbb..=0xd4 => char::from(b'A' + (upper - 0xbb)),
            lower @ 0xd5..=0xee => char::from(b'a' + (lower - 0xd5)),
            0xf0 => ':',
            _ => '?',
        };
        out_text.push(decoded_char);
    }

    out_text.trim_end().to_string()
}

/// Decodes console text: big-endian 16-bit units, zero terminated. Only
/// ASCII letters and digits are kept; anything else becomes `?`.
///
/// Reads at most `max_units` units starting at `offset` and never past the
/// end of `data`.
pub fn decode_gcn_text(data: &[u8], offset: usize, max_units: usize) -> String {
    let mut out_text = String::new();
    for idx in 0..max_units {
        let unit = offset
            .checked_add(idx * 2)
            .and_then(|pos| data.get(pos..pos.checked_add(2)?));
        let Some(unit) = unit else {
            break;
        };
        let code = BigEndian::read_u16(unit);
        if code == 0 {
            break;
        }
        match u8::try_from(code) {
            Ok(ch) if ch.is_ascii_alphanumeric() => out_text.push(char::from(ch)),
            _ => out_text.push('?'),
        }
    }

    out_text
}
