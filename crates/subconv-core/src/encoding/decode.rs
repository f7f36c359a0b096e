//! Pure decode functions: candidate ordering, strict decode, fallback chain.

use encoding_rs::{Encoding, UTF_8};

/// Text produced by the chain plus the encoding that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static Encoding,
    /// True when the text only decoded after stripping null bytes.
    pub via_cleanup: bool,
}

impl Decoded {
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }
}

/// Prepend `guess` to `defaults` unless it is already listed.
pub fn build_candidates(
    defaults: &[&'static Encoding],
    guess: Option<&'static Encoding>,
) -> Vec<&'static Encoding> {
    let mut out = Vec::with_capacity(defaults.len() + 1);
    if let Some(g) = guess {
        if !defaults.contains(&g) {
            out.push(g);
        }
    }
    out.extend_from_slice(defaults);
    out
}

/// Decode all of `bytes` under `enc`, failing on any malformed sequence.
///
/// A leading BOM belonging to `enc` is consumed and not part of the text.
/// For the `windows-*` code pages a byte with no assigned character (decoded
/// as a C1 control) counts as malformed, so the chain moves on to the next
/// candidate instead of keeping control characters.
pub fn decode_strict(bytes: &[u8], enc: &'static Encoding) -> Option<String> {
    let body = match Encoding::for_bom(bytes) {
        Some((bom_enc, bom_len)) if bom_enc == enc => &bytes[bom_len..],
        _ => bytes,
    };
    let text = enc.decode_without_bom_handling_and_without_replacement(body)?;
    if is_windows_code_page(enc) && text.chars().any(is_c1_control) {
        return None;
    }
    Some(text.into_owned())
}

fn is_windows_code_page(enc: &'static Encoding) -> bool {
    enc.is_single_byte() && enc.name().starts_with("windows-")
}

fn is_c1_control(c: char) -> bool {
    ('\u{80}'..='\u{9F}').contains(&c)
}

/// First candidate that decodes `bytes` without error wins.
pub fn try_decode(bytes: &[u8], candidates: &[&'static Encoding]) -> Option<Decoded> {
    candidates.iter().find_map(|&enc| {
        decode_strict(bytes, enc).map(|text| Decoded {
            text,
            encoding: enc,
            via_cleanup: false,
        })
    })
}

/// Last resort: drop every null byte and try UTF-8.
pub fn cleanup_decode(bytes: &[u8]) -> Option<Decoded> {
    let cleaned: Vec<u8> = bytes.iter().copied().filter(|&b| b != 0).collect();
    decode_strict(&cleaned, UTF_8).map(|text| Decoded {
        text,
        encoding: UTF_8,
        via_cleanup: true,
    })
}
