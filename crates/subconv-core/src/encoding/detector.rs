//! Statistical "best guess" of a byte sequence's encoding.

use encoding_rs::Encoding;

/// Guesses the most likely encoding of `bytes`. Only presence of a guess
/// matters to the decode chain; there is no confidence gate.
pub trait EncodingDetector {
    fn guess(&self, bytes: &[u8]) -> Option<&'static Encoding>;
}

/// BOM sniffing followed by `chardetng`'s statistical guess.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChardetDetector;

impl EncodingDetector for ChardetDetector {
    fn guess(&self, bytes: &[u8]) -> Option<&'static Encoding> {
        if bytes.is_empty() {
            return None;
        }
        if let Some((enc, _bom_len)) = Encoding::for_bom(bytes) {
            return Some(enc);
        }
        let mut det = chardetng::EncodingDetector::new();
        det.feed(bytes, true);
        Some(det.guess(None, true))
    }
}

/// Never guesses; the fixed candidate list alone decides.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDetector;

impl EncodingDetector for NoDetector {
    fn guess(&self, _bytes: &[u8]) -> Option<&'static Encoding> {
        None
    }
}
