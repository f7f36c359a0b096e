//! Encoding detection and the decode fallback chain.
//!
//! Order of attempts for one file:
//! 1. detector guess (if any and not already a candidate),
//! 2. configured candidates in order,
//! 3. null-byte cleanup followed by UTF-8.

mod decode;
mod detector;

pub use decode::{build_candidates, cleanup_decode, decode_strict, try_decode, Decoded};
pub use detector::{ChardetDetector, EncodingDetector, NoDetector};

use encoding_rs::Encoding;

use crate::config::EncodingConfig;
use crate::error::ConfigError;

/// What the chain would do with a given byte sequence, without side effects.
#[derive(Debug, Clone)]
pub struct Inspection {
    pub guess: Option<&'static Encoding>,
    pub candidates: Vec<&'static Encoding>,
    pub decoded: Option<Decoded>,
}

/// Configured candidate list plus an injected detector.
pub struct DecodeChain {
    defaults: Vec<&'static Encoding>,
    detector: Box<dyn EncodingDetector>,
    strip_nulls_fallback: bool,
}

impl DecodeChain {
    /// Chain from config; the chardetng detector is used when `use_detector` is set.
    pub fn from_config(cfg: &EncodingConfig) -> Result<Self, ConfigError> {
        let detector: Box<dyn EncodingDetector> = if cfg.use_detector {
            Box::new(ChardetDetector)
        } else {
            Box::new(NoDetector)
        };
        Self::with_detector(cfg, detector)
    }

    pub fn with_detector(
        cfg: &EncodingConfig,
        detector: Box<dyn EncodingDetector>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            defaults: cfg.resolve_candidates()?,
            detector,
            strip_nulls_fallback: cfg.strip_nulls_fallback,
        })
    }

    pub fn inspect(&self, bytes: &[u8]) -> Inspection {
        let guess = self.detector.guess(bytes);
        let candidates = build_candidates(&self.defaults, guess);
        let mut decoded = try_decode(bytes, &candidates);
        if decoded.is_none() && self.strip_nulls_fallback {
            decoded = cleanup_decode(bytes);
        }
        Inspection {
            guess,
            candidates,
            decoded,
        }
    }

    /// Decode `bytes` via the fallback chain; `None` means the file is undecodable.
    pub fn decode(&self, bytes: &[u8]) -> Option<Decoded> {
        let inspection = self.inspect(bytes);
        if let Some(d) = &inspection.decoded {
            tracing::debug!(
                guess = inspection.guess.map(Encoding::name),
                encoding = d.encoding_name(),
                via_cleanup = d.via_cleanup,
                "decoded"
            );
        }
        inspection.decoded
    }
}
