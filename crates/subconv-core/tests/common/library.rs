//! Builds a small media tree on disk with subtitles in assorted encodings.

use encoding_rs::{Encoding, WINDOWS_1250};
use std::fs;
use std::path::{Path, PathBuf};
use subconv_core::encoding::EncodingDetector;

pub const CZECH: &str = "1\n00:00:01,000 --> 00:00:03,500\nPříliš žluťoučký kůň\núpěl ďábelské ódy.\n";

/// Longer dialogue so the statistical detector has enough Czech to go on.
pub const CZECH_DIALOGUE: &str = "1\n00:00:01,000 --> 00:00:03,500\n\
Příliš žluťoučký kůň úpěl ďábelské ódy.\n\n\
2\n00:00:04,000 --> 00:00:06,000\n\
Šťastný řidič ťukal na okno a žádal o čaj.\n\n\
3\n00:00:06,500 --> 00:00:09,000\n\
Ještě že tě vidím, řekla babička a šla do kuchyně uvařit večeři.\n";

/// Detector stub returning a fixed answer so tests do not depend on heuristics.
pub struct Fixed(pub Option<&'static Encoding>);

impl EncodingDetector for Fixed {
    fn guess(&self, _bytes: &[u8]) -> Option<&'static Encoding> {
        self.0
    }
}

pub fn write(root: &Path, rel: &str, bytes: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, bytes).unwrap();
    path
}

pub fn windows_1250(text: &str) -> Vec<u8> {
    let (bytes, _, had_errors) = WINDOWS_1250.encode(text);
    assert!(!had_errors);
    bytes.into_owned()
}

pub fn backup_of(path: &Path) -> PathBuf {
    let mut o = path.as_os_str().to_owned();
    o.push(".bkp");
    PathBuf::from(o)
}
