//! Error taxonomy shared by the cartridge and memory card decoders.
//!
//! Whole-file failures (`IoUnavailable`, `TooSmall`, `NoValidSlot`) abort a
//! parse. The remaining kinds describe damage that is local to one section,
//! one record or one header field and are reported without aborting.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to read {}: {source}", .path.display())]
    IoUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("buffer too small: found {found} bytes, need at least {minimum}")]
    TooSmall { found: usize, minimum: usize },
    #[error("neither save slot contains a valid section")]
    NoValidSlot,
    #[error("section {section_id} checksum mismatch: stored 0x{stored:04x}, computed 0x{computed:04x}")]
    SectionChecksumMismatch {
        section_id: u16,
        stored: u16,
        computed: u16,
    },
    #[error("record decode failed: {0}")]
    RecordDecodeFailure(#[from] DecodeFailure),
    #[error("unknown game identifier {}", String::from_utf8_lossy(.0))]
    UnknownGameIdentifier([u8; 4]),
}

/// Why a single creature record could not be produced.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Serialize)]
pub enum DecodeFailure {
    #[error("record truncated: {len} bytes, need {needed}")]
    Truncated { len: usize, needed: usize },
    #[error("empty slot")]
    EmptySlot,
    #[error("species id {0} is outside 1..=386")]
    InvalidSpecies(u16),
}

