//! Read-only decoders for Gen 3 creature records.
//!
//! Two containers are supported: the 128 KiB cartridge save shared by
//! Ruby, Sapphire, Emerald, FireRed and LeafGreen ([`save::SaveFile`]), and
//! the GameCube single-file export written by Colosseum and XD
//! ([`gci::GciFile`]). Decoded records can be checked for cross-format
//! transfer with [`transfer`].

pub mod error;
pub mod gci;
pub mod names;
pub mod pk3;
pub mod save;
pub mod stats;
pub mod text;
pub mod transfer;

pub use error::{DecodeFailure, Error, Result};
pub use gci::{ConsoleRecord, GciFile, GciHeader};
pub use pk3::Pokemon;
pub use save::SaveFile;
pub use transfer::{TransferDirection, TransferVerdict, Verdict};

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TrainerId {
    pub public_id: u16,
    pub secret_id: u16,
}

impl From<u32> for TrainerId {
    fn from(value: u32) -> Self {
        TrainerId {
            public_id: (value & 0xffff) as u16,
            secret_id: (value >> 16) as u16,
        }
    }
}
