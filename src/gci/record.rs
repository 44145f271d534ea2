//! Party records in the console save payload. Unencrypted and big-endian.
//!
//! ```text
//! [0x00] species id        u16
//! [0x04] level             u8
//! [0x08] nature index      u8
//! [0x10] shadow flag       u8
//! [0x11] shadow level      u8
//! [0x18] nickname          10 x u16
//! [0x38] IV word           u32
//! [0x40] move ids          4 x u16
//! ```

use byteorder::{BigEndian, ReadBytesExt};
use serde::Serialize;
use std::io::{self, Cursor};

use crate::{
    error::DecodeFailure,
    names,
    stats::{IvLayout, Ivs, Nature},
    text::decode_gcn_text,
};

/// Shortest window that holds every field above.
pub const CONSOLE_RECORD_MIN_SIZE: usize = 0x50;
pub const CONSOLE_PARTY_SIZE: usize = 6;
pub const MAX_SHADOW_LEVEL: u8 = 5;

const LEVEL_OFFSET: u64 = 0x04;
const NATURE_OFFSET: u64 = 0x08;
const SHADOW_OFFSET: u64 = 0x10;
const NICKNAME_OFFSET: usize = 0x18;
const NICKNAME_LENGTH: usize = 10;
const IV_OFFSET: u64 = 0x38;
const MOVES_OFFSET: u64 = 0x40;

/// Where each title keeps its party and how far apart the records are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RecordLayout {
    Colosseum,
    Xd,
}

impl RecordLayout {
    pub fn party_offset(&self) -> usize {
        match self {
            RecordLayout::Colosseum => 0x0498,
            RecordLayout::Xd => 0x04a8,
        }
    }

    pub fn record_size(&self) -> usize {
        match self {
            RecordLayout::Colosseum => 0x0138,
            RecordLayout::Xd => 0x0196,
        }
    }

    /// The record window for party slot `index`, if the payload reaches it.
    pub fn record<'a>(&self, payload: &'a [u8], index: usize) -> Option<&'a [u8]> {
        let start = self.party_offset() + index * self.record_size();
        payload.get(start..start + self.record_size())
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ConsoleRecord {
    pub species: u16,
    pub species_name: String,
    pub nickname: String,
    pub level: u8,
    pub nature: Nature,
    pub is_shadow: bool,
    pub shadow_level: u8,
    pub iv_word: u32,
    pub ivs: Ivs,
    pub moves: [u16; 4],
    pub move_names: Vec<String>,
}

impl ConsoleRecord {
    pub fn decode(data: &[u8]) -> Result<Self, DecodeFailure> {
        if data.len() < CONSOLE_RECORD_MIN_SIZE {
            return Err(DecodeFailure::Truncated {
                len: data.len(),
                needed: CONSOLE_RECORD_MIN_SIZE,
            });
        }

        let species = Cursor::new(data)
            .read_u16::<BigEndian>()
            .map_err(|_| truncated(data))?;
        match species {
            0 => return Err(DecodeFailure::EmptySlot),
            species if !names::is_valid_species(species) => {
                return Err(DecodeFailure::InvalidSpecies(species))
            }
            _ => {}
        }

        let record = Self::read_fields(data, species).map_err(|_| truncated(data))?;
        log::trace!(
            "Decoded console record species={} shadow={}",
            record.species,
            record.is_shadow
        );
        Ok(record)
    }

    fn read_fields(data: &[u8], species: u16) -> io::Result<Self> {
        let mut cursor = Cursor::new(data);

        cursor.set_position(LEVEL_OFFSET);
        let level = cursor.read_u8()?.clamp(1, 100);
        cursor.set_position(NATURE_OFFSET);
        let nature = Nature::from_index(u32::from(cursor.read_u8()?));

        cursor.set_position(SHADOW_OFFSET);
        let is_shadow = cursor.read_u8()? != 0;
        let shadow_level = cursor.read_u8()?;
        let shadow_level = if is_shadow {
            shadow_level.min(MAX_SHADOW_LEVEL)
        } else {
            0
        };

        cursor.set_position(IV_OFFSET);
        let iv_word = cursor.read_u32::<BigEndian>()?;

        cursor.set_position(MOVES_OFFSET);
        let mut moves = [0u16; 4];
        cursor.read_u16_into::<BigEndian>(&mut moves)?;

        let species_name = names::species_name(species);
        let nickname = match decode_gcn_text(data, NICKNAME_OFFSET, NICKNAME_LENGTH) {
            nickname if nickname.is_empty() => species_name.clone(),
            nickname => nickname,
        };

        Ok(ConsoleRecord {
            species,
            species_name,
            nickname,
            level,
            nature,
            is_shadow,
            shadow_level,
            iv_word,
            ivs: Ivs::unpack(iv_word, IvLayout::Console),
            moves,
            // No move table is consulted on this path.
            move_names: moves
                .iter()
                .filter(|move_id| **move_id != 0)
                .map(|move_id| names::move_placeholder(*move_id))
                .collect(),
        })
    }

    pub fn display_name(&self) -> String {
        if self.nickname != self.species_name {
            format!("{} ({})", self.nickname, self.species_name)
        } else {
            self.species_name.clone()
        }
    }
}

fn truncated(data: &[u8]) -> DecodeFailure {
    DecodeFailure::Truncated {
        len: data.len(),
        needed: CONSOLE_RECORD_MIN_SIZE,
    }
}
