//! GameCube memory card exports (`.gci`).
//!
//! A 64-byte big-endian header is followed by the save payload, a whole
//! number of 8 KiB blocks.
//! ```text
//! [0x00] game id           4 bytes
//! [0x04] maker code        2 bytes
//! [0x08] file name         32 bytes, NUL padded
//! [0x28] modified time     u32, seconds since 2000-01-01
//! [0x38] block count       u16
//! [0x3C] declared size     u32
//! ```

pub mod record;

use byteorder::{BigEndian, ReadBytesExt};
use serde::Serialize;
use std::{
    fmt,
    io::{self, Cursor, Read},
    path::Path,
};

use crate::{
    error::{DecodeFailure, Error, Result},
    text::decode_gcn_text,
};
pub use record::{ConsoleRecord, RecordLayout};
use record::CONSOLE_PARTY_SIZE;

pub const GCI_HEADER_SIZE: usize = 0x40;
pub const GC_BLOCK_SIZE: usize = 0x2000;

/// Seconds between the Unix epoch and 2000-01-01T00:00:00Z.
const GAMECUBE_EPOCH_OFFSET: u64 = 946_684_800;

const TRAINER_NAME_OFFSET: usize = 0x78;
const TRAINER_NAME_LENGTH: usize = 8;
const TRAINER_ID_OFFSET: usize = 0x88;
const PLAY_TIME_OFFSET: usize = 0x8c;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ConsoleTitle {
    Colosseum,
    Xd,
    PokemonBox,
    Unknown,
}

impl ConsoleTitle {
    /// Titles without a known party layout parse with an empty party.
    pub fn record_layout(&self) -> Option<RecordLayout> {
        match self {
            ConsoleTitle::Colosseum => Some(RecordLayout::Colosseum),
            ConsoleTitle::Xd => Some(RecordLayout::Xd),
            ConsoleTitle::PokemonBox | ConsoleTitle::Unknown => None,
        }
    }
}

impl fmt::Display for ConsoleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConsoleTitle::Colosseum => "Pokemon Colosseum",
            ConsoleTitle::Xd => "Pokemon XD: Gale of Darkness",
            ConsoleTitle::PokemonBox => "Pokemon Box: Ruby & Sapphire",
            ConsoleTitle::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Region {
    NorthAmerica,
    Europe,
    Japan,
}

impl Region {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            b'E' => Some(Region::NorthAmerica),
            b'P' => Some(Region::Europe),
            b'J' => Some(Region::Japan),
            _ => None,
        }
    }
}

const KNOWN_GAME_IDS: [(&[u8; 4], ConsoleTitle); 8] = [
    (b"GC6E", ConsoleTitle::Colosseum),
    (b"GC6J", ConsoleTitle::Colosseum),
    (b"GC6P", ConsoleTitle::Colosseum),
    (b"GXXE", ConsoleTitle::Xd),
    (b"GXXJ", ConsoleTitle::Xd),
    (b"GXXP", ConsoleTitle::Xd),
    (b"GPXE", ConsoleTitle::PokemonBox),
    (b"GPXJ", ConsoleTitle::PokemonBox),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GciHeader {
    pub game_id: [u8; 4],
    pub maker_code: [u8; 2],
    pub filename: String,
    pub modified_time: u32,
    pub block_count: u16,
    pub declared_size: u32,
}

impl GciHeader {
    pub fn read(data: &[u8]) -> Result<Self> {
        let header = data.get(..GCI_HEADER_SIZE).ok_or(Error::TooSmall {
            found: data.len(),
            minimum: GCI_HEADER_SIZE,
        })?;
        Self::read_fields(header).map_err(|_| Error::TooSmall {
            found: data.len(),
            minimum: GCI_HEADER_SIZE,
        })
    }

    fn read_fields(header: &[u8]) -> io::Result<Self> {
        let mut cursor = Cursor::new(header);
        let mut game_id = [0u8; 4];
        cursor.read_exact(&mut game_id)?;
        let mut maker_code = [0u8; 2];
        cursor.read_exact(&mut maker_code)?;
        cursor.set_position(0x08);
        let mut filename = [0u8; 32];
        cursor.read_exact(&mut filename)?;
        let modified_time = cursor.read_u32::<BigEndian>()?;
        cursor.set_position(0x38);
        let block_count = cursor.read_u16::<BigEndian>()?;
        cursor.set_position(0x3c);
        let declared_size = cursor.read_u32::<BigEndian>()?;

        let filename_len = filename
            .iter()
            .rposition(|byte| *byte != 0)
            .map_or(0, |last| last + 1);

        Ok(GciHeader {
            game_id,
            maker_code,
            filename: String::from_utf8_lossy(&filename[..filename_len]).into_owned(),
            modified_time,
            block_count,
            declared_size,
        })
    }

    pub fn game_id_string(&self) -> String {
        String::from_utf8_lossy(&self.game_id).into_owned()
    }

    pub fn title(&self) -> ConsoleTitle {
        KNOWN_GAME_IDS
            .iter()
            .find(|(game_id, _)| **game_id == self.game_id)
            .map_or(ConsoleTitle::Unknown, |(_, title)| *title)
    }

    pub fn region(&self) -> Option<Region> {
        Region::from_code(self.game_id[3])
    }

    pub fn modified_unix_seconds(&self) -> u64 {
        u64::from(self.modified_time) + GAMECUBE_EPOCH_OFFSET
    }

    /// Payload size implied by the block count.
    pub fn expected_payload_size(&self) -> usize {
        usize::from(self.block_count) * GC_BLOCK_SIZE
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConsoleTrainerInfo {
    pub name: String,
    pub id: u16,
    pub hours: u16,
    pub minutes: u8,
}

#[derive(Clone, Debug, Serialize)]
pub struct GciFile {
    pub header: GciHeader,
    pub title: ConsoleTitle,
    pub region: Option<Region>,
    pub trainer_info: Option<ConsoleTrainerInfo>,
    pub party: Vec<ConsoleRecord>,
    payload_len: usize,
}

impl GciFile {
    pub fn from_path(p: impl AsRef<Path>) -> Result<Self> {
        let path = p.as_ref();
        let raw = std::fs::read(path).map_err(|source| Error::IoUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&raw)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let header = GciHeader::read(data)?;
        let payload = &data[GCI_HEADER_SIZE..];
        let title = header.title();
        log::debug!(
            "GCI game id {} ({title}), {} blocks",
            header.game_id_string(),
            header.block_count
        );
        if title == ConsoleTitle::Unknown {
            log::warn!("{}", Error::UnknownGameIdentifier(header.game_id));
        }
        if payload.len() != header.expected_payload_size() {
            log::warn!(
                "GCI payload is {} bytes but {} blocks declare {} (size field {})",
                payload.len(),
                header.block_count,
                header.expected_payload_size(),
                header.declared_size
            );
        }

        let (trainer_info, party) = match title.record_layout() {
            Some(layout) => (
                Some(parse_trainer_info(payload)),
                parse_party(payload, layout),
            ),
            None => (None, Vec::new()),
        };

        Ok(GciFile {
            region: header.region(),
            header,
            title,
            trainer_info,
            party,
            payload_len: payload.len(),
        })
    }

    /// `UnknownGameIdentifier` when the header names no known title.
    pub fn identifier_error(&self) -> Option<Error> {
        (self.title == ConsoleTitle::Unknown)
            .then(|| Error::UnknownGameIdentifier(self.header.game_id))
    }

    /// Whether the payload length agrees with the header's block count.
    pub fn size_consistent(&self) -> bool {
        self.payload_len == self.header.expected_payload_size()
    }

    pub fn shadow_pokemon(&self) -> Vec<&ConsoleRecord> {
        self.party.iter().filter(|pk| pk.is_shadow).collect()
    }
}

fn parse_trainer_info(payload: &[u8]) -> ConsoleTrainerInfo {
    let name = if payload.len() > TRAINER_NAME_OFFSET + 16 {
        decode_gcn_text(payload, TRAINER_NAME_OFFSET, TRAINER_NAME_LENGTH)
    } else {
        String::new()
    };
    let id = read_u32_at(payload, TRAINER_ID_OFFSET).map_or(0, |word| (word & 0xffff) as u16);
    let play_time = read_u32_at(payload, PLAY_TIME_OFFSET).unwrap_or_default();

    ConsoleTrainerInfo {
        name: if name.is_empty() {
            "Trainer".to_string()
        } else {
            name
        },
        id,
        hours: (play_time >> 16) as u16,
        minutes: ((play_time >> 8) & 0xff) as u8,
    }
}

fn read_u32_at(payload: &[u8], offset: usize) -> Option<u32> {
    let mut cursor = Cursor::new(payload.get(offset..)?);
    cursor.read_u32::<BigEndian>().ok()
}

fn parse_party(payload: &[u8], layout: RecordLayout) -> Vec<ConsoleRecord> {
    (0..CONSOLE_PARTY_SIZE)
        .map_while(|index| layout.record(payload, index).map(|data| (index, data)))
        .filter_map(|(index, data)| match ConsoleRecord::decode(data) {
            Ok(record) => Some(record),
            Err(DecodeFailure::EmptySlot) => None,
            Err(err) => {
                log::warn!("Skipping console party slot {}: {err}", index + 1);
                None
            }
        })
        .collect()
}
