//! Cartridge save files.
//!
//! A full image holds two slots back to back; each slot is fourteen 4 KiB
//! sections. The newer valid slot is authoritative.

pub mod section;
pub mod storage;

use byteorder::{LittleEndian, ReadBytesExt};
use serde::Serialize;
use std::{
    fmt,
    io::{self, Cursor, Read, Seek, SeekFrom},
    path::Path,
};

use crate::{
    error::{DecodeFailure, Error, Result},
    pk3::{Pokemon, RecordKind, PK3_SIZE_PARTY},
    text::decode_gba_text,
    transfer::{self, TransferCandidate, TransferDirection, Verdict},
    TrainerId,
};
use section::{SaveSlot, SLOT_SIZE};
use storage::{PcBox, StorageBuffer};

pub const GAME_SAVE_DATA_LENGTH: usize = 2 * SLOT_SIZE;
pub const MAX_PARTY_SIZE: usize = 6;

const GAME_CODE_OFFSET: u64 = 0x00ac;

/// Which of the two redundant copies was picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SlotId {
    A,
    B,
}

impl SlotId {
    pub fn index(&self) -> u8 {
        match self {
            SlotId::A => 0,
            SlotId::B => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CartridgeTitle {
    Ruby,
    Sapphire,
    Emerald,
    FireRed,
    LeafGreen,
}

impl fmt::Display for CartridgeTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Best-effort classification from the game code word in section 0. Paired
/// titles share a layout and cannot be told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameFamily {
    RubySapphire,
    Emerald,
    FireRedLeafGreen,
    Unknown,
}

impl GameFamily {
    fn from_game_code(data: u32) -> Self {
        match data {
            0x00 => GameFamily::RubySapphire,
            0x01 => GameFamily::FireRedLeafGreen,
            // Emerald stores a security key here.
            _ => GameFamily::Emerald,
        }
    }

    /// Offsets of the party count and the first party record in section 1.
    fn party_offsets(&self) -> (usize, usize) {
        match self {
            GameFamily::FireRedLeafGreen => (0x0034, 0x0038),
            GameFamily::RubySapphire | GameFamily::Emerald | GameFamily::Unknown => {
                (0x0234, 0x0238)
            }
        }
    }

    pub fn titles(&self) -> &'static [CartridgeTitle] {
        match self {
            GameFamily::RubySapphire => &[CartridgeTitle::Ruby, CartridgeTitle::Sapphire],
            GameFamily::Emerald => &[CartridgeTitle::Emerald],
            GameFamily::FireRedLeafGreen => &[CartridgeTitle::FireRed, CartridgeTitle::LeafGreen],
            GameFamily::Unknown => &[],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PlayerGender {
    Male,
    Female,
    Unknown(u8),
}

impl From<u8> for PlayerGender {
    fn from(value: u8) -> Self {
        match value {
            0x00 => PlayerGender::Male,
            0x01 => PlayerGender::Female,
            other => PlayerGender::Unknown(other),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TimePlayed {
    pub hours: u16,
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrainerInfo {
    pub player_name: String,
    pub player_gender: PlayerGender,
    pub id: TrainerId,
    pub time_played: TimePlayed,
}

pub struct SaveFile {
    slot: SaveSlot,
    storage: StorageBuffer,
    slot_used: SlotId,
    game_family: GameFamily,
    trainer_info: Option<TrainerInfo>,
}

impl SaveFile {
    pub fn from_path(p: impl AsRef<Path>) -> Result<Self> {
        let path = p.as_ref();
        let full_contents = std::fs::read(path).map_err(|source| Error::IoUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read {} bytes from {}", full_contents.len(), path.display());
        Self::from_bytes(&full_contents)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < SLOT_SIZE {
            return Err(Error::TooSmall {
                found: data.len(),
                minimum: SLOT_SIZE,
            });
        }

        let slot_a = SaveSlot::parse(&data[..SLOT_SIZE]);
        // A second slot only exists in a full image; a trailing fragment is ignored.
        let slot_b = match data.get(SLOT_SIZE..GAME_SAVE_DATA_LENGTH) {
            Some(slot_data) => SaveSlot::parse(slot_data),
            None => {
                if data.len() > SLOT_SIZE {
                    log::warn!(
                        "Ignoring {} trailing bytes after slot A, a second slot needs {GAME_SAVE_DATA_LENGTH} bytes in total",
                        data.len() - SLOT_SIZE
                    );
                }
                None
            }
        };
        let (slot_used, slot) = select_slot(slot_a, slot_b)?;
        let storage = StorageBuffer::assemble(&slot);

        let (trainer_info, game_family) = match slot.section(0) {
            Some(section) => match parse_trainer_info(section.bytes()) {
                Ok((trainer_info, game_family)) => (Some(trainer_info), game_family),
                Err(err) => {
                    log::warn!("Unable to read trainer info: {err}");
                    (None, GameFamily::Unknown)
                }
            },
            None => {
                log::warn!("Section 0 is missing, game family is unknown");
                (None, GameFamily::Unknown)
            }
        };
        log::debug!("Detected game family {game_family:?}");

        Ok(SaveFile {
            slot,
            storage,
            slot_used,
            game_family,
            trainer_info,
        })
    }

    pub fn slot(&self) -> &SaveSlot {
        &self.slot
    }

    pub fn slot_used(&self) -> SlotId {
        self.slot_used
    }

    pub fn game_family(&self) -> GameFamily {
        self.game_family
    }

    pub fn trainer_info(&self) -> Option<&TrainerInfo> {
        self.trainer_info.as_ref()
    }

    /// Sections of the chosen slot whose stored checksum does not match.
    pub fn checksum_failures(&self) -> Vec<Error> {
        self.slot.checksum_failures()
    }

    pub fn get_party(&self) -> Vec<Pokemon> {
        let Some(section) = self.slot.section(1) else {
            log::warn!("Section 1 is missing, party is empty");
            return Vec::new();
        };
        let section_data = section.bytes();
        let (team_size_offset, team_offset) = self.game_family.party_offsets();

        let mut cursor = Cursor::new(section_data);
        cursor.set_position(team_size_offset as u64);
        let team_size = match cursor.read_u32::<LittleEndian>() {
            Ok(team_size) => team_size,
            Err(_) => return Vec::new(),
        };
        if team_size as usize > MAX_PARTY_SIZE {
            log::warn!("Party count {team_size} exceeds {MAX_PARTY_SIZE}, clamping");
        }
        let team_size = (team_size as usize).min(MAX_PARTY_SIZE);

        (0..team_size)
            .map_while(|index| {
                let start = team_offset + index * PK3_SIZE_PARTY;
                section_data
                    .get(start..start + PK3_SIZE_PARTY)
                    .map(|pk3| (index, pk3))
            })
            .filter_map(|(index, pk3)| {
                decode_logged(pk3, RecordKind::Party, &format!("party slot {}", index + 1))
            })
            .collect()
    }

    /// Decodes one PC box. `box_number` counts from 1.
    pub fn get_box(&self, box_number: u8) -> Option<PcBox> {
        self.storage.get_box(box_number)
    }

    pub fn get_boxes(&self) -> Vec<PcBox> {
        self.storage.boxes()
    }

    /// Storage sections of the chosen slot, assembled once at load time.
    pub fn storage(&self) -> &StorageBuffer {
        &self.storage
    }

    /// Party followed by every occupied box slot.
    pub fn all_pokemon(&self) -> Vec<Pokemon> {
        let mut pokemon = self.get_party();
        pokemon.extend(
            self.get_boxes()
                .into_iter()
                .flat_map(|pc_box| pc_box.pokemon.into_iter().map(|(_, pk)| pk)),
        );
        pokemon
    }

    pub fn transferable_pokemon(&self, direction: TransferDirection) -> Vec<Pokemon> {
        self.all_pokemon()
            .into_iter()
            .filter(|pk| {
                transfer::evaluate(&TransferCandidate::from(pk), direction).verdict
                    == Verdict::Compatible
            })
            .collect()
    }
}

/// Picks the slot with the higher save index. Ties go to slot A.
fn select_slot(slot_a: Option<SaveSlot>, slot_b: Option<SaveSlot>) -> Result<(SlotId, SaveSlot)> {
    let selected = match (slot_a, slot_b) {
        (None, None) => return Err(Error::NoValidSlot),
        (Some(slot_a), None) => (SlotId::A, slot_a),
        (None, Some(slot_b)) => (SlotId::B, slot_b),
        (Some(slot_a), Some(slot_b)) => {
            log::debug!(
                "Save index A: {:?}, save index B: {:?}",
                slot_a.save_index(),
                slot_b.save_index()
            );
            if slot_b.save_index() > slot_a.save_index() {
                (SlotId::B, slot_b)
            } else {
                (SlotId::A, slot_a)
            }
        }
    };
    log::debug!("Using save slot {:?}", selected.0);
    Ok(selected)
}

fn parse_trainer_info(section_data: &[u8]) -> io::Result<(TrainerInfo, GameFamily)> {
    let mut cursor = Cursor::new(section_data);

    let mut player_name = [0u8; 7];
    cursor.read_exact(&mut player_name)?;
    let _ = cursor.read_u8()?;
    let player_gender = PlayerGender::from(cursor.read_u8()?);
    let _ = cursor.read_u8()?;
    let trainer_id = TrainerId::from(cursor.read_u32::<LittleEndian>()?);
    let time_played = TimePlayed {
        hours: cursor.read_u16::<LittleEndian>()?,
        minutes: cursor.read_u8()?,
        seconds: cursor.read_u8()?,
        frames: cursor.read_u8()?,
    };

    cursor.seek(SeekFrom::Start(GAME_CODE_OFFSET))?;
    let game_family = GameFamily::from_game_code(cursor.read_u32::<LittleEndian>()?);

    Ok((
        TrainerInfo {
            player_name: decode_gba_text(&player_name),
            player_gender,
            id: trainer_id,
            time_played,
        },
        game_family,
    ))
}

/// Decodes a stored record. Empty slots are silent; anything else that
/// fails is logged and skipped.
pub(crate) fn decode_logged(pk3: &[u8], kind: RecordKind, location: &str) -> Option<Pokemon> {
    match Pokemon::decode(pk3, kind) {
        Ok(pokemon) => Some(pokemon),
        Err(DecodeFailure::EmptySlot) => None,
        Err(err) => {
            log::warn!("Skipping {location}: {err}");
            None
        }
    }
}
