//! Decoder for the 100-byte (party) and 80-byte (storage) creature record.
//!
//! ```text
//! [0x00] personality value          u32
//! [0x04] original trainer id        u32 (low: public id, high: secret id)
//! [0x08] nickname                   10 bytes
//! [0x12] language                   u8
//! [0x13] misc flags                 u8
//! [0x14] original trainer name      7 bytes
//! [0x1B] markings                   u8
//! [0x1C] checksum                   u16
//! [0x1E] padding                    u16
//! [0x20] encrypted payload          48 bytes (4 x 12-byte substructures)
//! [0x50] status block               20 bytes (party records only)
//! ```
//!
//! All fields are little-endian.

pub mod substructure;

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde::Serialize;
use std::io::{self, Cursor, Read};

use crate::{
    error::DecodeFailure,
    names,
    stats::{Evs, IvLayout, Ivs, Nature},
    text::decode_gba_text,
    TrainerId,
};
use substructure::{Blocks, PAYLOAD_SIZE};

pub const PK3_SIZE_PARTY: usize = 100;
pub const PK3_SIZE_BOX: usize = 80;
pub const PK3_HEADER_SIZE: usize = 32;
const STATUS_OFFSET: usize = PK3_HEADER_SIZE + PAYLOAD_SIZE;

/// Whether the record carries the trailing status block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RecordKind {
    Party,
    Boxed,
}

impl RecordKind {
    fn size(&self) -> usize {
        match self {
            RecordKind::Party => PK3_SIZE_PARTY,
            RecordKind::Boxed => PK3_SIZE_BOX,
        }
    }
}

#[derive(FromPrimitive, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Language {
    Japanese = 1,
    English = 2,
    French = 3,
    Italian = 4,
    German = 5,
    Spanish = 7,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MiscFlags {
    pub is_bad_egg: bool,
    pub has_species: bool,
    pub use_egg_name: bool,
}

impl From<u8> for MiscFlags {
    fn from(value: u8) -> Self {
        MiscFlags {
            is_bad_egg: (value & 0b1) != 0,
            has_species: (value & 0b10) != 0,
            use_egg_name: (value & 0b100) != 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
    Genderless,
}

impl Gender {
    /// Fixed threshold on the low personality byte. Species gender ratios
    /// are not consulted.
    pub fn from_personality(personality_value: u32) -> Self {
        match personality_value & 0xff {
            0xff => Gender::Genderless,
            low if low < 0x7f => Gender::Male,
            _ => Gender::Female,
        }
    }
}

/// Game of origin, from bits 7-10 of the origins word.
#[derive(FromPrimitive, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OriginGame {
    Sapphire = 1,
    Ruby = 2,
    Emerald = 3,
    FireRed = 4,
    LeafGreen = 5,
    ColosseumXd = 15,
}

impl OriginGame {
    pub fn name(id: u8) -> String {
        match OriginGame::from_u8(id) {
            Some(OriginGame::ColosseumXd) => "Colosseum/XD".to_string(),
            Some(game) => format!("{game:?}"),
            None => format!("Game {id}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Growth {
    pub species: u16,
    pub held_item: u16,
    pub experience: u32,
    pub pp_bonuses: u8,
    pub friendship: u8,
    pub reserved: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Attacks {
    pub moves: [u16; 4],
    pub pp: [u8; 4],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContestStats {
    pub coolness: u8,
    pub beauty: u8,
    pub cuteness: u8,
    pub smartness: u8,
    pub toughness: u8,
    pub feel: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub evs: Evs,
    pub contest: ContestStats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Misc {
    pub pokerus: u8,
    pub met_location: u8,
    pub origins: u16,
    pub iv_egg_ability: u32,
    pub ribbons_obedience: u32,
}

impl Misc {
    pub fn met_level(&self) -> u8 {
        (self.origins & 0x7f) as u8
    }

    pub fn origin_game_id(&self) -> u8 {
        ((self.origins >> 7) & 0xf) as u8
    }

    pub fn ivs(&self) -> Ivs {
        Ivs::unpack(self.iv_egg_ability, IvLayout::Cartridge)
    }

    pub fn is_egg(&self) -> bool {
        ((self.iv_egg_ability >> 30) & 0b1) != 0
    }

    pub fn ability_slot(&self) -> u8 {
        ((self.iv_egg_ability >> 31) & 0b1) as u8
    }

    pub fn is_fateful_encounter(&self) -> bool {
        ((self.ribbons_obedience >> 31) & 0b1) != 0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatusBlock {
    pub status_condition: u32,
    pub level: u8,
    pub pokerus_days: u8,
    pub current_hp: u16,
    pub max_hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub special_attack: u16,
    pub special_defense: u16,
}

#[derive(Clone, Debug, Serialize)]
pub struct Pokemon {
    pub personality_value: u32,
    pub original_trainer_id: TrainerId,
    pub nickname: String,
    pub origin_language: Option<Language>,
    pub flags: MiscFlags,
    pub original_trainer_name: String,
    pub markings: u8,
    pub stored_checksum: u16,
    pub growth: Growth,
    pub attacks: Attacks,
    pub condition: Condition,
    pub misc: Misc,
    pub status: Option<StatusBlock>,

    pub species: u16,
    pub species_name: String,
    pub level: u8,
    pub nature: Nature,
    pub is_shiny: bool,
    pub gender: Gender,
    pub ivs: Ivs,
    pub is_egg: bool,
    pub ability_slot: u8,
    pub move_names: Vec<String>,
    pub item_name: String,
    pub met_game: String,
    pub met_level: u8,
    pub met_location_name: String,
    pub is_fateful_encounter: bool,
    #[serde(skip)]
    payload_checksum: u16,
}

impl Pokemon {
    /// Decodes a record, treating 100 or more bytes as a party record and
    /// anything shorter as a storage record.
    pub fn from_pk3(pk3: &[u8]) -> Result<Self, DecodeFailure> {
        let kind = if pk3.len() >= PK3_SIZE_PARTY {
            RecordKind::Party
        } else {
            RecordKind::Boxed
        };
        Self::decode(pk3, kind)
    }

    pub fn from_boxed_pk3(pk3: &[u8]) -> Result<Self, DecodeFailure> {
        Self::decode(pk3, RecordKind::Boxed)
    }

    pub fn decode(pk3: &[u8], kind: RecordKind) -> Result<Self, DecodeFailure> {
        let needed = kind.size();
        if pk3.len() < needed {
            return Err(DecodeFailure::Truncated {
                len: pk3.len(),
                needed,
            });
        }

        // Storage records are zero-padded so both kinds share one layout.
        let mut record = [0u8; PK3_SIZE_PARTY];
        record[..needed].copy_from_slice(&pk3[..needed]);

        let raw = RawRecord::read(&record, kind).map_err(|_| DecodeFailure::Truncated {
            len: pk3.len(),
            needed,
        })?;
        log::trace!(
            "Decoded PK3 pv=0x{:08x} species={} kind={kind:?}",
            raw.personality_value,
            raw.growth.species
        );

        match raw.growth.species {
            0 => Err(DecodeFailure::EmptySlot),
            species if !names::is_valid_species(species) => {
                Err(DecodeFailure::InvalidSpecies(species))
            }
            _ => Ok(raw.into_pokemon()),
        }
    }

    pub fn public_id(&self) -> u16 {
        self.original_trainer_id.public_id
    }

    pub fn secret_id(&self) -> u16 {
        self.original_trainer_id.secret_id
    }

    /// Compares the stored header checksum with the sum of the decrypted
    /// payload. Informational only: a mismatch never rejects a record.
    pub fn checksum_valid(&self) -> bool {
        self.payload_checksum == self.stored_checksum
    }

    pub fn display_name(&self) -> String {
        if self.nickname != self.species_name {
            format!("{} ({})", self.nickname, self.species_name)
        } else {
            self.species_name.clone()
        }
    }
}

/// Fields exactly as stored, before any names are resolved.
struct RawRecord {
    personality_value: u32,
    original_trainer_id: TrainerId,
    nickname: String,
    language: u8,
    flags: u8,
    original_trainer_name: String,
    markings: u8,
    stored_checksum: u16,
    payload_checksum: u16,
    growth: Growth,
    attacks: Attacks,
    condition: Condition,
    misc: Misc,
    status: Option<StatusBlock>,
}

impl RawRecord {
    fn read(record: &[u8; PK3_SIZE_PARTY], kind: RecordKind) -> io::Result<Self> {
        let mut cursor = Cursor::new(&record[..]);
        let personality_value = cursor.read_u32::<LittleEndian>()?;
        let original_trainer_id = cursor.read_u32::<LittleEndian>()?;
        let mut nickname = [0u8; 10];
        cursor.read_exact(&mut nickname)?;
        let language = cursor.read_u8()?;
        let flags = cursor.read_u8()?;
        let mut original_trainer_name = [0u8; 7];
        cursor.read_exact(&mut original_trainer_name)?;
        let markings = cursor.read_u8()?;
        let stored_checksum = cursor.read_u16::<LittleEndian>()?;

        let mut payload = [0u8; PAYLOAD_SIZE];
        payload.copy_from_slice(&record[PK3_HEADER_SIZE..STATUS_OFFSET]);
        crypt_payload(&mut payload, personality_value ^ original_trainer_id);
        let payload_checksum = compute_checksum(&payload);
        let blocks = Blocks::split(&payload, personality_value);

        let status = match kind {
            RecordKind::Party => Some(read_status(&record[STATUS_OFFSET..])?),
            RecordKind::Boxed => None,
        };

        Ok(RawRecord {
            personality_value,
            original_trainer_id: TrainerId::from(original_trainer_id),
            nickname: decode_gba_text(&nickname),
            language,
            flags,
            original_trainer_name: decode_gba_text(&original_trainer_name),
            markings,
            stored_checksum,
            payload_checksum,
            growth: read_growth(&blocks.growth)?,
            attacks: read_attacks(&blocks.attacks)?,
            condition: read_condition(&blocks.condition)?,
            misc: read_misc(&blocks.misc)?,
            status,
        })
    }

    fn into_pokemon(self) -> Pokemon {
        let species = self.growth.species;
        let species_name = names::species_name(species);
        let level = match &self.status {
            Some(status) => status.level,
            None => estimate_level(self.growth.experience),
        };
        let nickname = if self.nickname.is_empty() {
            species_name.clone()
        } else {
            self.nickname
        };
        let original_trainer_name = if self.original_trainer_name.is_empty() {
            "Trainer".to_string()
        } else {
            self.original_trainer_name
        };
        let move_names = self
            .attacks
            .moves
            .iter()
            .filter(|move_id| **move_id != 0)
            .map(|move_id| names::move_name(*move_id))
            .collect();

        Pokemon {
            personality_value: self.personality_value,
            original_trainer_id: self.original_trainer_id,
            nickname,
            origin_language: Language::from_u8(self.language),
            flags: MiscFlags::from(self.flags),
            original_trainer_name,
            markings: self.markings,
            stored_checksum: self.stored_checksum,
            species,
            species_name,
            level,
            nature: Nature::from_personality(self.personality_value),
            is_shiny: is_shiny(self.personality_value, self.original_trainer_id),
            gender: Gender::from_personality(self.personality_value),
            ivs: self.misc.ivs(),
            is_egg: self.misc.is_egg(),
            ability_slot: self.misc.ability_slot(),
            move_names,
            item_name: names::item_name(self.growth.held_item),
            met_game: OriginGame::name(self.misc.origin_game_id()),
            met_level: self.misc.met_level(),
            met_location_name: names::location_name(self.misc.met_location),
            is_fateful_encounter: self.misc.is_fateful_encounter(),
            growth: self.growth,
            attacks: self.attacks,
            condition: self.condition,
            misc: self.misc,
            status: self.status,
            payload_checksum: self.payload_checksum,
        }
    }
}

fn read_growth(block: &[u8]) -> io::Result<Growth> {
    let mut cursor = Cursor::new(block);
    Ok(Growth {
        species: cursor.read_u16::<LittleEndian>()?,
        held_item: cursor.read_u16::<LittleEndian>()?,
        experience: cursor.read_u32::<LittleEndian>()?,
        pp_bonuses: cursor.read_u8()?,
        friendship: cursor.read_u8()?,
        reserved: cursor.read_u16::<LittleEndian>()?,
    })
}

fn read_attacks(block: &[u8]) -> io::Result<Attacks> {
    let mut cursor = Cursor::new(block);
    let mut moves = [0u16; 4];
    cursor.read_u16_into::<LittleEndian>(&mut moves)?;
    let mut pp = [0u8; 4];
    cursor.read_exact(&mut pp)?;
    Ok(Attacks { moves, pp })
}

fn read_condition(block: &[u8]) -> io::Result<Condition> {
    let mut cursor = Cursor::new(block);
    let mut evs = [0u8; 6];
    cursor.read_exact(&mut evs)?;
    let mut contest = [0u8; 6];
    cursor.read_exact(&mut contest)?;
    let [coolness, beauty, cuteness, smartness, toughness, feel] = contest;
    Ok(Condition {
        evs: Evs::from_bytes(evs),
        contest: ContestStats {
            coolness,
            beauty,
            cuteness,
            smartness,
            toughness,
            feel,
        },
    })
}

fn read_misc(block: &[u8]) -> io::Result<Misc> {
    let mut cursor = Cursor::new(block);
    Ok(Misc {
        pokerus: cursor.read_u8()?,
        met_location: cursor.read_u8()?,
        origins: cursor.read_u16::<LittleEndian>()?,
        iv_egg_ability: cursor.read_u32::<LittleEndian>()?,
        ribbons_obedience: cursor.read_u32::<LittleEndian>()?,
    })
}

fn read_status(block: &[u8]) -> io::Result<StatusBlock> {
    let mut cursor = Cursor::new(block);
    Ok(StatusBlock {
        status_condition: cursor.read_u32::<LittleEndian>()?,
        level: cursor.read_u8()?,
        pokerus_days: cursor.read_u8()?,
        current_hp: cursor.read_u16::<LittleEndian>()?,
        max_hp: cursor.read_u16::<LittleEndian>()?,
        attack: cursor.read_u16::<LittleEndian>()?,
        defense: cursor.read_u16::<LittleEndian>()?,
        speed: cursor.read_u16::<LittleEndian>()?,
        special_attack: cursor.read_u16::<LittleEndian>()?,
        special_defense: cursor.read_u16::<LittleEndian>()?,
    })
}

/// XORs every little-endian word of the payload with `key`. The same call
/// encrypts and decrypts.
pub fn crypt_payload(payload: &mut [u8], key: u32) {
    for word in payload.chunks_exact_mut(4) {
        let value = LittleEndian::read_u32(word) ^ key;
        LittleEndian::write_u32(word, value);
    }
}

/// Wrapping sum of the decrypted payload's 16-bit words.
pub fn compute_checksum(payload: &[u8]) -> u16 {
    payload
        .chunks_exact(2)
        .map(LittleEndian::read_u16)
        .fold(0u16, |checksum, word| checksum.wrapping_add(word))
}

pub fn is_shiny(personality_value: u32, trainer_id: TrainerId) -> bool {
    let pv_high = (personality_value >> 16) as u16;
    let pv_low = (personality_value & 0xffff) as u16;
    (trainer_id.public_id ^ trainer_id.secret_id ^ pv_high ^ pv_low) < 8
}

/// Level estimate for records without a status block: the largest level
/// whose cube does not exceed the experience, clamped to 1..=100.
pub fn estimate_level(experience: u32) -> u8 {
    let experience = u64::from(experience);
    (1u64..=100)
        .take_while(|level| level * level * level <= experience)
        .last()
        .unwrap_or(1) as u8
}
