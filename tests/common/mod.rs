#![allow(dead_code)]

//! Builders for synthetic save images. No real saves are checked in, so
//! every test assembles its input from these.

use pkread::{
    gci::{RecordLayout, GCI_HEADER_SIZE, GC_BLOCK_SIZE},
    pk3::{
        compute_checksum, crypt_payload,
        substructure::{block_offset, Substructure, PAYLOAD_SIZE, SUBSTRUCTURE_SIZE},
        PK3_HEADER_SIZE, PK3_SIZE_BOX, PK3_SIZE_PARTY,
    },
    save::section::{
        compute_section_checksum, NUMBER_OF_SECTIONS, SECTION_DATA_SIZE, SECTION_SIZE, SLOT_SIZE,
    },
};

/// Encodes ASCII letters, digits and spaces in the cartridge character set,
/// padded with terminators.
pub fn encode_gba_text(text: &str, width: usize) -> Vec<u8> {
    let mut out: Vec<u8> = text
        .bytes()
        .map(|ch| match ch {
            b'A'..=b'Z' => 0xbb + (ch - b'A'),
            b'a'..=b'z' => 0xd5 + (ch - b'a'),
            b'0'..=b'9' => 0xa1 + (ch - b'0'),
            _ => 0x00,
        })
        .collect();
    out.resize(width, 0xff);
    out.truncate(width);
    out
}

#[derive(Clone, Debug)]
pub struct Pk3Builder {
    pub personality_value: u32,
    pub trainer_id: u32,
    pub nickname: String,
    pub trainer_name: String,
    pub language: u8,
    pub species: u16,
    pub held_item: u16,
    pub experience: u32,
    pub friendship: u8,
    pub moves: [u16; 4],
    pub pp: [u8; 4],
    pub evs: [u8; 6],
    pub contest: [u8; 6],
    pub met_location: u8,
    pub origins: u16,
    pub iv_egg_ability: u32,
    pub ribbons: u32,
    pub level: u8,
}

impl Pk3Builder {
    pub fn new(species: u16) -> Self {
        Pk3Builder {
            personality_value: 0x1234_5678,
            trainer_id: 0xabcd_0102,
            nickname: String::new(),
            trainer_name: "Ash".to_string(),
            language: 2,
            species,
            held_item: 0,
            experience: 1000,
            friendship: 70,
            moves: [33, 0, 0, 0],
            pp: [35, 0, 0, 0],
            evs: [0; 6],
            contest: [0; 6],
            met_location: 16,
            // Level 5, Emerald.
            origins: 5 | (3 << 7),
            iv_egg_ability: 0,
            ribbons: 0,
            level: 10,
        }
    }

    /// The decrypted payload, blocks placed by the personality value.
    pub fn plain_payload(&self) -> [u8; PAYLOAD_SIZE] {
        let mut growth = Vec::with_capacity(SUBSTRUCTURE_SIZE);
        growth.extend_from_slice(&self.species.to_le_bytes());
        growth.extend_from_slice(&self.held_item.to_le_bytes());
        growth.extend_from_slice(&self.experience.to_le_bytes());
        growth.extend_from_slice(&[0, self.friendship, 0, 0]);

        let mut attacks = Vec::with_capacity(SUBSTRUCTURE_SIZE);
        for move_id in self.moves {
            attacks.extend_from_slice(&move_id.to_le_bytes());
        }
        attacks.extend_from_slice(&self.pp);

        let mut condition = Vec::with_capacity(SUBSTRUCTURE_SIZE);
        condition.extend_from_slice(&self.evs);
        condition.extend_from_slice(&self.contest);

        let mut misc = Vec::with_capacity(SUBSTRUCTURE_SIZE);
        misc.extend_from_slice(&[0, self.met_location]);
        misc.extend_from_slice(&self.origins.to_le_bytes());
        misc.extend_from_slice(&self.iv_egg_ability.to_le_bytes());
        misc.extend_from_slice(&self.ribbons.to_le_bytes());

        let mut payload = [0u8; PAYLOAD_SIZE];
        for (component, block) in [
            (Substructure::Growth, growth),
            (Substructure::Attacks, attacks),
            (Substructure::Condition, condition),
            (Substructure::Misc, misc),
        ] {
            let offset = block_offset(self.personality_value, component);
            payload[offset..offset + SUBSTRUCTURE_SIZE].copy_from_slice(&block);
        }
        payload
    }

    pub fn build(&self) -> Vec<u8> {
        let mut payload = self.plain_payload();
        let checksum = compute_checksum(&payload);
        crypt_payload(&mut payload, self.personality_value ^ self.trainer_id);

        let mut pk3 = Vec::with_capacity(PK3_SIZE_PARTY);
        pk3.extend_from_slice(&self.personality_value.to_le_bytes());
        pk3.extend_from_slice(&self.trainer_id.to_le_bytes());
        pk3.extend_from_slice(&encode_gba_text(&self.nickname, 10));
        pk3.push(self.language);
        pk3.push(0b10);
        pk3.extend_from_slice(&encode_gba_text(&self.trainer_name, 7));
        pk3.push(0);
        pk3.extend_from_slice(&checksum.to_le_bytes());
        pk3.extend_from_slice(&[0, 0]);
        assert_eq!(pk3.len(), PK3_HEADER_SIZE);
        pk3.extend_from_slice(&payload);

        // Status block: condition, level, pokerus days, then seven stats.
        pk3.extend_from_slice(&0u32.to_le_bytes());
        pk3.push(self.level);
        pk3.push(0);
        for stat in [30u16, 30, 15, 14, 20, 13, 12] {
            pk3.extend_from_slice(&stat.to_le_bytes());
        }
        assert_eq!(pk3.len(), PK3_SIZE_PARTY);
        pk3
    }

    pub fn build_boxed(&self) -> Vec<u8> {
        let mut pk3 = self.build();
        pk3.truncate(PK3_SIZE_BOX);
        pk3
    }
}

/// Wraps `data` in a section with a correct footer.
pub fn build_section(section_id: u16, save_index: u32, data: &[u8]) -> Vec<u8> {
    let mut section = vec![0u8; SECTION_SIZE];
    section[..data.len()].copy_from_slice(data);
    let checksum = compute_section_checksum(&section[..SECTION_DATA_SIZE]);
    section[0xff8..0xffa].copy_from_slice(&section_id.to_le_bytes());
    section[0xffa..0xffc].copy_from_slice(&checksum.to_le_bytes());
    section[0xffc..0x1000].copy_from_slice(&save_index.to_le_bytes());
    section
}

const STORAGE_FIRST_SECTION: usize = 5;
const BOX_DATA_OFFSET: usize = 4;
const BOX_NAMES_OFFSET: usize = 0x8344;

#[derive(Clone, Debug)]
pub struct SlotBuilder {
    pub save_index: u32,
    /// Data area of every section, indexed by section id.
    pub data: Vec<Vec<u8>>,
    /// Physical position of section 0 within the slot.
    pub rotation: usize,
}

impl SlotBuilder {
    pub fn new(save_index: u32) -> Self {
        SlotBuilder {
            save_index,
            data: vec![vec![0u8; SECTION_DATA_SIZE]; NUMBER_OF_SECTIONS],
            rotation: 0,
        }
    }

    pub fn with_trainer(mut self, name: &str, gender: u8, trainer_id: u32) -> Self {
        let section = &mut self.data[0];
        section[..7].copy_from_slice(&encode_gba_text(name, 7));
        section[0x08] = gender;
        section[0x0a..0x0e].copy_from_slice(&trainer_id.to_le_bytes());
        section[0x0e..0x10].copy_from_slice(&12u16.to_le_bytes());
        section[0x10] = 34;
        section[0x11] = 56;
        section[0x12] = 7;
        self
    }

    pub fn with_game_code(mut self, game_code: u32) -> Self {
        self.data[0][0xac..0xb0].copy_from_slice(&game_code.to_le_bytes());
        self
    }

    /// Writes the party at the Ruby/Sapphire/Emerald offsets.
    pub fn with_party(self, records: &[Vec<u8>], count: u32) -> Self {
        self.with_party_at(records, count, 0x234, 0x238)
    }

    pub fn with_party_at(
        mut self,
        records: &[Vec<u8>],
        count: u32,
        count_offset: usize,
        data_offset: usize,
    ) -> Self {
        let section = &mut self.data[1];
        section[count_offset..count_offset + 4].copy_from_slice(&count.to_le_bytes());
        for (idx, record) in records.iter().enumerate() {
            let start = data_offset + idx * PK3_SIZE_PARTY;
            section[start..start + record.len()].copy_from_slice(record);
        }
        self
    }

    fn write_storage(&mut self, offset: usize, bytes: &[u8]) {
        for (idx, byte) in bytes.iter().enumerate() {
            let global = offset + idx;
            let section = STORAGE_FIRST_SECTION + global / SECTION_DATA_SIZE;
            self.data[section][global % SECTION_DATA_SIZE] = *byte;
        }
    }

    /// `box_number` and `slot` count from 1.
    pub fn with_boxed(mut self, box_number: usize, slot: usize, record: &[u8]) -> Self {
        let index = (box_number - 1) * 30 + (slot - 1);
        self.write_storage(BOX_DATA_OFFSET + index * PK3_SIZE_BOX, &record[..PK3_SIZE_BOX]);
        self
    }

    pub fn with_box_name(mut self, box_number: usize, name: &str) -> Self {
        let offset = BOX_NAMES_OFFSET + (box_number - 1) * 9;
        self.write_storage(offset, &encode_gba_text(name, 9));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut slot = Vec::with_capacity(SLOT_SIZE);
        for position in 0..NUMBER_OF_SECTIONS {
            let section_id = (position + NUMBER_OF_SECTIONS - self.rotation) % NUMBER_OF_SECTIONS;
            slot.extend_from_slice(&build_section(
                section_id as u16,
                self.save_index,
                &self.data[section_id],
            ));
        }
        slot
    }
}

pub fn two_slot_image(slot_a: &[u8], slot_b: &[u8]) -> Vec<u8> {
    let mut image = slot_a.to_vec();
    image.extend_from_slice(slot_b);
    image
}

/// Overwrites the id of every section footer in a slot.
pub fn force_section_ids(slot: &mut [u8], section_id: u16) {
    for section in slot.chunks_exact_mut(SECTION_SIZE) {
        section[0xff8..0xffa].copy_from_slice(&section_id.to_le_bytes());
    }
}

#[derive(Clone, Debug)]
pub struct ConsoleRecordBuilder {
    pub species: u16,
    pub level: u8,
    pub nature: u8,
    pub shadow: bool,
    pub shadow_level: u8,
    pub nickname: String,
    pub iv_word: u32,
    pub moves: [u16; 4],
}

impl ConsoleRecordBuilder {
    pub fn new(species: u16) -> Self {
        ConsoleRecordBuilder {
            species,
            level: 30,
            nature: 3,
            shadow: false,
            shadow_level: 0,
            nickname: String::new(),
            iv_word: 0,
            moves: [33, 0, 0, 0],
        }
    }

    pub fn build(&self, size: usize) -> Vec<u8> {
        let mut data = vec![0u8; size];
        data[0..2].copy_from_slice(&self.species.to_be_bytes());
        data[0x04] = self.level;
        data[0x08] = self.nature;
        data[0x10] = u8::from(self.shadow);
        data[0x11] = self.shadow_level;
        for (idx, ch) in self.nickname.encode_utf16().take(10).enumerate() {
            data[0x18 + idx * 2..0x1a + idx * 2].copy_from_slice(&ch.to_be_bytes());
        }
        data[0x38..0x3c].copy_from_slice(&self.iv_word.to_be_bytes());
        for (idx, move_id) in self.moves.iter().enumerate() {
            data[0x40 + idx * 2..0x42 + idx * 2].copy_from_slice(&move_id.to_be_bytes());
        }
        data
    }
}

pub fn gci_header(game_id: &[u8; 4], block_count: u16) -> Vec<u8> {
    let mut header = vec![0u8; GCI_HEADER_SIZE];
    header[..4].copy_from_slice(game_id);
    header[4..6].copy_from_slice(b"01");
    let filename = b"pokemon_colosseum_save";
    header[0x08..0x08 + filename.len()].copy_from_slice(filename);
    header[0x28..0x2c].copy_from_slice(&86_400u32.to_be_bytes());
    header[0x38..0x3a].copy_from_slice(&block_count.to_be_bytes());
    let declared_size = u32::from(block_count) * GC_BLOCK_SIZE as u32;
    header[0x3c..0x40].copy_from_slice(&declared_size.to_be_bytes());
    header
}

/// A one-block export holding `records` as the party.
pub fn gci_file(
    game_id: &[u8; 4],
    layout: Option<RecordLayout>,
    records: &[ConsoleRecordBuilder],
) -> Vec<u8> {
    let mut payload = vec![0u8; GC_BLOCK_SIZE];
    for (idx, unit) in "Wes".encode_utf16().enumerate() {
        payload[0x78 + idx * 2..0x7a + idx * 2].copy_from_slice(&unit.to_be_bytes());
    }
    payload[0x88..0x8c].copy_from_slice(&0x0005_3039u32.to_be_bytes());
    payload[0x8c..0x90].copy_from_slice(&((42u32 << 16) | (17 << 8)).to_be_bytes());
    if let Some(layout) = layout {
        for (idx, record) in records.iter().enumerate() {
            let start = layout.party_offset() + idx * layout.record_size();
            payload[start..start + layout.record_size()]
                .copy_from_slice(&record.build(layout.record_size()));
        }
    }

    let mut file = gci_header(game_id, 1);
    file.extend_from_slice(&payload);
    file
}
