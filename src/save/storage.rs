//! PC storage, spread over sections 5 through 13.
//!
//! The data areas of those sections are concatenated into one buffer:
//! ```text
//! [0x0000]  current box            u32
//! [0x0004]  box records            14 boxes x 30 slots x 80 bytes
//! [0x8344]  box names              14 x 9 bytes
//! ```

use serde::Serialize;

use super::section::{SaveSlot, SECTION_DATA_SIZE};
use crate::{
    pk3::{Pokemon, RecordKind, PK3_SIZE_BOX},
    text::decode_gba_text,
};

pub const BOX_COUNT: u8 = 14;
pub const BOX_CAPACITY: u8 = 30;

const FIRST_STORAGE_SECTION: u16 = 5;
const LAST_STORAGE_SECTION: u16 = 13;
const BOX_DATA_OFFSET: usize = 0x0004;
const BOX_NAMES_OFFSET: usize = 0x8344;
const BOX_NAME_LENGTH: usize = 9;

#[derive(Clone, Debug, Serialize)]
pub struct PcBox {
    pub box_number: u8,
    pub name: String,
    /// Occupied slots as `(slot number, record)`, slot numbers from 1.
    pub pokemon: Vec<(u8, Pokemon)>,
}

/// The storage sections laid end to end.
pub struct StorageBuffer {
    data: Vec<u8>,
}

impl StorageBuffer {
    pub fn assemble(slot: &SaveSlot) -> Self {
        let mut data = Vec::with_capacity(SECTION_DATA_SIZE * 9);
        for section_id in FIRST_STORAGE_SECTION..=LAST_STORAGE_SECTION {
            match slot.section(section_id) {
                Some(section) => data.extend_from_slice(section.data_area()),
                None => {
                    log::warn!("Storage section {section_id} is missing, its boxes read as empty");
                    data.resize(data.len() + SECTION_DATA_SIZE, 0);
                }
            }
        }
        StorageBuffer { data }
    }

    /// Display name of a box, `None` outside 1..=14. Unnamed boxes read as "Box N".
    pub fn box_name(&self, box_number: u8) -> Option<String> {
        if !(1..=BOX_COUNT).contains(&box_number) {
            return None;
        }
        let start = BOX_NAMES_OFFSET + usize::from(box_number - 1) * BOX_NAME_LENGTH;
        let name = self
            .data
            .get(start..start + BOX_NAME_LENGTH)
            .map(decode_gba_text)
            .unwrap_or_default();
        if name.is_empty() {
            Some(format!("Box {box_number}"))
        } else {
            Some(name)
        }
    }

    fn record(&self, box_number: u8, slot: u8) -> Option<&[u8]> {
        let index = usize::from(box_number - 1) * usize::from(BOX_CAPACITY) + usize::from(slot - 1);
        let start = BOX_DATA_OFFSET + index * PK3_SIZE_BOX;
        self.data.get(start..start + PK3_SIZE_BOX)
    }

    /// Decodes one box. `box_number` counts from 1.
    pub fn get_box(&self, box_number: u8) -> Option<PcBox> {
        if !(1..=BOX_COUNT).contains(&box_number) {
            log::warn!("Invalid box number: {box_number}");
            return None;
        }

        let pokemon = (1..=BOX_CAPACITY)
            .filter_map(|slot| {
                let pk3 = self.record(box_number, slot)?;
                let location = format!("box {box_number} slot {slot}");
                super::decode_logged(pk3, RecordKind::Boxed, &location).map(|pk| (slot, pk))
            })
            .collect();

        Some(PcBox {
            box_number,
            name: self.box_name(box_number)?,
            pokemon,
        })
    }

    pub fn boxes(&self) -> Vec<PcBox> {
        (1..=BOX_COUNT)
            .filter_map(|box_number| self.get_box(box_number))
            .collect()
    }
}
