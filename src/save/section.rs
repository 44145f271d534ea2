//! Fixed 4 KiB sections and the slot that groups fourteen of them.
//!
//! Every section ends in a footer:
//! ```text
//! [0xFF8] section id   u16 LE (0..=13)
//! [0xFFA] checksum     u16 LE
//! [0xFFC] save index   u32 LE
//! ```

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use serde::Serialize;
use std::io::{self, Cursor, Seek, SeekFrom};

use crate::error::Error;

pub const SECTION_SIZE: usize = 0x1000;
pub const SECTION_DATA_SIZE: usize = 0x0ff8;
pub const NUMBER_OF_SECTIONS: usize = 14;
pub const SLOT_SIZE: usize = SECTION_SIZE * NUMBER_OF_SECTIONS;
pub const MAX_SECTION_ID: u16 = (NUMBER_OF_SECTIONS - 1) as u16;

const SECTION_ID_OFFSET: u64 = 0x0ff8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SectionFooter {
    pub section_id: u16,
    pub checksum: u16,
    pub save_index: u32,
}

impl SectionFooter {
    pub fn read(section: &[u8]) -> io::Result<Self> {
        let mut cursor = Cursor::new(section);
        cursor.seek(SeekFrom::Start(SECTION_ID_OFFSET))?;
        Ok(SectionFooter {
            section_id: cursor.read_u16::<LittleEndian>()?,
            checksum: cursor.read_u16::<LittleEndian>()?,
            save_index: cursor.read_u32::<LittleEndian>()?,
        })
    }
}

#[derive(Clone, Debug)]
pub struct Section {
    pub footer: SectionFooter,
    pub computed_checksum: u16,
    data: Vec<u8>,
}

impl Section {
    /// Reads one section. Returns `None` when the window is short or the
    /// footer id is out of range.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let bytes = bytes.get(..SECTION_SIZE)?;
        let footer = SectionFooter::read(bytes).ok()?;
        if footer.section_id > MAX_SECTION_ID {
            log::debug!("Discarding section with id {}", footer.section_id);
            return None;
        }

        let computed_checksum = compute_section_checksum(&bytes[..SECTION_DATA_SIZE]);
        if computed_checksum != footer.checksum {
            log::debug!(
                "Computed checksum 0x{computed_checksum:x} for section {}, but checksum was 0x{:x}",
                footer.section_id,
                footer.checksum
            );
        }

        Some(Section {
            footer,
            computed_checksum,
            data: bytes.to_vec(),
        })
    }

    pub fn id(&self) -> u16 {
        self.footer.section_id
    }

    pub fn checksum_valid(&self) -> bool {
        self.computed_checksum == self.footer.checksum
    }

    /// The whole 4 KiB section including the footer.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// The checksummed region in front of the footer.
    pub fn data_area(&self) -> &[u8] {
        &self.data[..SECTION_DATA_SIZE]
    }
}

/// One of the two redundant copies of the game, indexed by section id.
#[derive(Clone, Debug)]
pub struct SaveSlot {
    sections: [Option<Section>; NUMBER_OF_SECTIONS],
}

impl SaveSlot {
    /// Splits a slot image into sections. A slot without a single usable
    /// section is invalid and yields `None`.
    pub fn parse(slot_data: &[u8]) -> Option<Self> {
        let mut sections: [Option<Section>; NUMBER_OF_SECTIONS] = Default::default();

        for window in slot_data.chunks_exact(SECTION_SIZE).take(NUMBER_OF_SECTIONS) {
            let Some(section) = Section::parse(window) else {
                continue;
            };
            let entry = &mut sections[usize::from(section.id())];
            if entry.is_some() {
                log::warn!("Section id {} appears twice in one slot", section.id());
            }
            *entry = Some(section);
        }

        if sections.iter().all(Option::is_none) {
            None
        } else {
            Some(SaveSlot { sections })
        }
    }

    pub fn section(&self, section_id: u16) -> Option<&Section> {
        self.sections.get(usize::from(section_id))?.as_ref()
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().flatten()
    }

    /// Save counter from section 0, used to pick the newer slot.
    pub fn save_index(&self) -> Option<u32> {
        self.section(0).map(|section| section.footer.save_index)
    }

    pub fn checksum_failures(&self) -> Vec<Error> {
        self.sections()
            .filter(|section| !section.checksum_valid())
            .map(|section| Error::SectionChecksumMismatch {
                section_id: section.id(),
                stored: section.footer.checksum,
                computed: section.computed_checksum,
            })
            .collect()
    }
}

/// Sums the little-endian words of `data` and folds the carry of the upper
/// half back into the lower half.
pub fn compute_section_checksum(data: &[u8]) -> u16 {
    let checksum = data
        .chunks_exact(4)
        .map(LittleEndian::read_u32)
        .fold(0u32, |checksum, word| checksum.wrapping_add(word));

    let checksum_lower = (checksum & 0xffff) as u16;
    let checksum_upper = (checksum >> 16) as u16;
    checksum_upper.wrapping_add(checksum_lower)
}
