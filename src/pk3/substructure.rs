//! Physical ordering of the four 12-byte blocks inside the encrypted
//! payload. The ordering is picked by `personality_value % 24`.

use serde::Serialize;

pub const SUBSTRUCTURE_SIZE: usize = 12;
pub const SUBSTRUCTURE_COUNT: usize = 4;
pub const PAYLOAD_SIZE: usize = SUBSTRUCTURE_SIZE * SUBSTRUCTURE_COUNT;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Substructure {
    Growth,
    Attacks,
    Condition,
    Misc,
}

use Substructure::{Attacks as A, Condition as E, Growth as G, Misc as M};

/// Every ordering of the four blocks, in the order the hardware indexes them.
const ORDERINGS: [[Substructure; SUBSTRUCTURE_COUNT]; 24] = [
    [G, A, E, M],
    [G, A, M, E],
    [G, E, A, M],
    [G, E, M, A],
    [G, M, A, E],
    [G, M, E, A],
    [A, G, E, M],
    [A, G, M, E],
    [A, E, G, M],
    [A, E, M, G],
    [A, M, G, E],
    [A, M, E, G],
    [E, G, A, M],
    [E, G, M, A],
    [E, A, G, M],
    [E, A, M, G],
    [E, M, G, A],
    [E, M, A, G],
    [M, G, A, E],
    [M, G, E, A],
    [M, A, G, E],
    [M, A, E, G],
    [M, E, G, A],
    [M, E, A, G],
];

pub fn permutation_index(personality_value: u32) -> usize {
    (personality_value % 24) as usize
}

/// Block order as it appears in the decrypted payload.
pub fn ordering(personality_value: u32) -> [Substructure; SUBSTRUCTURE_COUNT] {
    ORDERINGS[permutation_index(personality_value)]
}

/// Byte offset of `component` within the 48-byte payload.
pub fn block_offset(personality_value: u32, component: Substructure) -> usize {
    let position = ordering(personality_value)
        .iter()
        .position(|slot| *slot == component)
        .unwrap_or_default();
    position * SUBSTRUCTURE_SIZE
}

/// The payload split into its four named blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Blocks {
    pub growth: [u8; SUBSTRUCTURE_SIZE],
    pub attacks: [u8; SUBSTRUCTURE_SIZE],
    pub condition: [u8; SUBSTRUCTURE_SIZE],
    pub misc: [u8; SUBSTRUCTURE_SIZE],
}

impl Blocks {
    pub fn split(payload: &[u8; PAYLOAD_SIZE], personality_value: u32) -> Self {
        let mut blocks = Blocks {
            growth: [0; SUBSTRUCTURE_SIZE],
            attacks: [0; SUBSTRUCTURE_SIZE],
            condition: [0; SUBSTRUCTURE_SIZE],
            misc: [0; SUBSTRUCTURE_SIZE],
        };
        for (chunk, component) in payload
            .chunks_exact(SUBSTRUCTURE_SIZE)
            .zip(ordering(personality_value))
        {
            blocks.get_mut(component).copy_from_slice(chunk);
        }
        blocks
    }

    pub fn get(&self, component: Substructure) -> &[u8; SUBSTRUCTURE_SIZE] {
        match component {
            Substructure::Growth => &self.growth,
            Substructure::Attacks => &self.attacks,
            Substructure::Condition => &self.condition,
            Substructure::Misc => &self.misc,
        }
    }

    fn get_mut(&mut self, component: Substructure) -> &mut [u8; SUBSTRUCTURE_SIZE] {
        match component {
            Substructure::Growth => &mut self.growth,
            Substructure::Attacks => &mut self.attacks,
            Substructure::Condition => &mut self.condition,
            Substructure::Misc => &mut self.misc,
        }
    }
}
