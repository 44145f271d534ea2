use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde::Serialize;

pub const MAX_IV: u8 = 31;
pub const MAX_EV_TOTAL: u32 = 510;

const IV_MASK: u32 = 0b11111;

/// Bit positions of the six IV fields inside a packed word. The cartridge
/// packs HP into the low bits; the console export packs it into the high
/// bits and swaps the position of speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IvLayout {
    Cartridge,
    Console,
}

impl IvLayout {
    /// Shifts in `[hp, attack, defense, speed, special_attack, special_defense]` order.
    fn shifts(&self) -> [u32; 6] {
        match self {
            IvLayout::Cartridge => [0, 5, 10, 15, 20, 25],
            IvLayout::Console => [25, 20, 15, 0, 10, 5],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Ivs {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub speed: u8,
    pub special_attack: u8,
    pub special_defense: u8,
}

impl Ivs {
    pub fn unpack(word: u32, layout: IvLayout) -> Self {
        let [hp, attack, defense, speed, special_attack, special_defense] = layout
            .shifts()
            .map(|shift| ((word >> shift) & IV_MASK) as u8);
        Ivs {
            hp,
            attack,
            defense,
            speed,
            special_attack,
            special_defense,
        }
    }

    /// Packs back into the 30 IV bits of a word. Fields above 31 are masked.
    pub fn pack(&self, layout: IvLayout) -> u32 {
        self.as_array()
            .into_iter()
            .zip(layout.shifts())
            .fold(0u32, |word, (iv, shift)| {
                word | ((u32::from(iv) & IV_MASK) << shift)
            })
    }

    pub fn as_array(&self) -> [u8; 6] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.speed,
            self.special_attack,
            self.special_defense,
        ]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Evs {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub speed: u8,
    pub special_attack: u8,
    pub special_defense: u8,
}

impl Evs {
    /// Reads the cartridge order: HP, Attack, Defense, Speed, Sp. Atk, Sp. Def.
    pub fn from_bytes(bytes: [u8; 6]) -> Self {
        let [hp, attack, defense, speed, special_attack, special_defense] = bytes;
        Evs {
            hp,
            attack,
            defense,
            speed,
            special_attack,
            special_defense,
        }
    }

    pub fn total(&self) -> u32 {
        [
            self.hp,
            self.attack,
            self.defense,
            self.speed,
            self.special_attack,
            self.special_defense,
        ]
        .into_iter()
        .map(u32::from)
        .sum()
    }
}

#[derive(FromPrimitive, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Nature {
    Hardy = 0,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    pub fn from_index(index: u32) -> Self {
        Nature::from_u32(index % 25).unwrap_or(Nature::Hardy)
    }

    pub fn from_personality(personality_value: u32) -> Self {
        Nature::from_index(personality_value)
    }
}

impl std::fmt::Display for Nature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
