//! Link-cable transfer rules between the cartridge and console games.

use serde::Serialize;
use std::fmt;

use crate::{
    gci::ConsoleRecord,
    names,
    pk3::Pokemon,
    save::CartridgeTitle,
    stats::MAX_EV_TOTAL,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TransferDirection {
    CartridgeToConsole,
    ConsoleToCartridge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Compatible,
    Incompatible,
    RequiresPurify,
    VersionLocked,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransferVerdict {
    pub verdict: Verdict,
    pub reason: String,
}

impl TransferVerdict {
    fn new(verdict: Verdict, reason: impl Into<String>) -> Self {
        TransferVerdict {
            verdict,
            reason: reason.into(),
        }
    }

    pub fn is_compatible(&self) -> bool {
        self.verdict == Verdict::Compatible
    }
}

impl fmt::Display for TransferVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.verdict, self.reason)
    }
}

/// The fields the rules look at, taken from either kind of record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TransferCandidate {
    pub species: u16,
    pub level: u8,
    pub is_egg: bool,
    pub is_shadow: bool,
    pub ev_total: u32,
}

impl From<&Pokemon> for TransferCandidate {
    fn from(pokemon: &Pokemon) -> Self {
        TransferCandidate {
            species: pokemon.species,
            level: pokemon.level,
            is_egg: pokemon.is_egg,
            is_shadow: false,
            ev_total: pokemon.condition.evs.total(),
        }
    }
}

impl From<&ConsoleRecord> for TransferCandidate {
    fn from(record: &ConsoleRecord) -> Self {
        // Effort values are not read from console records.
        TransferCandidate {
            species: record.species,
            level: record.level,
            is_egg: false,
            is_shadow: record.is_shadow,
            ev_total: 0,
        }
    }
}

pub fn evaluate(candidate: &TransferCandidate, direction: TransferDirection) -> TransferVerdict {
    if candidate.is_egg {
        return TransferVerdict::new(
            Verdict::Incompatible,
            "Eggs cannot be transferred via link cable",
        );
    }
    if !names::is_valid_species(candidate.species) {
        return TransferVerdict::new(
            Verdict::Incompatible,
            format!("Species #{} is not available in Gen 3", candidate.species),
        );
    }
    if candidate.is_shadow && direction == TransferDirection::ConsoleToCartridge {
        return TransferVerdict::new(
            Verdict::RequiresPurify,
            "Shadow Pokemon must be purified before transferring to GBA",
        );
    }
    if !(1..=100).contains(&candidate.level) {
        return TransferVerdict::new(
            Verdict::Incompatible,
            format!("Invalid level: {}", candidate.level),
        );
    }
    if candidate.ev_total > MAX_EV_TOTAL {
        return TransferVerdict::new(
            Verdict::Incompatible,
            format!(
                "Total EVs ({}) exceed maximum ({MAX_EV_TOTAL})",
                candidate.ev_total
            ),
        );
    }
    TransferVerdict::new(Verdict::Compatible, "Compatible")
}

const RUBY_ONLY: [u16; 11] = [273, 274, 275, 288, 289, 290, 291, 292, 335, 337, 338];
const SAPPHIRE_ONLY: [u16; 12] = [270, 271, 272, 285, 286, 287, 300, 301, 302, 303, 318, 319];
const FIRERED_ONLY: [u16; 16] = [1, 2, 3, 4, 5, 6, 37, 38, 52, 53, 58, 59, 83, 123, 125, 126];
const LEAFGREEN_ONLY: [u16; 15] = [7, 8, 9, 10, 11, 12, 69, 70, 71, 79, 80, 102, 103, 108, 114];

/// The one cartridge title a species is exclusive to, if any.
pub fn required_title(species: u16) -> Option<CartridgeTitle> {
    [
        (&RUBY_ONLY[..], CartridgeTitle::Ruby),
        (&SAPPHIRE_ONLY[..], CartridgeTitle::Sapphire),
        (&FIRERED_ONLY[..], CartridgeTitle::FireRed),
        (&LEAFGREEN_ONLY[..], CartridgeTitle::LeafGreen),
    ]
    .into_iter()
    .find(|(exclusives, _)| exclusives.contains(&species))
    .map(|(_, title)| title)
}

/// Console to cartridge, checked against a specific destination title.
pub fn evaluate_for_destination(
    candidate: &TransferCandidate,
    destination: CartridgeTitle,
) -> TransferVerdict {
    let verdict = evaluate(candidate, TransferDirection::ConsoleToCartridge);
    if !verdict.is_compatible() {
        return verdict;
    }
    match required_title(candidate.species) {
        Some(required) if required != destination => TransferVerdict::new(
            Verdict::VersionLocked,
            format!(
                "{} is exclusive to {required}",
                names::species_name(candidate.species)
            ),
        ),
        _ => verdict,
    }
}
