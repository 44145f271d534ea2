//! Static name tables. Unknown ids resolve to numbered placeholders so a
//! lookup never fails.

mod items;
mod locations;
mod moves;
mod species;

use items::ITEM_NAMES;
use locations::LOCATION_NAMES;
use moves::MOVE_NAMES;
use species::SPECIES_NAMES;

/// Highest species id either format can hold.
pub const MAX_SPECIES_ID: u16 = 386;

pub fn is_valid_species(species_id: u16) -> bool {
    (1..=MAX_SPECIES_ID).contains(&species_id)
}

pub fn species_name(species_id: u16) -> String {
    usize::from(species_id)
        .checked_sub(1)
        .and_then(|idx| SPECIES_NAMES.get(idx))
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("Pokemon #{species_id}"))
}

pub fn move_name(move_id: u16) -> String {
    if move_id == 0 {
        return "---".to_string();
    }
    MOVE_NAMES
        .get(usize::from(move_id) - 1)
        .map(|name| name.to_string())
        .unwrap_or_else(|| move_placeholder(move_id))
}

/// Name used when no move table is available, as on the memory card path.
pub fn move_placeholder(move_id: u16) -> String {
    format!("Move #{move_id}")
}

pub fn item_name(item_id: u16) -> String {
    if item_id == 0 {
        return "None".to_string();
    }
    ITEM_NAMES
        .binary_search_by_key(&item_id, |(id, _)| *id)
        .map(|idx| ITEM_NAMES[idx].1.to_string())
        .unwrap_or_else(|_| format!("Item #{item_id}"))
}

pub fn location_name(location_id: u8) -> String {
    LOCATION_NAMES
        .binary_search_by_key(&location_id, |(id, _)| *id)
        .map(|idx| LOCATION_NAMES[idx].1.to_string())
        .unwrap_or_else(|_| format!("Location #{location_id}"))
}
