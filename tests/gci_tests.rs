mod common;

use common::{gci_file, gci_header, ConsoleRecordBuilder};
use pkread::{
    gci::{ConsoleRecord, ConsoleTitle, GciFile, Region, RecordLayout, GCI_HEADER_SIZE},
    stats::{IvLayout, Ivs, Nature},
    DecodeFailure, Error,
};

fn shadow_lugia() -> ConsoleRecordBuilder {
    let mut builder = ConsoleRecordBuilder::new(249);
    builder.level = 50;
    builder.shadow = true;
    builder.shadow_level = 9;
    builder.moves = [248, 0, 57, 0];
    builder
}

#[test]
fn test_colosseum_party() {
    let mut espeon = ConsoleRecordBuilder::new(196);
    espeon.nickname = "Eevee2".to_string();
    espeon.nature = 27;
    espeon.level = 0;
    espeon.iv_word = 31 << 25 | 7;

    let data = gci_file(
        b"GC6E",
        Some(RecordLayout::Colosseum),
        &[espeon, ConsoleRecordBuilder::new(197)],
    );
    let gci = GciFile::from_bytes(&data).unwrap();

    assert_eq!(gci.title, ConsoleTitle::Colosseum);
    assert_eq!(gci.region, Some(Region::NorthAmerica));
    assert_eq!(gci.header.filename, "pokemon_colosseum_save");
    assert_eq!(gci.header.block_count, 1);
    assert!(gci.size_consistent());
    assert!(gci.identifier_error().is_none());

    let trainer_info = gci.trainer_info.as_ref().unwrap();
    assert_eq!(trainer_info.name, "Wes");
    assert_eq!(trainer_info.id, 0x3039);
    assert_eq!(trainer_info.hours, 42);
    assert_eq!(trainer_info.minutes, 17);

    assert_eq!(gci.party.len(), 2);
    let espeon = &gci.party[0];
    assert_eq!(espeon.species_name, "Espeon");
    assert_eq!(espeon.nickname, "Eevee2");
    assert_eq!(espeon.level, 1);
    assert_eq!(espeon.nature, Nature::Brave);
    assert_eq!(espeon.ivs.hp, 31);
    assert_eq!(espeon.ivs.speed, 7);
    assert_eq!(espeon.move_names, vec!["Move #33"]);
    assert_eq!(gci.party[1].nickname, "Umbreon");
    assert!(gci.shadow_pokemon().is_empty());
}

#[test]
fn test_xd_party_with_shadow() {
    let data = gci_file(
        b"GXXJ",
        Some(RecordLayout::Xd),
        &[ConsoleRecordBuilder::new(1), shadow_lugia()],
    );
    let gci = GciFile::from_bytes(&data).unwrap();

    assert_eq!(gci.title, ConsoleTitle::Xd);
    assert_eq!(gci.region, Some(Region::Japan));
    let shadows = gci.shadow_pokemon();
    assert_eq!(shadows.len(), 1);
    assert_eq!(shadows[0].species_name, "Lugia");
    assert_eq!(shadows[0].shadow_level, 5);
    assert_eq!(shadows[0].move_names, vec!["Move #248", "Move #57"]);
}

#[test]
fn test_box_title_has_no_party() {
    let data = gci_file(b"GPXE", None, &[]);
    let gci = GciFile::from_bytes(&data).unwrap();
    assert_eq!(gci.title, ConsoleTitle::PokemonBox);
    assert!(gci.party.is_empty());
    assert!(gci.trainer_info.is_none());
}

#[test]
fn test_unknown_identifier_is_tagged() {
    let data = gci_file(b"GALE", None, &[]);
    let gci = GciFile::from_bytes(&data).unwrap();
    assert_eq!(gci.title, ConsoleTitle::Unknown);
    assert_eq!(gci.region, Some(Region::NorthAmerica));
    assert!(matches!(
        gci.identifier_error(),
        Some(Error::UnknownGameIdentifier(id)) if &id == b"GALE"
    ));
}

#[test]
fn test_invalid_species_are_skipped() {
    let data = gci_file(
        b"GC6P",
        Some(RecordLayout::Colosseum),
        &[
            ConsoleRecordBuilder::new(387),
            ConsoleRecordBuilder::new(0),
            ConsoleRecordBuilder::new(386),
        ],
    );
    let gci = GciFile::from_bytes(&data).unwrap();
    assert_eq!(gci.region, Some(Region::Europe));
    assert_eq!(gci.party.len(), 1);
    assert_eq!(gci.party[0].species_name, "Deoxys");
}

#[test]
fn test_truncated_payload() {
    let data = gci_file(
        b"GC6E",
        Some(RecordLayout::Colosseum),
        &[ConsoleRecordBuilder::new(1), ConsoleRecordBuilder::new(4)],
    );
    let layout = RecordLayout::Colosseum;
    let cut = GCI_HEADER_SIZE + layout.party_offset() + layout.record_size() + 10;
    let gci = GciFile::from_bytes(&data[..cut]).unwrap();
    assert!(!gci.size_consistent());
    assert_eq!(gci.party.len(), 1);

    // Header only: no trainer name can be read.
    let gci = GciFile::from_bytes(&gci_header(b"GC6E", 1)).unwrap();
    assert!(gci.party.is_empty());
    assert_eq!(gci.trainer_info.unwrap().name, "Trainer");
}

#[test]
fn test_header_too_small() {
    assert!(matches!(
        GciFile::from_bytes(&[0u8; 10]),
        Err(Error::TooSmall { found: 10, minimum: 64 })
    ));
}

#[test]
fn test_console_record_decode() {
    assert_eq!(
        ConsoleRecord::decode(&[0u8; 0x4f]).unwrap_err(),
        DecodeFailure::Truncated {
            len: 0x4f,
            needed: 0x50
        }
    );

    let mut builder = ConsoleRecordBuilder::new(150);
    builder.nickname = "Mew-two".to_string();
    builder.iv_word = Ivs {
        hp: 1,
        attack: 2,
        defense: 3,
        speed: 4,
        special_attack: 5,
        special_defense: 6,
    }
    .pack(IvLayout::Console);
    let record = ConsoleRecord::decode(&builder.build(0x50)).unwrap();
    assert_eq!(record.nickname, "Mew?two");
    assert_eq!(record.display_name(), "Mew?two (Mewtwo)");
    assert_eq!(record.ivs.as_array(), [1, 2, 3, 4, 5, 6]);
    assert_eq!(record.nature, Nature::Adamant);
    assert_eq!(record.level, 30);
}

#[test]
fn test_from_path() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        file.path(),
        gci_file(b"GXXE", Some(RecordLayout::Xd), &[shadow_lugia()]),
    )
    .unwrap();
    let gci = GciFile::from_path(file.path()).unwrap();
    assert_eq!(gci.party.len(), 1);
    assert_eq!(gci.header.modified_unix_seconds(), 946_684_800 + 86_400);
}
