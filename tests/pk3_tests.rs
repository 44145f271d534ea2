mod common;

use common::Pk3Builder;
use pkread::{
    pk3::{
        crypt_payload,
        substructure::{block_offset, ordering, permutation_index, Substructure, PAYLOAD_SIZE},
        Gender, Language, Pokemon, RecordKind, PK3_HEADER_SIZE,
    },
    stats::{IvLayout, Ivs, Nature, MAX_IV},
    DecodeFailure,
};

fn pikachu() -> Pk3Builder {
    let mut builder = Pk3Builder::new(25);
    builder.nickname = "Sparky".to_string();
    builder.held_item = 13;
    builder.moves = [85, 98, 0, 0];
    builder.pp = [15, 30, 0, 0];
    builder.evs = [10, 20, 30, 40, 50, 60];
    builder.contest = [1, 2, 3, 4, 5, 6];
    builder.iv_egg_ability = 31 | (30 << 5) | (29 << 10) | (28 << 15) | (27 << 20) | (26 << 25);
    builder.ribbons = 1 << 31;
    builder.level = 42;
    builder
}

#[test]
fn test_decode_party_record() {
    let builder = pikachu();
    let pokemon = Pokemon::from_pk3(&builder.build()).unwrap();

    assert_eq!(pokemon.personality_value, 0x1234_5678);
    assert_eq!(pokemon.public_id(), 0x0102);
    assert_eq!(pokemon.secret_id(), 0xabcd);
    assert_eq!(pokemon.species, 25);
    assert_eq!(pokemon.species_name, "Pikachu");
    assert_eq!(pokemon.nickname, "Sparky");
    assert_eq!(pokemon.display_name(), "Sparky (Pikachu)");
    assert_eq!(pokemon.original_trainer_name, "Ash");
    assert_eq!(pokemon.origin_language, Some(Language::English));
    assert!(pokemon.flags.has_species);
    assert_eq!(pokemon.level, 42);
    assert_eq!(pokemon.status.unwrap().max_hp, 30);
    assert_eq!(pokemon.item_name, "Potion");
    assert_eq!(pokemon.move_names, vec!["Thunderbolt", "Quick Attack"]);
    assert_eq!(pokemon.attacks.pp, [15, 30, 0, 0]);
    assert_eq!(pokemon.condition.evs.total(), 210);
    assert_eq!(pokemon.condition.contest.feel, 6);
    assert_eq!(pokemon.growth.friendship, 70);
    assert_eq!(pokemon.met_level, 5);
    assert_eq!(pokemon.met_game, "Emerald");
    assert_eq!(pokemon.met_location_name, "Route 5");
    assert!(pokemon.is_fateful_encounter);
    assert!(!pokemon.is_egg);
    assert_eq!(
        pokemon.ivs,
        Ivs {
            hp: 31,
            attack: 30,
            defense: 29,
            speed: 28,
            special_attack: 27,
            special_defense: 26,
        }
    );
    assert_eq!(pokemon.nature, Nature::from_index(0x1234_5678 % 25));
    assert!(pokemon.checksum_valid());
}

#[test]
fn test_decrypt_recovers_plain_payload() {
    let builder = pikachu();
    let pk3 = builder.build();

    let mut payload = [0u8; PAYLOAD_SIZE];
    payload.copy_from_slice(&pk3[PK3_HEADER_SIZE..PK3_HEADER_SIZE + PAYLOAD_SIZE]);
    assert_ne!(payload, builder.plain_payload());

    let personality_value = u32::from_le_bytes(pk3[0..4].try_into().unwrap());
    let trainer_id = u32::from_le_bytes(pk3[4..8].try_into().unwrap());
    crypt_payload(&mut payload, personality_value ^ trainer_id);
    assert_eq!(payload, builder.plain_payload());
}

#[test]
fn test_every_ordering_decodes() {
    for personality_value in (0u32..48).chain([0xffff_ffff, 0x8000_0000, 0xdead_beef]) {
        let mut builder = pikachu();
        builder.personality_value = personality_value;
        let pokemon = Pokemon::from_pk3(&builder.build()).unwrap();
        assert_eq!(pokemon.species, 25, "pv {personality_value:#x}");
        assert_eq!(pokemon.attacks.moves, [85, 98, 0, 0]);
        assert_eq!(pokemon.condition.evs.total(), 210);
        assert_eq!(pokemon.met_location_name, "Route 5");
    }
}

#[test]
fn test_substructures_partition_the_payload() {
    for personality_value in [0u32, 1, 7, 23, 24, 1_000_003, u32::MAX] {
        assert!(permutation_index(personality_value) < 24);
        let mut offsets: Vec<usize> = [
            Substructure::Growth,
            Substructure::Attacks,
            Substructure::Condition,
            Substructure::Misc,
        ]
        .into_iter()
        .map(|component| block_offset(personality_value, component))
        .collect();
        offsets.sort_unstable();
        assert_eq!(offsets, vec![0, 12, 24, 36]);
        assert_eq!(ordering(personality_value).len(), 4);
    }
}

#[test]
fn test_species_boundaries() {
    let pokemon = Pokemon::from_pk3(&Pk3Builder::new(386).build()).unwrap();
    assert_eq!(pokemon.species_name, "Deoxys");

    assert_eq!(
        Pokemon::from_pk3(&Pk3Builder::new(387).build()).unwrap_err(),
        DecodeFailure::InvalidSpecies(387)
    );
    assert_eq!(
        Pokemon::from_pk3(&Pk3Builder::new(0).build()).unwrap_err(),
        DecodeFailure::EmptySlot
    );
}

#[test]
fn test_boxed_record_estimates_level() {
    let mut builder = Pk3Builder::new(258);
    builder.experience = 125_000;
    let pk3 = builder.build_boxed();
    assert_eq!(pk3.len(), 80);

    let pokemon = Pokemon::from_pk3(&pk3).unwrap();
    assert!(pokemon.status.is_none());
    assert_eq!(pokemon.level, 50);
    assert_eq!(pokemon.nickname, "Mudkip");
    assert_eq!(pokemon.display_name(), "Mudkip");

    // A padded storage record still has no status block.
    let mut padded = pk3.clone();
    padded.resize(100, 0);
    let pokemon = Pokemon::decode(&padded, RecordKind::Boxed).unwrap();
    assert_eq!(pokemon.level, 50);
}

#[test]
fn test_truncated_record() {
    let pk3 = Pk3Builder::new(25).build();
    assert_eq!(
        Pokemon::from_pk3(&pk3[..79]).unwrap_err(),
        DecodeFailure::Truncated { len: 79, needed: 80 }
    );
    assert_eq!(
        Pokemon::decode(&pk3[..99], RecordKind::Party).unwrap_err(),
        DecodeFailure::Truncated { len: 99, needed: 100 }
    );
    assert!(Pokemon::from_pk3(&[]).is_err());
}

#[test]
fn test_stored_checksum_is_informational() {
    let mut pk3 = pikachu().build();
    pk3[0x1c] ^= 0xff;
    let pokemon = Pokemon::from_pk3(&pk3).unwrap();
    assert_eq!(pokemon.species, 25);
    assert!(!pokemon.checksum_valid());
}

#[test]
fn test_shininess() {
    let mut builder = Pk3Builder::new(25);
    builder.trainer_id = 0;
    for (personality_value, shiny) in [(7u32, true), (0x0001_0000, true), (8, false), (0x0008_0000, false)] {
        builder.personality_value = personality_value;
        let pokemon = Pokemon::from_pk3(&builder.build()).unwrap();
        assert_eq!(pokemon.is_shiny, shiny, "pv {personality_value:#x}");
    }
}

#[test]
fn test_egg_and_ability_bits() {
    let mut builder = Pk3Builder::new(25);
    builder.iv_egg_ability = (1 << 30) | (1 << 31);
    let pokemon = Pokemon::from_pk3(&builder.build()).unwrap();
    assert!(pokemon.is_egg);
    assert_eq!(pokemon.ability_slot, 1);
}

#[test]
fn test_gender_approximation() {
    let mut builder = Pk3Builder::new(25);
    builder.personality_value = 0x0000_00ff;
    assert_eq!(Pokemon::from_pk3(&builder.build()).unwrap().gender, Gender::Genderless);
    builder.personality_value = 0x0000_0010;
    assert_eq!(Pokemon::from_pk3(&builder.build()).unwrap().gender, Gender::Male);
}

#[test]
fn test_iv_pack_unpack() {
    let mut word = 0x9e37_79b9u32;
    for _ in 0..1000 {
        word = word.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        for layout in [IvLayout::Cartridge, IvLayout::Console] {
            let ivs = Ivs::unpack(word, layout);
            assert!(ivs.as_array().iter().all(|iv| *iv <= MAX_IV));
            assert_eq!(ivs.pack(layout), word & 0x3fff_ffff);
        }
    }
}
