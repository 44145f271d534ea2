/// Met location names, sorted by id. Partial.
pub(super) const LOCATION_NAMES: &[(u8, &str)] = &[
    (0, "Fateful encounter"), (1, "Pallet Town"), (2, "Viridian City"),
    (3, "Pewter City"), (4, "Cerulean City"), (5, "Lavender Town"),
    (6, "Vermilion City"), (7, "Celadon City"), (8, "Fuchsia City"),
    (9, "Cinnabar Island"), (10, "Indigo Plateau"), (11, "Saffron City"),
    (12, "Route 1"), (13, "Route 2"), (14, "Route 3"),
    (15, "Route 4"), (16, "Route 5"), (17, "Route 6"),
    (18, "Route 7"), (19, "Route 8"), (20, "Route 9"),
    (21, "Route 10"), (22, "Route 11"), (23, "Route 12"),
    (24, "Route 13"), (25, "Route 14"), (26, "Route 15"),
    (27, "Route 16"), (28, "Route 17"), (29, "Route 18"),
    (30, "Route 19"), (31, "Route 20"), (32, "Route 21"),
    (33, "Route 22"), (34, "Route 23"), (35, "Route 24"),
    (36, "Route 25"), (37, "Viridian Forest"), (38, "Mt. Moon"),
    (39, "S.S. Anne"), (40, "Underground Path"), (41, "Underground Path"),
    (42, "Safari Zone"), (43, "Rock Tunnel"), (44, "Seafoam Islands"),
    (45, "Pokemon Tower"), (46, "Cerulean Cave"), (47, "Power Plant"),
    (48, "Pokemon Mansion"), (49, "Victory Road"), (50, "Trade"),
    (51, "Egg"), (200, "Littleroot Town"), (201, "Oldale Town"),
    (202, "Dewford Town"), (203, "Lavaridge Town"), (204, "Fallarbor Town"),
    (205, "Verdanturf Town"), (206, "Pacifidlog Town"), (207, "Petalburg City"),
    (208, "Slateport City"), (209, "Mauville City"), (210, "Rustboro City"),
    (211, "Fortree City"), (212, "Lilycove City"), (213, "Mossdeep City"),
    (214, "Sootopolis City"), (215, "Ever Grande City"), (216, "Route 101"),
    (217, "Route 102"), (218, "Route 103"), (219, "Route 104"),
    (220, "Route 105"), (221, "Route 106"), (222, "Route 107"),
    (223, "Route 108"), (224, "Route 109"), (225, "Route 110"),
    (226, "Route 111"), (227, "Route 112"), (228, "Route 113"),
    (229, "Route 114"), (230, "Route 115"), (231, "Route 116"),
    (232, "Route 117"), (233, "Route 118"), (234, "Route 119"),
    (235, "Route 120"), (236, "Route 121"), (237, "Route 122"),
    (238, "Route 123"), (239, "Route 124"), (240, "Route 125"),
    (241, "Route 126"), (242, "Route 127"), (243, "Route 128"),
    (244, "Route 129"), (245, "Route 130"), (246, "Route 131"),
    (247, "Route 132"), (248, "Route 133"), (249, "Route 134"),
    (250, "Petalburg Woods"), (251, "Rusturf Tunnel"), (252, "Granite Cave"),
    (253, "Mt. Chimney"), (254, "Jagged Pass"), (255, "Fiery Path"),
];
