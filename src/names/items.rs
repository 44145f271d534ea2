/// Held item names, sorted by id. The table is partial: key items, TMs
/// and several unused ids are absent and resolve to a placeholder.
pub(super) const ITEM_NAMES: &[(u16, &str)] = &[
    (1, "Master Ball"), (2, "Ultra Ball"), (3, "Great Ball"),
    (4, "Poke Ball"), (5, "Safari Ball"), (6, "Net Ball"),
    (7, "Dive Ball"), (8, "Nest Ball"), (9, "Repeat Ball"),
    (10, "Timer Ball"), (11, "Luxury Ball"), (12, "Premier Ball"),
    (13, "Potion"), (14, "Antidote"), (15, "Burn Heal"),
    (16, "Ice Heal"), (17, "Awakening"), (18, "Parlyz Heal"),
    (19, "Full Restore"), (20, "Max Potion"), (21, "Hyper Potion"),
    (22, "Super Potion"), (23, "Full Heal"), (24, "Revive"),
    (25, "Max Revive"), (26, "Fresh Water"), (27, "Soda Pop"),
    (28, "Lemonade"), (29, "Moomoo Milk"), (30, "Energy Powder"),
    (31, "Energy Root"), (32, "Heal Powder"), (33, "Revival Herb"),
    (34, "Ether"), (35, "Max Ether"), (36, "Elixir"),
    (37, "Max Elixir"), (38, "Lava Cookie"), (39, "Blue Flute"),
    (40, "Yellow Flute"), (41, "Red Flute"), (42, "Black Flute"),
    (43, "White Flute"), (44, "Berry Juice"), (45, "Sacred Ash"),
    (46, "Shoal Salt"), (47, "Shoal Shell"), (48, "Red Shard"),
    (49, "Blue Shard"), (50, "Yellow Shard"), (51, "Green Shard"),
    (63, "HP Up"), (64, "Protein"), (65, "Iron"),
    (66, "Carbos"), (67, "Calcium"), (68, "Rare Candy"),
    (69, "PP Up"), (70, "Zinc"), (71, "PP Max"),
    (78, "Guard Spec."), (79, "Dire Hit"), (80, "X Attack"),
    (81, "X Defend"), (82, "X Speed"), (83, "X Accuracy"),
    (84, "X Special"), (85, "Poke Doll"), (86, "Fluffy Tail"),
    (91, "Super Repel"), (92, "Max Repel"), (93, "Escape Rope"),
    (94, "Repel"), (103, "Sun Stone"), (104, "Moon Stone"),
    (105, "Fire Stone"), (106, "Thunder Stone"), (107, "Water Stone"),
    (108, "Leaf Stone"), (116, "TinyMushroom"), (117, "Big Mushroom"),
    (119, "Pearl"), (120, "Big Pearl"), (121, "Stardust"),
    (122, "Star Piece"), (123, "Nugget"), (124, "Heart Scale"),
    (131, "Orange Mail"), (132, "Harbor Mail"), (133, "Glitter Mail"),
    (134, "Mech Mail"), (135, "Wood Mail"), (136, "Wave Mail"),
    (137, "Bead Mail"), (138, "Shadow Mail"), (139, "Tropic Mail"),
    (140, "Dream Mail"), (141, "Fab Mail"), (142, "Retro Mail"),
    (143, "Cheri Berry"), (144, "Chesto Berry"), (145, "Pecha Berry"),
    (146, "Rawst Berry"), (147, "Aspear Berry"), (148, "Leppa Berry"),
    (149, "Oran Berry"), (150, "Persim Berry"), (151, "Lum Berry"),
    (152, "Sitrus Berry"), (153, "Figy Berry"), (154, "Wiki Berry"),
    (155, "Mago Berry"), (156, "Aguav Berry"), (157, "Iapapa Berry"),
    (158, "Razz Berry"), (159, "Bluk Berry"), (160, "Nanab Berry"),
    (161, "Wepear Berry"), (162, "Pinap Berry"), (163, "Pomeg Berry"),
    (164, "Kelpsy Berry"), (165, "Qualot Berry"), (166, "Hondew Berry"),
    (167, "Grepa Berry"), (168, "Tamato Berry"), (169, "Cornn Berry"),
    (170, "Magost Berry"), (171, "Rabuta Berry"), (172, "Nomel Berry"),
    (173, "Spelon Berry"), (174, "Pamtre Berry"), (175, "Watmel Berry"),
    (176, "Durin Berry"), (177, "Belue Berry"), (178, "Liechi Berry"),
    (179, "Ganlon Berry"), (180, "Salac Berry"), (181, "Petaya Berry"),
    (182, "Apicot Berry"), (183, "Lansat Berry"), (184, "Starf Berry"),
    (185, "Enigma Berry"), (216, "BrightPowder"), (217, "White Herb"),
    (218, "Macho Brace"), (219, "Exp. Share"), (220, "Quick Claw"),
    (221, "Soothe Bell"), (222, "Mental Herb"), (223, "Choice Band"),
    (224, "King's Rock"), (225, "Silver Powder"), (226, "Amulet Coin"),
    (227, "Cleanse Tag"), (228, "Soul Dew"), (229, "Deep Sea Tooth"),
    (230, "Deep Sea Scale"), (231, "Smoke Ball"), (232, "Everstone"),
    (233, "Focus Band"), (234, "Lucky Egg"), (235, "Scope Lens"),
    (236, "Metal Coat"), (237, "Leftovers"), (238, "Dragon Scale"),
    (239, "Light Ball"), (240, "Soft Sand"), (241, "Hard Stone"),
    (242, "Miracle Seed"), (243, "Black Glasses"), (244, "Black Belt"),
    (245, "Magnet"), (246, "Mystic Water"), (247, "Sharp Beak"),
    (248, "Poison Barb"), (249, "Never-Melt Ice"), (250, "Spell Tag"),
    (251, "Twisted Spoon"), (252, "Charcoal"), (253, "Dragon Fang"),
    (254, "Silk Scarf"), (255, "Up-Grade"), (256, "Shell Bell"),
    (257, "Sea Incense"), (258, "Lax Incense"), (259, "Lucky Punch"),
    (260, "Metal Powder"), (261, "Thick Club"), (262, "Stick"),
];

