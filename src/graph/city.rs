//! The built-in city road network served by the delivery warehouse.
//!
//! Node 0 is the warehouse. Some roads appear twice; they are kept as
//! parallel edges. Node ids that no road touches are isolated locations.

use crate::graph::road_network::RoadNetwork;
use crate::Result;

/// Number of locations in the city domain
pub const CITY_NODES: usize = 300;

/// Warehouse location every tour starts and ends at
pub const DEPOT: usize = 0;

/// Roads as `(u, v, distance)`
pub const CITY_ROADS: &[(usize, usize, u32)] = &[
    (0, 1, 145), (1, 2, 110), (2, 3, 89), (3, 4, 49), (4, 5, 25), (5, 6, 17),
    (6, 7, 51), (7, 8, 22), (8, 9, 28), (5, 10, 66), (10, 11, 28), (11, 12, 46),
    (4, 11, 71), (3, 12, 71), (1, 13, 66), (13, 14, 175), (14, 15, 68), (15, 16, 63),
    (16, 17, 115), (17, 18, 53), (17, 19, 41), (19, 20, 27), (20, 21, 32), (21, 22, 33),
    (22, 23, 34), (23, 24, 31), (22, 25, 36), (25, 26, 19), (26, 27, 28), (27, 28, 41),
    (28, 29, 24), (29, 30, 44), (30, 31, 26), (31, 32, 27), (16, 33, 105), (33, 34, 230),
    (33, 35, 54), (35, 36, 44), (36, 37, 109), (36, 38, 189), (38, 39, 26), (39, 40, 60),
    (40, 41, 35), (41, 42, 71), (42, 43, 15), (43, 44, 68), (44, 45, 12), (45, 46, 70),
    (45, 47, 60), (47, 48, 70), (44, 49, 52), (49, 50, 30), (50, 51, 40), (51, 52, 40),
    (52, 53, 50), (53, 54, 60), (54, 55, 20), (55, 56, 20), (56, 57, 30), (57, 58, 80),
    (58, 59, 80), (59, 60, 40), (60, 61, 40), (61, 62, 70), (62, 63, 70), (63, 64, 40),
    (64, 65, 50), (65, 66, 50), (66, 67, 50), (67, 68, 50), (68, 69, 130), (69, 70, 30),
    (70, 71, 60), (70, 147, 30), (147, 142, 30), (69, 142, 50), (142, 143, 70), (143, 144, 60),
    (144, 145, 30), (145, 146, 30), (146, 129, 30), (129, 130, 50), (130, 131, 20), (145, 131, 20),
    (131, 132, 40), (132, 133, 20), (133, 148, 30), (133, 139, 110), (139, 140, 40), (140, 141, 40),
    (139, 138, 40), (138, 137, 50), (137, 136, 20), (132, 135, 20), (135, 136, 60), (135, 134, 30),
    (130, 129, 30), (129, 117, 40), (143, 115, 30), (115, 116, 90), (116, 117, 30), (117, 118, 10),
    (118, 119, 40), (119, 124, 30), (124, 123, 40), (123, 120, 40), (119, 120, 50), (120, 121, 30),
    (121, 122, 20), (120, 123, 40), (116, 125, 100), (125, 126, 30), (126, 127, 40), (127, 128, 50),
    (143, 115, 40), (115, 113, 70), (113, 114, 50), (68, 113, 40), (67, 112, 70), (65, 110, 50),
    (110, 111, 50), (62, 108, 70), (108, 107, 20), (107, 106, 70), (106, 105, 60), (105, 104, 50),
    (104, 103, 50), (103, 90, 80), (104, 88, 60), (105, 85, 60), (85, 88, 50), (88, 89, 20),
    (89, 90, 30), (90, 91, 60), (91, 102, 20), (102, 101, 30), (101, 100, 50), (100, 92, 30),
    (92, 93, 100), (93, 94, 50), (102, 92, 60), (102, 92, 60), (91, 94, 100), (94, 95, 10),
    (95, 96, 20), (95, 97, 20), (97, 98, 30), (98, 99, 50), (99, 89, 20), (85, 86, 20),
    (85, 84, 60), (83, 82, 30), (82, 81, 40), (87, 109, 30), (87, 75, 80), (75, 74, 100),
    (74, 73, 20), (73, 72, 150), (61, 76, 110), (55, 77, 30), (77, 78, 70), (78, 79, 30),
    (79, 80, 90), (53, 72, 30), (53, 72, 30), (40, 149, 101), (149, 150, 56), (150, 151, 21),
    (151, 152, 33), (152, 153, 30), (150, 153, 37), (153, 154, 47), (154, 155, 40), (155, 156, 80),
    (155, 157, 50), (157, 43, 70), (157, 158, 40), (158, 159, 40), (159, 160, 60), (160, 161, 60),
    (160, 162, 60), (162, 163, 30), (163, 164, 10), (164, 165, 10), (162, 166, 30), (166, 167, 40),
    (167, 168, 40), (168, 169, 10), (169, 170, 30), (169, 171, 20), (171, 172, 30), (172, 180, 30),
    (172, 230, 60), (230, 173, 10), (173, 174, 60), (174, 180, 40), (180, 181, 30), (181, 182, 20),
    (174, 175, 30), (175, 176, 10), (176, 182, 50), (182, 183, 30), (183, 184, 40), (184, 185, 70),
    (185, 186, 10), (176, 177, 70), (177, 184, 70), (177, 178, 70), (178, 186, 80), (178, 179, 70),
    (179, 53, 100), (178, 193, 70), (193, 54, 160), (193, 196, 70), (196, 57, 140), (196, 202, 70),
    (202, 203, 50), (203, 58, 70), (203, 204, 40), (204, 205, 20), (205, 206, 130), (204, 207, 130),
    (202, 211, 100), (211, 216, 90), (216, 217, 70), (217, 61, 100), (217, 225, 90), (225, 226, 40),
    (226, 224, 40), (224, 227, 70), (224, 223, 20), (225, 223, 40), (223, 222, 40), (222, 227, 50),
    (222, 221, 20), (221, 215, 100), (216, 215, 50), (227, 228, 20), (228, 63, 170), (215, 214, 10),
    (214, 210, 90), (211, 210, 40), (210, 201, 100), (202, 201, 40), (201, 200, 50), (200, 199, 70),
    (200, 199, 70), (199, 197, 40), (197, 194, 30), (194, 195, 90), (194, 196, 50), (194, 191, 80),
    (191, 192, 90), (193, 191, 150), (175, 191, 70), (199, 198, 290), (198, 208, 90), (208, 212, 90),
    (212, 218, 50), (218, 219, 70), (219, 220, 80), (220, 221, 50), (221, 222, 30), (220, 213, 80),
    (212, 213, 90), (212, 213, 90), (212, 237, 50), (237, 236, 70), (236, 243, 80), (243, 248, 180),
    (248, 247, 50), (247, 246, 50), (246, 245, 90), (245, 244, 60), (244, 241, 40), (241, 242, 100),
    (246, 242, 80), (243, 242, 80), (236, 235, 80), (235, 208, 160), (198, 190, 70), (190, 234, 60),
    (234, 233, 30), (233, 241, 50), (234, 235, 100), (190, 189, 40), (189, 197, 90), (189, 180, 70),
    (188, 187, 60), (191, 187, 350), (187, 229, 50), (173, 187, 60), (230, 231, 70), (231, 239, 90),
    (231, 232, 250), (232, 233, 120), (231, 240, 60), (240, 241, 170), (240, 249, 60), (249, 250, 20),
    (250, 251, 50), (251, 252, 50), (252, 245, 40), (245, 259, 80), (250, 253, 150), (253, 254, 40),
    (254, 255, 90), (255, 256, 40), (256, 257, 30), (257, 258, 40), (256, 285, 10), (285, 286, 50),
    (286, 287, 60), (149, 260, 109), (260, 261, 70), (261, 262, 30), (262, 263, 60), (260, 264, 100),
    (264, 265, 30), (265, 266, 30), (266, 267, 90), (267, 268, 90), (268, 269, 30), (269, 270, 40),
    (270, 271, 130), (264, 272, 90), (272, 275, 50), (275, 274, 70), (272, 273, 80), (273, 274, 110),
    (274, 276, 140), (276, 277, 20), (277, 278, 100), (278, 281, 40), (278, 279, 100), (279, 280, 80),
    (277, 282, 140), (282, 283, 200), (283, 284, 100), (284, 285, 50), (285, 286, 50), (286, 287, 60),
    (287, 259, 120),
];

/// Builds the city network from [`CITY_ROADS`]
pub fn city_network() -> Result<RoadNetwork<u32>> {
    RoadNetwork::from_edges(CITY_NODES, CITY_ROADS.iter().copied())
}
