//! Built-in compatibility data
//!
//! Lookup token -> surface forms observed in stored records. Tokens are
//! lower-case abbreviations or common full names. Order is significant only
//! for display; lookups are by exact token.

pub type Group = (&'static str, &'static [&'static str]);

const CARBON_STEEL_SHORT: &[&str] = &["Carbon Steel", "Forged Steel", "Forged Carbon Steel", "CS", "C.S."];
const STAINLESS_SHORT: &[&str] = &["Stainless Steel", "SS", "S.S.", "316SS", "304SS"];
const SOCKET_WELD_SHORT: &[&str] = &["Socket Welded", "Socket-Weld", "Socket Weld", "SW", "SWE"];
const BUTT_WELD_SHORT: &[&str] = &["Butt Welded", "Butt-Weld", "Butt Weld", "BWE"];
const GATE_VALVES: &[&str] = &["Gate Valve", "Gate Valve (Non-Rising Stem)", "Gate Valve (Rising Stem)"];
const CHECK_VALVES: &[&str] = &[
    "Check Valve",
    "Swing Check Valve",
    "Silent Check Valve",
    "Horizontal Swing Check Valve",
];

pub static MATERIALS: &[Group] = &[
    (
        "carbon steel",
        &[
            "Carbon Steel",
            "Forged Steel",
            "Forged Carbon Steel",
            "CS",
            "C.S.",
            "Carbon Steel ASTM",
            "ASTM A105 Carbon Steel",
        ],
    ),
    ("cs", CARBON_STEEL_SHORT),
    ("c.s.", CARBON_STEEL_SHORT),
    ("forged steel", &["Forged Steel", "Forged Carbon Steel", "Carbon Steel"]),
    ("forged carbon steel", &["Forged Carbon Steel", "Forged Steel", "Carbon Steel"]),
    (
        "stainless steel",
        &[
            "Stainless Steel",
            "SS",
            "S.S.",
            "316SS",
            "304SS",
            "316 Stainless Steel",
            "304 Stainless Steel",
            "316L",
            "316L Steel",
            "304",
            "316",
        ],
    ),
    ("ss", STAINLESS_SHORT),
    ("s.s.", STAINLESS_SHORT),
    ("316", &["316", "316 Stainless Steel", "316SS", "316L", "316L Steel", "Stainless Steel"]),
    ("304", &["304", "304 Stainless Steel", "304SS", "Stainless Steel"]),
    ("316ss", &["316 Stainless Steel", "316SS", "Stainless Steel"]),
    ("304ss", &["304 Stainless Steel", "304SS", "Stainless Steel"]),
    ("316l", &["316L Stainless Steel", "316L", "316L Steel", "Stainless Steel"]),
    (
        "brass",
        &[
            "Brass",
            "BR",
            "Brass C37700",
            "Brass - C37700",
            "Brass C35330",
            "Brass CW617N",
            "Brass - CW617N",
            "360 Brass",
            "Lead-Free Brass",
            "Lead Free Brass",
            "Lead-Free Brass - C46500",
            "Lead-Free Brass - C27453",
            "Dezincification Resistant Lead-Free Brass",
            "Brass /Nickel Plated",
            "2D Series Valve Body: Brass",
            "2V Series Valve Body: Brass",
        ],
    ),
    ("br", &["Brass", "BR"]),
    ("lead-free brass", &["Lead-Free Brass", "Lead Free Brass", "Brass"]),
    (
        "bronze",
        &[
            "Bronze",
            "BRZ",
            "Bronze C84400",
            "Bronze (C84400)",
            "B584 Bronze",
            "B584 C84400 Bronze Alloy",
            "B584-C84400 Bronze",
            "Cast Bronze - C89844",
            "Lead-Free Bronze",
            "Lead Free Bronze",
            "C89836 Lead-Free Bronze",
            "Lead-Free Bronze - C89836",
        ],
    ),
    ("brz", &["Bronze", "BRZ"]),
    ("lead-free bronze", &["Lead-Free Bronze", "Lead Free Bronze", "Bronze"]),
    (
        "cast iron",
        &[
            "Cast Iron",
            "CI",
            "Cast Iron (ASTM A126 Cl B)",
            "Cast Iron - ASTM A126 B",
            "Cast Iron Body ASTM A126",
            "Cast Iron, Epoxy Coated",
            "Epoxy Coated Cast Iron",
        ],
    ),
    ("ci", &["Cast Iron", "CI"]),
    (
        "ductile iron",
        &[
            "Ductile Iron",
            "Ductile Iron - Epoxy Coated",
            "Ductile Iron ASTM A536",
            "Ductile Iron Body with Epoxy Coating",
            "Ductile Iron with Epoxy Coating",
            "Epoxy Coated Ductile Iron",
        ],
    ),
    (
        "epoxy coated ductile iron",
        &[
            "Epoxy Coated Ductile Iron",
            "Ductile Iron - Epoxy Coated",
            "Ductile Iron with Epoxy Coating",
            "Ductile Iron",
        ],
    ),
    ("pvc", &["PVC", "PVC Body", "PVC-Acrylic", "UPVC"]),
    ("cpvc", &["CPVC", "CPVC Body"]),
    ("plastic", &["Plastic", "PVC", "CPVC", "PVC Body", "CPVC Body", "UPVC"]),
    (
        "aluminum",
        &[
            "Aluminum",
            "Anodized Aluminum",
            "Aluminum (Anodized)",
            "Extruded Aluminum",
            "Diecast Aluminum Alloy, Irridite and Baked Epoxy Finish",
        ],
    ),
    ("aluminium", &["Aluminum", "Aluminium", "Anodized Aluminum"]),
];

pub static END_CONNECTIONS: &[Group] = &[
    (
        "socket-weld",
        &[
            "Socket Welded",
            "Socket-Weld",
            "Socket Weld",
            "SW",
            "SWE",
            "Socket",
            "Socket-Weld End",
            "Socket Weld End",
        ],
    ),
    ("sw", SOCKET_WELD_SHORT),
    ("swe", SOCKET_WELD_SHORT),
    ("socket weld", SOCKET_WELD_SHORT),
    ("socket welded", SOCKET_WELD_SHORT),
    (
        "threaded",
        &[
            "Screwed/Threaded",
            "Threaded",
            "Thread",
            "Screwed",
            "THR",
            "NPT",
            "NPT to ASME B1.20.1",
            "Female NPT",
            "FNPT",
            "Male NPT",
            "MNPT",
            "FNPT x MNPT",
            "MNPT x FNPT",
            "Clamp x Female NPT",
            "Clamp x Male NPT",
            "Clamp x MNPT",
            "NPT and Socket Ends Included",
        ],
    ),
    (
        "npt",
        &[
            "NPT",
            "Female NPT",
            "FNPT",
            "Male NPT",
            "MNPT",
            "Screwed/Threaded",
            "FNPT x MNPT",
            "MNPT x FNPT",
            "NPT to ASME B1.20.1",
            "NPT and Socket Ends Included",
            "Clamp x Female NPT",
            "Clamp x Male NPT",
        ],
    ),
    ("screwed", &["Screwed/Threaded", "Threaded", "Screwed", "NPT"]),
    ("thr", &["Threaded", "Screwed/Threaded", "Screwed", "THR"]),
    (
        "flanged",
        &[
            "Flanged",
            "Flange",
            "FLG",
            "150# Flange",
            "ANSI Flange",
            "Square Flange x Square Flange",
            "RF Flange",
            "FF Flange",
        ],
    ),
    ("flange", &["Flanged", "Flange", "FLG", "150# Flange", "ANSI Flange"]),
    ("flg", &["Flanged", "Flange", "FLG"]),
    ("150#", &["150#", "150# Flange", "Flanged", "Flange"]),
    (
        "butt-weld",
        &["Butt Welded", "Butt-Weld", "Butt Weld", "BWE", "Butt-Weld End", "Butt Weld End"],
    ),
    ("bwe", BUTT_WELD_SHORT),
    ("butt weld", BUTT_WELD_SHORT),
    ("butt welded", BUTT_WELD_SHORT),
    (
        "clamp",
        &[
            "Clamp",
            "Tri-Clamp",
            "Clamp x Female NPT",
            "Clamp x Male NPT",
            "Clamp x MNPT",
            "Tri-Clamp Connection",
        ],
    ),
    ("tri-clamp", &["Tri-Clamp", "Clamp", "Tri-Clamp Connection"]),
    ("solder", &["Solder", "Soldered"]),
    ("press connection", &["Press Connection", "Pressfit", "Press Fit"]),
    ("pressfit", &["Pressfit", "Press Connection", "Press Fit"]),
];

pub static VALVE_TYPES: &[Group] = &[
    ("gt", GATE_VALVES),
    ("gl", &["Globe Valve"]),
    ("bv", &["Ball Valve", "2-Piece Ball Valve", "3-Piece Ball Valve", "Gas Ball Valve"]),
    ("bfv", &["Butterfly Valve", "Butterfly Valves", "High Performance Butterfly Valve"]),
    ("cv", CHECK_VALVES),
    ("ch", &["Check Valve", "Swing Check Valve", "Silent Check Valve"]),
    ("ndl", &["Needle Valve"]),
    ("rv", &["Relief Valve"]),
    ("ro", &["Restriction Orifice"]),
    ("stt", &["Steam Trap"]),
    ("str", &["Strainer", "Y- Strainer"]),
    (
        "thw",
        &[
            "Three-Way Valve",
            "3-Way Ball Valve",
            "3-Way Diverter Ball Valve",
            "3-Way Pneumatically Actuated Ball Valve",
            "3-Way Electrically Actuated Ball Valve",
        ],
    ),
    (
        "2w",
        &[
            "2-Way Ball Valve",
            "2-Way Pneumatically Actuated Ball Valve",
            "2-Way Electrically Actuated Ball Valve",
            "2-Way Ball Valve (V-Port)",
        ],
    ),
    (
        "3w",
        &[
            "3-Way Ball Valve",
            "3-Way Pneumatically Actuated Ball Valve",
            "3-Way Electrically Actuated Ball Valve",
            "3-Way Diverter Ball Valve",
        ],
    ),
    ("2wnc", &["2-Way Normally Closed"]),
    ("2wno", &["2-Way Normally Open"]),
    (
        "ball valve",
        &[
            "Ball Valve",
            "2-Piece Ball Valve",
            "3-Piece Ball Valve",
            "Gas Ball Valve",
            "2-Way Ball Valve",
            "3-Way Ball Valve",
        ],
    ),
    ("gate valve", GATE_VALVES),
    ("globe valve", &["Globe Valve"]),
    (
        "butterfly valve",
        &[
            "Butterfly Valve",
            "Butterfly Valves",
            "High Performance Butterfly Valve",
            "Pneumatically Actuated Butterfly Valve",
            "Electrically Actuated Butterfly Valve",
        ],
    ),
    ("check valve", CHECK_VALVES),
    ("solenoid valve", &["Solenoid Valve"]),
];

/// Flat one-to-one valve-type abbreviations
pub static VALVE_TYPE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("gt", "Gate Valve"),
    ("gl", "Globe Valve"),
    ("bv", "Ball Valve"),
    ("bfv", "Butterfly Valve"),
    ("cv", "Check Valve"),
    ("ch", "Check Valve"),
    ("ndl", "Needle Valve"),
    ("rv", "Relief Valve"),
    ("ro", "Restriction Orifice"),
    ("stt", "Steam Trap"),
    ("str", "Strainer"),
    ("thw", "Three-Way Valve"),
    ("2w", "2-Way Ball Valve"),
    ("3w", "3-Way Ball Valve"),
    ("2wnc", "2-Way Normally Closed"),
    ("2wno", "2-Way Normally Open"),
];
