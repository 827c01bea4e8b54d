// Licensed under the Apache-2.0 license

//! The code catalogs that ship with the generator.
//!
//! Each catalog is a constant table. Category order matters: it fixes the
//! numbering, and the numbering is compiled into everything that includes
//! the generated headers. Append new codes to the end of the last category
//! unless renumbering is intended.

use crate::dialect::DialectKind;
use crate::registry::Category;

/// A set of categories that is rendered into one header.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    /// Short name used on the command line.
    pub name: &'static str,
    /// Type name of the umbrella enum holding every code.
    pub umbrella: &'static str,
    /// Name of the generated header.
    pub file_name: &'static str,
    pub default_dialect: DialectKind,
    pub categories: &'static [Category],
}

pub const GCODE: Catalog = Catalog {
    name: "gcode",
    umbrella: "GCode",
    file_name: "gcode.gen.h",
    default_dialect: DialectKind::Abort,
    categories: &[
        Category {
            name: "motion",
            type_name: "GCMotion",
            codes: &["G0", "G1", "G2", "G3"],
        },
        Category {
            name: "plane",
            type_name: "GCPlane",
            codes: &["G17", "G18", "G19"],
        },
        Category {
            name: "distance",
            type_name: "GCDist",
            codes: &["G90", "G91"],
        },
        Category {
            name: "feed",
            type_name: "GCFeed",
            codes: &["G93", "G94"],
        },
        Category {
            name: "units",
            type_name: "GCUnits",
            codes: &["G20", "G21"],
        },
        Category {
            name: "tool_length",
            type_name: "GCTLen",
            codes: &["G43", "G49"],
        },
        Category {
            name: "coord_sys",
            type_name: "GCCoord",
            codes: &[
                "G54", "G55", "G56", "G57", "G58", "G59", "G59.1", "G59.2", "G59.3",
            ],
        },
        Category {
            name: "path",
            type_name: "GCPath",
            codes: &["G61.1"],
        },
        Category {
            name: "non_modal",
            type_name: "GCNonModal",
            codes: &["G53"],
        },
    ],
};

pub const MCODE: Catalog = Catalog {
    name: "mcode",
    umbrella: "MCode",
    file_name: "mcode.gen.h",
    default_dialect: DialectKind::Exception,
    categories: &[
        Category {
            name: "stop",
            type_name: "MCStop",
            codes: &["M0", "M1", "M2", "M30"],
        },
        Category {
            name: "tool_change",
            type_name: "MCToolChange",
            codes: &["M6"],
        },
        Category {
            name: "spindle",
            type_name: "MCSpindle",
            codes: &["M3", "M4", "M5"],
        },
    ],
};

/// Every shipped catalog, in generation order.
pub const ALL_CATALOGS: &[Catalog] = &[GCODE, MCODE];

/// Look up a shipped catalog by its command-line name.
pub fn find(name: &str) -> Option<&'static Catalog> {
    ALL_CATALOGS.iter().find(|catalog| catalog.name == name)
}
