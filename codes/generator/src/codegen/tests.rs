// Licensed under the Apache-2.0 license

//! Tests for header generation.

mod test {
    use super::super::{build_header, generate_header, generate_header_with_dialect};
    use crate::catalog::{GCODE, MCODE};
    use crate::dialect::{Dialect, UnderlyingType};
    use crate::error::GeneratorError;
    use crate::registry::Category;

    const MOTION: Category = Category {
        name: "motion",
        type_name: "GCMotion",
        codes: &["G0", "G1", "G2", "G3"],
    };
    const PLANE: Category = Category {
        name: "plane",
        type_name: "GCPlane",
        codes: &["G17", "G18", "G19"],
    };

    /// Leaks `count` distinct codes so they can back a `Category`.
    fn many_codes(count: usize) -> &'static [&'static str] {
        let codes: Vec<&'static str> = (0..count)
            .map(|i| -> &'static str { Box::leak(format!("G{i}").into_boxed_str()) })
            .collect();
        codes.leak()
    }

    #[test]
    fn test_small_header() {
        let header = build_header("GCode", "small.gen.h", &[MOTION, PLANE], &Dialect::abort())
            .unwrap();
        let code = header.generate_code(&Dialect::abort());
        let expected = r#"#pragma once

#include <cstdint>
#include <utility>
#include <string_view>

#include "utils.h"

enum class GCode : std::uint8_t {
    G0 = 0,
    G1 = 1,
    G2 = 2,
    G3 = 3,
    G17 = 4,
    G18 = 5,
    G19 = 6,
};

inline std::string_view name(const GCode code) {
    switch(code) {
        case GCode::G0: return "G0";
        case GCode::G1: return "G1";
        case GCode::G2: return "G2";
        case GCode::G3: return "G3";
        case GCode::G17: return "G17";
        case GCode::G18: return "G18";
        case GCode::G19: return "G19";
    }

    PANIC("{}() invalid code GCode::{}", __func__, std::to_underlying(code));
}

enum class GCMotion : std::uint8_t {
    G0 = 0,
    G1 = 1,
    G2 = 2,
    G3 = 3,
};

inline std::string_view name(const GCMotion code) {
    switch(code) {
        case GCMotion::G0: return "G0";
        case GCMotion::G1: return "G1";
        case GCMotion::G2: return "G2";
        case GCMotion::G3: return "G3";
    }

    PANIC("{}() invalid code GCMotion::{}", __func__, std::to_underlying(code));
}

enum class GCPlane : std::uint8_t {
    G17 = 4,
    G18 = 5,
    G19 = 6,
};

inline std::string_view name(const GCPlane code) {
    switch(code) {
        case GCPlane::G17: return "G17";
        case GCPlane::G18: return "G18";
        case GCPlane::G19: return "G19";
    }

    PANIC("{}() invalid code GCPlane::{}", __func__, std::to_underlying(code));
}

"#;
        assert_eq!(code, expected);
    }

    #[test]
    fn test_umbrella_comes_first() {
        let header =
            build_header("GCode", "x.h", &[MOTION, PLANE], &Dialect::exception()).unwrap();
        let names: Vec<&str> = header.enums.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["GCode", "GCMotion", "GCPlane"]);
        assert_eq!(header.enums[0].members.len(), 7);
    }

    #[test]
    fn test_duplicate_aborts_without_output() {
        const PLANE_WITH_G1: Category = Category {
            name: "plane",
            type_name: "GCPlane",
            codes: &["G17", "G18", "G19", "G1"],
        };
        let result = build_header("GCode", "x.h", &[MOTION, PLANE_WITH_G1], &Dialect::abort());
        assert_eq!(
            result.unwrap_err(),
            GeneratorError::DuplicateCode {
                code: "G1".to_string()
            }
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        for dialect in [Dialect::abort(), Dialect::exception()] {
            let a = generate_header_with_dialect(&GCODE, &dialect).unwrap();
            let b = generate_header_with_dialect(&GCODE, &dialect).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_identifier_only_in_enumerators() {
        let code = generate_header(&GCODE).unwrap();
        assert!(code.contains("    G59_1 = 21,\n"));
        assert!(code.contains("        case GCCoord::G59_1: return \"G59.1\";\n"));
        assert!(code.contains("        case GCPath::G61_1: return \"G61.1\";\n"));
        assert!(!code.contains("G59.1 ="));
        assert!(!code.contains("return \"G59_1\""));
    }

    #[test]
    fn test_every_enumerator_has_one_case() {
        let code = generate_header(&MCODE).unwrap();
        for (type_name, codes) in [
            ("MCode", &["M0", "M1", "M2", "M30", "M6", "M3", "M4", "M5"][..]),
            ("MCStop", &["M0", "M1", "M2", "M30"][..]),
            ("MCToolChange", &["M6"][..]),
            ("MCSpindle", &["M3", "M4", "M5"][..]),
        ] {
            let prefix = format!("        case {type_name}::");
            let cases = code.lines().filter(|l| l.starts_with(&prefix)).count();
            assert_eq!(cases, codes.len(), "{type_name}");
            for code_text in codes {
                assert!(code.contains(&format!(
                    "        case {type_name}::{code_text}: return \"{code_text}\";\n"
                )));
            }
        }
    }

    #[test]
    fn test_default_dialects() {
        let gcode = generate_header(&GCODE).unwrap();
        assert!(gcode.starts_with("#pragma once\n"));
        assert!(gcode.contains("enum class GCode : std::uint8_t {\n"));
        assert!(gcode.contains(
            "    PANIC(\"{}() invalid code GCNonModal::{}\", __func__, std::to_underlying(code));\n"
        ));

        let mcode = generate_header(&MCODE).unwrap();
        assert!(mcode.starts_with("#ifndef MCODE_GEN_H\n#define MCODE_GEN_H\n"));
        assert!(mcode.ends_with("#endif\n"));
        assert!(mcode.contains("enum class MCToolChange {\n    M6 = 4,\n};\n"));
        assert!(mcode.contains("inline const char *name(const MCSpindle code) {\n"));
    }

    #[test]
    fn test_dialect_does_not_change_ids() {
        let abort = build_header("GCode", "x.h", GCODE.categories, &Dialect::abort()).unwrap();
        let throw =
            build_header("GCode", "x.h", GCODE.categories, &Dialect::exception()).unwrap();
        assert_eq!(abort.enums, throw.enums);
    }

    #[test]
    fn test_ids_must_fit_underlying_type() {
        let wide = [Category {
            name: "wide",
            type_name: "Wide",
            codes: many_codes(300),
        }];

        let err = build_header("Wide", "wide.h", &wide, &Dialect::abort()).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::IdOutOfRange {
                type_name: "Wide".to_string(),
                max_id: 299,
                underlying: "std::uint8_t".to_string(),
            }
        );

        let dialect = Dialect::abort().with_underlying_type(UnderlyingType::U16);
        assert!(build_header("Wide", "wide.h", &wide, &dialect).is_ok());
        assert!(build_header("Wide", "wide.h", &wide, &Dialect::exception()).is_ok());
    }

    #[test]
    fn test_exactly_256_codes_fit_u8() {
        let full = [Category {
            name: "full",
            type_name: "Full",
            codes: many_codes(256),
        }];
        let header = build_header("Full", "full.h", &full, &Dialect::abort()).unwrap();
        assert_eq!(header.enums[0].max_id(), Some(255));
    }

    #[test]
    fn test_enum_type_names_must_be_distinct() {
        const PLANE_AS_MOTION: Category = Category {
            name: "plane",
            type_name: "GCMotion",
            codes: &["G17", "G18", "G19"],
        };
        assert_eq!(
            build_header("GCode", "x.h", &[MOTION, PLANE_AS_MOTION], &Dialect::abort())
                .unwrap_err(),
            GeneratorError::DuplicateTypeName {
                type_name: "GCMotion".to_string()
            }
        );

        const PLANE_AS_UMBRELLA: Category = Category {
            name: "plane",
            type_name: "GCode",
            codes: &["G17", "G18", "G19"],
        };
        let err = build_header("GCode", "x.h", &[MOTION, PLANE_AS_UMBRELLA], &Dialect::abort())
            .unwrap_err();
        assert_eq!(err.to_string(), "enum type GCode is declared more than once");
    }
}
