// Licensed under the Apache-2.0 license

use log::LevelFilter;
use ngc_codes_generator::catalog::{ALL_CATALOGS, GCODE, MCODE};
use ngc_codes_generator::generate_header;
use ngc_codes_generator::output::GENERATED_BANNER;
use simple_logger::SimpleLogger;

const GCODE_HEADER: &str = include_str!("../../generated/include/gcode.gen.h");
const MCODE_HEADER: &str = include_str!("../../generated/include/mcode.gen.h");

fn committed(file_name: &str) -> &'static str {
    match file_name {
        "gcode.gen.h" => GCODE_HEADER,
        "mcode.gen.h" => MCODE_HEADER,
        _ => panic!("no committed header for {file_name}"),
    }
}

#[test]
fn test_committed_headers_are_up_to_date() {
    let _ = SimpleLogger::new().with_level(LevelFilter::Info).init();

    for catalog in ALL_CATALOGS {
        let code = generate_header(catalog).unwrap();
        assert_eq!(
            committed(catalog.file_name),
            format!("{GENERATED_BANNER}{code}"),
            "{} is stale; run `cargo xtask codes-gen`",
            catalog.file_name
        );
    }
}

#[test]
fn test_committed_headers_keep_numbering() {
    // Values below are compiled into downstream code.
    assert!(GCODE_HEADER.contains("    G17 = 4,\n"));
    assert!(GCODE_HEADER.contains("    G53 = 25,\n"));
    assert!(MCODE_HEADER.contains("    M30 = 3,\n"));
    assert!(MCODE_HEADER.contains("    M5 = 7,\n"));
    assert_eq!(GCODE.file_name, "gcode.gen.h");
    assert_eq!(MCODE.file_name, "mcode.gen.h");
}
