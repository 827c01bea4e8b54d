// Licensed under the Apache-2.0 license

//! Name conversion utilities.
//!
//! Codes are opaque strings that may contain characters which are not legal
//! in a C++ identifier (`G59.1`). These helpers turn them into enumerator
//! names and derive include-guard symbols from output file names.

/// Converts a code into the enumerator identifier used for it.
///
/// Only the identifier changes; the lookup function still returns the
/// original code text.
///
/// # Examples
/// ```
/// use ngc_codes_generator::util::identifier;
/// assert_eq!(identifier("G59.1"), "G59_1");
/// assert_eq!(identifier("M30"), "M30");
/// ```
pub fn identifier(code: &str) -> String {
    code.replace('.', "_")
}

/// Returns true if `ident` is usable as a C++ identifier.
pub fn is_valid_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Derives an include-guard symbol from an output file name.
///
/// # Examples
/// ```
/// use ngc_codes_generator::util::guard_symbol;
/// assert_eq!(guard_symbol("mcode.gen.h"), "MCODE_GEN_H");
/// ```
pub fn guard_symbol(file_name: &str) -> String {
    let mut result: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}
