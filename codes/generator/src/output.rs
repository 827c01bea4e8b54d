// Licensed under the Apache-2.0 license

//! Rendering of enum declarations and lookup functions.
//!
//! ## Generated Code Structure
//!
//! For the `GCPlane` category under [`Dialect::abort`], [`render`] produces:
//!
//! ```text
//! enum class GCPlane : std::uint8_t {
//!     G17 = 4,
//!     G18 = 5,
//!     G19 = 6,
//! };
//!
//! inline std::string_view name(const GCPlane code) {
//!     switch(code) {
//!         case GCPlane::G17: return "G17";
//!         case GCPlane::G18: return "G18";
//!         case GCPlane::G19: return "G19";
//!     }
//!
//!     PANIC("{}() invalid code GCPlane::{}", __func__, std::to_underlying(code));
//! }
//! ```
//!
//! [`GeneratedHeader`] wraps a list of such blocks in the dialect's prolog
//! and epilog.

use log::debug;
use std::fmt::Write;

use crate::dialect::{Dialect, GuardStyle, InvalidCodePolicy};
use crate::registry::EnumSpec;
use crate::util::guard_symbol;

/// Banner written above every header committed to the repository.
pub const GENERATED_BANNER: &str =
    "// Licensed under the Apache-2.0 license\n// Generated by cargo xtask codes-gen. Do not edit.\n\n";

/// A complete header: the umbrella enum first, then one enum per category.
#[derive(Clone, Debug)]
pub struct GeneratedHeader {
    /// Output file name, used to derive the include-guard symbol.
    pub file_name: String,
    pub enums: Vec<EnumSpec>,
}

impl GeneratedHeader {
    /// Generate the full header text.
    pub fn generate_code(&self, dialect: &Dialect) -> String {
        let guard = guard_symbol(&self.file_name);
        let mut output = render_prolog(dialect, &guard);
        for spec in &self.enums {
            output.push_str(&render(spec, dialect));
        }
        output.push_str(&render_epilog(dialect));
        output
    }
}

/// Render the enum declaration and lookup function for one enum.
pub fn render(spec: &EnumSpec, dialect: &Dialect) -> String {
    debug!("rendering {}", spec.name);
    let mut output = render_enum(spec, dialect);
    output.push_str(&render_lookup(spec, dialect));
    output
}

/// Render the `enum class` declaration.
pub fn render_enum(spec: &EnumSpec, dialect: &Dialect) -> String {
    let mut output = String::new();
    match dialect.underlying_type {
        Some(underlying) => {
            writeln!(output, "enum class {} : {} {{", spec.name, underlying).unwrap()
        }
        None => writeln!(output, "enum class {} {{", spec.name).unwrap(),
    }
    for member in &spec.members {
        writeln!(output, "    {} = {},", member.identifier(), member.id).unwrap();
    }
    writeln!(output, "}};").unwrap();
    writeln!(output).unwrap();
    output
}

/// Render the reverse lookup from enumerator to code text.
pub fn render_lookup(spec: &EnumSpec, dialect: &Dialect) -> String {
    let mut output = String::new();
    let name = &spec.name;
    writeln!(
        output,
        "inline {}{}(const {name} code) {{",
        return_type_prefix(&dialect.return_type),
        dialect.lookup_fn
    )
    .unwrap();
    writeln!(output, "    switch(code) {{").unwrap();
    for member in &spec.members {
        writeln!(
            output,
            "        case {name}::{}: return \"{}\";",
            member.identifier(),
            member.code
        )
        .unwrap();
    }

    let format = diagnostic_format(name);
    match dialect.invalid_code {
        InvalidCodePolicy::Abort => {
            writeln!(output, "    }}").unwrap();
            writeln!(output).unwrap();
            writeln!(
                output,
                "    {}(\"{format}\", __func__, std::to_underlying(code));",
                dialect.abort_macro
            )
            .unwrap();
        }
        InvalidCodePolicy::Throw => {
            writeln!(
                output,
                "        default: throw std::runtime_error(std::format(\"{format}\", __func__, std::to_underlying(code)));"
            )
            .unwrap();
            writeln!(output, "    }}").unwrap();
        }
    }
    writeln!(output, "}}").unwrap();
    writeln!(output).unwrap();
    output
}

/// Guard opening and includes.
pub fn render_prolog(dialect: &Dialect, guard: &str) -> String {
    let mut output = String::new();
    match dialect.guard {
        GuardStyle::PragmaOnce => writeln!(output, "#pragma once").unwrap(),
        GuardStyle::IncludeGuard => {
            writeln!(output, "#ifndef {guard}").unwrap();
            writeln!(output, "#define {guard}").unwrap();
        }
    }
    writeln!(output).unwrap();

    let (system, local) = dialect.ordered_includes();
    for group in [system, local] {
        if group.is_empty() {
            continue;
        }
        for include in group {
            writeln!(output, "{include}").unwrap();
        }
        writeln!(output).unwrap();
    }
    output
}

/// Guard closing, if the dialect needs one.
pub fn render_epilog(dialect: &Dialect) -> String {
    match dialect.guard {
        GuardStyle::PragmaOnce => String::new(),
        GuardStyle::IncludeGuard => "#endif\n".to_string(),
    }
}

/// The `std::format` string embedded in the invalid-value branch.
pub fn diagnostic_format(type_name: &str) -> String {
    format!("{{}}() invalid code {type_name}::{{}}")
}

/// The message a generated lookup reports at runtime for `value`: the
/// placeholders of [`diagnostic_format`] filled in as `std::format` would.
///
/// # Examples
/// ```
/// use ngc_codes_generator::output::invalid_code_message;
/// assert_eq!(
///     invalid_code_message("name", "MCode", 42),
///     "name() invalid code MCode::42"
/// );
/// ```
pub fn invalid_code_message(lookup_fn: &str, type_name: &str, value: u64) -> String {
    let format = diagnostic_format(type_name);
    let (head, tail) = format.split_once("{}").unwrap_or((format.as_str(), ""));
    format!("{head}{lookup_fn}{}", tail.replacen("{}", &value.to_string(), 1))
}

/// `const char *` binds to the function name; other types need a space.
fn return_type_prefix(return_type: &str) -> String {
    if return_type.ends_with('*') || return_type.ends_with('&') {
        return_type.to_string()
    } else {
        format!("{return_type} ")
    }
}
