// Licensed under the Apache-2.0 license

//! Configuration for how enums and lookup functions are rendered.
//!
//! A [`Dialect`] is a plain value: the emitter walks the same registry
//! output for every dialect and only consults it for the textual pieces
//! that differ (file guard, includes, underlying type, the lookup function
//! signature and its invalid-value branch).
//!
//! # Example
//!
//! ```
//! use ngc_codes_generator::dialect::{Dialect, GuardStyle, UnderlyingType};
//!
//! // Abort on invalid values, `std::uint8_t` enums, `#pragma once`.
//! let dialect = Dialect::abort();
//! assert_eq!(dialect.underlying_type, Some(UnderlyingType::U8));
//!
//! // Throw on invalid values, but with 16-bit enums.
//! let dialect = Dialect::exception().with_underlying_type(UnderlyingType::U16);
//! assert_eq!(dialect.guard, GuardStyle::IncludeGuard);
//! ```

use std::fmt;

/// How the generated header protects against multiple inclusion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardStyle {
    /// `#pragma once`
    PragmaOnce,
    /// `#ifndef`/`#define` ... `#endif` around the whole file.
    IncludeGuard,
}

/// What the lookup function does when handed a value with no enumerator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidCodePolicy {
    /// Call the abort macro after the switch.
    Abort,
    /// `default:` case throwing `std::runtime_error`.
    Throw,
}

/// Fixed-width underlying type of the generated enums.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnderlyingType {
    U8,
    U16,
    U32,
}

impl UnderlyingType {
    /// C++ spelling of the type.
    pub fn c_type(self) -> &'static str {
        match self {
            UnderlyingType::U8 => "std::uint8_t",
            UnderlyingType::U16 => "std::uint16_t",
            UnderlyingType::U32 => "std::uint32_t",
        }
    }

    /// Largest id the type can hold.
    pub fn max_value(self) -> u32 {
        match self {
            UnderlyingType::U8 => u8::MAX.into(),
            UnderlyingType::U16 => u16::MAX.into(),
            UnderlyingType::U32 => u32::MAX,
        }
    }
}

impl fmt::Display for UnderlyingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_type())
    }
}

/// A single `#include` line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Include {
    /// `#include <name>`
    System(String),
    /// `#include "name"`
    Local(String),
}

impl Include {
    pub fn system(name: &str) -> Self {
        Include::System(name.to_string())
    }

    pub fn local(name: &str) -> Self {
        Include::Local(name.to_string())
    }
}

impl fmt::Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Include::System(name) => write!(f, "#include <{name}>"),
            Include::Local(name) => write!(f, "#include \"{name}\""),
        }
    }
}

/// The shipped dialect presets, as a copyable tag for static tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialectKind {
    /// [`Dialect::abort`]
    Abort,
    /// [`Dialect::exception`]
    Exception,
}

impl DialectKind {
    pub fn dialect(self) -> Dialect {
        match self {
            DialectKind::Abort => Dialect::abort(),
            DialectKind::Exception => Dialect::exception(),
        }
    }
}

/// Rendering options for a generated header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialect {
    pub guard: GuardStyle,
    /// Explicit enum base, or `None` for the language default.
    pub underlying_type: Option<UnderlyingType>,
    pub invalid_code: InvalidCodePolicy,
    /// Includes in emission order. Local includes are grouped after system ones.
    pub includes: Vec<Include>,
    /// Name of the lookup function; overloaded once per enum type.
    pub lookup_fn: String,
    /// Return type of the lookup function.
    pub return_type: String,
    /// Macro invoked by [`InvalidCodePolicy::Abort`]. It must accept a
    /// `std::format` string followed by its arguments and never return.
    pub abort_macro: String,
}

impl Dialect {
    /// `#pragma once`, `std::uint8_t` enums, `std::string_view` lookups that
    /// abort through `PANIC` from `utils.h`.
    pub fn abort() -> Self {
        Self {
            guard: GuardStyle::PragmaOnce,
            underlying_type: Some(UnderlyingType::U8),
            invalid_code: InvalidCodePolicy::Abort,
            includes: vec![
                Include::system("cstdint"),
                Include::system("utility"),
                Include::system("string_view"),
                Include::local("utils.h"),
            ],
            lookup_fn: "name".to_string(),
            return_type: "std::string_view".to_string(),
            abort_macro: "PANIC".to_string(),
        }
    }

    /// Include guard, default enum base, `const char *` lookups that throw
    /// `std::runtime_error`.
    pub fn exception() -> Self {
        Self {
            guard: GuardStyle::IncludeGuard,
            underlying_type: None,
            invalid_code: InvalidCodePolicy::Throw,
            includes: vec![
                Include::system("utility"),
                Include::system("format"),
                Include::system("stdexcept"),
            ],
            lookup_fn: "name".to_string(),
            return_type: "const char *".to_string(),
            abort_macro: "PANIC".to_string(),
        }
    }

    pub fn with_guard(mut self, guard: GuardStyle) -> Self {
        self.guard = guard;
        self
    }

    pub fn with_underlying_type(mut self, underlying: UnderlyingType) -> Self {
        self.underlying_type = Some(underlying);
        self
    }

    pub fn without_underlying_type(mut self) -> Self {
        self.underlying_type = None;
        self
    }

    /// Add an include, unless it is already present.
    pub fn add_include(mut self, include: Include) -> Self {
        if !self.includes.contains(&include) {
            self.includes.push(include);
        }
        self
    }

    pub fn with_lookup_fn(mut self, name: &str) -> Self {
        self.lookup_fn = name.to_string();
        self
    }

    pub fn with_return_type(mut self, return_type: &str) -> Self {
        self.return_type = return_type.to_string();
        self
    }

    pub fn with_abort_macro(mut self, name: &str) -> Self {
        self.abort_macro = name.to_string();
        self
    }

    /// Includes in emission order: system includes, then local ones.
    pub fn ordered_includes(&self) -> (Vec<&Include>, Vec<&Include>) {
        self.includes
            .iter()
            .partition(|inc| matches!(inc, Include::System(_)))
    }
}
