// Licensed under the Apache-2.0 license

//! G-code/M-code catalog to C++ enum header generator.
//!
//! This crate turns small catalogs of machine-control codes into C++ headers
//! holding one `enum class` per category, an umbrella enum holding every
//! code, and a `name()` overload mapping each enumerator back to its code
//! text.
//!
//! ## Usage
//!
//! ```
//! use ngc_codes_generator::{catalog, generate_header, generate_header_with_dialect, Dialect};
//!
//! // Header for the G-code catalog in its default dialect.
//! let code = generate_header(&catalog::GCODE).unwrap();
//! assert!(code.contains("G59_1 = 21,"));
//!
//! // Or with another dialect.
//! let code = generate_header_with_dialect(&catalog::GCODE, &Dialect::exception()).unwrap();
//! assert!(code.starts_with("#ifndef GCODE_GEN_H"));
//! ```
//!
//! ## Module Organization
//!
//! - [`registry`]: Global code numbering ([`Registry`])
//! - [`dialect`]: Rendering options ([`Dialect`])
//! - [`output`]: Enum and lookup rendering
//! - [`catalog`]: The shipped G-code and M-code catalogs
//! - [`util`]: Identifier and guard-symbol conversion

pub mod catalog;
pub mod dialect;
pub mod output;
pub mod registry;
pub mod util;

mod codegen;
mod error;

// Re-export main public API
pub use codegen::{build_header, generate_header, generate_header_with_dialect};
pub use dialect::{Dialect, DialectKind};
pub use error::{GeneratorError, GeneratorResult};
pub use output::GeneratedHeader;
pub use registry::{Category, EnumSpec, Registry};
