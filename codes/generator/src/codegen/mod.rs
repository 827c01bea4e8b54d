// Licensed under the Apache-2.0 license

//! Entry points for generating a header from a catalog.
//!
//! Generation is one linear pass: build the [`Registry`], check that enum type
//! names are distinct and every id fits the dialect's underlying type, then
//! render the umbrella enum followed by each category. Any error is returned
//! before text is produced, so a failed run never leaves a partial header
//! behind.

use log::info;
use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::dialect::Dialect;
use crate::error::{GeneratorError, GeneratorResult};
use crate::output::GeneratedHeader;
use crate::registry::{Category, Registry};

/// Generate the header for a catalog using its default dialect.
pub fn generate_header(catalog: &Catalog) -> GeneratorResult<String> {
    generate_header_with_dialect(catalog, &catalog.default_dialect.dialect())
}

/// Generate the header for a catalog with a custom dialect.
pub fn generate_header_with_dialect(
    catalog: &Catalog,
    dialect: &Dialect,
) -> GeneratorResult<String> {
    let header = build_header(
        catalog.umbrella,
        catalog.file_name,
        catalog.categories,
        dialect,
    )?;
    let code = header.generate_code(dialect);
    info!(
        "generated {} ({} enums, {} bytes)",
        catalog.file_name,
        header.enums.len(),
        code.len()
    );
    Ok(code)
}

/// Number `categories` and collect the enums of one header.
///
/// The umbrella enum named `umbrella` comes first, followed by one enum per
/// category in declared order.
pub fn build_header(
    umbrella: &str,
    file_name: &str,
    categories: &[Category],
    dialect: &Dialect,
) -> GeneratorResult<GeneratedHeader> {
    let registry = Registry::build(categories)?;

    let mut type_names = HashSet::from([umbrella]);
    for category in categories {
        if !type_names.insert(category.type_name) {
            return Err(GeneratorError::DuplicateTypeName {
                type_name: category.type_name.to_string(),
            });
        }
    }

    if let (Some(underlying), Some(max_id)) = (
        dialect.underlying_type,
        registry.len().checked_sub(1).and_then(|n| u32::try_from(n).ok()),
    ) {
        if max_id > underlying.max_value() {
            return Err(GeneratorError::IdOutOfRange {
                type_name: umbrella.to_string(),
                max_id,
                underlying: underlying.to_string(),
            });
        }
    }

    let mut enums = Vec::with_capacity(registry.categories().len() + 1);
    enums.push(registry.umbrella(umbrella));
    enums.extend(registry.categories().iter().cloned());

    Ok(GeneratedHeader {
        file_name: file_name.to_string(),
        enums,
    })
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
