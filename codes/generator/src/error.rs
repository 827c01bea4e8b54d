// Licensed under the Apache-2.0 license

use thiserror::Error;

/// Errors that abort a generation run.
///
/// Every variant describes a catalog authoring mistake; none of them are
/// retried, and no output is produced once one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// A code appears more than once across the concatenated categories.
    #[error("duplicate code: {code}")]
    DuplicateCode { code: String },

    #[error("catalog has no categories")]
    NoCategories,

    #[error("category {category} has no codes")]
    EmptyCategory { category: String },

    #[error("category {category} contains an empty code")]
    EmptyCode { category: String },

    /// The enumerator rendering of a code is not a valid C++ identifier.
    #[error("code {code} renders to invalid identifier {identifier}")]
    InvalidIdentifier { code: String, identifier: String },

    /// Two enums in one header would share a type name.
    #[error("enum type {type_name} is declared more than once")]
    DuplicateTypeName { type_name: String },

    /// The largest assigned id does not fit the dialect's underlying type.
    #[error("{type_name}: id {max_id} does not fit in {underlying}")]
    IdOutOfRange {
        type_name: String,
        max_id: u32,
        underlying: String,
    },
}

/// Result type for code generation.
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;
