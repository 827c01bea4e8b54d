// Licensed under the Apache-2.0 license

//! Global code numbering.
//!
//! The [`Registry`] concatenates every category of a catalog in declared
//! order and hands out ids in a single left-to-right pass:
//!
//! ```text
//! motion = [G0, G1, G2, G3]   plane = [G17, G18, G19]
//! all    = [G0, G1, G2, G3, G17, G18, G19]
//! ids    =  0   1   2   3   4    5    6
//! ```
//!
//! Ids are dense, zero-based and follow first appearance. Generated values
//! end up compiled into downstream artifacts, so the numbering must only
//! change when the catalog itself changes.

use log::debug;
use std::collections::HashMap;

use crate::error::{GeneratorError, GeneratorResult};
use crate::util::{identifier, is_valid_identifier};

/// A named, ordered group of codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    /// Catalog-level name (e.g. `motion`).
    pub name: &'static str,
    /// Name of the enum type rendered for this category (e.g. `GCMotion`).
    pub type_name: &'static str,
    /// Codes in declared order.
    pub codes: &'static [&'static str],
}

/// A code together with its resolved global id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumMember {
    /// Original code text, returned by the generated lookup function.
    pub code: String,
    pub id: u32,
}

impl EnumMember {
    /// Enumerator name for this member.
    pub fn identifier(&self) -> String {
        identifier(&self.code)
    }
}

/// The view of one enum type that gets rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumSpec {
    /// Enum type name.
    pub name: String,
    /// Members in declared order, which is also increasing id order.
    pub members: Vec<EnumMember>,
}

impl EnumSpec {
    /// Largest id among the members.
    pub fn max_id(&self) -> Option<u32> {
        self.members.iter().map(|m| m.id).max()
    }
}

/// Immutable code -> id mapping built from an ordered list of categories.
#[derive(Clone, Debug)]
pub struct Registry {
    ids: HashMap<&'static str, u32>,
    /// All codes, indexed by id.
    codes: Vec<&'static str>,
    categories: Vec<EnumSpec>,
}

impl Registry {
    /// Number the codes of `categories`, concatenated in the given order.
    ///
    /// Fails on the first code that was already seen, as well as on empty
    /// input, empty categories, empty codes, and codes whose enumerator name
    /// would not be a valid identifier.
    pub fn build(categories: &[Category]) -> GeneratorResult<Self> {
        if categories.is_empty() {
            return Err(GeneratorError::NoCategories);
        }

        let mut ids: HashMap<&'static str, u32> = HashMap::new();
        let mut codes = Vec::new();
        let mut specs = Vec::with_capacity(categories.len());
        let mut next_id: u32 = 0;

        for category in categories {
            if category.codes.is_empty() {
                return Err(GeneratorError::EmptyCategory {
                    category: category.name.to_string(),
                });
            }

            let mut members = Vec::with_capacity(category.codes.len());
            for &code in category.codes {
                if code.is_empty() {
                    return Err(GeneratorError::EmptyCode {
                        category: category.name.to_string(),
                    });
                }
                if ids.contains_key(code) {
                    return Err(GeneratorError::DuplicateCode {
                        code: code.to_string(),
                    });
                }
                let ident = identifier(code);
                if !is_valid_identifier(&ident) {
                    return Err(GeneratorError::InvalidIdentifier {
                        code: code.to_string(),
                        identifier: ident,
                    });
                }

                debug!("{}: {} = {}", category.name, code, next_id);
                ids.insert(code, next_id);
                codes.push(code);
                members.push(EnumMember {
                    code: code.to_string(),
                    id: next_id,
                });
                next_id += 1;
            }

            specs.push(EnumSpec {
                name: category.type_name.to_string(),
                members,
            });
        }

        Ok(Self {
            ids,
            codes,
            categories: specs,
        })
    }

    /// Id assigned to `code`, if it is part of the catalog.
    pub fn id(&self, code: &str) -> Option<u32> {
        self.ids.get(code).copied()
    }

    /// Code that was assigned `id`.
    pub fn code(&self, id: u32) -> Option<&'static str> {
        self.codes.get(usize::try_from(id).ok()?).copied()
    }

    /// Total number of distinct codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Per-category enum specs, in declared order.
    pub fn categories(&self) -> &[EnumSpec] {
        &self.categories
    }

    /// The umbrella enum holding every code, in concatenation order.
    pub fn umbrella(&self, type_name: &str) -> EnumSpec {
        EnumSpec {
            name: type_name.to_string(),
            members: self
                .codes
                .iter()
                .zip(0u32..)
                .map(|(code, id)| EnumMember {
                    code: code.to_string(),
                    id,
                })
                .collect(),
        }
    }
}
