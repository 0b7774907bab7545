//! Decoder registry: the one place family membership is declared.
//!
//! The registry provides:
//! - Ordered lookup from table identifier to the one decoder responsible
//! - Exact-match preference over alias/substring match
//! - Loud failure at construction when two families exact-claim one id
//! - Per-family metadata and active/inactive filtering for UI display
//!
//! # Example
//! ```rust,ignore
//! use feltline_settlement::registry::DecoderRegistry;
//!
//! let registry = DecoderRegistry::standard()?;
//! let decoder = registry.resolve("teen20").unwrap();
//! assert_eq!(decoder.family(), "teen20");
//! ```

use crate::decoder::{normalize_table_id, GameDecoder};
use crate::games;
use feltline_types::RegistryError;
use std::collections::HashMap;
use tracing::debug;

/// Family category for UI grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FamilyCategory {
    /// Card-table families (teen patti, baccarat, dragon tiger, ...).
    Cards,
    /// Dice families (sic bo).
    Dice,
    /// Wheel families (live roulette).
    Wheel,
    /// Cricket-themed card families (super over and kin).
    Cricket,
    /// Matka families (worli).
    Matka,
}

/// Metadata about a family for UI display.
#[derive(Clone, Debug)]
pub struct FamilyInfo {
    /// Stable family key.
    pub family: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Category for UI grouping.
    pub category: FamilyCategory,
    /// Whether the family is currently active.
    pub active: bool,
}

impl FamilyInfo {
    pub const fn new(family: &'static str, name: &'static str, category: FamilyCategory) -> Self {
        Self {
            family,
            name,
            category,
            active: true,
        }
    }
}

/// Registry of decoder families.
///
/// Built once from the fixed set of families; there is no runtime mutation
/// of family membership, only of the active flags.
pub struct DecoderRegistry {
    decoders: Vec<&'static dyn GameDecoder>,
    /// Normalized exact table id -> index into `decoders`.
    exact: HashMap<String, usize>,
    active: HashMap<&'static str, bool>,
}

impl std::fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderRegistry")
            .field(
                "decoders",
                &self.decoders.iter().map(|d| d.family()).collect::<Vec<_>>(),
            )
            .field("exact", &self.exact)
            .field("active", &self.active)
            .finish()
    }
}

impl DecoderRegistry {
    /// Build a registry over the full standard family population.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::new(games::all_decoders())
    }

    /// Build a registry over an explicit decoder list. Fails if two families
    /// exact-claim the same table id.
    pub fn new(decoders: &[&'static dyn GameDecoder]) -> Result<Self, RegistryError> {
        let mut exact: HashMap<String, usize> = HashMap::new();
        let mut active = HashMap::new();
        for (index, decoder) in decoders.iter().enumerate() {
            active.insert(decoder.family(), true);
            for id in decoder.table_ids() {
                let id = normalize_table_id(id);
                if let Some(&prior) = exact.get(&id) {
                    return Err(RegistryError::DuplicateTableId {
                        table_id: id,
                        first: decoders[prior].family(),
                        second: decoder.family(),
                    });
                }
                exact.insert(id, index);
            }
        }
        Ok(Self {
            decoders: decoders.to_vec(),
            exact,
            active,
        })
    }

    /// Resolve the decoder responsible for a table id, or `None`.
    ///
    /// Exact (case-insensitive, separator-stripped) id matches take priority
    /// over alias substring matches; aliases resolve in declaration order.
    /// Inactive families never resolve.
    pub fn resolve(&self, table_id: &str) -> Option<&'static dyn GameDecoder> {
        let id = normalize_table_id(table_id);
        if let Some(&index) = self.exact.get(&id) {
            let decoder = self.decoders[index];
            if self.is_active(decoder.family()) {
                debug!(table_id, family = decoder.family(), "resolved by exact id");
                return Some(decoder);
            }
        }
        let found = self
            .decoders
            .iter()
            .find(|d| self.is_active(d.family()) && d.belongs_to(table_id))
            .copied();
        if let Some(decoder) = found {
            debug!(table_id, family = decoder.family(), "resolved by alias");
        }
        found
    }

    /// Check if a family is active.
    pub fn is_active(&self, family: &str) -> bool {
        self.active.get(family).copied().unwrap_or(false)
    }

    /// Set a family's active status.
    pub fn set_active(&mut self, family: &'static str, active: bool) {
        if self.active.contains_key(family) {
            self.active.insert(family, active);
        }
    }

    /// All registered decoders, in declaration order.
    pub fn decoders(&self) -> &[&'static dyn GameDecoder] {
        &self.decoders
    }

    /// Metadata for every family, with current active status.
    pub fn all_families_info(&self) -> Vec<FamilyInfo> {
        self.decoders
            .iter()
            .map(|d| {
                let mut info = d.info();
                info.active = self.is_active(d.family());
                info
            })
            .collect()
    }

    /// Family keys in a category.
    pub fn families_by_category(&self, category: FamilyCategory) -> Vec<&'static str> {
        self.decoders
            .iter()
            .filter(|d| d.info().category == category)
            .map(|d| d.family())
            .collect()
    }
}
